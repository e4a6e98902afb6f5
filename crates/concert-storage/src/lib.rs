pub mod config;
pub mod models;
pub mod schema;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

use chrono::{NaiveDateTime, Timelike};
use diesel::connection::SimpleConnection;
use diesel::dsl::max;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::{debug, info, warn};

use concert_core::domain::{
  Concert, ConcertId, Genre, GenreParseError, Performer, PerformerId, SharedPerformer,
};
use concert_core::errors::StoreError;
use concert_core::ports::ConcertStore;

use crate::config::StorageConfig;
use crate::models::{
  ConcertChanges, ConcertRow, NewConcertRow, NewPerformerRow, PerformerChanges, PerformerRow,
};
use crate::schema::{concerts, performers};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Fallos internos antes de traducirlos a [`StoreError`].
#[derive(Debug, Error)]
enum Failure {
  #[error(transparent)]
  Query(#[from] diesel::result::Error),

  #[error("corrupt performer row: {0}")]
  Genre(#[from] GenreParseError),

  #[error("concert has no performer")]
  MissingPerformer,

  #[error("no key left in {0}")]
  KeysExhausted(&'static str),
}

/// [`ConcertStore`] sobre una única conexión SQLite.
///
/// Las claves se generan a mano (`MAX(ID) + 1`) justo antes de cada inserción.
/// La consulta y el `INSERT` van en una transacción `IMMEDIATE`, pero el
/// diseño sigue asumiendo un único escritor.
///
/// No es `Sync`: la conexión vive en un `RefCell`.
pub struct SqliteConcertStore {
  conn: RefCell<Option<SqliteConnection>>,
}

impl SqliteConcertStore {
  /// Abre (o crea) la base con claves foráneas activas y aplica las migraciones.
  pub fn open(database_url: &str) -> Result<Self, StoreError> {
    let conn = connect(database_url, None, true)?;
    Ok(Self { conn: RefCell::new(Some(conn)) })
  }

  /// Igual que [`SqliteConcertStore::open`] y además ejecuta un script SQL,
  /// normalmente los datos iniciales.
  pub fn open_with_script(database_url: &str, script: &Path) -> Result<Self, StoreError> {
    let store = Self::open(database_url)?;
    store.run_script(script)?;
    Ok(store)
  }

  pub fn from_config(cfg: &StorageConfig) -> Result<Self, StoreError> {
    let conn = connect(&cfg.database_url, cfg.journal_mode.as_deref(), cfg.foreign_keys)?;
    let store = Self { conn: RefCell::new(Some(conn)) };
    if let Some(script) = &cfg.init_script {
      store.run_script(script)?;
    }
    Ok(store)
  }

  /// Ejecuta todas las sentencias de `script` sobre la conexión abierta.
  pub fn run_script(&self, script: &Path) -> Result<(), StoreError> {
    let sql = std::fs::read_to_string(script).map_err(log_as(StoreError::Create))?;
    self.with_conn(StoreError::Create, |conn| Ok(conn.batch_execute(&sql)?))?;
    info!(script = %script.display(), "init script executed");
    Ok(())
  }

  pub fn is_closed(&self) -> bool {
    self.conn.borrow().is_none()
  }

  fn with_conn<T>(
    &self,
    kind: fn(String) -> StoreError,
    op: impl FnOnce(&mut SqliteConnection) -> Result<T, Failure>,
  ) -> Result<T, StoreError> {
    let mut guard = self.conn.borrow_mut();
    let conn = guard.as_mut().ok_or(StoreError::Closed)?;
    op(conn).map_err(log_as(kind))
  }
}

impl ConcertStore for SqliteConcertStore {
  fn save(&self, concert: &mut Concert) -> Result<(), StoreError> {
    self.with_conn(StoreError::Save, |conn| save_concert(conn, concert))
  }

  fn get_by_id(&self, id: ConcertId) -> Result<Option<Concert>, StoreError> {
    self.with_conn(StoreError::LoadOne, |conn| load_concert(conn, id))
  }

  fn get_all(&self) -> Result<Vec<Concert>, StoreError> {
    self.with_conn(StoreError::LoadAll, load_all_concerts)
  }

  fn delete(&self, concert: &Concert) -> Result<(), StoreError> {
    let Some(id) = concert.id() else {
      debug!(title = concert.title(), "concert was never saved, nothing to delete");
      return Ok(());
    };

    self.with_conn(StoreError::Delete, |conn| {
      let deleted = diesel::delete(concerts::table.find(id.get())).execute(conn)?;
      debug!(%id, deleted, "concert deleted");
      Ok(())
    })
  }

  fn close(&self) -> Result<(), StoreError> {
    let mut guard = self.conn.try_borrow_mut().map_err(log_as(StoreError::Close))?;
    if guard.take().is_some() {
      info!("concert store closed");
    }
    Ok(())
  }
}

fn log_as<E: Display>(kind: fn(String) -> StoreError) -> impl FnOnce(E) -> StoreError {
  move |cause| {
    let err = kind(cause.to_string());
    debug!(error = %err, "concert store operation failed");
    err
  }
}

fn connect(
  database_url: &str,
  journal_mode: Option<&str>,
  foreign_keys: bool,
) -> Result<SqliteConnection, StoreError> {
  let mut conn = SqliteConnection::establish(database_url).map_err(log_as(StoreError::Create))?;

  let pragma = if foreign_keys { "PRAGMA foreign_keys = ON;" } else { "PRAGMA foreign_keys = OFF;" };
  conn.batch_execute(pragma).map_err(log_as(StoreError::Create))?;

  if let Some(mode) = journal_mode {
    if mode.is_empty() || !mode.chars().all(|c| c.is_ascii_alphabetic()) {
      return Err(log_as(StoreError::Create)(format!("invalid journal mode: {mode:?}")));
    }
    conn.batch_execute(&format!("PRAGMA journal_mode = {mode};")).map_err(log_as(StoreError::Create))?;
  }

  conn.run_pending_migrations(MIGRATIONS).map_err(log_as(StoreError::Create))?;

  info!(database_url, "concert store opened");
  Ok(conn)
}

/// Segundos y fracciones no se guardan.
fn truncate_to_minute(date: NaiveDateTime) -> NaiveDateTime {
  date.with_second(0).and_then(|d| d.with_nanosecond(0)).unwrap_or(date)
}

/// Clave siguiente a la mayor existente; una tabla vacía empieza en 1.
fn key_after(current: Option<i64>, table: &'static str) -> Result<i64, Failure> {
  current.unwrap_or(0).checked_add(1).ok_or(Failure::KeysExhausted(table))
}

fn next_performer_id(conn: &mut SqliteConnection) -> Result<i64, Failure> {
  let current: Option<i64> = performers::table.select(max(performers::id)).get_result(conn)?;
  key_after(current, "PERFORMER")
}

fn next_concert_id(conn: &mut SqliteConnection) -> Result<i64, Failure> {
  let current: Option<i64> = concerts::table.select(max(concerts::id)).get_result(conn)?;
  key_after(current, "CONCERT")
}

fn save_performer(conn: &mut SqliteConnection, shared: &SharedPerformer) -> Result<PerformerId, Failure> {
  let existing = shared.borrow().id();

  if let Some(id) = existing {
    let performer = shared.borrow();
    let changes = PerformerChanges {
      name: performer.name(),
      image_ref: performer.image_ref(),
      genre: performer.genre().as_str(),
    };
    let updated = diesel::update(performers::table.find(id.get())).set(&changes).execute(conn)?;
    if updated == 0 {
      warn!(%id, "performer has an id but no row to update");
    }
    return Ok(id);
  }

  let key = {
    let performer = shared.borrow();
    conn.immediate_transaction(|conn| {
      let key = next_performer_id(conn)?;
      let row = NewPerformerRow {
        id: key,
        name: performer.name(),
        image_ref: performer.image_ref(),
        genre: performer.genre().as_str(),
      };
      diesel::insert_into(performers::table).values(&row).execute(conn)?;
      Ok::<_, Failure>(key)
    })?
  };

  let id = PerformerId::new(key);
  shared.borrow_mut().assign_id(id);
  debug!(%id, "performer inserted");
  Ok(id)
}

fn save_concert(conn: &mut SqliteConnection, concert: &mut Concert) -> Result<(), Failure> {
  let performer = concert.performer().cloned().ok_or(Failure::MissingPerformer)?;

  // Primero el intérprete: CONCERT.FK_PERFORMER_ID necesita una fila existente.
  let performer_id = save_performer(conn, &performer)?;
  let held_at = truncate_to_minute(concert.date());

  match concert.id() {
    None => {
      let key = conn.immediate_transaction(|conn| {
        let key = next_concert_id(conn)?;
        let row = NewConcertRow {
          id: key,
          title: concert.title(),
          held_at,
          fk_performer_id: performer_id.get(),
        };
        diesel::insert_into(concerts::table).values(&row).execute(conn)?;
        Ok::<_, Failure>(key)
      })?;

      let id = ConcertId::new(key);
      concert.assign_id(id);
      debug!(%id, %performer_id, "concert inserted");
    }
    Some(id) => {
      let changes =
        ConcertChanges { title: concert.title(), held_at, fk_performer_id: performer_id.get() };
      let updated = diesel::update(concerts::table.find(id.get())).set(&changes).execute(conn)?;
      if updated == 0 {
        warn!(%id, "concert has an id but no row to update");
      }
    }
  }

  Ok(())
}

fn row_to_performer(row: PerformerRow) -> Result<SharedPerformer, Failure> {
  let genre: Genre = row.genre.parse()?;
  Ok(Performer::with_id(PerformerId::new(row.id), row.name, row.image_ref, genre).shared())
}

fn row_to_concert(row: ConcertRow, performer: Option<SharedPerformer>) -> Concert {
  Concert::with_id(ConcertId::new(row.id), row.title, row.held_at, performer)
}

fn load_performer(conn: &mut SqliteConnection, id: i64) -> Result<Option<SharedPerformer>, Failure> {
  let row_opt = performers::table.find(id).first::<PerformerRow>(conn).optional()?;

  if row_opt.is_none() {
    warn!(performer_id = id, "concert references a missing performer");
  }

  row_opt.map(row_to_performer).transpose()
}

fn load_concert(conn: &mut SqliteConnection, id: ConcertId) -> Result<Option<Concert>, Failure> {
  let Some(row) = concerts::table.find(id.get()).first::<ConcertRow>(conn).optional()? else {
    return Ok(None);
  };

  let performer = load_performer(conn, row.fk_performer_id)?;
  Ok(Some(row_to_concert(row, performer)))
}

fn load_all_concerts(conn: &mut SqliteConnection) -> Result<Vec<Concert>, Failure> {
  let rows = concerts::table.order(concerts::title.asc()).load::<ConcertRow>(conn)?;

  // Una sola instancia por intérprete durante esta llamada.
  let mut seen: HashMap<PerformerId, Option<SharedPerformer>> = HashMap::new();
  let mut result = Vec::with_capacity(rows.len());

  for row in rows {
    let performer_id = PerformerId::new(row.fk_performer_id);
    let performer = match seen.get(&performer_id) {
      Some(cached) => cached.clone(),
      None => {
        let loaded = load_performer(conn, row.fk_performer_id)?;
        seen.insert(performer_id, loaded.clone());
        loaded
      }
    };
    result.push(row_to_concert(row, performer));
  }

  debug!(concerts = result.len(), performers = seen.len(), "all concerts loaded");
  Ok(result)
}
