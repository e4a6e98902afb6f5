use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::ids::ConcertId;
use crate::domain::performer::SharedPerformer;

/// Un concierto: título, fecha y hora locales, y el intérprete que actúa.
///
/// El concierto no es dueño de su intérprete; sólo guarda una referencia
/// compartida ([`SharedPerformer`]) que otros conciertos pueden tener también.
///
/// La identidad de negocio es el título. Los listados que devuelve el
/// almacenamiento vienen ordenados con [`Concert::cmp_by_title`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concert {
  id: Option<ConcertId>,
  title: String,
  date: NaiveDateTime,
  performer: Option<SharedPerformer>,
}

impl Concert {
  pub fn new(title: impl Into<String>, date: NaiveDateTime, performer: SharedPerformer) -> Self {
    Self { id: None, title: title.into(), date, performer: Some(performer) }
  }

  /// Reconstruye un concierto leído del almacenamiento.
  ///
  /// `performer` sólo es `None` cuando la fila apunta a un intérprete que ya
  /// no existe.
  pub fn with_id(
    id: ConcertId,
    title: impl Into<String>,
    date: NaiveDateTime,
    performer: Option<SharedPerformer>,
  ) -> Self {
    Self { id: Some(id), title: title.into(), date, performer }
  }

  pub fn id(&self) -> Option<ConcertId> {
    self.id
  }

  /// Reservado a implementaciones de [`ConcertStore`](crate::ports::ConcertStore).
  pub fn assign_id(&mut self, id: ConcertId) {
    self.id = Some(id);
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn set_title(&mut self, title: impl Into<String>) {
    self.title = title.into();
  }

  pub fn date(&self) -> NaiveDateTime {
    self.date
  }

  pub fn set_date(&mut self, date: NaiveDateTime) {
    self.date = date;
  }

  pub fn performer(&self) -> Option<&SharedPerformer> {
    self.performer.as_ref()
  }

  pub fn set_performer(&mut self, performer: SharedPerformer) {
    self.performer = Some(performer);
  }

  /// Igualdad por valor: sólo compara el título.
  pub fn same_concert(&self, other: &Concert) -> bool {
    self.title == other.title
  }

  /// Orden natural, lexicográfico por título.
  pub fn cmp_by_title(&self, other: &Concert) -> Ordering {
    self.title.cmp(&other.title)
  }

  /// Busca por título en un slice ya ordenado con [`Concert::cmp_by_title`].
  pub fn find_by_title<'a>(concerts: &'a [Concert], title: &str) -> Option<&'a Concert> {
    concerts
      .binary_search_by(|concert| concert.title.as_str().cmp(title))
      .ok()
      .map(|index| &concerts[index])
  }
}

impl fmt::Display for Concert {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Concert, id: ")?;
    match self.id {
      Some(id) => write!(f, "{id}")?,
      None => write!(f, "none")?,
    }
    write!(f, ", title: {}, date: {}, featuring: ", self.title, self.date.format("%Y-%m-%dT%H:%M"))?;
    match &self.performer {
      Some(performer) => write!(f, "{}", performer.borrow().name()),
      None => write!(f, "unknown"),
    }
  }
}
