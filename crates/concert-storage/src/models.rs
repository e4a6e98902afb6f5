use crate::schema::concerts;
use crate::schema::performers;

use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = performers)]
pub struct PerformerRow {
  pub id: i64,
  pub name: String,
  pub image_ref: String,
  pub genre: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = performers)]
pub struct NewPerformerRow<'a> {
  pub id: i64,
  pub name: &'a str,
  pub image_ref: &'a str,
  pub genre: &'a str,
}

/// Columnas mutables de `PERFORMER` (todas menos la clave).
#[derive(Debug, AsChangeset)]
#[diesel(table_name = performers)]
pub struct PerformerChanges<'a> {
  pub name: &'a str,
  pub image_ref: &'a str,
  pub genre: &'a str,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = concerts)]
pub struct ConcertRow {
  pub id: i64,
  pub title: String,
  pub held_at: NaiveDateTime,
  pub fk_performer_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = concerts)]
pub struct NewConcertRow<'a> {
  pub id: i64,
  pub title: &'a str,
  pub held_at: NaiveDateTime,
  pub fk_performer_id: i64,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = concerts)]
pub struct ConcertChanges<'a> {
  pub title: &'a str,
  pub held_at: NaiveDateTime,
  pub fk_performer_id: i64,
}
