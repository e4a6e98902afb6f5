use serde::{Deserialize, Serialize};
use std::fmt;

/// Clave primaria de la tabla `CONCERT`.
///
/// La asigna el almacenamiento al insertar; nunca se genera en memoria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConcertId(i64);

impl ConcertId {
  pub fn new(value: i64) -> Self {
    ConcertId(value)
  }

  /// Devuelve el valor numérico interno.
  pub fn get(&self) -> i64 {
    self.0
  }
}

impl From<i64> for ConcertId {
  fn from(value: i64) -> Self {
    ConcertId(value)
  }
}

impl From<ConcertId> for i64 {
  fn from(id: ConcertId) -> Self {
    id.0
  }
}

impl fmt::Display for ConcertId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Clave primaria de la tabla `PERFORMER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PerformerId(i64);

impl PerformerId {
  pub fn new(value: i64) -> Self {
    PerformerId(value)
  }

  pub fn get(&self) -> i64 {
    self.0
  }
}

impl From<i64> for PerformerId {
  fn from(value: i64) -> Self {
    PerformerId(value)
  }
}

impl From<PerformerId> for i64 {
  fn from(id: PerformerId) -> Self {
    id.0
  }
}

impl fmt::Display for PerformerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
