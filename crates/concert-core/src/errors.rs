// crates/concert-core/src/errors.rs
use thiserror::Error;

/// Error único de cualquier [`ConcertStore`](crate::ports::ConcertStore).
///
/// La variante indica qué operación falló; el texto es el mensaje del
/// driver subyacente. Una fila inexistente no es un error: las lecturas
/// devuelven `Ok(None)` en ese caso.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("unable to create concert store: {0}")]
  Create(String),

  #[error("unable to save concert: {0}")]
  Save(String),

  #[error("unable to delete concert: {0}")]
  Delete(String),

  #[error("unable to retrieve concert: {0}")]
  LoadOne(String),

  #[error("unable to retrieve all concerts: {0}")]
  LoadAll(String),

  #[error("unable to close concert store: {0}")]
  Close(String),

  #[error("concert store is closed")]
  Closed,
}
