use crate::domain::{Concert, ConcertId};
use crate::errors::StoreError;

/// Port de persistencia de conciertos (y, de forma transitiva, de sus
/// intérpretes).
///
/// La tecnología queda en manos del adapter: base relacional, ficheros,
/// memoria, etc. Las operaciones son bloqueantes.
pub trait ConcertStore {
  /// Inserta o actualiza el concierto completo, intérprete incluido.
  ///
  /// El intérprete se guarda primero. Si el concierto o su intérprete no
  /// tenían `id`, al volver lo tienen asignado.
  fn save(&self, concert: &mut Concert) -> Result<(), StoreError>;

  /// Devuelve el concierto con ese `id`, o `None` si no existe.
  ///
  /// Cada llamada construye instancias nuevas.
  fn get_by_id(&self, id: ConcertId) -> Result<Option<Concert>, StoreError>;

  /// Todos los conciertos, ordenados alfabéticamente por título.
  ///
  /// Los conciertos de un mismo intérprete comparten una única instancia de
  /// [`Performer`](crate::domain::Performer). Sin datos devuelve una lista
  /// vacía.
  fn get_all(&self) -> Result<Vec<Concert>, StoreError>;

  /// Borra el concierto. El intérprete se conserva.
  fn delete(&self, concert: &Concert) -> Result<(), StoreError>;

  /// Libera la conexión. Después de cerrar, el resto de operaciones falla
  /// con [`StoreError::Closed`].
  fn close(&self) -> Result<(), StoreError>;
}
