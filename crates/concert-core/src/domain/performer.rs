use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::domain::genre::Genre;
use crate::domain::ids::PerformerId;

/// Referencia compartida a un intérprete.
///
/// Varios conciertos pueden apuntar al mismo intérprete; cuando el
/// almacenamiento los lee juntos, todos comparten esta misma instancia
/// (`Rc::ptr_eq`).
pub type SharedPerformer = Rc<RefCell<Performer>>;

/// Un artista o banda que actúa en conciertos.
///
/// La identidad de negocio es el nombre: dos intérpretes con el mismo nombre
/// son el mismo artista aunque uno tenga `id` y el otro no.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
  id: Option<PerformerId>,
  name: String,
  image_ref: String,
  genre: Genre,
}

impl Performer {
  /// Intérprete todavía no persistido.
  pub fn new(name: impl Into<String>, image_ref: impl Into<String>, genre: Genre) -> Self {
    Self { id: None, name: name.into(), image_ref: image_ref.into(), genre }
  }

  /// Reconstruye un intérprete leído del almacenamiento.
  pub fn with_id(
    id: PerformerId,
    name: impl Into<String>,
    image_ref: impl Into<String>,
    genre: Genre,
  ) -> Self {
    Self { id: Some(id), name: name.into(), image_ref: image_ref.into(), genre }
  }

  pub fn shared(self) -> SharedPerformer {
    Rc::new(RefCell::new(self))
  }

  pub fn id(&self) -> Option<PerformerId> {
    self.id
  }

  /// Reservado a implementaciones de [`ConcertStore`](crate::ports::ConcertStore):
  /// se llama una única vez, tras la primera inserción.
  pub fn assign_id(&mut self, id: PerformerId) {
    self.id = Some(id);
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn set_name(&mut self, name: impl Into<String>) {
    self.name = name.into();
  }

  pub fn image_ref(&self) -> &str {
    &self.image_ref
  }

  pub fn set_image_ref(&mut self, image_ref: impl Into<String>) {
    self.image_ref = image_ref.into();
  }

  pub fn genre(&self) -> Genre {
    self.genre
  }

  pub fn set_genre(&mut self, genre: Genre) {
    self.genre = genre;
  }

  /// Igualdad por valor: sólo compara el nombre.
  pub fn same_performer(&self, other: &Performer) -> bool {
    self.name == other.name
  }

  /// Orden natural por nombre.
  pub fn cmp_by_name(&self, other: &Performer) -> Ordering {
    self.name.cmp(&other.name)
  }
}

impl fmt::Display for Performer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Performer, id: ")?;
    match self.id {
      Some(id) => write!(f, "{id}")?,
      None => write!(f, "none")?,
    }
    write!(f, ", name: {}, image: {}, genre: {}", self.name, self.image_ref, self.genre)
  }
}
