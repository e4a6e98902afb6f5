pub mod concert;
pub mod genre;
pub mod ids;
pub mod performer;

pub use concert::Concert;
pub use genre::{Genre, GenreParseError};
pub use ids::{ConcertId, PerformerId};
pub use performer::{Performer, SharedPerformer};
