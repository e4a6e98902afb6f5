pub mod concert_store;

pub use concert_store::ConcertStore;
