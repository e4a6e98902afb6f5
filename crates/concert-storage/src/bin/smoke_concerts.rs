use chrono::NaiveDate;
use concert_core::domain::{Concert, Genre, Performer};
use concert_core::ports::ConcertStore;
use concert_storage::SqliteConcertStore;
use concert_storage::config::StorageConfig;

fn main() {
  dotenvy::dotenv().ok();
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let mut cfg = StorageConfig::load().expect("failed to load [storage] config");
  // CONCERTS_DATABASE_URL (o .env) manda sobre el fichero de configuración
  if let Ok(url) = std::env::var("CONCERTS_DATABASE_URL") {
    cfg.database_url = url;
  }

  let store = SqliteConcertStore::from_config(&cfg).expect("failed to open concert store");

  let performer = Performer::new("Test Performer", "test.jpg", Genre::Acoustic).shared();
  let date = NaiveDate::from_ymd_opt(2017, 12, 1).and_then(|d| d.and_hms_opt(16, 0, 0)).expect("valid date");
  let mut concert = Concert::new("Smoke Test Concert", date, performer);

  store.save(&mut concert).expect("failed to save concert");
  println!("Saved: {concert}");

  for concert in store.get_all().expect("failed to load concerts") {
    println!("{concert}");
  }

  store.delete(&concert).expect("failed to delete concert");
  store.close().expect("failed to close store");
}
