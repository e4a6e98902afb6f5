use concert_config::{ConcertPaths, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SECTION: &str = "storage";

/// Sección `[storage]` de `concerts.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
  /// Ruta del fichero SQLite, `:memory:` o una URI `file:`.
  pub database_url: String,
  pub journal_mode: Option<String>,
  pub foreign_keys: bool,
  /// Script SQL que se ejecuta tras abrir la base (datos iniciales).
  pub init_script: Option<PathBuf>,
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig {
      database_url: "concerts.db".to_string(),
      journal_mode: Some("WAL".to_string()),
      foreign_keys: true,
      init_script: None,
    }
  }
}

impl StorageConfig {
  /// Carga la sección usando las rutas de la plataforma y la vuelve a
  /// escribir, de modo que el fichero siempre refleja los valores efectivos.
  pub fn load() -> Result<Self, ConfigError> {
    let paths = ConcertPaths::detect()?;
    let backend = TomlConfigBackend::new(paths.clone());

    let mut cfg = Self::load_from(&backend)?;
    cfg.resolve_against(&paths.data_dir);
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default(SECTION)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_to(&TomlConfigBackend::new(ConcertPaths::detect()?))
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }

  /// Convierte una ruta relativa en una ruta dentro de `data_dir`.
  pub fn resolve_against(&mut self, data_dir: &Path) {
    let url = self.database_url.as_str();
    if url == ":memory:" || url.starts_with("file:") || Path::new(url).is_absolute() {
      return;
    }
    self.database_url = data_dir.join(url).to_string_lossy().into_owned();
  }
}
