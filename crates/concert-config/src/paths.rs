use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Rutas que necesita el almacén: el `concerts.toml` y el directorio donde
/// se crea la base por defecto.
#[derive(Debug, Clone)]
pub struct ConcertPaths {
  pub config_file: PathBuf,
  pub data_dir: PathBuf,
}

impl ConcertPaths {
  pub const BASE_DIR_ENV: &'static str = "CONCERTS_BASE_DIR";
  const FILE_NAME: &'static str = "concerts.toml";

  /// Con `CONCERTS_BASE_DIR` el fichero queda en `<base>/concerts.toml` y los
  /// datos en `<base>/data` (modo portable). Si no, rutas de la plataforma.
  ///
  /// Crea los directorios que falten.
  pub fn detect() -> Result<Self, ConfigError> {
    let (config_dir, data_dir) = match std::env::var_os(Self::BASE_DIR_ENV) {
      Some(base) => {
        let base = PathBuf::from(base);
        (base.clone(), base.join("data"))
      }
      None => {
        let dirs = ProjectDirs::from("com", "concerts", "concerts").ok_or(ConfigError::Directories)?;
        (dirs.config_dir().to_path_buf(), dirs.data_dir().to_path_buf())
      }
    };

    fs::create_dir_all(&config_dir)?;
    fs::create_dir_all(&data_dir)?;

    Ok(Self { config_file: config_dir.join(Self::FILE_NAME), data_dir })
  }
}
