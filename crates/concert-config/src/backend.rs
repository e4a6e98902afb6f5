use crate::paths::{ConcertPaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use toml_edit::{DocumentMut, Item};

/// Acceso por secciones (`[storage]`, ...) al fichero de configuración.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;

  /// Como [`ConfigBackend::load_section`], pero un fichero o una sección
  /// ausentes devuelven `T::default()`.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default;
}

pub struct TomlConfigBackend {
  paths: ConcertPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: ConcertPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &ConcertPaths {
    &self.paths
  }

  fn decode_section<T: DeserializeOwned>(table: &toml::Value, section: &str) -> Result<T, ConfigError> {
    table
      .clone()
      .try_into()
      .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = &self.paths.config_file;
    let content = fs::read_to_string(path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    Self::decode_section(table, section)
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = &self.paths.config_file;
    let content = match fs::read_to_string(path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    Self::decode_section(table, section)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = &self.paths.config_file;

    // Se parte del documento existente para no perder comentarios ni otras secciones.
    let mut doc: DocumentMut = match fs::read_to_string(path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // `section_str` es una tabla sin cabecera ("foo = 1\nbar = 2\n").
    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    doc[section] = section_item;

    replace_file(path, &doc.to_string())?;

    Ok(())
  }
}

/// Escribe en `<fichero>.tmp` y renombra, así un lector nunca ve el fichero a medias.
/// Si el renombrado falla no deja el temporal atrás.
fn replace_file(path: &Path, contents: &str) -> std::io::Result<()> {
  let staged = path.with_extension("toml.tmp");
  {
    let mut file = fs::File::create(&staged)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
  }
  fs::rename(&staged, path).inspect_err(|_| {
    let _ = fs::remove_file(&staged);
  })
}
