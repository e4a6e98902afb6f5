use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Géneros con los que se clasifica a un intérprete.
///
/// Es un conjunto cerrado: lo que se guarda en la columna `GENRE` es siempre
/// el nombre canónico de la variante (ver [`Genre::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
  Pop,
  HipHop,
  RhythmAndBlues,
  Rock,
  Metal,
  Country,
  Electronic,
  Acoustic,
  Classical,
  Jazz,
}

impl Genre {
  pub const ALL: [Genre; 10] = [
    Genre::Pop,
    Genre::HipHop,
    Genre::RhythmAndBlues,
    Genre::Rock,
    Genre::Metal,
    Genre::Country,
    Genre::Electronic,
    Genre::Acoustic,
    Genre::Classical,
    Genre::Jazz,
  ];

  /// Nombre canónico, tal como se persiste.
  pub fn as_str(&self) -> &'static str {
    match self {
      Genre::Pop => "Pop",
      Genre::HipHop => "HipHop",
      Genre::RhythmAndBlues => "RhythmAndBlues",
      Genre::Rock => "Rock",
      Genre::Metal => "Metal",
      Genre::Country => "Country",
      Genre::Electronic => "Electronic",
      Genre::Acoustic => "Acoustic",
      Genre::Classical => "Classical",
      Genre::Jazz => "Jazz",
    }
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error producido cuando una cadena no puede convertirse en [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid genre: {input}")]
pub struct GenreParseError {
  pub input: String,
}

impl FromStr for Genre {
  type Err = GenreParseError;

  /// Acepta el nombre canónico y variantes habituales.
  ///
  /// Se ignoran mayúsculas, espacios, guiones, `&` y `_`, de modo que
  /// `"Rhythm & Blues"`, `"rhythm-and-blues"` o `"R&B"` son equivalentes.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', ' ', '&', '_'], "");

    let genre = match normalized.as_str() {
      "pop" => Genre::Pop,
      "hiphop" | "rap" => Genre::HipHop,
      "rhythmandblues" | "rhythmblues" | "rb" | "rnb" => Genre::RhythmAndBlues,
      "rock" => Genre::Rock,
      "metal" => Genre::Metal,
      "country" => Genre::Country,
      "electronic" => Genre::Electronic,
      "acoustic" => Genre::Acoustic,
      "classical" => Genre::Classical,
      "jazz" => Genre::Jazz,
      _ => return Err(GenreParseError { input: s.to_string() }),
    };

    Ok(genre)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canonical_names_parse_back() {
    for genre in Genre::ALL {
      assert_eq!(genre.to_string().parse::<Genre>(), Ok(genre));
    }
  }

  #[test]
  fn lenient_spellings() {
    assert_eq!("Rhythm & Blues".parse::<Genre>(), Ok(Genre::RhythmAndBlues));
    assert_eq!("R&B".parse::<Genre>(), Ok(Genre::RhythmAndBlues));
    assert_eq!(" hip-hop ".parse::<Genre>(), Ok(Genre::HipHop));
    assert_eq!("ROCK".parse::<Genre>(), Ok(Genre::Rock));
  }

  #[test]
  fn unknown_genre_is_rejected() {
    let err = "Polka".parse::<Genre>().unwrap_err();
    assert_eq!(err.input, "Polka");
    assert_eq!(err.to_string(), "invalid genre: Polka");
  }
}
