use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Country;

/// Errors raised while reading a catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog must contain at least one country")]
    Empty,

    #[error("country code {0:?} appears more than once")]
    DuplicateCode(String),

    #[error("country {name:?} has malformed code {code:?}")]
    InvalidCode { name: String, code: String },
}

/// Load a catalog from a JSON file of `{"name": ..., "code": ...}` objects.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Country>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let countries = parse_catalog(&json_content)?;
    log::info!("Loaded {} countries from {}", countries.len(), path.display());
    Ok(countries)
}

pub fn parse_catalog(json_content: &str) -> Result<Vec<Country>, LoadError> {
    let countries: Vec<Country> = serde_json::from_str(json_content)?;

    if countries.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut seen = HashSet::with_capacity(countries.len());
    for country in &countries {
        if !is_valid_code(&country.code) {
            return Err(LoadError::InvalidCode {
                name: country.name.clone(),
                code: country.code.clone(),
            });
        }
        if !seen.insert(country.code.to_ascii_uppercase()) {
            return Err(LoadError::DuplicateCode(country.code.clone()));
        }
    }

    Ok(countries)
}

// Two ASCII letters, the shape flag emoji and flagcdn both expect.
fn is_valid_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let json = r#"[{"name": "France", "code": "FR"}, {"name": "Peru", "code": "pe"}]"#;
        let countries = parse_catalog(json).unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1], Country::new("Peru", "pe"));
    }

    #[test]
    fn test_parse_catalog_rejects_bad_input() {
        assert!(matches!(parse_catalog("[]"), Err(LoadError::Empty)));
        assert!(matches!(parse_catalog("{"), Err(LoadError::Parse(_))));
        assert!(matches!(
            parse_catalog(r#"[{"name": "France", "code": "FR"}, {"name": "Francia", "code": "fr"}]"#),
            Err(LoadError::DuplicateCode(code)) if code == "fr"
        ));
        assert!(matches!(
            parse_catalog(r#"[{"name": "Atlantis", "code": "ATL"}]"#),
            Err(LoadError::InvalidCode { .. })
        ));
    }

    #[test]
    fn test_load_catalog_from_json() {
        let path = std::env::temp_dir().join(format!("flag-quiz-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"[{"name": "Chile", "code": "CL"}]"#).unwrap();

        let countries = load_catalog_from_json(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(countries, vec![Country::new("Chile", "CL")]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
