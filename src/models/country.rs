use serde::{Deserialize, Serialize};

const FLAG_CDN_URL: &str = "https://flagcdn.com/w320";

/// A country as listed in the catalog.
///
/// `code` is the identity key; two entries with the same name but different
/// codes are different countries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Returns true if both entries carry the same code.
    pub fn same_as(&self, other: &Country) -> bool {
        self.code == other.code
    }

    /// Regional indicator pair for the code, e.g. "FR" -> "🇫🇷".
    pub fn flag_emoji(&self) -> String {
        self.code
            .chars()
            .filter(char::is_ascii_alphabetic)
            .filter_map(|c| {
                let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
                char::from_u32(0x1F1E6 + offset)
            })
            .collect()
    }

    pub fn flag_url(&self) -> String {
        format!("{}/{}.png", FLAG_CDN_URL, self.code.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_by_code() {
        let a = Country::new("Georgia", "GE");
        let b = Country::new("Georgia", "US-GA");
        let c = Country::new("Sakartvelo", "GE");

        assert!(!a.same_as(&b));
        assert!(a.same_as(&c));
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(Country::new("France", "FR").flag_emoji(), "\u{1F1EB}\u{1F1F7}");
        assert_eq!(Country::new("Japan", "jp").flag_emoji(), "\u{1F1EF}\u{1F1F5}");
    }

    #[test]
    fn test_flag_url() {
        assert_eq!(
            Country::new("Brazil", "BR").flag_url(),
            "https://flagcdn.com/w320/br.png"
        );
    }
}
