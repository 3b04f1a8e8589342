//! Hint and detail fetching.
//!
//! A [`TextGenerator`] turns a prompt into text; [`FactFetcher`] builds the
//! prompts and folds every failure into a fixed fallback so callers always
//! get something to show.

mod chat_gpt;
mod offline;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Country;

pub use chat_gpt::ChatGptGenerator;
pub use offline::OfflineGenerator;

pub const HINT_FALLBACK: &str = "Sorry, no hint is available right now. Trust your instincts!";
pub const DETAILS_FALLBACK_CAPITAL: &str = "Not Available";
pub const DETAILS_FALLBACK_FACT: &str =
    "Sorry, we couldn't find a fun fact for this country right now.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("text service failed: {0}")]
    Service(String),

    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("empty reply")]
    Empty,

    #[error("text service is disabled")]
    Disabled,
}

/// Something that answers a prompt with text.
pub trait TextGenerator: Send + Sync + 'static {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Capital city and fun fact shown after a correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryDetails {
    pub capital: String,
    #[serde(rename = "funFact")]
    pub fun_fact: String,
}

impl CountryDetails {
    pub fn fallback() -> Self {
        Self {
            capital: DETAILS_FALLBACK_CAPITAL.to_string(),
            fun_fact: DETAILS_FALLBACK_FACT.to_string(),
        }
    }
}

pub struct FactFetcher<G> {
    generator: G,
}

impl<G: TextGenerator> FactFetcher<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// One-sentence hint for `country`, or [`HINT_FALLBACK`].
    pub async fn hint(&self, country: &Country) -> String {
        match self.try_hint(country).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Hint for {} unavailable: {}", country.code, e);
                HINT_FALLBACK.to_string()
            }
        }
    }

    /// Capital and fun fact for `country`, or [`CountryDetails::fallback`].
    pub async fn details(&self, country: &Country) -> CountryDetails {
        match self.try_details(country).await {
            Ok(details) => details,
            Err(e) => {
                log::warn!("Details for {} unavailable: {}", country.code, e);
                CountryDetails::fallback()
            }
        }
    }

    async fn try_hint(&self, country: &Country) -> Result<String, FetchError> {
        let reply = self.generator.generate(hint_prompt(country)).await?;
        let text = reply.trim();
        if text.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(text.to_string())
    }

    async fn try_details(&self, country: &Country) -> Result<CountryDetails, FetchError> {
        let reply = self.generator.generate(details_prompt(country)).await?;
        parse_details(&reply)
    }
}

pub fn hint_prompt(country: &Country) -> String {
    format!(
        "Give me a single-sentence hint about the country {}. \
         Do not mention the country's name, any of its cities, or its demonym.",
        country.name
    )
}

pub fn details_prompt(country: &Country) -> String {
    format!(
        "What is the capital city of {} and one interesting fun fact about it? \
         Reply with only a JSON object of the form \
         {{\"capital\": string, \"funFact\": string}}. Both fields are required.",
        country.name
    )
}

/// Parse a structured reply, tolerating a surrounding Markdown code fence.
pub fn parse_details(reply: &str) -> Result<CountryDetails, FetchError> {
    let body = strip_code_fence(reply.trim());
    if body.is_empty() {
        return Err(FetchError::Empty);
    }

    let details: CountryDetails = serde_json::from_str(body)?;
    if details.capital.trim().is_empty() || details.fun_fact.trim().is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(details)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening line.
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Replays canned replies and records prompts.
    struct Scripted {
        replies: Mutex<Vec<Result<String, FetchError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<String, FetchError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for Scripted {
        async fn generate(&self, prompt: String) -> Result<String, FetchError> {
            self.prompts.lock().unwrap().push(prompt);
            self.replies.lock().unwrap().remove(0)
        }
    }

    fn norway() -> Country {
        Country::new("Norway", "NO")
    }

    #[tokio::test]
    async fn test_hint_success_is_trimmed() {
        let fetcher = FactFetcher::new(Scripted::new(vec![Ok(
            "  Fjords carve its western coast.\n".to_string()
        )]));

        assert_eq!(fetcher.hint(&norway()).await, "Fjords carve its western coast.");
        let prompts = fetcher.generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Norway"));
        assert!(prompts[0].contains("demonym"));
    }

    #[tokio::test]
    async fn test_hint_falls_back() {
        let fetcher = FactFetcher::new(Scripted::new(vec![
            Err(FetchError::Service("timeout".to_string())),
            Ok("   ".to_string()),
        ]));

        assert_eq!(fetcher.hint(&norway()).await, HINT_FALLBACK);
        assert_eq!(fetcher.hint(&norway()).await, HINT_FALLBACK);
    }

    #[tokio::test]
    async fn test_details_success() {
        let fetcher = FactFetcher::new(Scripted::new(vec![Ok(
            r#"{"capital": "Oslo", "funFact": "It introduced salmon sushi to Japan."}"#.to_string(),
        )]));

        let details = fetcher.details(&norway()).await;
        assert_eq!(details.capital, "Oslo");
        assert_eq!(details.fun_fact, "It introduced salmon sushi to Japan.");
    }

    #[tokio::test]
    async fn test_details_falls_back_on_bad_reply() {
        let fetcher = FactFetcher::new(Scripted::new(vec![
            Ok(r#"{"capital": "Oslo"}"#.to_string()),
            Ok("Oslo is the capital".to_string()),
            Err(FetchError::Disabled),
        ]));

        for _ in 0..3 {
            assert_eq!(fetcher.details(&norway()).await, CountryDetails::fallback());
        }
    }

    #[test]
    fn test_parse_details_accepts_code_fence() {
        let reply = "```json\n{\"capital\": \"Lima\", \"funFact\": \"Home of ceviche.\"}\n```";
        let details = parse_details(reply).unwrap();
        assert_eq!(details.capital, "Lima");

        let reply = "```\n{\"capital\": \"Lima\", \"funFact\": \"Home of ceviche.\"}\n```";
        assert!(parse_details(reply).is_ok());
    }

    #[test]
    fn test_parse_details_rejects_blank_fields() {
        let reply = r#"{"capital": "", "funFact": "x"}"#;
        assert!(matches!(parse_details(reply), Err(FetchError::Empty)));
        assert!(matches!(parse_details(""), Err(FetchError::Empty)));
    }
}
