use super::{FetchError, TextGenerator};

/// Generator used when no text service is configured.
///
/// Every request fails, so the game shows the fixed fallbacks.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGenerator;

impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _prompt: String) -> Result<String, FetchError> {
        Err(FetchError::Disabled)
    }
}
