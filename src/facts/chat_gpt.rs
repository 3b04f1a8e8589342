use std::time::Duration;

use chatgpt::client::ChatGPT;
use chatgpt::config::ChatGPTEngine;
use chatgpt::types::CompletionResponse;

use super::{FetchError, TextGenerator};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Text generation backed by the ChatGPT completion API.
pub struct ChatGptGenerator {
    chat_gpt: ChatGPT,
}

impl ChatGptGenerator {
    pub fn new(api_key: &str) -> Result<Self, FetchError> {
        let mut chat_gpt = ChatGPT::new(api_key).map_err(service_error)?;

        chat_gpt.config.engine = ChatGPTEngine::Gpt35Turbo;
        chat_gpt.config.timeout = REQUEST_TIMEOUT;

        Ok(Self { chat_gpt })
    }
}

impl TextGenerator for ChatGptGenerator {
    async fn generate(&self, prompt: String) -> Result<String, FetchError> {
        log::debug!("Sending prompt: {:?}", prompt);

        let response: CompletionResponse = self
            .chat_gpt
            .send_message(prompt)
            .await
            .map_err(service_error)?;
        let content = response.message().clone().content;

        log::debug!("Completion: {:?}", content);
        Ok(content)
    }
}

fn service_error(err: chatgpt::err::Error) -> FetchError {
    FetchError::Service(err.to_string())
}
