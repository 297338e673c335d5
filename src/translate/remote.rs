//! Legacy network translation fallback (DeepL-compatible form API)

use crate::core::{Error, Result, TargetLanguage, TranslationConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    translations: Vec<ProviderTranslation>,
}

#[derive(Debug, Deserialize)]
struct ProviderTranslation {
    text: String,
}

/// Extract the first translation from a provider response body
pub fn parse_response(body: &str) -> Result<String> {
    let response: ProviderResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("[RemoteTranslator] Failed to parse response: {}", e);
        Error::Translation("Failed to parse response".to_string())
    })?;

    response
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or_else(|| Error::Translation("No translation found".to_string()))
}

/// Asynchronous client for the remote provider
#[derive(Clone)]
pub struct RemoteTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    runtime: tokio::runtime::Handle,
}

impl RemoteTranslator {
    pub fn new(config: &TranslationConfig, runtime: tokio::runtime::Handle) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            runtime,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Form fields sent with every request
    fn form_fields<'a>(&'a self, text: &'a str, target: TargetLanguage) -> [(&'static str, &'a str); 3] {
        [
            ("auth_key", self.api_key.as_str()),
            ("text", text),
            ("target_lang", target.remote_code()),
        ]
    }

    pub async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String> {
        if !self.is_configured() {
            log::warn!("[RemoteTranslator] API key not set");
            return Err(Error::Translation("API key not configured".to_string()));
        }

        let response = self
            .client
            .post(&self.api_url)
            .form(&self.form_fields(text, target))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("[RemoteTranslator] API error: {} {}", status, body);
            return Err(Error::Translation(format!("HTTP {}: {}", status, body.trim())));
        }

        parse_response(&body)
    }

    /// Run [`translate`](Self::translate) in the background and report through `on_done`
    pub fn spawn_translate<F>(&self, text: &str, target: TargetLanguage, on_done: F)
    where
        F: FnOnce(Result<String>) + Send + 'static,
    {
        let translator = self.clone();
        let text = text.to_string();
        self.runtime.spawn(async move {
            let result = translator.translate(&text, target).await;
            on_done(result);
        });
    }
}
