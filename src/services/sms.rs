use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::SmsSettings;
use crate::core::dispatcher::{ChannelError, SmsChannel};

/// HTTP SMS gateway client
pub struct SmsClient {
    api_url: String,
    api_key: String,
    from_number: String,
    client: Client,
}

impl SmsClient {
    pub fn new(api_url: String, api_key: String, from_number: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url,
            api_key,
            from_number,
            client,
        }
    }

    pub fn from_settings(settings: &SmsSettings) -> Self {
        Self::new(
            settings.api_url.clone(),
            settings.api_key.clone(),
            settings.from_number.clone(),
        )
    }
}

#[async_trait]
impl SmsChannel for SmsClient {
    async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError> {
        let url = format!("{}/messages", self.api_url.trim_end_matches('/'));

        let payload = serde_json::json!({
            "from": self.from_number,
            "to": to,
            "body": body,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChannelError::Api(format!(
                "SMS gateway returned {}",
                response.status()
            )));
        }

        tracing::debug!("Sent SMS to {}", to);

        Ok(())
    }
}
