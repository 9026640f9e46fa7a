use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::EmailSettings;
use crate::core::dispatcher::{ChannelError, EmailChannel};

/// HTTP mail gateway client
///
/// Posts one JSON message per send to `{api_url}/messages` with bearer-token
/// auth. Delivery is one-shot; the caller decides what a failure means.
pub struct MailerClient {
    api_url: String,
    api_key: String,
    from_address: String,
    client: Client,
}

impl MailerClient {
    pub fn new(api_url: String, api_key: String, from_address: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url,
            api_key,
            from_address,
            client,
        }
    }

    pub fn from_settings(settings: &EmailSettings) -> Self {
        Self::new(
            settings.api_url.clone(),
            settings.api_key.clone(),
            settings.from_address.clone(),
        )
    }
}

#[async_trait]
impl EmailChannel for MailerClient {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ChannelError> {
        let url = format!("{}/messages", self.api_url.trim_end_matches('/'));

        let payload = serde_json::json!({
            "from": self.from_address,
            "to": to,
            "subject": subject,
            "text": body,
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
                "mail gateway returned {}",
                response.status()
            )));
        }

        tracing::debug!("Sent email to {}", to);

        Ok(())
    }
}
