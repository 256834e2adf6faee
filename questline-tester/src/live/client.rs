use async_trait::async_trait;
use questline_core::{
    CompletionBody, Endpoints, ErrorBody, HealthStatus, Quest, QuestBackend, QuestError,
    UserContext,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// [`QuestBackend`] over a running quest service.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: Client,
    endpoints: Endpoints,
}

fn network(err: &reqwest::Error) -> QuestError {
    QuestError::Network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, QuestError> {
    let status = response.status();
    let text = response.text().await.map_err(|err| network(&err))?;
    if !status.is_success() {
        return Err(QuestError::status(
            status.as_u16(),
            ErrorBody::message_from(&text),
        ));
    }
    Ok(serde_json::from_str(&text)?)
}

impl ReqwestBackend {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, QuestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| network(&err))?;
        Ok(Self { client, endpoints })
    }

    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, QuestError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| network(&err))?;
        read_json(response).await
    }

    /// Query the service's health route.
    pub async fn health(&self) -> Result<HealthStatus, QuestError> {
        self.get_json(&self.endpoints.health()).await
    }
}

#[async_trait(?Send)]
impl QuestBackend for ReqwestBackend {
    async fn fetch_user_context(&self, user_id: &str) -> Result<UserContext, QuestError> {
        self.get_json(&self.endpoints.user_stats(user_id)).await
    }

    async fn generate_quest(&self, user_id: &str) -> Result<Quest, QuestError> {
        self.get_json(&self.endpoints.generate_quest(user_id)).await
    }

    async fn complete_quest(&self, user_id: &str, quest_id: &str) -> Result<(), QuestError> {
        let url = self.endpoints.complete_quest(user_id, quest_id);
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(&CompletionBody::SUCCESS)
            .send()
            .await
            .map_err(|err| network(&err))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(QuestError::status(response.status().as_u16(), None))
        }
    }
}
