//! Browser transport for the quest service.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use questline_core::quest::Quest;
use questline_core::{CompletionBody, Endpoints, ErrorBody, QuestBackend, QuestError, UserContext};

/// [`QuestBackend`] backed by the browser `fetch` API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebBackend {
    endpoints: Endpoints,
}

impl Default for WebBackend {
    fn default() -> Self {
        Self::new(crate::config::endpoints())
    }
}

impl WebBackend {
    #[must_use]
    pub const fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

fn network(err: &gloo_net::Error) -> QuestError {
    QuestError::Network(err.to_string())
}

async fn body_text(response: &Response) -> Result<String, QuestError> {
    response.text().await.map_err(|err| network(&err))
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn get_json<T>(url: &str) -> Result<T, QuestError>
where
    T: serde::de::DeserializeOwned,
{
    let response = Request::get(url).send().await.map_err(|err| network(&err))?;
    let text = body_text(&response).await?;
    if !response.ok() {
        return Err(QuestError::status(
            response.status(),
            ErrorBody::message_from(&text),
        ));
    }
    Ok(serde_json::from_str(&text)?)
}

#[async_trait(?Send)]
impl QuestBackend for WebBackend {
    async fn fetch_user_context(&self, user_id: &str) -> Result<UserContext, QuestError> {
        get_json(&self.endpoints.user_stats(user_id)).await
    }

    async fn generate_quest(&self, user_id: &str) -> Result<Quest, QuestError> {
        get_json(&self.endpoints.generate_quest(user_id)).await
    }

    async fn complete_quest(&self, user_id: &str, quest_id: &str) -> Result<(), QuestError> {
        let url = self.endpoints.complete_quest(user_id, quest_id);
        let response = Request::post(&url)
            .json(&CompletionBody::SUCCESS)
            .map_err(|err| network(&err))?
            .send()
            .await
            .map_err(|err| network(&err))?;
        if response.ok() {
            Ok(())
        } else {
            Err(QuestError::status(response.status(), None))
        }
    }
}
