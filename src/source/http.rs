use super::{MenuPayload, MenuSource, MenuSourceError};
use crate::menu::MenuRecord;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_MENU_ENDPOINT: &str = "/api/v1/menu/list";

#[derive(Debug, Deserialize)]
struct MenuEnvelope {
    code: i64,
    #[serde(default, alias = "message")]
    msg: String,
    #[serde(default)]
    data: Option<MenuPayload>,
}

/// Fetches records from the menu service and unwraps its `{code, msg, data}` envelope.
#[derive(Clone)]
pub struct HttpMenuSource {
    base_url: String,
    endpoint: String,
    token: Option<String>,
    agent: ureq::Agent,
}

impl std::fmt::Debug for HttpMenuSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMenuSource")
            .field("base_url", &self.base_url)
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl HttpMenuSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: DEFAULT_MENU_ENDPOINT.to_string(),
            token: None,
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

/// Decodes a menu service response body. `code` 0 and 200 are success.
pub fn decode_menu_envelope(url: &str, body: &str) -> Result<Vec<MenuRecord>, MenuSourceError> {
    let envelope: MenuEnvelope =
        serde_json::from_str(body).map_err(|e| MenuSourceError::Decode {
            origin: url.to_string(),
            reason: e.to_string(),
        })?;
    if envelope.code != 0 && envelope.code != 200 {
        return Err(MenuSourceError::Envelope {
            url: url.to_string(),
            code: envelope.code,
            message: envelope.msg,
        });
    }
    Ok(envelope
        .data
        .map(MenuPayload::into_records)
        .unwrap_or_default())
}

impl MenuSource for HttpMenuSource {
    fn fetch_menu_records(&self) -> Result<Vec<MenuRecord>, MenuSourceError> {
        let url = self.url();
        let mut request = self.agent.get(&url).set("accept", "application/json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }
        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(status, _) => MenuSourceError::Status {
                url: url.clone(),
                status,
            },
            other => MenuSourceError::Request {
                url: url.clone(),
                reason: other.to_string(),
            },
        })?;
        let body = response
            .into_string()
            .map_err(|e| MenuSourceError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        decode_menu_envelope(&url, &body)
    }

    fn describe(&self) -> String {
        format!("remote {}", self.url())
    }
}
