use crate::menu::MenuRecord;
use serde::Deserialize;

pub mod file;
pub mod http;
pub mod local;

pub use file::FileMenuSource;
pub use http::{decode_menu_envelope, HttpMenuSource, DEFAULT_MENU_ENDPOINT};
pub use local::StaticMenuSource;

#[derive(Debug, thiserror::Error)]
pub enum MenuSourceError {
    #[error("menu request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("menu request to {url} returned http status {status}")]
    Status { url: String, status: u16 },
    #[error("menu service at {url} answered code {code}: {message}")]
    Envelope {
        url: String,
        code: i64,
        message: String,
    },
    #[error("failed to decode menu records from {origin}: {reason}")]
    Decode { origin: String, reason: String },
    #[error("failed to read menu file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("menu source unavailable: {0}")]
    Unavailable(String),
}

/// Supplier of flat menu records. Transport, authentication and envelope unwrapping all
/// happen inside the implementation.
pub trait MenuSource: Send + Sync {
    fn fetch_menu_records(&self) -> Result<Vec<MenuRecord>, MenuSourceError>;

    /// Short human-readable origin used in diagnostics.
    fn describe(&self) -> String;
}

/// Accepted shapes of a record batch: a bare list, or an object wrapping the list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MenuPayload {
    List(Vec<MenuRecord>),
    Wrapped {
        #[serde(alias = "items", alias = "menus")]
        list: Vec<MenuRecord>,
    },
}

impl MenuPayload {
    pub(crate) fn into_records(self) -> Vec<MenuRecord> {
        match self {
            Self::List(records) | Self::Wrapped { list: records } => records,
        }
    }
}
