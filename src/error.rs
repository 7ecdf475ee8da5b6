//! Error types for page wiring.
//!
//! None of these reach the player: every failure degrades to "feature skipped".
//! They exist so the wiring code can use `?` and so the wasm entry points can
//! hand a readable message to the console.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a `#turn-counter` data attribute could not be turned into a count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnCounterError {
    #[error("turn counter attribute `{0}` is missing")]
    Missing(&'static str),
    #[error("turn counter attribute `{attr}` is not a number: {value:?}")]
    NotANumber { attr: &'static str, value: String },
    #[error("turn counter attribute `{attr}` is negative: {value}")]
    Negative { attr: &'static str, value: String },
    #[error("turn counter attribute `{attr}` is out of range: {value}")]
    OutOfRange { attr: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[cfg(feature = "serde_json")]
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
