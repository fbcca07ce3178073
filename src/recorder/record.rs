//! Search Error Record Module
//!
//! The captured failure input and the immutable record produced from it.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Failure ==
/// A raw failure as handed to the recorder.
///
/// `stack` carries whatever identifying trace text the caller has. When it is
/// present it, rather than the message, determines the error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub stack: Option<String>,
}

impl Failure {
    /// Creates a failure with a message and no stack text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    /// Attaches stack text to the failure.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Builds a failure from any error value.
    ///
    /// The message is the error's `Display` text. When the error has a
    /// `source()` chain, the rendered chain becomes the stack text.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        Self {
            message: err.to_string(),
            stack: render_chain(err),
        }
    }

    /// Builds a failure from an `anyhow::Error`, preferring a captured
    /// backtrace over the source chain as stack text.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
            stack: anyhow_stack(err, err.backtrace()),
        }
    }

    /// Text the error code is derived from.
    pub fn identifying_text(&self) -> &str {
        self.stack.as_deref().unwrap_or(&self.message)
    }
}

/// Stack text for an anyhow error: the context chain followed by `backtrace`
/// when one was captured, otherwise the rendered source chain.
fn anyhow_stack(err: &anyhow::Error, backtrace: &Backtrace) -> Option<String> {
    match backtrace.status() {
        BacktraceStatus::Captured => Some(format!("{:#}\n{}", err, backtrace)),
        _ => render_chain(&**err),
    }
}

/// Renders `err` and its sources one per line, or None when there are no sources.
fn render_chain(err: &(dyn StdError + 'static)) -> Option<String> {
    let mut source = err.source()?;
    let mut rendered = err.to_string();
    loop {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&source.to_string());
        match source.source() {
            Some(next) => source = next,
            None => break,
        }
    }
    Some(rendered)
}

// == Search Error ==
/// Immutable record of one captured failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchError {
    /// `IMG_SEARCH_` code derived from the failure text
    pub code: String,
    /// Redacted failure message
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// `searchQuery` plus caller metadata
    pub context: Map<String, Value>,
}

impl SearchError {
    /// Value of the `searchQuery` context key, when it is a string.
    pub fn search_query(&self) -> Option<&str> {
        self.context.get("searchQuery").and_then(Value::as_str)
    }
}
