//! Request and response DTOs for the quote API.

use serde::{Deserialize, Serialize};

/// Error message returned when any of the three required event fields is absent or blank.
pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Missing required parameters: event_name, event_description, or category";

/// Message returned by `/get-quotes` while the store is still empty.
pub const NO_QUOTES_MESSAGE: &str = "No quotes available yet. Please generate quotes via POST.";

/// Generate-quote request body.
///
/// Every field is optional at the serde level so that absent fields reach validation
/// and produce the documented 400 body instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub event_description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
}

/// Upper bounds applied to an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub max_quotes_per_request: usize,
    pub max_field_chars: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_quotes_per_request: 10,
            max_field_chars: 1000,
        }
    }
}

/// The three inputs embedded into every prompt of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    pub event_name: String,
    pub event_description: String,
    pub category: String,
}

impl EventContext {
    pub fn new(
        event_name: impl Into<String>,
        event_description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            event_description: event_description.into(),
            category: category.into(),
        }
    }
}

/// A request that passed validation: what to generate and how many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteJob {
    pub event: EventContext,
    pub number: usize,
}

/// Why a generate-quote request was rejected before any generation happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MISSING_PARAMETERS_MESSAGE)]
    MissingFields,
    #[error("number must be between 1 and {max}")]
    NumberOutOfRange { max: usize },
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl QuoteRequest {
    /// Check required fields and bounds; returns the job to run.
    ///
    /// Field values are kept verbatim (no trimming) since they are embedded as-is into the prompt.
    pub fn validate(&self, limits: &RequestLimits) -> Result<QuoteJob, ValidationError> {
        let (Some(event_name), Some(event_description), Some(category)) = (
            present(&self.event_name),
            present(&self.event_description),
            present(&self.category),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        for (field, value) in [
            ("event_name", event_name),
            ("event_description", event_description),
            ("category", category),
        ] {
            if value.chars().count() > limits.max_field_chars {
                return Err(ValidationError::FieldTooLong {
                    field,
                    max: limits.max_field_chars,
                });
            }
        }

        let number = self.number.unwrap_or(1);
        let max = limits.max_quotes_per_request;
        let number = usize::try_from(number)
            .ok()
            .filter(|n| (1..=max).contains(n))
            .ok_or(ValidationError::NumberOutOfRange { max })?;

        Ok(QuoteJob {
            event: EventContext::new(event_name, event_description, category),
            number,
        })
    }
}

/// Failure of a single generation attempt, carried inline in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

/// Outcome of one generation attempt: the raw quote text or an error record.
///
/// Serialized untagged, so a batch reads as `["quote", {"error": "..."}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteResult {
    Quote(String),
    Error(ErrorRecord),
}

impl QuoteResult {
    pub fn error(message: impl Into<String>) -> Self {
        QuoteResult::Error(ErrorRecord {
            error: message.into(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QuoteResult::Error(_))
    }

    pub fn as_quote(&self) -> Option<&str> {
        match self {
            QuoteResult::Quote(q) => Some(q),
            QuoteResult::Error(_) => None,
        }
    }
}

/// `POST /generate-quote` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuotesResponse {
    pub quotes: Vec<QuoteResult>,
}

/// `GET /get-quotes` body: the store contents, or a message while it is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredQuotesResponse {
    Quotes { quotes: Vec<QuoteResult> },
    Empty { message: String },
}

impl StoredQuotesResponse {
    pub fn from_results(quotes: Vec<QuoteResult>) -> Self {
        if quotes.is_empty() {
            StoredQuotesResponse::Empty {
                message: NO_QUOTES_MESSAGE.to_string(),
            }
        } else {
            StoredQuotesResponse::Quotes { quotes }
        }
    }
}

/// Error body shared by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
