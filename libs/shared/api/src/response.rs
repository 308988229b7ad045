use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Paginated list envelope. Different endpoints name the item array
/// differently, so the common spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct PaginatedEnvelope {
    #[serde(alias = "results", alias = "items")]
    pub data: Vec<Value>,
    #[serde(default, alias = "count")]
    pub total: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default, alias = "limit")]
    pub page_size: Option<usize>,
}

/// Every shape a list endpoint has been seen to return. Items stay raw
/// until `into_page` so one unreadable record cannot hide the rest.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope {
    Bare(Vec<Value>),
    Paginated(PaginatedEnvelope),
    Unexpected(Value),
}

/// Normalised list result handed to the rest of the workspace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    /// Records the backend sent that could not be decoded.
    #[serde(skip_serializing_if = "is_zero")]
    pub skipped: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: None,
            page_size: None,
            skipped: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl ListEnvelope {
    pub fn is_list(&self) -> bool {
        !matches!(self, ListEnvelope::Unexpected(_))
    }

    pub fn into_page<T: DeserializeOwned>(self) -> Page<T> {
        match self {
            ListEnvelope::Bare(raw) => {
                let (items, skipped) = decode_items(raw);
                Page {
                    total: items.len(),
                    items,
                    page: None,
                    page_size: None,
                    skipped,
                }
            }
            ListEnvelope::Paginated(envelope) => {
                let (items, skipped) = decode_items(envelope.data);
                Page {
                    total: envelope.total.unwrap_or(items.len()),
                    items,
                    page: envelope.page,
                    page_size: envelope.page_size,
                    skipped,
                }
            }
            ListEnvelope::Unexpected(value) => {
                warn!("List endpoint returned an unexpected shape, treating as empty: {}", kind_of(&value));
                Page::empty()
            }
        }
    }
}

fn decode_items<T: DeserializeOwned>(raw: Vec<Value>) -> (Vec<T>, usize) {
    let mut items = Vec::with_capacity(raw.len());
    let mut skipped = 0;

    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!("Skipping unreadable list item #{}: {}", index, e);
                skipped += 1;
            }
        }
    }

    (items, skipped)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without a list field",
    }
}
