//! Element identity
//!
//! Elements created in the editor have not been stored yet and carry a
//! client-minted token; everything that came from the backend carries the
//! backend id. The distinction decides whether a save creates or updates.

use serde::{Deserialize, Serialize};

use crate::ErrorDetail;

/// Prefix of client-minted ids in their string form.
pub const TEMP_ID_PREFIX: &str = "temp-";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Minted by the editor, unknown to the backend.
    Pending(String),
    /// Assigned by the backend.
    Persisted(String),
}

impl ElementId {
    /// Interpret an id in its string form, as held by the editor.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match raw.strip_prefix(TEMP_ID_PREFIX) {
            Some(token) => Self::Pending(token.to_owned()),
            None => Self::Persisted(raw),
        }
    }

    pub fn persisted(id: impl Into<String>) -> Self {
        Self::Persisted(id.into())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn as_persisted(&self) -> Option<&str> {
        match self {
            Self::Persisted(id) => Some(id),
            Self::Pending(_) => None,
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending(token) => write!(f, "{TEMP_ID_PREFIX}{token}"),
            Self::Persisted(id) => f.write_str(id),
        }
    }
}

impl Serialize for ElementId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::wire::serde_id::deserialize(deserializer).map(Self::parse)
    }
}

/// Mint an id for an element that has not been saved yet.
pub fn generate_temp_id() -> ElementId {
    ElementId::Pending(uuid::Uuid::new_v4().to_string())
}

/// The id to send on save; `None` asks the backend to allocate one.
pub fn extract_id(id: &ElementId) -> Option<String> {
    id.as_persisted().map(str::to_owned)
}

/// A numeric id of a backend entity such as an uploaded file or a coaching
/// offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendId(u64);

impl BackendId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ErrorDetail> {
        raw.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ErrorDetail::InvalidNumericId {
                field,
                value: raw.to_owned(),
            })
    }

    pub fn get(self) -> u64 {
        self.0
    }
}
