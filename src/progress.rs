//! Student answers fetched separately from the components they refer to.

use serde::{Deserialize, Serialize};

use crate::wire::{CellSelection, serde_id};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ProgressRecord {
    TextInput {
        #[serde(deserialize_with = "serde_id::deserialize")]
        component_id: String,
        answer: String,
    },
    SingleChoice {
        #[serde(deserialize_with = "serde_id::deserialize")]
        component_id: String,
        #[serde(deserialize_with = "serde_id::deserialize")]
        answer_id: String,
    },
    MultipleChoice {
        #[serde(deserialize_with = "serde_id::deserialize")]
        component_id: String,
        #[serde(deserialize_with = "serde_id::vec::deserialize")]
        answer_ids: Vec<String>,
    },
    OneOutOfThree {
        #[serde(deserialize_with = "serde_id::deserialize")]
        component_id: String,
        answers: Vec<CellSelection>,
    },
    UploadFiles {
        #[serde(deserialize_with = "serde_id::deserialize")]
        component_id: String,
        #[serde(default, deserialize_with = "serde_id::vec::deserialize")]
        file_ids: Vec<String>,
        #[serde(default)]
        comment: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl ProgressRecord {
    pub fn component_id(&self) -> Option<&str> {
        match self {
            Self::TextInput { component_id, .. }
            | Self::SingleChoice { component_id, .. }
            | Self::MultipleChoice { component_id, .. }
            | Self::OneOutOfThree { component_id, .. }
            | Self::UploadFiles { component_id, .. } => Some(component_id),
            Self::Unknown => None,
        }
    }
}
