use crate::{element::ElementType, id::ElementId};

pub mod config;
pub mod element;
pub mod id;
pub mod preview;
pub mod progress;
pub mod request;
pub mod transform;
pub mod validate;
pub mod wire;

#[cfg(test)]
mod tests;

pub use transform::{
    apply_progress_to_elements, get_lesson_components_map, transform_lesson_components,
    transform_lesson_components_with_progress, transform_lesson_to_request,
};

#[derive(Debug, thiserror::Error)]
#[error("{context}: {detail}")]
pub struct Error {
    pub context: Box<ErrorContext>,
    pub detail: Box<ErrorDetail>,
}

/// Where in the element list a save failed.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub id: ElementId,
    pub position: u32,
}

impl ErrorContext {
    pub(crate) fn new(id: ElementId, position: u32) -> Self {
        Self { id, position }
    }

    pub(crate) fn error(&self, detail: ErrorDetail) -> Error {
        Error {
            context: Box::new(self.clone()),
            detail: Box::new(detail),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(position {})", self.id, self.position)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorDetail {
    #[error("Invalid component type: expected {expected}, got {got}")]
    InvalidComponentType {
        expected: ElementType,
        got: ElementType,
    },
    #[error("Invalid numeric id for {field}: {value:?}")]
    InvalidNumericId { field: &'static str, value: String },
    #[error("Missing file: {0}")]
    MissingFile(&'static str),
    #[error("No option marked as correct in {0}")]
    MissingCorrectOption(String),
    #[error("Element index {0} does not fit a position")]
    PositionOutOfRange(usize),
}
