//! Lesson component transformation pipeline
//!
//! Three stages, each keyed by component type:
//! - `inbound`: wire components to editable elements, unknown types dropped
//! - `progress`: student answers overlaid onto elements in place
//! - `outbound`: edited elements to save requests, failing on the first
//!   element that cannot be saved

pub mod inbound;
pub mod outbound;
pub mod progress;

pub use inbound::{get_lesson_components_map, transform_lesson_components};
pub use outbound::transform_lesson_to_request;
pub use progress::apply_progress_to_elements;

use crate::{element::LessonElement, progress::ProgressRecord, wire::WireComponent};

pub fn transform_lesson_components_with_progress(
    components: &[WireComponent],
    answers: &[ProgressRecord],
) -> Vec<LessonElement> {
    let mut elements = transform_lesson_components(components);
    apply_progress_to_elements(&mut elements, answers);
    elements
}
