//! Overlaying separately fetched answers onto transformed elements.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    element::{ElementType, LessonElement},
    progress::ProgressRecord,
};

/// Mutates an element in place. Records of a different type are ignored.
pub type ProgressApplier = fn(&mut LessonElement, &ProgressRecord);

pub fn apply_text_input_progress(element: &mut LessonElement, answer: &ProgressRecord) {
    let LessonElement::TextInput(element) = element else {
        return;
    };
    if let ProgressRecord::TextInput { answer, .. } = answer {
        element.content = Some(answer.clone());
    }
}

pub fn apply_single_choice_progress(element: &mut LessonElement, answer: &ProgressRecord) {
    let LessonElement::SingleChoice(element) = element else {
        return;
    };
    if let ProgressRecord::SingleChoice { answer_id, .. } = answer {
        for option in &mut element.options {
            option.is_selected = &option.id == answer_id;
        }
    }
}

pub fn apply_multi_check_progress(element: &mut LessonElement, answer: &ProgressRecord) {
    let LessonElement::MultiCheck(element) = element else {
        return;
    };
    if let ProgressRecord::MultipleChoice { answer_ids, .. } = answer {
        for option in &mut element.options {
            option.is_selected = answer_ids.contains(&option.id);
        }
    }
}

pub fn apply_one_out_of_three_progress(element: &mut LessonElement, answer: &ProgressRecord) {
    let LessonElement::OneOutOfThree(element) = element else {
        return;
    };
    if let ProgressRecord::OneOutOfThree { answers, .. } = answer {
        for row in &mut element.data.rows {
            for column in &mut row.columns {
                column.selected = answers
                    .iter()
                    .any(|a| a.row_id == row.id && a.column_id == column.id);
            }
        }
    }
}

/// Only the comment is carried; file metadata comes with the component.
pub fn apply_upload_files_progress(element: &mut LessonElement, answer: &ProgressRecord) {
    let LessonElement::UploadFiles(element) = element else {
        return;
    };
    if let ProgressRecord::UploadFiles { comment, .. } = answer {
        element.user_comment = comment.clone();
    }
}

pub fn progress_applier(kind: ElementType) -> Option<ProgressApplier> {
    match kind {
        ElementType::TextInput => Some(apply_text_input_progress),
        ElementType::SingleChoice => Some(apply_single_choice_progress),
        ElementType::MultiCheck => Some(apply_multi_check_progress),
        ElementType::OneOutOfThree => Some(apply_one_out_of_three_progress),
        ElementType::UploadFiles => Some(apply_upload_files_progress),
        ElementType::RichText => None,
        ElementType::HeadingText => None,
        ElementType::VideoFile => None,
        ElementType::ImageFile => None,
        ElementType::ImageGallery => None,
        ElementType::DownloadFiles => None,
        ElementType::QuizTypeOne => None,
        ElementType::QuizTypeTwo => None,
        ElementType::QuizTypeThree => None,
        ElementType::QuizTypeFour => None,
        ElementType::Links => None,
        ElementType::CoachingSession => None,
        ElementType::Assignment => None,
    }
}

/// Apply each record to the element whose id it names. When several records
/// name the same element the last one wins; records naming no element are
/// dropped.
pub fn apply_progress_to_elements(elements: &mut [LessonElement], answers: &[ProgressRecord]) {
    let answers: HashMap<&str, &ProgressRecord> = answers
        .iter()
        .filter_map(|answer| answer.component_id().map(|id| (id, answer)))
        .collect();
    let mut applied = 0;
    for element in elements.iter_mut() {
        let Some(answer) = element
            .id()
            .as_persisted()
            .and_then(|id| answers.get(id).copied())
        else {
            continue;
        };
        if let Some(applier) = progress_applier(element.element_type()) {
            trace!(id = %element.id(), kind = %element.element_type(), "applying progress");
            applier(element, answer);
            applied += 1;
        }
    }
    debug!(records = answers.len(), applied, "applied progress");
}
