//! Per-type element validation
//!
//! The designer context checks that an element is complete enough to save.
//! The student context checks that required questions have been answered.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    element::{ChoiceElement, ElementType, LessonElement},
    id::ElementId,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationContext {
    #[default]
    Designer,
    Student,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Content is empty")]
    EmptyContent,
    #[error("Title is empty")]
    EmptyTitle,
    #[error("At least {min} options are required, found {found}")]
    TooFewOptions { min: usize, found: usize },
    #[error("Option {0} has no text")]
    EmptyOption(usize),
    #[error("No file attached")]
    MissingFile,
    #[error("Exactly one correct option is required in {scope}, found {found}")]
    CorrectOptionCount { scope: String, found: usize },
    #[error("Link {0} has no url")]
    EmptyLink(usize),
    #[error("No coaching offering selected")]
    MissingOffering,
    #[error("Required question is unanswered")]
    Unanswered,
}

pub type Validator = fn(&LessonElement, ValidationContext) -> Option<ValidationIssue>;

const MIN_CHOICE_OPTIONS: usize = 2;

fn blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn check_options<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<ValidationIssue> {
    let names = names.into_iter().collect::<Vec<_>>();
    if names.len() < MIN_CHOICE_OPTIONS {
        return Some(ValidationIssue::TooFewOptions {
            min: MIN_CHOICE_OPTIONS,
            found: names.len(),
        });
    }
    names
        .iter()
        .position(|name| blank(name))
        .map(|index| ValidationIssue::EmptyOption(index + 1))
}

fn check_single_correct(
    scope: &str,
    flags: impl IntoIterator<Item = bool>,
) -> Option<ValidationIssue> {
    let found = flags.into_iter().filter(|correct| *correct).count();
    (found != 1).then(|| ValidationIssue::CorrectOptionCount {
        scope: scope.to_owned(),
        found,
    })
}

fn validate_choice(choice: &ChoiceElement, context: ValidationContext) -> Option<ValidationIssue> {
    match context {
        ValidationContext::Designer => {
            if blank(&choice.title) {
                return Some(ValidationIssue::EmptyTitle);
            }
            check_options(choice.options.iter().map(|option| option.name.as_str()))
        }
        ValidationContext::Student => (choice.required
            && !choice.options.iter().any(|option| option.is_selected))
        .then_some(ValidationIssue::Unanswered),
    }
}

pub fn validate_rich_text(element: &LessonElement, context: ValidationContext) -> Option<ValidationIssue> {
    let LessonElement::RichText(rich_text) = element else {
        return None;
    };
    (context == ValidationContext::Designer && blank(&rich_text.content))
        .then_some(ValidationIssue::EmptyContent)
}

pub fn validate_heading(element: &LessonElement, context: ValidationContext) -> Option<ValidationIssue> {
    let LessonElement::HeadingText(heading) = element else {
        return None;
    };
    (context == ValidationContext::Designer && blank(&heading.heading))
        .then_some(ValidationIssue::EmptyContent)
}

pub fn validate_single_choice(
    element: &LessonElement,
    context: ValidationContext,
) -> Option<ValidationIssue> {
    let LessonElement::SingleChoice(choice) = element else {
        return None;
    };
    validate_choice(choice, context)
}

pub fn validate_multi_check(
    element: &LessonElement,
    context: ValidationContext,
) -> Option<ValidationIssue> {
    let LessonElement::MultiCheck(choice) = element else {
        return None;
    };
    validate_choice(choice, context)
}

pub fn validate_text_input(
    element: &LessonElement,
    context: ValidationContext,
) -> Option<ValidationIssue> {
    let LessonElement::TextInput(text_input) = element else {
        return None;
    };
    match context {
        ValidationContext::Designer => {
            blank(&text_input.helper_text).then_some(ValidationIssue::EmptyContent)
        }
        ValidationContext::Student => (text_input.required
            && text_input.content.as_deref().is_none_or(blank))
        .then_some(ValidationIssue::Unanswered),
    }
}

/// Students must pick a column in every row of a required table.
pub fn validate_one_out_of_three(
    element: &LessonElement,
    context: ValidationContext,
) -> Option<ValidationIssue> {
    let LessonElement::OneOutOfThree(table) = element else {
        return None;
    };
    match context {
        ValidationContext::Designer => {
            if blank(&table.data.table_title) {
                return Some(ValidationIssue::EmptyTitle);
            }
            if table.data.rows.is_empty() {
                return Some(ValidationIssue::TooFewOptions { min: 1, found: 0 });
            }
            table
                .data
                .rows
                .iter()
                .position(|row| blank(&row.row_title))
                .map(|index| ValidationIssue::EmptyOption(index + 1))
        }
        ValidationContext::Student => (table.required
            && table
                .data
                .rows
                .iter()
                .any(|row| !row.columns.iter().any(|column| column.selected)))
        .then_some(ValidationIssue::Unanswered),
    }
}

pub fn validate_media(element: &LessonElement, context: ValidationContext) -> Option<ValidationIssue> {
    if context != ValidationContext::Designer {
        return None;
    }
    let missing = match element {
        LessonElement::VideoFile(video) => video.file.is_none(),
        LessonElement::ImageFile(image) => image.file.is_none(),
        LessonElement::ImageGallery(gallery) => gallery.images.as_ref().is_none_or(Vec::is_empty),
        LessonElement::DownloadFiles(download) => {
            download.files.as_ref().is_none_or(Vec::is_empty)
        }
        _ => false,
    };
    missing.then_some(ValidationIssue::MissingFile)
}

pub fn validate_quiz(element: &LessonElement, context: ValidationContext) -> Option<ValidationIssue> {
    if context != ValidationContext::Designer {
        return None;
    }
    match element {
        LessonElement::QuizTypeOne(quiz) => {
            if blank(&quiz.title) {
                return Some(ValidationIssue::EmptyTitle);
            }
            if quiz.image_file.is_none() {
                return Some(ValidationIssue::MissingFile);
            }
            check_options(quiz.options.iter().map(|option| option.name.as_str())).or_else(|| {
                check_single_correct("quiz", quiz.options.iter().map(|option| option.correct))
            })
        }
        LessonElement::QuizTypeTwo(quiz) => {
            if blank(&quiz.title) {
                return Some(ValidationIssue::EmptyTitle);
            }
            if quiz.image_file.is_none() {
                return Some(ValidationIssue::MissingFile);
            }
            quiz.groups.iter().enumerate().find_map(|(index, group)| {
                check_options(group.options.iter().map(|option| option.name.as_str())).or_else(
                    || {
                        check_single_correct(
                            &format!("group {}", index + 1),
                            group.options.iter().map(|option| option.correct),
                        )
                    },
                )
            })
        }
        LessonElement::QuizTypeThree(quiz) => {
            if blank(&quiz.title) {
                return Some(ValidationIssue::EmptyTitle);
            }
            if quiz.options.iter().any(|option| option.image_file.is_none()) {
                return Some(ValidationIssue::MissingFile);
            }
            check_single_correct("quiz", quiz.options.iter().map(|option| option.correct))
        }
        LessonElement::QuizTypeFour(quiz) => {
            if blank(&quiz.title) {
                return Some(ValidationIssue::EmptyTitle);
            }
            quiz.images
                .iter()
                .any(|image| image.image_file.is_none())
                .then_some(ValidationIssue::MissingFile)
        }
        _ => None,
    }
}

pub fn validate_links(element: &LessonElement, context: ValidationContext) -> Option<ValidationIssue> {
    let LessonElement::Links(links) = element else {
        return None;
    };
    if context != ValidationContext::Designer {
        return None;
    }
    if links.links.is_empty() {
        return Some(ValidationIssue::TooFewOptions { min: 1, found: 0 });
    }
    links
        .links
        .iter()
        .position(|link| blank(&link.url))
        .map(|index| ValidationIssue::EmptyLink(index + 1))
}

pub fn validate_coaching_session(
    element: &LessonElement,
    context: ValidationContext,
) -> Option<ValidationIssue> {
    let LessonElement::CoachingSession(session) = element else {
        return None;
    };
    (context == ValidationContext::Designer && session.coaching_session.is_none())
        .then_some(ValidationIssue::MissingOffering)
}

pub fn validate_assignment(
    element: &LessonElement,
    context: ValidationContext,
) -> Option<ValidationIssue> {
    let LessonElement::Assignment(assignment) = element else {
        return None;
    };
    (context == ValidationContext::Designer && blank(&assignment.title))
        .then_some(ValidationIssue::EmptyTitle)
}

pub fn validator(kind: ElementType) -> Option<Validator> {
    match kind {
        ElementType::RichText => Some(validate_rich_text),
        ElementType::HeadingText => Some(validate_heading),
        ElementType::SingleChoice => Some(validate_single_choice),
        ElementType::MultiCheck => Some(validate_multi_check),
        ElementType::TextInput => Some(validate_text_input),
        ElementType::OneOutOfThree => Some(validate_one_out_of_three),
        ElementType::VideoFile => Some(validate_media),
        ElementType::ImageFile => Some(validate_media),
        ElementType::ImageGallery => Some(validate_media),
        ElementType::DownloadFiles => Some(validate_media),
        ElementType::UploadFiles => None,
        ElementType::QuizTypeOne => Some(validate_quiz),
        ElementType::QuizTypeTwo => Some(validate_quiz),
        ElementType::QuizTypeThree => Some(validate_quiz),
        ElementType::QuizTypeFour => Some(validate_quiz),
        ElementType::Links => Some(validate_links),
        ElementType::CoachingSession => Some(validate_coaching_session),
        ElementType::Assignment => Some(validate_assignment),
    }
}

/// Issues keyed by element id, in element order.
pub fn validate_elements(
    elements: &[LessonElement],
    context: ValidationContext,
) -> IndexMap<ElementId, ValidationIssue> {
    elements
        .iter()
        .filter_map(|element| {
            let validator = validator(element.element_type())?;
            validator(element, context).map(|issue| (element.id().clone(), issue))
        })
        .collect()
}
