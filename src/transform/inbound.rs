//! Wire components to editable elements
//!
//! Each function narrows to one wire variant and reshapes it. Progress
//! embedded in the component is applied here; separately fetched progress is
//! handled by [`super::progress`].

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    element::{
        AssignmentElement, AssignmentProgress, AssignmentReply, AssignmentStatus, ChoiceElement,
        ChoiceOption, CoachingOffering, CoachingSessionElement, DownloadFilesElement,
        FileCategory, FileRef, FileStatus, HeadingElement, ImageElement, ImageGalleryElement,
        ImageQuizOption, LessonElement, LetterLabel, LetteredImage, LinkItem, LinksElement,
        OneOutOfThreeData, OneOutOfThreeElement, QuizGroup, QuizOption, QuizTypeFourElement,
        QuizTypeOneElement, QuizTypeThreeElement, QuizTypeTwoElement, RichTextElement, Sender,
        SessionProgress, SessionRef, TableColumn, TableRow, TextInputElement, UploadFilesElement,
        VideoElement,
    },
    id::ElementId,
    wire::{
        AssignmentComponent, CoachingSessionComponent, DownloadFilesComponent, HeadingComponent,
        ImageCarouselComponent, ImageComponent, LinksComponent, MultipleChoiceComponent,
        OneOutOfThreeComponent, QuizTypeFourComponent, QuizTypeOneComponent,
        QuizTypeThreeComponent, QuizTypeTwoComponent, RichTextComponent, SingleChoiceComponent,
        TextInputComponent, UploadFilesComponent, VideoComponent, WireComponent, WireFile,
        WireLink, WireOption,
    },
};

fn file_ref(file: &WireFile, category: FileCategory) -> FileRef {
    FileRef {
        id: file.id.clone(),
        name: file.name.clone(),
        size: file.size,
        category,
        url: file.download_url.clone(),
        status: FileStatus::Available,
        thumbnail_url: Some(file.download_url.clone()),
        video_id: None,
    }
}

/// `None` only when the list is absent; null entries are skipped.
fn file_list(files: Option<&[Option<WireFile>]>, category: FileCategory) -> Option<Vec<FileRef>> {
    files.map(|files| {
        files
            .iter()
            .flatten()
            .map(|file| file_ref(file, category))
            .collect()
    })
}

fn link_item(link: &WireLink) -> LinkItem {
    LinkItem {
        title: link.title.clone(),
        url: link.url.clone(),
        custom_icon: link
            .icon_file
            .as_ref()
            .map(|icon| file_ref(icon, FileCategory::Image)),
    }
}

fn quiz_options(options: &[WireOption], correct_option_id: &str) -> Vec<QuizOption> {
    options
        .iter()
        .map(|option| QuizOption {
            id: option.id.clone(),
            name: option.name.clone(),
            correct: option.id == correct_option_id,
        })
        .collect()
}

/// `A`, `B`, `C`, ... by zero-based index.
pub fn letter_by_index(index: usize) -> String {
    u32::try_from(index)
        .ok()
        .and_then(|index| ('A' as u32).checked_add(index))
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}

pub fn transform_rich_text(component: &RichTextComponent) -> RichTextElement {
    RichTextElement {
        id: ElementId::persisted(&component.id),
        content: component.text.clone(),
        include_in_materials: component.include_in_materials,
    }
}

pub fn transform_heading(component: &HeadingComponent) -> HeadingElement {
    HeadingElement {
        id: ElementId::persisted(&component.id),
        heading: component.text.clone(),
        heading_type: component.size,
    }
}

pub fn transform_single_choice(component: &SingleChoiceComponent) -> ChoiceElement {
    let selected = component
        .progress
        .as_ref()
        .map(|progress| progress.answer_id.as_str());
    ChoiceElement {
        id: ElementId::persisted(&component.id),
        title: component.title.clone(),
        options: component
            .options
            .iter()
            .map(|option| ChoiceOption {
                id: option.id.clone(),
                name: option.name.clone(),
                is_selected: selected == Some(option.id.as_str()),
            })
            .collect(),
        required: component.required,
    }
}

pub fn transform_multiple_choice(component: &MultipleChoiceComponent) -> ChoiceElement {
    ChoiceElement {
        id: ElementId::persisted(&component.id),
        title: component.title.clone(),
        options: component
            .options
            .iter()
            .map(|option| ChoiceOption {
                id: option.id.clone(),
                name: option.name.clone(),
                is_selected: component
                    .progress
                    .as_ref()
                    .is_some_and(|progress| progress.answer_ids.contains(&option.id)),
            })
            .collect(),
        required: component.required,
    }
}

pub fn transform_text_input(component: &TextInputComponent) -> TextInputElement {
    TextInputElement {
        id: ElementId::persisted(&component.id),
        helper_text: component.helper_text.clone(),
        required: component.required,
        content: component
            .progress
            .as_ref()
            .map(|progress| progress.answer.clone()),
    }
}

pub fn transform_one_out_of_three(component: &OneOutOfThreeComponent) -> OneOutOfThreeElement {
    let is_selected = |row_id: &str, column_id: &str| {
        component.progress.as_ref().is_some_and(|progress| {
            progress
                .answers
                .iter()
                .any(|answer| answer.row_id == row_id && answer.column_id == column_id)
        })
    };
    OneOutOfThreeElement {
        id: ElementId::persisted(&component.id),
        data: OneOutOfThreeData {
            table_title: component.title.clone(),
            columns: component
                .columns
                .iter()
                .map(|column| TableColumn {
                    id: column.id.clone(),
                    column_title: column.name.clone(),
                    selected: false,
                })
                .collect(),
            rows: component
                .rows
                .iter()
                .map(|row| TableRow {
                    id: row.id.clone(),
                    row_title: row.name.clone(),
                    columns: component
                        .columns
                        .iter()
                        .map(|column| TableColumn {
                            id: column.id.clone(),
                            column_title: column.name.clone(),
                            selected: is_selected(&row.id, &column.id),
                        })
                        .collect(),
                })
                .collect(),
        },
        required: component.required,
    }
}

pub fn transform_video(component: &VideoComponent) -> VideoElement {
    VideoElement {
        id: ElementId::persisted(&component.id),
        file: component.video_file.as_ref().map(|file| FileRef {
            thumbnail_url: file.thumbnail_url.clone(),
            video_id: file.playback_id.clone(),
            ..file_ref(file, FileCategory::Video)
        }),
    }
}

pub fn transform_image(component: &ImageComponent) -> ImageElement {
    ImageElement {
        id: ElementId::persisted(&component.id),
        file: component
            .image_file
            .as_ref()
            .map(|file| file_ref(file, FileCategory::Image)),
    }
}

pub fn transform_image_carousel(component: &ImageCarouselComponent) -> ImageGalleryElement {
    ImageGalleryElement {
        id: ElementId::persisted(&component.id),
        images: file_list(component.image_files.as_deref(), FileCategory::Image),
    }
}

pub fn transform_download_files(component: &DownloadFilesComponent) -> DownloadFilesElement {
    DownloadFilesElement {
        id: ElementId::persisted(&component.id),
        files: file_list(component.files.as_deref(), FileCategory::Generic),
    }
}

pub fn transform_upload_files(component: &UploadFilesComponent) -> UploadFilesElement {
    let progress = component.progress.as_ref();
    UploadFilesElement {
        id: ElementId::persisted(&component.id),
        description: component.description.clone(),
        files: file_list(
            progress.and_then(|progress| progress.files.as_deref()),
            FileCategory::Generic,
        ),
        user_comment: progress.and_then(|progress| progress.comment.clone()),
    }
}

pub fn transform_quiz_type_one(component: &QuizTypeOneComponent) -> QuizTypeOneElement {
    QuizTypeOneElement {
        id: ElementId::persisted(&component.id),
        title: component.title.clone(),
        description: component.description.clone(),
        options: quiz_options(&component.options, &component.correct_option_id),
        image_file: component
            .image_file
            .as_ref()
            .map(|file| file_ref(file, FileCategory::Image)),
        correct_option_id: component.correct_option_id.clone(),
    }
}

pub fn transform_quiz_type_two(component: &QuizTypeTwoComponent) -> QuizTypeTwoElement {
    QuizTypeTwoElement {
        id: ElementId::persisted(&component.id),
        title: component.title.clone(),
        description: component.description.clone(),
        image_file: component
            .image_file
            .as_ref()
            .map(|file| file_ref(file, FileCategory::Image)),
        groups: component
            .groups
            .iter()
            .map(|group| QuizGroup {
                id: group.id.clone(),
                title: group.title.clone(),
                options: quiz_options(&group.options, &group.correct_option_id),
                correct_option_id: group.correct_option_id.clone(),
            })
            .collect(),
    }
}

pub fn transform_quiz_type_three(component: &QuizTypeThreeComponent) -> QuizTypeThreeElement {
    QuizTypeThreeElement {
        id: ElementId::persisted(&component.id),
        title: component.title.clone(),
        description: component.description.clone(),
        options: component
            .options
            .iter()
            .map(|option| ImageQuizOption {
                id: option.id.clone(),
                image_file: option
                    .image_file
                    .as_ref()
                    .map(|file| file_ref(file, FileCategory::Image)),
                description: option.description.clone(),
                correct: option.id == component.correct_option_id,
            })
            .collect(),
        correct_option_id: component.correct_option_id.clone(),
    }
}

/// Options arrive in answer order, so the n-th image belongs to the n-th
/// letter.
pub fn transform_quiz_type_four(component: &QuizTypeFourComponent) -> QuizTypeFourElement {
    QuizTypeFourElement {
        id: ElementId::persisted(&component.id),
        title: component.title.clone(),
        description: component.description.clone(),
        images: component
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| LetteredImage {
                image_file: option
                    .image_file
                    .as_ref()
                    .map(|file| file_ref(file, FileCategory::Image)),
                correct_letter: letter_by_index(index),
            })
            .collect(),
        labels: component
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| LetterLabel {
                letter: letter_by_index(index),
                description: option.description.clone(),
            })
            .collect(),
    }
}

pub fn transform_links(component: &LinksComponent) -> LinksElement {
    LinksElement {
        id: ElementId::persisted(&component.id),
        links: component.links.iter().map(link_item).collect(),
        include_in_materials: component.include_in_materials,
        as_part_of_materials_only: component.as_part_of_materials_only,
    }
}

pub fn transform_coaching_session(component: &CoachingSessionComponent) -> CoachingSessionElement {
    CoachingSessionElement {
        id: ElementId::persisted(&component.id),
        coaching_session: component
            .course_coaching_offering_id
            .as_ref()
            .map(|offering_id| CoachingOffering {
                id: offering_id.clone(),
                name: component.name.clone(),
                duration: component.duration,
            }),
        progress: component.progress.as_ref().map(|progress| SessionProgress {
            session: SessionRef {
                id: progress.session.id.clone(),
                status: progress.session.status.clone(),
            },
        }),
    }
}

pub fn transform_assignment(component: &AssignmentComponent) -> AssignmentElement {
    let progress = component.progress.as_ref().map(|progress| {
        let status = match (&progress.last_activity, progress.passed) {
            (None, _) => AssignmentStatus::NotStarted,
            (Some(_), true) => AssignmentStatus::Passed,
            (Some(_), false) => AssignmentStatus::AwaitingReview,
        };
        AssignmentProgress {
            status,
            last_reply: progress
                .last_activity
                .as_ref()
                .map(|activity| AssignmentReply {
                    sent_at: activity.sent_at,
                    comment: activity.comment.clone(),
                    files: activity
                        .files
                        .iter()
                        .map(|file| file_ref(file, FileCategory::Generic))
                        .collect(),
                    links: activity.links.iter().map(link_item).collect(),
                    sender: Sender {
                        id: activity.sender.id.clone(),
                        username: activity.sender.username.clone(),
                        name: activity.sender.name.clone(),
                        surname: activity.sender.surname.clone(),
                        avatar_url: activity.sender.avatar_url.clone(),
                        role: activity.sender.role.clone(),
                        is_current_user: activity.sender.is_current_user,
                    },
                }),
        }
    });
    AssignmentElement {
        id: ElementId::persisted(&component.id),
        title: component.title.clone(),
        description: component.description.clone(),
        files: component
            .resources
            .iter()
            .map(|file| FileRef {
                thumbnail_url: None,
                ..file_ref(file, FileCategory::Generic)
            })
            .collect(),
        links: component.links.iter().map(link_item).collect(),
        progress,
    }
}

/// Dispatch one component by its type tag; `None` for unregistered types.
pub fn transform_component(component: &WireComponent) -> Option<LessonElement> {
    let element = match component {
        WireComponent::RichText(c) => LessonElement::RichText(transform_rich_text(c)),
        WireComponent::Heading(c) => LessonElement::HeadingText(transform_heading(c)),
        WireComponent::SingleChoice(c) => LessonElement::SingleChoice(transform_single_choice(c)),
        WireComponent::MultipleChoice(c) => {
            LessonElement::MultiCheck(transform_multiple_choice(c))
        }
        WireComponent::TextInput(c) => LessonElement::TextInput(transform_text_input(c)),
        WireComponent::OneOutOfThree(c) => {
            LessonElement::OneOutOfThree(transform_one_out_of_three(c))
        }
        WireComponent::Video(c) => LessonElement::VideoFile(transform_video(c)),
        WireComponent::Image(c) => LessonElement::ImageFile(transform_image(c)),
        WireComponent::DownloadFiles(c) => {
            LessonElement::DownloadFiles(transform_download_files(c))
        }
        WireComponent::UploadFiles(c) => LessonElement::UploadFiles(transform_upload_files(c)),
        WireComponent::ImageCarousel(c) => {
            LessonElement::ImageGallery(transform_image_carousel(c))
        }
        WireComponent::QuizTypeOne(c) => LessonElement::QuizTypeOne(transform_quiz_type_one(c)),
        WireComponent::QuizTypeTwo(c) => LessonElement::QuizTypeTwo(transform_quiz_type_two(c)),
        WireComponent::QuizTypeThree(c) => {
            LessonElement::QuizTypeThree(transform_quiz_type_three(c))
        }
        WireComponent::QuizTypeFour(c) => {
            LessonElement::QuizTypeFour(transform_quiz_type_four(c))
        }
        WireComponent::Links(c) => LessonElement::Links(transform_links(c)),
        WireComponent::CoachingSession(c) => {
            LessonElement::CoachingSession(transform_coaching_session(c))
        }
        WireComponent::Assignment(c) => LessonElement::Assignment(transform_assignment(c)),
        WireComponent::Unknown => return None,
    };
    trace!(id = %element.id(), kind = %element.element_type(), "transformed component");
    Some(element)
}

/// Transform in input order, dropping components of unregistered types.
pub fn transform_lesson_components(components: &[WireComponent]) -> Vec<LessonElement> {
    components
        .iter()
        .enumerate()
        .filter_map(|(index, component)| {
            let element = transform_component(component);
            if element.is_none() {
                debug!(index, "dropping component of unregistered type");
            }
            element
        })
        .collect()
}

/// Same dispatch as [`transform_lesson_components`], keyed by element id.
pub fn get_lesson_components_map(
    components: &[WireComponent],
) -> IndexMap<ElementId, LessonElement> {
    transform_lesson_components(components)
        .into_iter()
        .map(|element| (element.id().clone(), element))
        .collect()
}
