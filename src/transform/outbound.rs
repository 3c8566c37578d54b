//! Editable elements to save requests
//!
//! Positions are recomputed from array order. Option, row, column and group
//! ids are renumbered `"1"..="n"`; the backend does not keep them stable.

use itertools::Itertools;
use tracing::trace;

use crate::{
    Error, ErrorContext, ErrorDetail,
    element::{ElementType, FileRef, LessonElement, LinkItem},
    id::{BackendId, extract_id},
    request::{
        AssignmentRequest, ChoiceRequest, CoachingSessionRequest, DownloadFilesRequest,
        HeadingRequest, ImageCarouselRequest, ImageOptionRequest, ImageRequest, LinksRequest,
        OneOutOfThreeRequest, QuizGroupRequest, QuizTypeFourRequest, QuizTypeOneRequest,
        QuizTypeThreeRequest, QuizTypeTwoRequest, RequestComponent, RequestLink, RequestOption,
        RichTextRequest, TextInputRequest, UploadFilesRequest, VideoRequest,
    },
};

pub type OutboundTransformer = fn(&LessonElement, u32) -> Result<RequestComponent, Error>;

macro_rules! bail {
    ($ctx:expr, $detail:expr) => {
        return Err($ctx.error($detail))
    };
}

/// Narrow `$element` to `LessonElement::$variant` or return
/// [`ErrorDetail::InvalidComponentType`].
macro_rules! narrow {
    ($element:expr, $order:expr, $variant:ident) => {
        match $element {
            LessonElement::$variant(inner) => (inner, ErrorContext::new(inner.id.clone(), $order)),
            other => bail!(
                ErrorContext::new(other.id().clone(), $order),
                ErrorDetail::InvalidComponentType {
                    expected: ElementType::$variant,
                    got: other.element_type(),
                }
            ),
        }
    };
}

fn backend_id(ctx: &ErrorContext, field: &'static str, raw: &str) -> Result<BackendId, Error> {
    BackendId::parse(field, raw).map_err(|detail| ctx.error(detail))
}

fn required_file<'a>(
    ctx: &ErrorContext,
    field: &'static str,
    file: Option<&'a FileRef>,
) -> Result<&'a FileRef, Error> {
    let Some(file) = file else {
        bail!(ctx, ErrorDetail::MissingFile(field));
    };
    Ok(file)
}

fn file_ids(
    ctx: &ErrorContext,
    field: &'static str,
    files: Option<&[FileRef]>,
) -> Result<Vec<BackendId>, Error> {
    files
        .unwrap_or_default()
        .iter()
        .map(|file| backend_id(ctx, field, &file.id))
        .collect()
}

fn sequential<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<RequestOption> {
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| RequestOption {
            id: (index + 1).to_string(),
            name: name.to_owned(),
        })
        .collect()
}

/// 1-based index of the first option flagged correct.
fn correct_option_id(
    ctx: &ErrorContext,
    scope: impl FnOnce() -> String,
    flags: impl IntoIterator<Item = bool>,
) -> Result<String, Error> {
    flags
        .into_iter()
        .position(|correct| correct)
        .map(|index| (index + 1).to_string())
        .ok_or_else(|| ctx.error(ErrorDetail::MissingCorrectOption(scope())))
}

fn request_links(ctx: &ErrorContext, links: &[LinkItem]) -> Result<Vec<RequestLink>, Error> {
    links
        .iter()
        .map(|link| {
            Ok::<_, Error>(RequestLink {
                title: link.title.clone(),
                url: link.url.clone(),
                icon_file_id: link
                    .custom_icon
                    .as_ref()
                    .map(|icon| backend_id(ctx, "iconFileId", &icon.id))
                    .transpose()?,
            })
        })
        .collect()
}

pub fn transform_rich_text(element: &LessonElement, order: u32) -> Result<RequestComponent, Error> {
    let (rich_text, _) = narrow!(element, order, RichText);
    Ok(RequestComponent::RichText(RichTextRequest {
        id: extract_id(&rich_text.id),
        position: order,
        text: rich_text.content.clone(),
        include_in_materials: rich_text.include_in_materials.unwrap_or(false),
    }))
}

pub fn transform_heading(element: &LessonElement, order: u32) -> Result<RequestComponent, Error> {
    let (heading, _) = narrow!(element, order, HeadingText);
    Ok(RequestComponent::Heading(HeadingRequest {
        id: extract_id(&heading.id),
        position: order,
        text: heading.heading.clone(),
        size: heading.heading_type,
    }))
}

pub fn transform_text_input(element: &LessonElement, order: u32) -> Result<RequestComponent, Error> {
    let (text_input, _) = narrow!(element, order, TextInput);
    Ok(RequestComponent::TextInput(TextInputRequest {
        id: extract_id(&text_input.id),
        position: order,
        helper_text: text_input.helper_text.clone(),
        required: text_input.required,
    }))
}

pub fn transform_single_choice(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (choice, _) = narrow!(element, order, SingleChoice);
    Ok(RequestComponent::SingleChoice(ChoiceRequest {
        id: extract_id(&choice.id),
        position: order,
        title: choice.title.clone(),
        options: sequential(choice.options.iter().map(|option| option.name.as_str())),
        required: choice.required,
    }))
}

pub fn transform_multiple_choice(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (choice, _) = narrow!(element, order, MultiCheck);
    Ok(RequestComponent::MultipleChoice(ChoiceRequest {
        id: extract_id(&choice.id),
        position: order,
        title: choice.title.clone(),
        options: sequential(choice.options.iter().map(|option| option.name.as_str())),
        required: choice.required,
    }))
}

/// Columns are the distinct column titles over all rows, in first-seen
/// order. Rows with diverging column sets are not reconciled.
pub fn transform_one_out_of_three(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (table, _) = narrow!(element, order, OneOutOfThree);
    let columns = table
        .data
        .rows
        .iter()
        .flat_map(|row| row.columns.iter().map(|column| column.column_title.as_str()))
        .unique();
    Ok(RequestComponent::OneOutOfThree(OneOutOfThreeRequest {
        id: extract_id(&table.id),
        position: order,
        title: table.data.table_title.clone(),
        columns: sequential(columns),
        rows: sequential(table.data.rows.iter().map(|row| row.row_title.as_str())),
        required: table.required,
    }))
}

pub fn transform_video(element: &LessonElement, order: u32) -> Result<RequestComponent, Error> {
    let (video, ctx) = narrow!(element, order, VideoFile);
    let file = required_file(&ctx, "videoFile", video.file.as_ref())?;
    Ok(RequestComponent::Video(VideoRequest {
        id: extract_id(&video.id),
        position: order,
        video_file_id: backend_id(&ctx, "videoFileId", &file.id)?,
    }))
}

pub fn transform_image(element: &LessonElement, order: u32) -> Result<RequestComponent, Error> {
    let (image, ctx) = narrow!(element, order, ImageFile);
    let file = required_file(&ctx, "imageFile", image.file.as_ref())?;
    Ok(RequestComponent::Image(ImageRequest {
        id: extract_id(&image.id),
        position: order,
        image_file_id: backend_id(&ctx, "imageFileId", &file.id)?,
    }))
}

pub fn transform_image_carousel(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (gallery, ctx) = narrow!(element, order, ImageGallery);
    Ok(RequestComponent::ImageCarousel(ImageCarouselRequest {
        id: extract_id(&gallery.id),
        position: order,
        image_file_ids: file_ids(&ctx, "imageFileIds", gallery.images.as_deref())?,
    }))
}

pub fn transform_links(element: &LessonElement, order: u32) -> Result<RequestComponent, Error> {
    let (links, ctx) = narrow!(element, order, Links);
    Ok(RequestComponent::Links(LinksRequest {
        id: extract_id(&links.id),
        position: order,
        links: request_links(&ctx, &links.links)?,
        include_in_materials: links.include_in_materials.unwrap_or(false),
    }))
}

pub fn transform_download_files(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (download, ctx) = narrow!(element, order, DownloadFiles);
    Ok(RequestComponent::DownloadFiles(DownloadFilesRequest {
        id: extract_id(&download.id),
        position: order,
        file_ids: file_ids(&ctx, "fileIds", download.files.as_deref())?,
    }))
}

pub fn transform_upload_files(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (upload, _) = narrow!(element, order, UploadFiles);
    Ok(RequestComponent::UploadFiles(UploadFilesRequest {
        id: extract_id(&upload.id),
        position: order,
        description: upload.description.clone(),
    }))
}

pub fn transform_quiz_type_one(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (quiz, ctx) = narrow!(element, order, QuizTypeOne);
    let image = required_file(&ctx, "imageFile", quiz.image_file.as_ref())?;
    Ok(RequestComponent::QuizTypeOne(QuizTypeOneRequest {
        id: extract_id(&quiz.id),
        position: order,
        title: quiz.title.clone(),
        description: quiz.description.clone(),
        image_file_id: backend_id(&ctx, "imageFileId", &image.id)?,
        options: sequential(quiz.options.iter().map(|option| option.name.as_str())),
        correct_option_id: correct_option_id(
            &ctx,
            || "quiz".into(),
            quiz.options.iter().map(|option| option.correct),
        )?,
    }))
}

pub fn transform_quiz_type_two(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (quiz, ctx) = narrow!(element, order, QuizTypeTwo);
    let image = required_file(&ctx, "imageFile", quiz.image_file.as_ref())?;
    let groups = quiz
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            Ok::<_, Error>(QuizGroupRequest {
                id: (index + 1).to_string(),
                title: group.title.clone(),
                options: sequential(group.options.iter().map(|option| option.name.as_str())),
                correct_option_id: correct_option_id(
                    &ctx,
                    || format!("group {}", index + 1),
                    group.options.iter().map(|option| option.correct),
                )?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(RequestComponent::QuizTypeTwo(QuizTypeTwoRequest {
        id: extract_id(&quiz.id),
        position: order,
        title: quiz.title.clone(),
        description: quiz.description.clone(),
        image_file_id: backend_id(&ctx, "imageFileId", &image.id)?,
        groups,
    }))
}

pub fn transform_quiz_type_three(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (quiz, ctx) = narrow!(element, order, QuizTypeThree);
    let options = quiz
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let image = required_file(&ctx, "options.imageFile", option.image_file.as_ref())?;
            Ok::<_, Error>(ImageOptionRequest {
                id: (index + 1).to_string(),
                image_file_id: backend_id(&ctx, "options.imageFileId", &image.id)?,
                description: option.description.clone(),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(RequestComponent::QuizTypeThree(QuizTypeThreeRequest {
        id: extract_id(&quiz.id),
        position: order,
        title: quiz.title.clone(),
        description: quiz.description.clone(),
        options,
        correct_option_id: correct_option_id(
            &ctx,
            || "quiz".into(),
            quiz.options.iter().map(|option| option.correct),
        )?,
    }))
}

/// Each image is paired with the description of the label carrying its
/// letter; an image whose letter has no label gets an empty description.
pub fn transform_quiz_type_four(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (quiz, ctx) = narrow!(element, order, QuizTypeFour);
    let options = quiz
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let file = required_file(&ctx, "images.imageFile", image.image_file.as_ref())?;
            let description = quiz
                .labels
                .iter()
                .find(|label| label.letter == image.correct_letter)
                .map(|label| label.description.clone())
                .unwrap_or_default();
            Ok::<_, Error>(ImageOptionRequest {
                id: (index + 1).to_string(),
                image_file_id: backend_id(&ctx, "options.imageFileId", &file.id)?,
                description,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(RequestComponent::QuizTypeFour(QuizTypeFourRequest {
        id: extract_id(&quiz.id),
        position: order,
        title: quiz.title.clone(),
        description: quiz.description.clone(),
        options,
    }))
}

pub fn transform_coaching_session(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (session, ctx) = narrow!(element, order, CoachingSession);
    Ok(RequestComponent::CoachingSession(CoachingSessionRequest {
        id: extract_id(&session.id),
        position: order,
        coaching_offering_id: session
            .coaching_session
            .as_ref()
            .map(|offering| backend_id(&ctx, "coachingOfferingId", &offering.id))
            .transpose()?,
    }))
}

/// Resource files whose id is not numeric are left out.
pub fn transform_assignment(
    element: &LessonElement,
    order: u32,
) -> Result<RequestComponent, Error> {
    let (assignment, ctx) = narrow!(element, order, Assignment);
    let file_ids = assignment
        .files
        .iter()
        .filter_map(|file| BackendId::parse("fileIds", &file.id).ok())
        .collect();
    Ok(RequestComponent::Assignment(AssignmentRequest {
        id: extract_id(&assignment.id),
        position: order,
        title: assignment.title.clone(),
        description: assignment.description.clone(),
        file_ids,
        links: request_links(&ctx, &assignment.links)?,
    }))
}

pub fn outbound_transformer(kind: ElementType) -> OutboundTransformer {
    match kind {
        ElementType::RichText => transform_rich_text,
        ElementType::HeadingText => transform_heading,
        ElementType::SingleChoice => transform_single_choice,
        ElementType::MultiCheck => transform_multiple_choice,
        ElementType::TextInput => transform_text_input,
        ElementType::OneOutOfThree => transform_one_out_of_three,
        ElementType::VideoFile => transform_video,
        ElementType::ImageFile => transform_image,
        ElementType::ImageGallery => transform_image_carousel,
        ElementType::DownloadFiles => transform_download_files,
        ElementType::UploadFiles => transform_upload_files,
        ElementType::QuizTypeOne => transform_quiz_type_one,
        ElementType::QuizTypeTwo => transform_quiz_type_two,
        ElementType::QuizTypeThree => transform_quiz_type_three,
        ElementType::QuizTypeFour => transform_quiz_type_four,
        ElementType::Links => transform_links,
        ElementType::CoachingSession => transform_coaching_session,
        ElementType::Assignment => transform_assignment,
    }
}

/// 1-based position of the element at `index`, if it fits the wire type.
pub fn position_of(index: usize) -> Option<u32> {
    index
        .checked_add(1)
        .and_then(|position| u32::try_from(position).ok())
}

/// Convert every element or fail on the first one that cannot be saved.
pub fn transform_lesson_to_request(
    elements: &[LessonElement],
) -> Result<Vec<RequestComponent>, Error> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let Some(order) = position_of(index) else {
                bail!(
                    ErrorContext::new(element.id().clone(), u32::MAX),
                    ErrorDetail::PositionOutOfRange(index)
                );
            };
            trace!(id = %element.id(), kind = %element.element_type(), order, "transforming element");
            outbound_transformer(element.element_type())(element, order)
        })
        .collect()
}
