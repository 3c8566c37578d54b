//! Editable lesson elements
//!
//! This is the shape the course and assessment builders edit. Option lists
//! carry selection state, and every file reference is normalised to
//! [`FileRef`] regardless of which wire field it came from.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::{id::ElementId, wire::HeadingSize};

/// Discriminant of [`LessonElement`], used to key the handler registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ElementType {
    RichText,
    HeadingText,
    SingleChoice,
    MultiCheck,
    TextInput,
    OneOutOfThree,
    VideoFile,
    ImageFile,
    ImageGallery,
    DownloadFiles,
    UploadFiles,
    QuizTypeOne,
    QuizTypeTwo,
    QuizTypeThree,
    QuizTypeFour,
    Links,
    CoachingSession,
    Assignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LessonElement {
    RichText(RichTextElement),
    HeadingText(HeadingElement),
    SingleChoice(ChoiceElement),
    MultiCheck(ChoiceElement),
    TextInput(TextInputElement),
    OneOutOfThree(OneOutOfThreeElement),
    VideoFile(VideoElement),
    ImageFile(ImageElement),
    ImageGallery(ImageGalleryElement),
    DownloadFiles(DownloadFilesElement),
    UploadFiles(UploadFilesElement),
    QuizTypeOne(QuizTypeOneElement),
    QuizTypeTwo(QuizTypeTwoElement),
    QuizTypeThree(QuizTypeThreeElement),
    QuizTypeFour(QuizTypeFourElement),
    Links(LinksElement),
    CoachingSession(CoachingSessionElement),
    Assignment(AssignmentElement),
}

impl LessonElement {
    pub fn id(&self) -> &ElementId {
        match self {
            Self::RichText(e) => &e.id,
            Self::HeadingText(e) => &e.id,
            Self::SingleChoice(e) => &e.id,
            Self::MultiCheck(e) => &e.id,
            Self::TextInput(e) => &e.id,
            Self::OneOutOfThree(e) => &e.id,
            Self::VideoFile(e) => &e.id,
            Self::ImageFile(e) => &e.id,
            Self::ImageGallery(e) => &e.id,
            Self::DownloadFiles(e) => &e.id,
            Self::UploadFiles(e) => &e.id,
            Self::QuizTypeOne(e) => &e.id,
            Self::QuizTypeTwo(e) => &e.id,
            Self::QuizTypeThree(e) => &e.id,
            Self::QuizTypeFour(e) => &e.id,
            Self::Links(e) => &e.id,
            Self::CoachingSession(e) => &e.id,
            Self::Assignment(e) => &e.id,
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Self::RichText(_) => ElementType::RichText,
            Self::HeadingText(_) => ElementType::HeadingText,
            Self::SingleChoice(_) => ElementType::SingleChoice,
            Self::MultiCheck(_) => ElementType::MultiCheck,
            Self::TextInput(_) => ElementType::TextInput,
            Self::OneOutOfThree(_) => ElementType::OneOutOfThree,
            Self::VideoFile(_) => ElementType::VideoFile,
            Self::ImageFile(_) => ElementType::ImageFile,
            Self::ImageGallery(_) => ElementType::ImageGallery,
            Self::DownloadFiles(_) => ElementType::DownloadFiles,
            Self::UploadFiles(_) => ElementType::UploadFiles,
            Self::QuizTypeOne(_) => ElementType::QuizTypeOne,
            Self::QuizTypeTwo(_) => ElementType::QuizTypeTwo,
            Self::QuizTypeThree(_) => ElementType::QuizTypeThree,
            Self::QuizTypeFour(_) => ElementType::QuizTypeFour,
            Self::Links(_) => ElementType::Links,
            Self::CoachingSession(_) => ElementType::CoachingSession,
            Self::Assignment(_) => ElementType::Assignment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    #[default]
    Generic,
    Image,
    Video,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    #[default]
    Available,
    Processing,
    Uploading,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub category: FileCategory,
    pub url: String,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextElement {
    pub id: ElementId,
    pub content: String,
    #[serde(default)]
    pub include_in_materials: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingElement {
    pub id: ElementId,
    pub heading: String,
    pub heading_type: HeadingSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_selected: bool,
}

/// Shared by single choice and multi check elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceElement {
    pub id: ElementId,
    pub title: String,
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputElement {
    pub id: ElementId,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: String,
    pub column_title: String,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: String,
    pub row_title: String,
    pub columns: Vec<TableColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOutOfThreeData {
    pub table_title: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOutOfThreeElement {
    pub id: ElementId,
    pub data: OneOutOfThreeData,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoElement {
    pub id: ElementId,
    pub file: Option<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    pub id: ElementId,
    pub file: Option<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGalleryElement {
    pub id: ElementId,
    pub images: Option<Vec<FileRef>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadFilesElement {
    pub id: ElementId,
    pub files: Option<Vec<FileRef>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFilesElement {
    pub id: ElementId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Option<Vec<FileRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeOneElement {
    pub id: ElementId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub image_file: Option<FileRef>,
    #[serde(default)]
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizGroup {
    pub id: String,
    pub title: String,
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeTwoElement {
    pub id: ElementId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file: Option<FileRef>,
    pub groups: Vec<QuizGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageQuizOption {
    pub id: String,
    #[serde(default)]
    pub image_file: Option<FileRef>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeThreeElement {
    pub id: ElementId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<ImageQuizOption>,
    #[serde(default)]
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetteredImage {
    #[serde(default)]
    pub image_file: Option<FileRef>,
    pub correct_letter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterLabel {
    pub letter: String,
    pub description: String,
}

/// Match images to descriptions; each image names the letter of its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizTypeFourElement {
    pub id: ElementId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub images: Vec<LetteredImage>,
    pub labels: Vec<LetterLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksElement {
    pub id: ElementId,
    pub links: Vec<LinkItem>,
    #[serde(default)]
    pub include_in_materials: Option<bool>,
    #[serde(default)]
    pub as_part_of_materials_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingOffering {
    pub id: String,
    pub name: String,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRef {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub session: SessionRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingSessionElement {
    pub id: ElementId,
    #[serde(default)]
    pub coaching_session: Option<CoachingOffering>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<SessionProgress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AssignmentStatus {
    NotStarted,
    AwaitingReview,
    Passed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: String,
    #[serde(default)]
    pub is_current_user: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReply {
    pub sent_at: chrono::DateTime<chrono::Utc>,
    pub comment: String,
    pub files: Vec<FileRef>,
    pub links: Vec<LinkItem>,
    pub sender: Sender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentProgress {
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reply: Option<AssignmentReply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentElement {
    pub id: ElementId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(default)]
    pub links: Vec<LinkItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<AssignmentProgress>,
}
