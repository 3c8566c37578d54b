//! Components sent to the save endpoints.
//!
//! Mirrors the wire format without the editor-only fields. `id` is omitted
//! for elements the backend has not seen yet.

use serde::{Deserialize, Serialize};

use crate::{id::BackendId, wire::HeadingSize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RequestComponent {
    RichText(RichTextRequest),
    Heading(HeadingRequest),
    TextInput(TextInputRequest),
    SingleChoice(ChoiceRequest),
    MultipleChoice(ChoiceRequest),
    OneOutOfThree(OneOutOfThreeRequest),
    Video(VideoRequest),
    Image(ImageRequest),
    ImageCarousel(ImageCarouselRequest),
    Links(LinksRequest),
    DownloadFiles(DownloadFilesRequest),
    UploadFiles(UploadFilesRequest),
    QuizTypeOne(QuizTypeOneRequest),
    QuizTypeTwo(QuizTypeTwoRequest),
    QuizTypeThree(QuizTypeThreeRequest),
    QuizTypeFour(QuizTypeFourRequest),
    CoachingSession(CoachingSessionRequest),
    Assignment(AssignmentRequest),
}

impl RequestComponent {
    pub fn position(&self) -> u32 {
        match self {
            Self::RichText(r) => r.position,
            Self::Heading(r) => r.position,
            Self::TextInput(r) => r.position,
            Self::SingleChoice(r) => r.position,
            Self::MultipleChoice(r) => r.position,
            Self::OneOutOfThree(r) => r.position,
            Self::Video(r) => r.position,
            Self::Image(r) => r.position,
            Self::ImageCarousel(r) => r.position,
            Self::Links(r) => r.position,
            Self::DownloadFiles(r) => r.position,
            Self::UploadFiles(r) => r.position,
            Self::QuizTypeOne(r) => r.position,
            Self::QuizTypeTwo(r) => r.position,
            Self::QuizTypeThree(r) => r.position,
            Self::QuizTypeFour(r) => r.position,
            Self::CoachingSession(r) => r.position,
            Self::Assignment(r) => r.position,
        }
    }
}

/// An option, row or column with a freshly numbered id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLink {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_file_id: Option<BackendId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub text: String,
    pub include_in_materials: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub text: String,
    pub size: HeadingSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub helper_text: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub title: String,
    pub options: Vec<RequestOption>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneOutOfThreeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub title: String,
    pub columns: Vec<RequestOption>,
    pub rows: Vec<RequestOption>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub video_file_id: BackendId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub image_file_id: BackendId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCarouselRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub image_file_ids: Vec<BackendId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub links: Vec<RequestLink>,
    pub include_in_materials: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadFilesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub file_ids: Vec<BackendId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadFilesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeOneRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub title: String,
    pub description: String,
    pub image_file_id: BackendId,
    pub options: Vec<RequestOption>,
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizGroupRequest {
    pub id: String,
    pub title: String,
    pub options: Vec<RequestOption>,
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeTwoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub title: String,
    pub description: String,
    pub image_file_id: BackendId,
    pub groups: Vec<QuizGroupRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptionRequest {
    pub id: String,
    pub image_file_id: BackendId,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeThreeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub title: String,
    pub description: String,
    pub options: Vec<ImageOptionRequest>,
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizTypeFourRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub title: String,
    pub description: String,
    pub options: Vec<ImageOptionRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingSessionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coaching_offering_id: Option<BackendId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: u32,
    pub title: String,
    pub description: String,
    pub file_ids: Vec<BackendId>,
    pub links: Vec<RequestLink>,
}
