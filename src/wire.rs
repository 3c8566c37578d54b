//! Components as listed by the lesson and pre-course assessment endpoints.
//!
//! These types are read-only input for the pipeline. Ids may be sent as JSON
//! strings or numbers and are normalised to strings.

use serde::{Deserialize, Serialize};

pub(crate) mod serde_id {
    use serde::Deserialize as _;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawId {
        String(String),
        Number(serde_json::Number),
    }

    impl From<RawId> for String {
        fn from(value: RawId) -> Self {
            match value {
                RawId::String(s) => s,
                RawId::Number(n) => n.to_string(),
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawId::deserialize(deserializer).map(Into::into)
    }

    pub mod option {
        use serde::Deserialize as _;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let id = Option::<super::RawId>::deserialize(deserializer)?;
            Ok(id.map(Into::into))
        }
    }

    pub mod vec {
        use serde::Deserialize as _;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let ids = Vec::<super::RawId>::deserialize(deserializer)?;
            Ok(ids.into_iter().map(Into::into).collect())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WireComponent {
    RichText(RichTextComponent),
    Heading(HeadingComponent),
    SingleChoice(SingleChoiceComponent),
    MultipleChoice(MultipleChoiceComponent),
    TextInput(TextInputComponent),
    OneOutOfThree(OneOutOfThreeComponent),
    Video(VideoComponent),
    Image(ImageComponent),
    DownloadFiles(DownloadFilesComponent),
    UploadFiles(UploadFilesComponent),
    ImageCarousel(ImageCarouselComponent),
    QuizTypeOne(QuizTypeOneComponent),
    QuizTypeTwo(QuizTypeTwoComponent),
    QuizTypeThree(QuizTypeThreeComponent),
    QuizTypeFour(QuizTypeFourComponent),
    Links(LinksComponent),
    CoachingSession(CoachingSessionComponent),
    Assignment(AssignmentComponent),
    /// Any type this crate has no transformer for.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingSize {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingSize {
    pub fn level(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireOption {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    pub name: String,
}

/// A stored file as referenced by a component.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFile {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub download_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub playback_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLink {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon_file: Option<WireFile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSelection {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub row_id: String,
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub column_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub text: String,
    #[serde(default)]
    pub include_in_materials: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub text: String,
    pub size: HeadingSize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleChoiceAnswer {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub answer_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleChoiceComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    pub options: Vec<WireOption>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub progress: Option<SingleChoiceAnswer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceAnswer {
    #[serde(deserialize_with = "serde_id::vec::deserialize")]
    pub answer_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    pub options: Vec<WireOption>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub progress: Option<MultipleChoiceAnswer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextInputAnswer {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub progress: Option<TextInputAnswer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OneOutOfThreeAnswer {
    pub answers: Vec<CellSelection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOutOfThreeComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    pub columns: Vec<WireOption>,
    pub rows: Vec<WireOption>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub progress: Option<OneOutOfThreeAnswer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    #[serde(default)]
    pub video_file: Option<WireFile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    #[serde(default)]
    pub image_file: Option<WireFile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadFilesComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    #[serde(default)]
    pub files: Option<Vec<Option<WireFile>>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadFilesAnswer {
    #[serde(default)]
    pub files: Option<Vec<Option<WireFile>>>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFilesComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub progress: Option<UploadFilesAnswer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCarouselComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    #[serde(default)]
    pub image_files: Option<Vec<Option<WireFile>>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeOneComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<WireOption>,
    #[serde(default)]
    pub image_file: Option<WireFile>,
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuizGroup {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    pub title: String,
    pub options: Vec<WireOption>,
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeTwoComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file: Option<WireFile>,
    pub groups: Vec<WireQuizGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireImageOption {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub image_file: Option<WireFile>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeThreeComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<WireImageOption>,
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub correct_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLetteredOption {
    #[serde(default)]
    pub image_file: Option<WireFile>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTypeFourComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<WireLetteredOption>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub links: Vec<WireLink>,
    #[serde(default)]
    pub include_in_materials: Option<bool>,
    #[serde(default)]
    pub as_part_of_materials_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireSession {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CoachingSessionProgress {
    pub session: WireSession,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingSessionComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    /// The offering booked through this component; absent when none is linked.
    #[serde(default, deserialize_with = "serde_id::option::deserialize")]
    pub course_coaching_offering_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub progress: Option<CoachingSessionProgress>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSender {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub role: String,
    #[serde(default)]
    pub is_current_user: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireActivity {
    pub sent_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub files: Vec<WireFile>,
    #[serde(default)]
    pub links: Vec<WireLink>,
    pub sender: WireSender,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentAnswer {
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub last_activity: Option<WireActivity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentComponent {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: String,
    #[serde(default, alias = "order")]
    pub position: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resources: Vec<WireFile>,
    #[serde(default)]
    pub links: Vec<WireLink>,
    #[serde(default)]
    pub progress: Option<AssignmentAnswer>,
}
