use chrono::TimeZone;
use serde_json::json;

use crate::{
    element::{AssignmentStatus, ElementType, FileCategory, LessonElement},
    get_lesson_components_map,
    id::ElementId,
    request::RequestComponent,
    tests::{find, load_fixture},
    transform_lesson_components, transform_lesson_components_with_progress,
    transform_lesson_to_request,
};

#[tokio::test]
async fn unknown_component_types_are_dropped() {
    let (components, _) = load_fixture("lesson").await.unwrap();
    let elements = transform_lesson_components(&components);
    assert_eq!(components.len(), 10);
    assert_eq!(elements.len(), 9);
    assert_eq!(
        elements
            .iter()
            .map(LessonElement::element_type)
            .collect::<Vec<_>>(),
        vec![
            ElementType::HeadingText,
            ElementType::RichText,
            ElementType::VideoFile,
            ElementType::SingleChoice,
            ElementType::OneOutOfThree,
            ElementType::QuizTypeFour,
            ElementType::DownloadFiles,
            ElementType::CoachingSession,
            ElementType::Assignment,
        ]
    );
    assert!(elements.iter().all(|element| !element.id().is_pending()));
}

#[tokio::test]
async fn progress_is_overlaid_by_component_id() {
    let (components, progress) = load_fixture("lesson").await.unwrap();
    let elements = transform_lesson_components_with_progress(&components, &progress);

    let LessonElement::SingleChoice(choice) = find(&elements, "5") else {
        panic!("expected single choice");
    };
    assert_eq!(
        choice
            .options
            .iter()
            .map(|option| (option.id.as_str(), option.is_selected))
            .collect::<Vec<_>>(),
        vec![("a", false), ("b", true)]
    );

    let LessonElement::OneOutOfThree(table) = find(&elements, "14") else {
        panic!("expected one out of three");
    };
    let selected = table
        .data
        .rows
        .iter()
        .map(|row| {
            row.columns
                .iter()
                .filter(|column| column.selected)
                .map(|column| column.column_title.as_str())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    assert_eq!(selected, vec![vec!["Agree"], vec!["Disagree"]]);
    assert!(table.data.columns.iter().all(|column| !column.selected));
}

#[tokio::test]
async fn progress_without_matching_element_changes_nothing() {
    let (components, progress) = load_fixture("lesson").await.unwrap();
    let without = transform_lesson_components(&components);
    let orphan_only = progress
        .into_iter()
        .filter(|record| record.component_id() == Some("999"))
        .collect::<Vec<_>>();
    assert_eq!(orphan_only.len(), 1);
    assert_eq!(
        transform_lesson_components_with_progress(&components, &orphan_only),
        without
    );
}

#[tokio::test]
async fn files_are_normalised() {
    let (components, _) = load_fixture("lesson").await.unwrap();
    let elements = transform_lesson_components(&components);

    let LessonElement::VideoFile(video) = find(&elements, "12") else {
        panic!("expected video");
    };
    let file = video.file.as_ref().unwrap();
    assert_eq!(file.id, "301");
    assert_eq!(file.url, "https://cdn.example.com/intro.mp4");
    assert_eq!(file.category, FileCategory::Video);
    assert_eq!(file.thumbnail_url.as_deref(), Some("https://cdn.example.com/intro.jpg"));
    assert_eq!(file.video_id.as_deref(), Some("pb-intro"));

    let LessonElement::DownloadFiles(download) = find(&elements, "16") else {
        panic!("expected download files");
    };
    let files = download.files.as_ref().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].category, FileCategory::Generic);
    assert_eq!(files[0].thumbnail_url.as_deref(), Some(files[0].url.as_str()));
}

#[tokio::test]
async fn quiz_four_options_are_lettered() {
    let (components, _) = load_fixture("lesson").await.unwrap();
    let elements = transform_lesson_components(&components);
    let LessonElement::QuizTypeFour(quiz) = find(&elements, "15") else {
        panic!("expected quiz four");
    };
    assert_eq!(
        quiz.images
            .iter()
            .map(|image| image.correct_letter.as_str())
            .collect::<Vec<_>>(),
        vec!["A", "B"]
    );
    assert_eq!(
        quiz.labels
            .iter()
            .map(|label| (label.letter.as_str(), label.description.as_str()))
            .collect::<Vec<_>>(),
        vec![("A", "Cat"), ("B", "Dog")]
    );
}

#[tokio::test]
async fn embedded_session_and_assignment_progress() {
    let (components, _) = load_fixture("lesson").await.unwrap();
    let elements = transform_lesson_components(&components);

    let LessonElement::CoachingSession(session) = find(&elements, "17") else {
        panic!("expected coaching session");
    };
    let offering = session.coaching_session.as_ref().unwrap();
    assert_eq!(offering.id, "2");
    assert_eq!(offering.name, "Mentor call");
    assert_eq!(session.progress.as_ref().unwrap().session.id, "88");

    let LessonElement::Assignment(assignment) = find(&elements, "18") else {
        panic!("expected assignment");
    };
    let progress = assignment.progress.as_ref().unwrap();
    assert_eq!(progress.status, AssignmentStatus::AwaitingReview);
    let reply = progress.last_reply.as_ref().unwrap();
    assert_eq!(
        reply.sent_at,
        chrono::Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
    );
    assert_eq!(reply.sender.id, "7");
    assert!(assignment.files.iter().all(|file| file.thumbnail_url.is_none()));
}

#[tokio::test]
async fn components_map_preserves_order() {
    let (components, _) = load_fixture("lesson").await.unwrap();
    let map = get_lesson_components_map(&components);
    assert_eq!(
        map.keys().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["10", "11", "12", "5", "14", "15", "16", "17", "18"]
    );
    assert!(!map.contains_key(&ElementId::persisted("13")));
    assert_eq!(
        map[&ElementId::persisted("5")].element_type(),
        ElementType::SingleChoice
    );
}

#[tokio::test]
async fn whole_lesson_round_trip() {
    let (components, progress) = load_fixture("lesson").await.unwrap();
    let elements = transform_lesson_components_with_progress(&components, &progress);
    let request = transform_lesson_to_request(&elements).unwrap();
    assert_eq!(
        request.iter().map(RequestComponent::position).collect::<Vec<_>>(),
        (1..=9).collect::<Vec<_>>()
    );
    let request = serde_json::to_value(&request).unwrap();
    assert_eq!(
        request[0],
        json!({"type": "heading", "id": "10", "position": 1, "text": "Getting started", "size": "h1"})
    );
    assert_eq!(request[2]["videoFileId"], json!(301));
    assert_eq!(
        request[3],
        json!({
            "type": "singleChoice",
            "id": "5",
            "position": 4,
            "title": "Pick one",
            "options": [{"id": "1", "name": "A"}, {"id": "2", "name": "B"}],
            "required": false,
        })
    );
    assert_eq!(
        request[4]["columns"],
        json!([
            {"id": "1", "name": "Agree"},
            {"id": "2", "name": "Neutral"},
            {"id": "3", "name": "Disagree"},
        ])
    );
    assert_eq!(
        request[4]["rows"],
        json!([{"id": "1", "name": "Ownership"}, {"id": "2", "name": "Lifetimes"}])
    );
    assert_eq!(
        request[5]["options"],
        json!([
            {"id": "1", "imageFileId": 401, "description": "Cat"},
            {"id": "2", "imageFileId": 402, "description": "Dog"},
        ])
    );
    assert_eq!(request[6]["fileIds"], json!([501]));
    assert_eq!(request[7]["id"], json!("17"));
    assert_eq!(request[7]["coachingOfferingId"], json!(2));
    assert_eq!(request[8]["fileIds"], json!([601]));
    assert_eq!(
        request[8]["links"],
        json!([{"title": "Clap docs", "url": "https://docs.rs/clap"}])
    );
}
