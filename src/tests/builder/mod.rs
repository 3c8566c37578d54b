use serde_json::json;

use crate::{
    element::{FileCategory, LessonElement},
    tests::{find, load_fixture},
    transform_lesson_components, transform_lesson_components_with_progress,
    transform_lesson_to_request,
};

#[tokio::test]
async fn image_lists_skip_null_entries_and_keep_empty_lists() {
    let (components, _) = load_fixture("builder").await.unwrap();
    let elements = transform_lesson_components(&components);

    let LessonElement::ImageFile(image) = find(&elements, "comp_001") else {
        panic!("expected image");
    };
    let file = image.file.as_ref().unwrap();
    assert_eq!(file.id, "701");
    assert_eq!(file.category, FileCategory::Image);
    assert_eq!(file.thumbnail_url.as_deref(), Some("https://cdn.example.com/cover.png"));

    let LessonElement::ImageGallery(gallery) = find(&elements, "comp_002") else {
        panic!("expected image gallery");
    };
    assert_eq!(
        gallery
            .images
            .iter()
            .flatten()
            .map(|image| (image.id.as_str(), image.category))
            .collect::<Vec<_>>(),
        vec![("702", FileCategory::Image), ("703", FileCategory::Image)]
    );

    let LessonElement::DownloadFiles(download) = find(&elements, "comp_003") else {
        panic!("expected download files");
    };
    assert_eq!(download.files, Some(vec![]));
    assert_eq!(
        serde_json::to_value(&elements[2]).unwrap()["files"],
        json!([])
    );
}

#[tokio::test]
async fn upload_files_take_embedded_files_and_latest_comment() {
    let (components, progress) = load_fixture("builder").await.unwrap();

    let embedded_only = transform_lesson_components(&components);
    let LessonElement::UploadFiles(embedded) = find(&embedded_only, "comp_004") else {
        panic!("expected upload files");
    };
    assert_eq!(embedded.user_comment.as_deref(), Some("Draft one"));
    assert_eq!(
        embedded.files.as_ref().unwrap()[0].category,
        FileCategory::Generic
    );

    let elements = transform_lesson_components_with_progress(&components, &progress);
    let LessonElement::UploadFiles(upload) = find(&elements, "comp_004") else {
        panic!("expected upload files");
    };
    assert_eq!(upload.user_comment.as_deref(), Some("Final version"));
    let files = upload.files.as_ref().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, "801");
    assert_eq!(files[0].category, FileCategory::Generic);
    assert_eq!(files[0].url, "https://cdn.example.com/wireframe.fig");
}

#[tokio::test]
async fn link_icons_become_custom_icons() {
    let (components, _) = load_fixture("builder").await.unwrap();
    let elements = transform_lesson_components(&components);
    let LessonElement::Links(links) = find(&elements, "comp_005") else {
        panic!("expected links");
    };
    let icon = links.links[0].custom_icon.as_ref().unwrap();
    assert_eq!(icon.id, "901");
    assert_eq!(icon.url, "https://cdn.example.com/figma.svg");
    assert!(links.links[1].custom_icon.is_none());
}

#[tokio::test]
async fn quiz_correct_answers_are_inlined_per_option() {
    let (components, _) = load_fixture("builder").await.unwrap();
    let elements = transform_lesson_components(&components);

    let LessonElement::QuizTypeTwo(quiz) = find(&elements, "comp_006") else {
        panic!("expected quiz two");
    };
    assert_eq!(
        quiz.groups
            .iter()
            .map(|group| group.options.iter().map(|option| option.correct).collect())
            .collect::<Vec<Vec<_>>>(),
        vec![vec![false, true], vec![true, false, false]]
    );
    assert_eq!(quiz.groups[0].correct_option_id, "12");

    let LessonElement::QuizTypeThree(quiz) = find(&elements, "comp_007") else {
        panic!("expected quiz three");
    };
    assert_eq!(
        quiz.options
            .iter()
            .map(|option| (option.id.as_str(), option.correct))
            .collect::<Vec<_>>(),
        vec![("o1", false), ("o2", true)]
    );
}

#[tokio::test]
async fn coaching_session_carries_linked_offering() {
    let (components, _) = load_fixture("builder").await.unwrap();
    let elements = transform_lesson_components(&components);

    let LessonElement::CoachingSession(linked) = find(&elements, "comp_017") else {
        panic!("expected coaching session");
    };
    let offering = linked.coaching_session.as_ref().unwrap();
    assert_eq!(offering.id, "2");
    assert_eq!(offering.duration, 20);

    let LessonElement::CoachingSession(unlinked) = find(&elements, "comp_018") else {
        panic!("expected coaching session");
    };
    assert!(unlinked.coaching_session.is_none());
}

#[tokio::test]
async fn unchanged_builder_lesson_saves() {
    let (components, progress) = load_fixture("builder").await.unwrap();
    let elements = transform_lesson_components_with_progress(&components, &progress);
    let request = serde_json::to_value(transform_lesson_to_request(&elements).unwrap()).unwrap();
    assert_eq!(
        request,
        json!([
            {"type": "image", "id": "comp_001", "position": 1, "imageFileId": 701},
            {"type": "imageCarousel", "id": "comp_002", "position": 2, "imageFileIds": [702, 703]},
            {"type": "downloadFiles", "id": "comp_003", "position": 3, "fileIds": []},
            {
                "type": "uploadFiles",
                "id": "comp_004",
                "position": 4,
                "description": "Upload your wireframes",
            },
            {
                "type": "links",
                "id": "comp_005",
                "position": 5,
                "links": [
                    {"title": "Figma", "url": "https://figma.com", "iconFileId": 901},
                    {"title": "Dribbble", "url": "https://dribbble.com"},
                ],
                "includeInMaterials": true,
            },
            {
                "type": "quizTypeTwo",
                "id": "comp_006",
                "position": 6,
                "title": "Sort the tools",
                "description": "One right answer per group",
                "imageFileId": 1001,
                "groups": [
                    {
                        "id": "1",
                        "title": "Design",
                        "options": [{"id": "1", "name": "Excel"}, {"id": "2", "name": "Figma"}],
                        "correctOptionId": "2",
                    },
                    {
                        "id": "2",
                        "title": "Code",
                        "options": [
                            {"id": "1", "name": "VS Code"},
                            {"id": "2", "name": "Paint"},
                            {"id": "3", "name": "Word"},
                        ],
                        "correctOptionId": "1",
                    },
                ],
            },
            {
                "type": "quizTypeThree",
                "id": "comp_007",
                "position": 7,
                "title": "Which logo is balanced?",
                "description": "",
                "options": [
                    {"id": "1", "imageFileId": 1101, "description": "Logo A"},
                    {"id": "2", "imageFileId": 1102, "description": "Logo B"},
                ],
                "correctOptionId": "2",
            },
            {"type": "coachingSession", "id": "comp_017", "position": 8, "coachingOfferingId": 2},
            {"type": "coachingSession", "id": "comp_018", "position": 9},
        ])
    );
}
