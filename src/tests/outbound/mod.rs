use rstest::rstest;
use serde_json::json;

use crate::{
    ErrorDetail,
    element::{
        AssignmentElement, ChoiceElement, ChoiceOption, CoachingOffering, CoachingSessionElement,
        ElementType, FileCategory, FileRef, FileStatus, HeadingElement, ImageElement,
        LessonElement, OneOutOfThreeData, OneOutOfThreeElement, QuizGroup, QuizOption,
        QuizTypeOneElement, QuizTypeTwoElement, RichTextElement, TableColumn, TableRow,
        VideoElement,
    },
    id::{ElementId, generate_temp_id},
    progress::ProgressRecord,
    transform::outbound::{
        OutboundTransformer, position_of, transform_heading, transform_image,
        transform_multiple_choice, transform_one_out_of_three, transform_rich_text,
        transform_single_choice, transform_video,
    },
    transform_lesson_components_with_progress, transform_lesson_to_request,
    wire::WireComponent,
};

fn file(id: &str) -> FileRef {
    FileRef {
        id: id.into(),
        name: format!("{id}.bin"),
        size: 1,
        category: FileCategory::Generic,
        url: format!("https://cdn.example.com/{id}"),
        status: FileStatus::Available,
        thumbnail_url: None,
        video_id: None,
    }
}

fn rich_text(id: ElementId) -> LessonElement {
    LessonElement::RichText(RichTextElement {
        id,
        content: "Hello".into(),
        include_in_materials: None,
    })
}

fn choice(id: &str, multi: bool) -> LessonElement {
    let choice = ChoiceElement {
        id: ElementId::persisted(id),
        title: "Pick".into(),
        options: vec![ChoiceOption {
            id: "x".into(),
            name: "X".into(),
            is_selected: true,
        }],
        required: true,
    };
    if multi {
        LessonElement::MultiCheck(choice)
    } else {
        LessonElement::SingleChoice(choice)
    }
}

fn heading() -> LessonElement {
    LessonElement::HeadingText(HeadingElement {
        id: ElementId::persisted("h"),
        heading: "Title".into(),
        heading_type: crate::wire::HeadingSize::H3,
    })
}

#[test]
fn single_choice_round_trip_matches_save_payload() {
    let components: Vec<WireComponent> = serde_json::from_value(json!([{
        "type": "singleChoice",
        "id": "5",
        "position": 1,
        "title": "Pick one",
        "options": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
        "required": false,
    }]))
    .unwrap();
    let answers: Vec<ProgressRecord> = serde_json::from_value(json!([
        {"type": "singleChoice", "componentId": "5", "answerId": "b"}
    ]))
    .unwrap();
    let elements = transform_lesson_components_with_progress(&components, &answers);
    let LessonElement::SingleChoice(choice) = &elements[0] else {
        panic!("expected single choice");
    };
    assert!(!choice.options[0].is_selected);
    assert!(choice.options[1].is_selected);
    assert_eq!(
        serde_json::to_value(transform_lesson_to_request(&elements).unwrap()).unwrap(),
        json!([{
            "type": "singleChoice",
            "id": "5",
            "position": 1,
            "title": "Pick one",
            "options": [{"id": "1", "name": "A"}, {"id": "2", "name": "B"}],
            "required": false,
        }])
    );
}

#[test]
fn pending_ids_are_omitted_on_save() {
    let elements = vec![
        rich_text(ElementId::parse("temp-abc123")),
        rich_text(ElementId::persisted("42")),
        rich_text(generate_temp_id()),
    ];
    let request = serde_json::to_value(transform_lesson_to_request(&elements).unwrap()).unwrap();
    assert_eq!(
        request,
        json!([
            {"type": "richText", "position": 1, "text": "Hello", "includeInMaterials": false},
            {"type": "richText", "id": "42", "position": 2, "text": "Hello", "includeInMaterials": false},
            {"type": "richText", "position": 3, "text": "Hello", "includeInMaterials": false},
        ])
    );
}

#[test]
fn empty_list_gives_empty_request() {
    assert!(transform_lesson_to_request(&[]).unwrap().is_empty());
}

#[rstest]
#[case::rich_text(transform_rich_text, ElementType::RichText, heading())]
#[case::heading(transform_heading, ElementType::HeadingText, choice("c", false))]
#[case::single_choice(transform_single_choice, ElementType::SingleChoice, choice("c", true))]
#[case::multiple_choice(transform_multiple_choice, ElementType::MultiCheck, choice("c", false))]
#[case::video(transform_video, ElementType::VideoFile, heading())]
#[case::image(transform_image, ElementType::ImageFile, heading())]
#[case::one_out_of_three(transform_one_out_of_three, ElementType::OneOutOfThree, heading())]
fn transformer_rejects_other_element_types(
    #[case] transformer: OutboundTransformer,
    #[case] expected: ElementType,
    #[case] element: LessonElement,
) {
    let err = transformer(&element, 3).unwrap_err();
    assert_eq!(err.context.position, 3);
    assert!(err.to_string().contains("Invalid component type"));
    match *err.detail {
        ErrorDetail::InvalidComponentType {
            expected: e,
            got,
        } => {
            assert_eq!(e, expected);
            assert_eq!(got, element.element_type());
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn table_columns_are_the_union_of_row_columns() {
    let column = |id: &str, title: &str| TableColumn {
        id: id.into(),
        column_title: title.into(),
        selected: false,
    };
    let element = LessonElement::OneOutOfThree(OneOutOfThreeElement {
        id: ElementId::persisted("t"),
        data: OneOutOfThreeData {
            table_title: "Opinions".into(),
            columns: vec![],
            rows: vec![
                TableRow {
                    id: "r1".into(),
                    row_title: "First".into(),
                    columns: vec![column("a", "Yes"), column("b", "No")],
                },
                TableRow {
                    id: "r2".into(),
                    row_title: "Second".into(),
                    columns: vec![column("c", "No"), column("d", "Maybe")],
                },
            ],
        },
        required: false,
    });
    let request = serde_json::to_value(transform_lesson_to_request(&[element]).unwrap()).unwrap();
    assert_eq!(
        request[0]["columns"],
        json!([
            {"id": "1", "name": "Yes"},
            {"id": "2", "name": "No"},
            {"id": "3", "name": "Maybe"},
        ])
    );
}

#[test]
fn non_numeric_file_id_is_rejected() {
    let elements = vec![
        heading(),
        LessonElement::VideoFile(VideoElement {
            id: ElementId::persisted("v"),
            file: Some(file("uploading-7")),
        }),
    ];
    let err = transform_lesson_to_request(&elements).unwrap_err();
    assert_eq!(err.context.id, ElementId::persisted("v"));
    assert_eq!(err.context.position, 2);
    assert!(matches!(
        *err.detail,
        ErrorDetail::InvalidNumericId { field: "videoFileId", ref value } if value == "uploading-7"
    ));
}

#[test]
fn missing_image_is_rejected() {
    let element = LessonElement::ImageFile(ImageElement {
        id: ElementId::persisted("i"),
        file: None,
    });
    let err = transform_lesson_to_request(&[element]).unwrap_err();
    assert!(matches!(*err.detail, ErrorDetail::MissingFile("imageFile")));
}

#[test]
fn quiz_correct_option_is_renumbered() {
    let quiz = |correct: [bool; 3]| {
        LessonElement::QuizTypeOne(QuizTypeOneElement {
            id: ElementId::persisted("q"),
            title: "Largest planet".into(),
            description: String::new(),
            options: ["Mars", "Jupiter", "Venus"]
                .into_iter()
                .zip(correct)
                .enumerate()
                .map(|(index, (name, correct))| QuizOption {
                    id: format!("opt-{index}"),
                    name: name.into(),
                    correct,
                })
                .collect(),
            image_file: Some(file("900")),
            correct_option_id: "opt-1".into(),
        })
    };
    let request =
        serde_json::to_value(transform_lesson_to_request(&[quiz([false, true, false])]).unwrap())
            .unwrap();
    assert_eq!(request[0]["correctOptionId"], json!("2"));
    assert_eq!(request[0]["imageFileId"], json!(900));

    let err = transform_lesson_to_request(&[quiz([false; 3])]).unwrap_err();
    assert!(matches!(*err.detail, ErrorDetail::MissingCorrectOption(_)));
}

#[test]
fn quiz_group_without_answer_names_the_group() {
    let group = |title: &str, correct: [bool; 2]| QuizGroup {
        id: format!("g-{title}"),
        title: title.into(),
        options: correct
            .into_iter()
            .enumerate()
            .map(|(index, correct)| QuizOption {
                id: format!("{title}-{index}"),
                name: format!("{title} {index}"),
                correct,
            })
            .collect(),
        correct_option_id: String::new(),
    };
    let quiz = LessonElement::QuizTypeTwo(QuizTypeTwoElement {
        id: ElementId::persisted("q2"),
        title: "Sort".into(),
        description: String::new(),
        image_file: Some(file("900")),
        groups: vec![group("a", [true, false]), group("b", [false, false])],
    });
    let err = transform_lesson_to_request(&[quiz]).unwrap_err();
    assert_eq!(err.context.position, 1);
    assert!(matches!(
        &*err.detail,
        ErrorDetail::MissingCorrectOption(scope) if scope == "group 2"
    ));
}

#[rstest]
#[case(0, Some(1))]
#[case(41, Some(42))]
#[case(u32::MAX as usize - 1, Some(u32::MAX))]
#[case(usize::MAX, None)]
fn positions_are_one_based_and_checked(#[case] index: usize, #[case] expected: Option<u32>) {
    assert_eq!(position_of(index), expected);
}

#[test]
fn assignment_skips_unsaved_resources() {
    let element = LessonElement::Assignment(AssignmentElement {
        id: ElementId::parse("temp-new"),
        title: "Write tests".into(),
        description: String::new(),
        files: vec![file("11"), file("local-draft"), file("12")],
        links: vec![],
        progress: None,
    });
    let request = serde_json::to_value(transform_lesson_to_request(&[element]).unwrap()).unwrap();
    assert_eq!(
        request,
        json!([{
            "type": "assignment",
            "position": 1,
            "title": "Write tests",
            "description": "",
            "fileIds": [11, 12],
            "links": [],
        }])
    );
}

#[test]
fn coaching_offering_id_must_be_numeric() {
    let session = |offering: Option<&str>| {
        LessonElement::CoachingSession(CoachingSessionElement {
            id: ElementId::persisted("s"),
            coaching_session: offering.map(|id| CoachingOffering {
                id: id.into(),
                name: "Mentor".into(),
                duration: 45,
            }),
            progress: None,
        })
    };
    let request =
        serde_json::to_value(transform_lesson_to_request(&[session(Some("31")), session(None)]).unwrap())
            .unwrap();
    assert_eq!(request[0]["coachingOfferingId"], json!(31));
    assert!(request[1].get("coachingOfferingId").is_none());
    assert!(transform_lesson_to_request(&[session(Some("abc"))]).is_err());
}
