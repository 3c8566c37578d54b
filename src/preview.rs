//! Read-only Markdown rendering of a lesson, one renderer per element type.

use std::fmt::Write as _;

use serde_json::Value;

use crate::element::{ChoiceElement, ElementType, FileRef, LessonElement, LinkItem};

pub type Renderer = fn(&LessonElement, &mut String) -> std::fmt::Result;

/// Rich text is stored as a serialized Slate document. Each top-level block
/// becomes a paragraph; content that is not a Slate document is emitted as is.
fn rich_text_paragraphs(content: &str) -> Vec<String> {
    fn leaves(node: &Value, out: &mut String) {
        if let Some(text) = node.get("text").and_then(Value::as_str) {
            out.push_str(text);
        }
        if let Some(children) = node.get("children").and_then(Value::as_array) {
            for child in children {
                leaves(child, out);
            }
        }
    }
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(blocks)) => blocks
            .iter()
            .map(|block| {
                let mut text = String::new();
                leaves(block, &mut text);
                text
            })
            .filter(|text| !text.trim().is_empty())
            .collect(),
        _ => vec![content.to_owned()],
    }
}

fn file_link(out: &mut String, file: &FileRef) -> std::fmt::Result {
    writeln!(out, "[{}]({})", file.name, file.url)
}

fn missing(out: &mut String, what: &str) -> std::fmt::Result {
    writeln!(out, "_({what} not attached)_")
}

fn link_list(out: &mut String, links: &[LinkItem]) -> std::fmt::Result {
    for link in links {
        writeln!(out, "- [{}]({})", link.title, link.url)?;
    }
    Ok(())
}

fn choice_list(out: &mut String, choice: &ChoiceElement) -> std::fmt::Result {
    writeln!(out, "**{}**", choice.title)?;
    writeln!(out)?;
    for option in &choice.options {
        let mark = if option.is_selected { 'x' } else { ' ' };
        writeln!(out, "- [{mark}] {}", option.name)?;
    }
    Ok(())
}

pub fn render_rich_text(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::RichText(rich_text) = element else {
        return Ok(());
    };
    let paragraphs = rich_text_paragraphs(&rich_text.content);
    for (index, paragraph) in paragraphs.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{paragraph}")?;
    }
    Ok(())
}

pub fn render_heading(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::HeadingText(heading) = element else {
        return Ok(());
    };
    writeln!(
        out,
        "{} {}",
        "#".repeat(heading.heading_type.level()),
        heading.heading
    )
}

pub fn render_choice(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    match element {
        LessonElement::SingleChoice(choice) | LessonElement::MultiCheck(choice) => {
            choice_list(out, choice)
        }
        _ => Ok(()),
    }
}

pub fn render_text_input(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::TextInput(text_input) = element else {
        return Ok(());
    };
    writeln!(out, "**{}**", text_input.helper_text)?;
    writeln!(out)?;
    match &text_input.content {
        Some(answer) => writeln!(out, "> {answer}"),
        None => writeln!(out, "> _no answer_"),
    }
}

/// Columns are taken from the first row; every row shares the same headings.
pub fn render_one_out_of_three(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::OneOutOfThree(table) = element else {
        return Ok(());
    };
    writeln!(out, "**{}**", table.data.table_title)?;
    writeln!(out)?;
    let Some(first) = table.data.rows.first() else {
        return Ok(());
    };
    write!(out, "|")?;
    for column in &first.columns {
        write!(out, " | {}", column.column_title)?;
    }
    writeln!(out, " |")?;
    write!(out, "|---")?;
    for _ in &first.columns {
        write!(out, "|---")?;
    }
    writeln!(out, "|")?;
    for row in &table.data.rows {
        write!(out, "| {}", row.row_title)?;
        for column in &row.columns {
            write!(out, " | {}", if column.selected { "x" } else { " " })?;
        }
        writeln!(out, " |")?;
    }
    Ok(())
}

pub fn render_media(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    match element {
        LessonElement::VideoFile(video) => match &video.file {
            Some(file) => {
                write!(out, "Video: ")?;
                file_link(out, file)
            }
            None => missing(out, "video"),
        },
        LessonElement::ImageFile(image) => match &image.file {
            Some(file) => writeln!(out, "![{}]({})", file.name, file.url),
            None => missing(out, "image"),
        },
        LessonElement::ImageGallery(gallery) => match gallery.images.as_deref() {
            Some(images) if !images.is_empty() => {
                for image in images {
                    writeln!(out, "![{}]({})", image.name, image.url)?;
                }
                Ok(())
            }
            _ => missing(out, "gallery"),
        },
        LessonElement::DownloadFiles(download) => match download.files.as_deref() {
            Some(files) if !files.is_empty() => {
                for file in files {
                    write!(out, "- ")?;
                    file_link(out, file)?;
                }
                Ok(())
            }
            _ => missing(out, "files"),
        },
        _ => Ok(()),
    }
}

pub fn render_upload_files(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::UploadFiles(upload) = element else {
        return Ok(());
    };
    writeln!(out, "**Upload:** {}", upload.description)?;
    for file in upload.files.iter().flatten() {
        write!(out, "- ")?;
        file_link(out, file)?;
    }
    if let Some(comment) = &upload.user_comment {
        writeln!(out, "> {comment}")?;
    }
    Ok(())
}

pub fn render_quiz(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    match element {
        LessonElement::QuizTypeOne(quiz) => {
            writeln!(out, "**Quiz: {}**", quiz.title)?;
            for option in &quiz.options {
                writeln!(out, "- {}", option.name)?;
            }
        }
        LessonElement::QuizTypeTwo(quiz) => {
            writeln!(out, "**Quiz: {}**", quiz.title)?;
            for group in &quiz.groups {
                writeln!(out, "- {}", group.title)?;
                for option in &group.options {
                    writeln!(out, "  - {}", option.name)?;
                }
            }
        }
        LessonElement::QuizTypeThree(quiz) => {
            writeln!(out, "**Quiz: {}**", quiz.title)?;
            for option in &quiz.options {
                writeln!(out, "- {}", option.description)?;
            }
        }
        LessonElement::QuizTypeFour(quiz) => {
            writeln!(out, "**Quiz: {}**", quiz.title)?;
            for label in &quiz.labels {
                writeln!(out, "- {}: {}", label.letter, label.description)?;
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn render_links(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::Links(links) = element else {
        return Ok(());
    };
    link_list(out, &links.links)
}

pub fn render_coaching_session(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::CoachingSession(session) = element else {
        return Ok(());
    };
    match &session.coaching_session {
        Some(offering) => writeln!(
            out,
            "Coaching session: {} ({} min)",
            offering.name, offering.duration
        ),
        None => missing(out, "coaching session"),
    }
}

pub fn render_assignment(element: &LessonElement, out: &mut String) -> std::fmt::Result {
    let LessonElement::Assignment(assignment) = element else {
        return Ok(());
    };
    writeln!(out, "**Assignment: {}**", assignment.title)?;
    if !assignment.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", assignment.description)?;
    }
    for file in &assignment.files {
        write!(out, "- ")?;
        file_link(out, file)?;
    }
    link_list(out, &assignment.links)?;
    if let Some(progress) = &assignment.progress {
        writeln!(out, "Status: {}", progress.status)?;
    }
    Ok(())
}

pub fn renderer(kind: ElementType) -> Renderer {
    match kind {
        ElementType::RichText => render_rich_text,
        ElementType::HeadingText => render_heading,
        ElementType::SingleChoice => render_choice,
        ElementType::MultiCheck => render_choice,
        ElementType::TextInput => render_text_input,
        ElementType::OneOutOfThree => render_one_out_of_three,
        ElementType::VideoFile => render_media,
        ElementType::ImageFile => render_media,
        ElementType::ImageGallery => render_media,
        ElementType::DownloadFiles => render_media,
        ElementType::UploadFiles => render_upload_files,
        ElementType::QuizTypeOne => render_quiz,
        ElementType::QuizTypeTwo => render_quiz,
        ElementType::QuizTypeThree => render_quiz,
        ElementType::QuizTypeFour => render_quiz,
        ElementType::Links => render_links,
        ElementType::CoachingSession => render_coaching_session,
        ElementType::Assignment => render_assignment,
    }
}

/// Render every element in order, separated by blank lines.
pub fn render_preview(elements: &[LessonElement]) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        renderer(element.element_type())(element, &mut out)?;
    }
    Ok(out)
}
