use serde::de::DeserializeOwned;

use crate::{element::LessonElement, progress::ProgressRecord, wire::WireComponent};

mod builder;
mod lesson;
mod outbound;

async fn load_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let src = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&src)?)
}

async fn load_fixture(dir: &str) -> anyhow::Result<(Vec<WireComponent>, Vec<ProgressRecord>)> {
    let components = load_json(&format!("src/tests/{dir}/components.json")).await?;
    let progress = load_json(&format!("src/tests/{dir}/progress.json")).await?;
    Ok((components, progress))
}

fn find<'a>(elements: &'a [LessonElement], id: &str) -> &'a LessonElement {
    elements
        .iter()
        .find(|element| element.id().as_persisted() == Some(id))
        .unwrap_or_else(|| panic!("no element with id {id}"))
}
