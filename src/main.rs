use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use lesson_pipeline::{
    config::Config,
    element::LessonElement,
    id::generate_temp_id,
    preview::render_preview,
    progress::ProgressRecord,
    transform_lesson_components_with_progress, transform_lesson_to_request,
    validate::{ValidationContext, validate_elements},
    wire::WireComponent,
};
use serde::de::DeserializeOwned;
use tracing::{error, info};

#[derive(Parser)]
struct Opts {
    #[clap(short, long, env = "LESSON_PIPELINE_CONFIG")]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Turn a component list into editable elements
    Inbound {
        components: PathBuf,
        #[clap(short, long)]
        progress: Option<PathBuf>,
    },
    /// Turn edited elements into a save request
    Outbound { elements: PathBuf },
    Validate {
        elements: PathBuf,
        #[clap(long, value_enum)]
        context: Option<ValidationContext>,
    },
    /// Render elements as Markdown
    Preview { elements: PathBuf },
    /// Print a fresh id for an unsaved element
    TempId,
}

/// A bare array, or a list response wrapping one.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListDocument<T> {
    Bare(Vec<T>),
    Components { components: Vec<T> },
    Elements { elements: Vec<T> },
    Progress { progress: Vec<T> },
}

impl<T> ListDocument<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Components { components } => components,
            Self::Elements { elements } => elements,
            Self::Progress { progress } => progress,
        }
    }
}

async fn read_list<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let src = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let document: ListDocument<T> = serde_json::from_str(&src)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(document.into_items())
}

async fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let config = tokio::fs::read_to_string(path)
        .await
        .with_context(|| "read config")?;
    serde_yaml::from_str(&config).with_context(|| format!("parse config from {}", path.display()))
}

async fn run(opts: Opts) -> anyhow::Result<()> {
    let config = load_config(opts.config.as_deref()).await?;
    let output = match opts.command {
        Command::Inbound {
            components,
            progress,
        } => {
            let components = read_list::<WireComponent>(&components).await?;
            let progress = match progress {
                Some(path) => read_list::<ProgressRecord>(&path).await?,
                None => Vec::new(),
            };
            let elements = transform_lesson_components_with_progress(&components, &progress);
            info!(
                components = components.len(),
                elements = elements.len(),
                "transformed lesson components"
            );
            config.render(&elements)?
        }
        Command::Outbound { elements } => {
            let elements = read_list::<LessonElement>(&elements).await?;
            if config.validate_before_save {
                let issues = validate_elements(&elements, ValidationContext::Designer);
                if !issues.is_empty() {
                    for (id, issue) in &issues {
                        error!(%id, %issue, "element is not ready to save");
                    }
                    bail!("{} element(s) failed validation", issues.len());
                }
            }
            let request = transform_lesson_to_request(&elements).context("build save request")?;
            config.render(&request)?
        }
        Command::Validate { elements, context } => {
            let elements = read_list::<LessonElement>(&elements).await?;
            let issues = validate_elements(&elements, context.unwrap_or(config.validation_context));
            let issues = issues
                .into_iter()
                .map(|(id, issue)| (id.to_string(), issue.to_string()))
                .collect::<indexmap::IndexMap<_, _>>();
            config.render(&issues)?
        }
        Command::Preview { elements } => {
            let elements = read_list::<LessonElement>(&elements).await?;
            render_preview(&elements).context("render preview")?
        }
        Command::TempId => generate_temp_id().to_string(),
    };
    println!("{output}");
    Ok(())
}

fn main() {
    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let result = tokio::runtime::Runtime::new()
        .context("start runtime")
        .and_then(|runtime| runtime.block_on(run(opts)));
    if let Err(e) = result {
        error!(?e, "critical error");
        std::process::exit(1);
    }
}
