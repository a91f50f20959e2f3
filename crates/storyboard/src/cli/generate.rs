//! Storyboard generation command handler.

use std::path::{Path, PathBuf};
use storyboard::{
    AspectRatio, GeminiClient, RunOutcome, StorageError, StorageErrorKind, StoryboardConfig,
    StoryboardPipeline, StoryboardResult, StoryboardWriter, generate_storyboard,
};

/// Where the script comes from.
#[derive(Debug, Clone)]
pub enum ScriptSource {
    /// Read from a file
    File(PathBuf),
    /// Given inline
    Text(String),
}

impl ScriptSource {
    /// Pick the source from the mutually exclusive `--script`/`--text` flags.
    pub fn from_args(script: Option<PathBuf>, text: Option<String>) -> Self {
        match script {
            Some(path) => ScriptSource::File(path),
            None => ScriptSource::Text(text.unwrap_or_default()),
        }
    }

    async fn read(self) -> StoryboardResult<String> {
        match self {
            ScriptSource::Text(text) => Ok(text),
            ScriptSource::File(path) => tokio::fs::read_to_string(&path).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into()
            }),
        }
    }
}

/// Run the pipeline, writing panels to `output_dir` as they are published.
#[tracing::instrument(skip(config, source))]
pub async fn run_generate(
    config: &StoryboardConfig,
    source: ScriptSource,
    aspect_ratio: Option<AspectRatio>,
    output_dir: &Path,
) -> StoryboardResult<()> {
    let script = source.read().await?;
    let aspect_ratio = aspect_ratio.unwrap_or(config.pipeline.default_aspect_ratio);

    let client = GeminiClient::new(config.gemini.clone())?;
    let pipeline = StoryboardPipeline::from_config(client.clone(), client, &config.pipeline);
    let writer = StoryboardWriter::new(output_dir)?;

    let report = generate_storyboard(&pipeline, &script, aspect_ratio, &writer).await?;

    if let Some(manifest_path) = &report.manifest {
        println!(
            "Wrote {} panel(s) and {}",
            report.panels.len(),
            manifest_path.display()
        );
    }

    match report.outcome {
        RunOutcome::Aborted { error, .. } => Err(error.into()),
        _ => Ok(()),
    }
}
