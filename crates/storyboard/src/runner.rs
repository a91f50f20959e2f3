//! Drivers that connect the orchestration cores to files and streams.

use std::path::PathBuf;
use storyboard_core::AspectRatio;
use storyboard_error::{StorageError, StorageErrorKind, StoryboardResult};
use storyboard_interface::{AssistantBackend, ImageSynthesizer, SceneParser};
use storyboard_pipeline::{ConversationSession, RunOutcome, StoryboardPipeline};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::StoryboardWriter;

/// Line that ends a chat before end of input.
pub const QUIT_COMMAND: &str = "/quit";

/// What a generation run left on disk.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// How the run ended
    pub outcome: RunOutcome,
    /// Panel files in storyboard order
    pub panels: Vec<PathBuf>,
    /// Manifest path; `None` when the run was skipped
    pub manifest: Option<PathBuf>,
}

/// Run `pipeline` on `script`, writing each panel as soon as it is published.
///
/// The manifest is written for completed and aborted runs. A skipped run
/// writes nothing.
#[tracing::instrument(skip_all, fields(aspect_ratio = %aspect_ratio, dir = %writer.dir().display()))]
pub async fn generate_storyboard<P, S>(
    pipeline: &StoryboardPipeline<P, S>,
    script: &str,
    aspect_ratio: AspectRatio,
    writer: &StoryboardWriter,
) -> StoryboardResult<GenerationReport>
where
    P: SceneParser,
    S: ImageSynthesizer,
{
    debug!(style_suffix = %pipeline.style_suffix(), "Starting generation");

    let mut receiver = pipeline.subscribe();
    let run = pipeline.run(script, aspect_ratio);
    tokio::pin!(run);

    let mut panels = Vec::new();
    let mut last_progress = String::new();
    let outcome = loop {
        tokio::select! {
            outcome = &mut run => break outcome,
            Ok(()) = receiver.changed() => {
                let state = receiver.borrow_and_update().clone();
                if !state.progress_message.is_empty() && state.progress_message != last_progress {
                    info!("{}", state.progress_message);
                    last_progress = state.progress_message;
                }
                for item in state.storyboard.iter().skip(panels.len()) {
                    let index = panels.len() + 1;
                    let path = writer.write_panel(index, item).await?;
                    panels.push(path);
                }
            }
        }
    };

    if outcome.is_skipped() {
        warn!("Script is empty or a run is already active, nothing generated");
        return Ok(GenerationReport {
            outcome,
            panels,
            manifest: None,
        });
    }

    for item in outcome.items().iter().skip(panels.len()) {
        let index = panels.len() + 1;
        let path = writer.write_panel(index, item).await?;
        panels.push(path);
    }

    let error = outcome.error().map(|e| e.message());
    let manifest = StoryboardWriter::manifest(aspect_ratio, outcome.items(), error);
    let manifest_path = writer.write_manifest(&manifest).await?;

    Ok(GenerationReport {
        outcome,
        panels,
        manifest: Some(manifest_path),
    })
}

/// Hold a conversation over line-oriented streams.
///
/// Prints the current log, then sends each input line and prints the reply.
/// Ends at end of input or on [`QUIT_COMMAND`]. A read failure, such as
/// input that is not UTF-8, ends the chat with an error.
pub async fn chat_over_lines<B, R, W>(
    session: &ConversationSession<B>,
    input: R,
    output: &mut W,
) -> StoryboardResult<()>
where
    B: AssistantBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for turn in session.state().turns {
        write_line(output, &format!("{}: {}", turn.speaker, turn.text)).await?;
    }

    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "chat input: {}",
                    e
                )))
                .into());
            }
        };

        if line.trim() == QUIT_COMMAND {
            break;
        }
        if let Some(reply) = session.send_message(&line).await {
            write_line(output, &format!("Assistant: {}", reply)).await?;
        }
    }

    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> StoryboardResult<()> {
    let map_err = |e: std::io::Error| {
        StorageError::new(StorageErrorKind::FileWrite(format!("chat output: {}", e)))
    };
    output
        .write_all(format!("{}\n", text).as_bytes())
        .await
        .map_err(map_err)?;
    output.flush().await.map_err(map_err)?;
    Ok(())
}
