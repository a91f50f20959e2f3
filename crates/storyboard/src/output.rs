//! Writing a storyboard to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storyboard_core::{AspectRatio, StoryboardItem};
use storyboard_error::{JsonError, StorageError, StorageErrorKind, StoryboardResult};

/// Name of the manifest written next to the panels.
pub const MANIFEST_FILE: &str = "storyboard.json";

/// One panel entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPanel {
    /// 1-based position in the storyboard
    pub index: usize,
    /// Visual prompt the panel was rendered from
    pub prompt: String,
    /// File name relative to the manifest
    pub file: String,
    /// MIME type of the image
    pub mime_type: String,
}

/// Summary of a run, written as `storyboard.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Aspect ratio the panels were rendered at
    pub aspect_ratio: AspectRatio,
    /// Every scene was rendered
    pub completed: bool,
    /// User-facing failure message when the run aborted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Panels in storyboard order
    pub panels: Vec<ManifestPanel>,
}

/// Writes panels and the manifest into one directory.
///
/// Files are written to a temporary name and renamed into place, so a
/// reader never sees a half-written panel.
#[derive(Debug, Clone)]
pub struct StoryboardWriter {
    dir: PathBuf,
}

impl StoryboardWriter {
    /// Create a writer, creating `dir` if needed.
    #[tracing::instrument(skip(dir))]
    pub fn new(dir: impl Into<PathBuf>) -> StoryboardResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        tracing::debug!(path = %dir.display(), "Output directory ready");
        Ok(Self { dir })
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for the panel at `index` (1-based).
    pub fn panel_file_name(index: usize, item: &StoryboardItem) -> String {
        format!("panel_{}.{}", index, item.image.extension())
    }

    /// Write the panel at `index` (1-based), returning its path.
    pub async fn write_panel(&self, index: usize, item: &StoryboardItem) -> StoryboardResult<PathBuf> {
        let path = self.dir.join(Self::panel_file_name(index, item));
        self.write_atomic(&path, &item.image.bytes).await?;
        tracing::info!(panel = index, path = %path.display(), size = item.image.bytes.len(), "Wrote panel");
        Ok(path)
    }

    /// Build the manifest for `items`.
    pub fn manifest(
        aspect_ratio: AspectRatio,
        items: &[StoryboardItem],
        error: Option<String>,
    ) -> Manifest {
        let panels = items
            .iter()
            .enumerate()
            .map(|(position, item)| ManifestPanel {
                index: position + 1,
                prompt: item.prompt.clone(),
                file: Self::panel_file_name(position + 1, item),
                mime_type: item.image.mime_type.clone(),
            })
            .collect();

        Manifest {
            aspect_ratio,
            completed: error.is_none(),
            error,
            panels,
        }
    }

    /// Write `storyboard.json`, returning its path.
    pub async fn write_manifest(&self, manifest: &Manifest) -> StoryboardResult<PathBuf> {
        let json = serde_json::to_vec_pretty(manifest)
            .map_err(|e| JsonError::new(MANIFEST_FILE, e.to_string()))?;
        let path = self.dir.join(MANIFEST_FILE);
        self.write_atomic(&path, &json).await?;
        Ok(path)
    }

    async fn write_atomic(&self, path: &Path, data: &[u8]) -> StoryboardResult<()> {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        Ok(())
    }
}
