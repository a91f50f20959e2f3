//! Panel and manifest output tests.

use storyboard::{
    AspectRatio, ImageData, MANIFEST_FILE, Manifest, StoryboardItem, StoryboardWriter,
};

fn items() -> Vec<StoryboardItem> {
    vec![
        StoryboardItem::new("woman in cafe", ImageData::new("image/jpeg", vec![0xFF, 0xD8])),
        StoryboardItem::new("rainy street", ImageData::new("image/png", vec![0x89, 0x50])),
    ]
}

#[tokio::test]
async fn test_write_panel_uses_mime_extension() {
    let dir = tempfile::tempdir().unwrap();
    let writer = StoryboardWriter::new(dir.path().join("out")).unwrap();
    let items = items();

    let first = writer.write_panel(1, &items[0]).await.unwrap();
    let second = writer.write_panel(2, &items[1]).await.unwrap();

    assert_eq!(first.file_name().unwrap(), "panel_1.jpg");
    assert_eq!(second.file_name().unwrap(), "panel_2.png");
    assert_eq!(std::fs::read(&first).unwrap(), vec![0xFF, 0xD8]);
    assert!(!first.with_extension("tmp").exists());
}

#[tokio::test]
async fn test_manifest_lists_panels_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let writer = StoryboardWriter::new(dir.path()).unwrap();

    let manifest = StoryboardWriter::manifest(AspectRatio::Vertical, &items(), None);
    let path = writer.write_manifest(&manifest).await.unwrap();

    assert_eq!(path, dir.path().join(MANIFEST_FILE));
    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"9:16\""));
    assert!(!json.contains("\"error\""));

    let parsed: Manifest = serde_json::from_str(&json).unwrap();
    assert!(parsed.completed);
    assert_eq!(parsed.panels.len(), 2);
    assert_eq!(parsed.panels[0].index, 1);
    assert_eq!(parsed.panels[0].prompt, "woman in cafe");
    assert_eq!(parsed.panels[1].file, "panel_2.png");
}

#[test]
fn test_manifest_for_aborted_run() {
    let manifest = StoryboardWriter::manifest(
        AspectRatio::Widescreen,
        &items()[..1],
        Some("Failed to generate an image for the prompt.".to_string()),
    );

    assert!(!manifest.completed);
    assert_eq!(manifest.panels.len(), 1);
    assert_eq!(
        manifest.error.as_deref(),
        Some("Failed to generate an image for the prompt.")
    );
}
