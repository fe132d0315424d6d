//! Integration tests for the packaging pipeline.

use extpack::packager::{
    icons::{self, PLACEHOLDER_PNG, REQUIRED_ICON_SIZES},
    Error, Packager, Settings, SettingsBuilder, StagingRule,
};
use std::collections::BTreeMap;
use std::path::Path;

/// Lays out a complete extension source tree in `root`.
fn write_full_extension(root: &Path) {
    std::fs::write(
        root.join("manifest.json"),
        br#"{"manifest_version":3,"name":"Test Extension","version":"1.0.0"}"#,
    )
    .expect("write manifest");

    std::fs::create_dir_all(root.join("src/popup")).expect("mkdir");
    std::fs::create_dir_all(root.join("src/background")).expect("mkdir");
    std::fs::write(root.join("src/popup/popup.html"), b"<html></html>").expect("write");
    std::fs::write(root.join("src/popup/popup.js"), b"// popup").expect("write");
    std::fs::write(root.join("src/background/background.js"), b"// worker").expect("write");

    std::fs::create_dir_all(root.join("icons")).expect("mkdir");
    std::fs::write(root.join("icons/icon48.png"), b"sourced-48").expect("write");
}

fn settings_for(source: &Path, output: &Path) -> Settings {
    SettingsBuilder::new()
        .source_root(source)
        .output_dir(output)
        .build()
        .expect("valid settings")
}

/// Relative path -> contents for every file under `dir`, archive excluded.
fn staged_files(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry.expect("walk");
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(dir)
            .expect("relative")
            .to_string_lossy()
            .replace('\\', "/");
        if rel == "extension.zip" {
            continue;
        }
        files.insert(rel, std::fs::read(entry.path()).expect("read"));
    }
    files
}

fn archive_entries(archive: &Path) -> BTreeMap<String, Vec<u8>> {
    let file = std::fs::File::open(archive).expect("open archive");
    let mut zip = zip::ZipArchive::new(file).expect("parse archive");
    let mut entries = BTreeMap::new();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).expect("entry");
        if entry.is_dir() {
            continue;
        }
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut entry, &mut bytes).expect("read entry");
        entries.insert(entry.name().to_string(), bytes);
    }
    entries
}

#[tokio::test]
async fn manifest_only_source_yields_manifest_and_placeholders() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    std::fs::write(source.join("manifest.json"), b"{}").expect("write");
    let output = tmp.path().join("dist");

    let report = Packager::new(settings_for(&source, &output))
        .package()
        .await
        .expect("package");

    assert_eq!(report.placeholder_icons, vec![16, 48, 128]);
    let staged = staged_files(&output);
    let expected: Vec<&str> = vec![
        "icons/icon128.png",
        "icons/icon16.png",
        "icons/icon48.png",
        "manifest.json",
    ];
    assert_eq!(staged.keys().map(String::as_str).collect::<Vec<_>>(), expected);

    // Archive holds exactly those four files at the root
    let entries = archive_entries(&report.archive_path);
    assert_eq!(entries.keys().map(String::as_str).collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn completeness_full_source_tree_is_mirrored() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    write_full_extension(&source);
    let output = tmp.path().join("dist");

    Packager::new(settings_for(&source, &output))
        .package()
        .await
        .expect("package");

    let staged = staged_files(&output);
    for rel in [
        "manifest.json",
        "src/popup/popup.html",
        "src/popup/popup.js",
        "src/background/background.js",
        "icons/icon48.png",
    ] {
        let source_bytes = std::fs::read(source.join(rel)).expect("source file");
        assert_eq!(staged.get(rel), Some(&source_bytes), "mismatch for {rel}");
    }
}

#[tokio::test]
async fn icon_invariant_sourced_icons_survive_backfill() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    write_full_extension(&source);
    let output = tmp.path().join("dist");

    let report = Packager::new(settings_for(&source, &output))
        .package()
        .await
        .expect("package");

    // 48 came from the source tree; only the other two were synthesized
    assert_eq!(report.placeholder_icons, vec![16, 128]);
    for size in REQUIRED_ICON_SIZES {
        assert!(icons::icon_path(&output.join("icons"), size).exists());
    }
    assert_eq!(
        std::fs::read(output.join("icons/icon48.png")).expect("read"),
        b"sourced-48"
    );
    assert_eq!(
        std::fs::read(output.join("icons/icon16.png")).expect("read"),
        PLACEHOLDER_PNG
    );
}

#[tokio::test]
async fn graceful_degradation_without_icon_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    write_full_extension(&source);
    std::fs::remove_dir_all(source.join("icons")).expect("drop icons");
    let output = tmp.path().join("dist");

    let report = Packager::new(settings_for(&source, &output))
        .package()
        .await
        .expect("package");

    assert_eq!(report.placeholder_icons, vec![16, 48, 128]);
}

#[tokio::test]
async fn idempotence_repeat_runs_stage_identical_trees() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    write_full_extension(&source);
    let output = tmp.path().join("dist");
    let packager = Packager::new(settings_for(&source, &output));

    packager.package().await.expect("first run");
    let first = staged_files(&output);
    packager.package().await.expect("second run");
    let second = staged_files(&output);

    assert_eq!(first, second);
}

#[tokio::test]
async fn clean_run_removes_stray_output_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    write_full_extension(&source);
    let output = tmp.path().join("dist");
    std::fs::create_dir_all(&output).expect("mkdir");
    std::fs::write(output.join("stray.txt"), b"stale").expect("write");

    Packager::new(settings_for(&source, &output))
        .package()
        .await
        .expect("package");

    assert!(!output.join("stray.txt").exists());
}

#[tokio::test]
async fn archive_matches_staged_output_exactly() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    write_full_extension(&source);
    let output = tmp.path().join("dist");

    let report = Packager::new(settings_for(&source, &output))
        .package()
        .await
        .expect("package");

    assert_eq!(archive_entries(&report.archive_path), staged_files(&output));
}

#[tokio::test]
async fn required_rule_aborts_when_manifest_missing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    let output = tmp.path().join("dist");

    let settings = SettingsBuilder::new()
        .source_root(&source)
        .output_dir(&output)
        .rules(vec![StagingRule::file("manifest.json").required()])
        .build()
        .expect("valid settings");

    let err = Packager::new(settings).package().await;
    assert!(matches!(err, Err(Error::MissingRequired { .. })));
}

#[tokio::test]
async fn empty_source_tree_still_produces_valid_archive() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("ext");
    std::fs::create_dir_all(&source).expect("mkdir");
    let output = tmp.path().join("dist");

    let report = Packager::new(settings_for(&source, &output))
        .package()
        .await
        .expect("package");

    assert!(report.staged.is_empty());
    let entries = archive_entries(&report.archive_path);
    assert_eq!(entries.len(), 3); // three placeholder icons, nothing else
}
