//! ZIP archive creation.

use crate::packager::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Deflate level used for archive entries.
const COMPRESSION_LEVEL: i64 = 9;

/// Compresses the contents of `dir` into a ZIP archive at `archive_path`.
///
/// Entry paths are relative to `dir`, so the manifest lands at the archive
/// root with no wrapping directory. The archive file itself is excluded
/// even when it lives inside `dir`. Compression runs on the blocking pool;
/// the returned future resolves only after the archive has been finalized
/// and flushed, and any IO or ZIP error aborts the operation.
///
/// # Returns
///
/// The size of the finished archive in bytes.
pub async fn compress_dir(dir: &Path, archive_path: &Path) -> Result<u64> {
    let dir = dir.to_path_buf();
    let archive_path = archive_path.to_path_buf();

    tokio::task::spawn_blocking(move || write_archive(&dir, &archive_path))
        .await
        .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?
}

fn write_archive(dir: &Path, archive_path: &Path) -> Result<u64> {
    let file = std::fs::File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    // Deterministic entry order for repeatable archives
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if path == archive_path {
            continue;
        }

        let rel_path = path.strip_prefix(dir)?;
        if rel_path.as_os_str().is_empty() {
            continue;
        }
        // ZIP entry names use forward slashes regardless of platform
        let name = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut source = std::fs::File::open(path)?;
            std::io::copy(&mut source, &mut writer)?;
        }
    }

    let mut file = writer.finish()?;
    file.flush()?;
    Ok(file.metadata()?.len())
}
