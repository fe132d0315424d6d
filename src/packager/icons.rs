//! Required icon backfill.
//!
//! Extension manifests reference icons at fixed pixel sizes. Staging can
//! leave gaps when the source tree ships no icons, so every missing size is
//! filled with a minimal valid PNG and the manifest references always
//! resolve in the packaged output.

use crate::packager::error::{ErrorExt, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Icon sizes every packaged extension must carry.
pub const REQUIRED_ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Minimal valid PNG (1x1 RGBA pixel) written verbatim for each missing size.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// File name for an icon of the given pixel size.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// Path of an icon of the given pixel size under `icon_dir`.
pub fn icon_path(icon_dir: &Path, size: u32) -> PathBuf {
    icon_dir.join(icon_file_name(size))
}

/// Ensures every required icon size exists under the output icon directory.
///
/// Sizes already staged from the source tree are left untouched; missing
/// ones get the embedded placeholder. Returns the sizes that were created.
pub async fn backfill_icons(icon_dir: &Path) -> Result<Vec<u32>> {
    let mut created = Vec::new();

    for size in REQUIRED_ICON_SIZES {
        let path = icon_path(icon_dir, size);
        if path.exists() {
            log::debug!("Icon already staged: {}", path.display());
            continue;
        }

        fs::create_dir_all(icon_dir)
            .await
            .fs_context("creating icon directory", icon_dir)?;
        fs::write(&path, PLACEHOLDER_PNG)
            .await
            .fs_context("writing placeholder icon", &path)?;

        log::info!("Created placeholder {}", path.display());
        created.push(size);
    }

    Ok(created)
}
