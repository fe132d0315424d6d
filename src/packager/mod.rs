//! Extension packaging pipeline.
//!
//! The [`Packager`] runs four phases in order over a source working
//! directory: clean the output directory, stage the manifest and source
//! directories, backfill missing required icons, and compress the staged
//! tree into a ZIP archive. Staging is permissive (absent optional assets
//! are skipped); the archive step is the only fatal one.

pub mod archive;
pub mod error;
pub mod fs;
pub mod icons;
pub mod settings;
pub mod stage;

use std::path::PathBuf;

pub use error::{Error, ErrorExt, Result};
pub use settings::{RuleKind, Settings, SettingsBuilder, StagePolicy, StagingRule};

/// Summary of a completed packaging run.
#[derive(Debug, Clone)]
pub struct PackageReport {
    /// Relative source paths that were actually staged (absent ones are omitted).
    pub staged: Vec<PathBuf>,
    /// Icon sizes that had to be synthesized because no source icon existed.
    pub placeholder_icons: Vec<u32>,
    /// Path of the produced archive.
    pub archive_path: PathBuf,
    /// Size of the produced archive in bytes.
    pub archive_size: u64,
}

/// Packaging orchestrator.
///
/// Coordinates the clean, stage, backfill and compress phases over a single
/// source tree. Each invocation fully owns and resets the output directory,
/// so repeated runs never accumulate stale files.
///
/// # Examples
///
/// ```no_run
/// use extpack::packager::{Packager, SettingsBuilder};
///
/// # async fn example() -> extpack::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root(".")
///     .output_dir("dist")
///     .build()?;
///
/// let report = Packager::new(settings).package().await?;
/// println!("archive: {} bytes", report.archive_size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns the settings this packager was built with.
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the full packaging pipeline.
    ///
    /// # Process
    ///
    /// 1. Deletes and recreates the output directory
    /// 2. Stages every rule in [`Settings::rules`] (optional rules skip when absent)
    /// 3. Backfills missing required icon sizes with the embedded placeholder
    /// 4. Writes the ZIP archive and waits for it to be finalized
    ///
    /// # Returns
    ///
    /// A [`PackageReport`] describing what was staged and the archive that
    /// was produced. Archive-stage IO failures propagate as errors; missing
    /// optional source assets do not.
    pub async fn package(&self) -> Result<PackageReport> {
        let settings = &self.settings;
        log::info!(
            "Packaging extension from {} into {}",
            settings.source_root().display(),
            settings.output_dir().display()
        );

        stage::clean_output(settings.output_dir()).await?;

        let mut staged = Vec::new();
        for rule in settings.rules() {
            if stage::stage_rule(rule, settings.source_root(), settings.output_dir()).await? {
                staged.push(rule.source.clone());
            }
        }

        let placeholder_icons = icons::backfill_icons(&settings.icon_dir()).await?;

        let archive_path = settings.archive_path();
        let archive_size = archive::compress_dir(settings.output_dir(), &archive_path).await?;
        log::info!("Archive created: {} bytes", archive_size);

        Ok(PackageReport {
            staged,
            placeholder_icons,
            archive_path,
            archive_size,
        })
    }
}
