//! Output directory cleaning and source staging.

use crate::packager::error::{Error, Result};
use crate::packager::settings::{RuleKind, StagePolicy, StagingRule};
use crate::packager::fs;
use std::path::Path;

/// Deletes the output directory if present and recreates it empty.
///
/// Must not fail when the directory does not exist; repeated runs therefore
/// never see stale artifacts from a previous invocation.
pub async fn clean_output(output_dir: &Path) -> Result<()> {
    log::debug!("Cleaning output directory {}", output_dir.display());
    fs::create_dir_all(output_dir, true).await
}

/// Stages a single rule from the source root into the output directory.
///
/// Returns `true` if the asset was copied, `false` if an optional asset was
/// absent and skipped. A required asset that is absent is an error.
pub async fn stage_rule(
    rule: &StagingRule,
    source_root: &Path,
    output_dir: &Path,
) -> Result<bool> {
    let src = source_root.join(&rule.source);
    let dst = output_dir.join(&rule.source);

    if !src.exists() {
        return match rule.policy {
            StagePolicy::Optional => {
                log::debug!("Skipping absent {}", src.display());
                Ok(false)
            }
            StagePolicy::Required => Err(Error::MissingRequired { path: src }),
        };
    }

    match rule.kind {
        RuleKind::File => fs::copy_file(&src, &dst).await?,
        RuleKind::Directory => fs::copy_dir(&src, &dst).await?,
    }

    log::info!("Copied {}", rule.source.display());
    Ok(true)
}
