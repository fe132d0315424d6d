//! Packaging configuration and staging rules.
//!
//! The fixed lists of files and directories the original build copied are
//! expressed here as an explicit, ordered rule set so the skip-on-missing
//! behavior is declared policy rather than an implicit default.

#![allow(dead_code)] // Public API - rule constructors preserved for external consumers

use crate::packager::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Top-level manifest file staged into the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Directory holding the extension's scripts and pages.
pub const SOURCE_DIR: &str = "src";

/// Directory holding the extension's icons.
pub const ICON_DIR: &str = "icons";

/// Name of the archive written inside the output directory.
pub const ARCHIVE_NAME: &str = "extension.zip";

/// What kind of filesystem object a staging rule refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// A single top-level file, copied preserving its name.
    File,
    /// A directory, copied recursively preserving relative paths.
    Directory,
}

/// Whether a missing source asset aborts the run or is silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StagePolicy {
    /// Staging fails if the source asset does not exist.
    Required,
    /// An absent source asset is skipped without error.
    #[default]
    Optional,
}

/// A single staging rule.
///
/// The asset at `source` (relative to the source root) is copied to the same
/// relative path under the output directory.
#[derive(Debug, Clone)]
pub struct StagingRule {
    /// Path relative to the source root.
    pub source: PathBuf,
    /// File or directory.
    pub kind: RuleKind,
    /// Skip-on-missing policy.
    pub policy: StagePolicy,
}

impl StagingRule {
    /// Creates an optional file rule.
    pub fn file<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
            kind: RuleKind::File,
            policy: StagePolicy::Optional,
        }
    }

    /// Creates an optional directory rule.
    pub fn dir<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
            kind: RuleKind::Directory,
            policy: StagePolicy::Optional,
        }
    }

    /// Marks this rule as required: staging fails loudly if the asset is absent.
    pub fn required(mut self) -> Self {
        self.policy = StagePolicy::Required;
        self
    }
}

/// Default rule set reproducing the original build behavior: manifest file,
/// script tree and icon tree, all optional.
pub fn default_rules() -> Vec<StagingRule> {
    vec![
        StagingRule::file(MANIFEST_FILE),
        StagingRule::dir(SOURCE_DIR),
        StagingRule::dir(ICON_DIR),
    ]
}

/// Settings for a packaging run.
///
/// Built via [`SettingsBuilder`].
#[derive(Debug, Clone)]
pub struct Settings {
    source_root: PathBuf,
    output_dir: PathBuf,
    rules: Vec<StagingRule>,
    archive_name: String,
}

impl Settings {
    /// The source working directory.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// The output directory, deleted and recreated on every run.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The ordered staging rules.
    pub fn rules(&self) -> &[StagingRule] {
        &self.rules
    }

    /// Name of the archive file written inside the output directory.
    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    /// The icon directory inside the output directory.
    pub fn icon_dir(&self) -> PathBuf {
        self.output_dir.join(ICON_DIR)
    }

    /// Full path of the archive inside the output directory.
    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(&self.archive_name)
    }
}

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```
/// use extpack::packager::{SettingsBuilder, StagingRule};
///
/// # fn example() -> extpack::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root("my-extension")
///     .output_dir("dist")
///     .add_rule(StagingRule::file("manifest.json").required())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    rules: Option<Vec<StagingRule>>,
    archive_name: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the source working directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    ///
    /// # Required
    ///
    /// This field is required for building. The directory is deleted and
    /// recreated at the start of every packaging run.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the staging rules.
    ///
    /// Default: [`default_rules`]
    pub fn rules(mut self, rules: Vec<StagingRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Appends a staging rule to the current set.
    pub fn add_rule(mut self, rule: StagingRule) -> Self {
        self.rules.get_or_insert_with(default_rules).push(rule);
        self
    }

    /// Sets the archive file name.
    ///
    /// Default: [`ARCHIVE_NAME`]
    pub fn archive_name<S: Into<String>>(mut self, name: S) -> Self {
        self.archive_name = Some(name.into());
        self
    }

    /// Builds the settings, failing if a required field is missing.
    pub fn build(self) -> Result<Settings> {
        let source_root = self
            .source_root
            .ok_or_else(|| Error::GenericError("source root is required".to_string()))?;
        let output_dir = self
            .output_dir
            .ok_or_else(|| Error::GenericError("output directory is required".to_string()))?;

        Ok(Settings {
            source_root,
            output_dir,
            rules: self.rules.unwrap_or_else(default_rules),
            archive_name: self.archive_name.unwrap_or_else(|| ARCHIVE_NAME.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_source_root() {
        let err = SettingsBuilder::new().output_dir("dist").build();
        assert!(err.is_err());
    }

    #[test]
    fn defaults_match_original_layout() {
        let settings = SettingsBuilder::new()
            .source_root(".")
            .output_dir("dist")
            .build()
            .expect("valid settings");

        let sources: Vec<_> = settings
            .rules()
            .iter()
            .map(|r| r.source.to_string_lossy().into_owned())
            .collect();
        assert_eq!(sources, ["manifest.json", "src", "icons"]);
        assert!(settings
            .rules()
            .iter()
            .all(|r| r.policy == StagePolicy::Optional));
        assert_eq!(settings.archive_name(), "extension.zip");
        assert_eq!(settings.archive_path(), Path::new("dist/extension.zip"));
    }

    #[test]
    fn add_rule_keeps_defaults() {
        let settings = SettingsBuilder::new()
            .source_root(".")
            .output_dir("dist")
            .add_rule(StagingRule::file("manifest.json").required())
            .build()
            .expect("valid settings");
        assert_eq!(settings.rules().len(), 4);
        assert_eq!(settings.rules()[3].policy, StagePolicy::Required);
    }
}
