// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::csv::ParseOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Build,
    Pages,
    Index,
    Inject,
    Notes,
    Records,
}

impl Command {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "build" => Some(Command::Build),
            "pages" => Some(Command::Pages),
            "index" => Some(Command::Index),
            "inject" => Some(Command::Inject),
            "notes" => Some(Command::Notes),
            "records" => Some(Command::Records),
            _ => None,
        }
    }

    /// Whether the command needs the CSV at all.
    pub fn reads_csv(&self) -> bool {
        !matches!(self, Command::Inject)
    }
}

/// One output directory. Private targets are kept out of search engines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputTarget {
    pub dir: PathBuf,
    pub private: bool,
}

impl OutputTarget {
    pub fn public(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), private: false }
    }
    pub fn private(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), private: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavOptions {
    pub label: String,
    pub style: String,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self { label: s!(NAV_LABEL), style: s!(NAV_STYLE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub command: Command,
    pub input: PathBuf,
    pub targets: Vec<OutputTarget>,
    pub total_days: u32,
    pub base_url: Option<String>,
    pub nav: NavOptions,
    pub notes_dir: PathBuf,
    /// Also pack the exported notes into this archive.
    pub notes_zip: Option<PathBuf>,
    pub parse: ParseOptions,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            command: Command::default(),
            input: PathBuf::from(DEFAULT_CSV_PATH),
            targets: Self::default_targets(),
            total_days: TOTAL_DAYS,
            base_url: None,
            nav: NavOptions::default(),
            notes_dir: PathBuf::from(DEFAULT_NOTES_DIR),
            notes_zip: None,
            parse: ParseOptions::default(),
        }
    }
}

impl SiteOptions {
    pub fn default_targets() -> Vec<OutputTarget> {
        vec![
            OutputTarget::public(PUBLIC_OUT_DIR),
            OutputTarget::private(PRIVATE_OUT_DIR),
        ]
    }

    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input = path.as_ref().to_path_buf();
        self
    }

    /// Base URL without trailing slashes, `None` when unset or blank.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }
}
