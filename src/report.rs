use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::probe::{self, Resolution};
use crate::render;
use crate::system::{self, HostInfo};

/// Probed when the caller does not configure an optional list. Entries that
/// turn out to be missing are dropped from the report silently.
pub const DEFAULT_OPTIONAL: &[&str] = &["rustc", "cargo", "git", "cmake", "pkg-config"];

const DEFAULT_NCOL: usize = 3;
const DEFAULT_TEXT_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    pub name: String,
    pub version: Resolution,
}

/// Snapshot of the host environment: hardware facts, the Rust toolchain
/// banner, and one version entry per probed package. Built once, rendered on
/// demand as plain text (`Display`), HTML (`to_html`) or JSON (`to_json`).
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub host: HostInfo,
    pub runtime: Option<String>,
    pub generated_at: DateTime<Local>,
    pub packages: Vec<PackageEntry>,
    pub extra_meta: Vec<(String, String)>,
    #[serde(skip)]
    pub(crate) ncol: usize,
    #[serde(skip)]
    pub(crate) text_width: usize,
}

impl Report {
    pub fn new() -> Self {
        ReportBuilder::new().build()
    }

    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    pub fn to_html(&self) -> String {
        render::html::render(self)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::text::render(self))
    }
}

/// Configures which names get probed and how the report is laid out.
///
/// Three lists feed the report, in order: `additional` (user-supplied),
/// `core` (mandatory), `optional` (best effort). Mandatory names that are
/// not installed stay in the report with a sentinel; optional ones are
/// dropped.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    core: Vec<String>,
    optional: Vec<String>,
    additional: Vec<String>,
    ncol: usize,
    text_width: usize,
    sort: bool,
    extra_meta: Vec<(String, String)>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            core: Vec::new(),
            optional: DEFAULT_OPTIONAL.iter().map(|s| s.to_string()).collect(),
            additional: Vec::new(),
            ncol: DEFAULT_NCOL,
            text_width: DEFAULT_TEXT_WIDTH,
            sort: false,
            extra_meta: Vec::new(),
        }
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn core<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn optional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional = names.into_iter().map(Into::into).collect();
        self
    }

    /// Appends, so config-supplied and caller-supplied names compose.
    pub fn additional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional.extend(names.into_iter().map(Into::into));
        self
    }

    /// Package-column pairs per HTML row. Has no effect on the text renderer.
    pub fn ncol(mut self, ncol: usize) -> Self {
        self.ncol = ncol.max(1);
        self
    }

    pub fn text_width(mut self, width: usize) -> Self {
        self.text_width = width;
        self
    }

    /// Sort package rows case-insensitively by name instead of list order.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Extra key/value row shown with the hardware facts.
    pub fn extra_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_meta.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Report {
        let mut packages = Vec::new();
        let mut seen = HashSet::new();

        add_packages(&mut packages, &mut seen, &self.additional, false);
        add_packages(&mut packages, &mut seen, &self.core, false);
        add_packages(&mut packages, &mut seen, &self.optional, true);

        if self.sort {
            packages.sort_by_key(|entry| entry.name.to_lowercase());
        }

        Report {
            host: system::detect(),
            runtime: system::rust_runtime(),
            generated_at: Local::now(),
            packages,
            extra_meta: self.extra_meta,
            ncol: self.ncol,
            text_width: self.text_width,
        }
    }
}

fn add_packages(
    packages: &mut Vec<PackageEntry>,
    seen: &mut HashSet<String>,
    names: &[String],
    optional: bool,
) {
    for name in names {
        if !seen.insert(name.clone()) {
            continue;
        }
        let version = probe::resolve_version(name);
        if !version.is_installed() {
            if optional {
                continue;
            }
            tracing::warn!(package = name.as_str(), "package not installed");
        }
        packages.push(PackageEntry {
            name: name.clone(),
            version,
        });
    }
}
