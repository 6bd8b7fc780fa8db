//! Job files.
//!
//! A job file names the architecture, where the image is loaded, which
//! ranges hold code, the cross-reference window and any known labels:
//!
//! ```toml
//! arch = "6809"
//! origin = 0xE000
//!
//! [xrefs]
//! min = 0x0000
//! max = 0x1FFF
//!
//! [[code]]
//! start = 0xE000
//! end = 0xE100
//!
//! [[label]]
//! address = 0xE000
//! name = "RESET"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use retrodis_core::{Architecture, SymbolDatabase};
use serde::{Deserialize, Serialize};

/// Parsed job file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Architecture name as accepted by [`Architecture::parse`].
    pub arch: Option<String>,
    /// Load address of the image.
    pub origin: Option<u64>,
    #[serde(default)]
    pub xrefs: XrefWindow,
    #[serde(default)]
    pub code: Vec<CodeRange>,
    #[serde(default, rename = "label")]
    pub labels: Vec<LabelConfig>,
}

/// Inclusive bounds on recorded reference targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XrefWindow {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// A code range, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeRange {
    pub start: u64,
    pub end: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    pub address: u64,
    pub name: String,
}

impl JobConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file: {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid job file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: JobConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// The configured architecture, if any.
    pub fn architecture(&self) -> Result<Option<Architecture>> {
        self.arch.as_deref().map(parse_architecture).transpose()
    }

    /// Binds every configured label, in file order.
    pub fn apply_labels(&self, symbols: &mut SymbolDatabase) -> Result<()> {
        for label in &self.labels {
            symbols.add_label(label.address, label.name.as_str())?;
        }
        log::debug!("applied {} labels", self.labels.len());
        Ok(())
    }
}

/// Parses an architecture name, listing the supported ones on failure.
pub fn parse_architecture(name: &str) -> Result<Architecture> {
    Architecture::parse(name).with_context(|| {
        let known: Vec<_> = Architecture::all().iter().map(|a| a.name()).collect();
        format!("Unknown architecture '{}' (expected one of: {})", name, known.join(", "))
    })
}
