use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use reqfile_util::errors::ReqfileError;

use crate::requirement::{canonical_name, Requirement};

/// The parsed representation of a requirements manifest.
///
/// Requirement order equals order of appearance in the input; the source
/// format treats ordering as install-sequencing-significant, so it must be
/// preserved. A `Manifest` is read once from static text and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl Manifest {
    /// Load and parse a requirements manifest from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ReqfileError::Generic {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a requirements manifest from text.
    ///
    /// Blank lines and full-comment lines are skipped. The parse is atomic:
    /// the first malformed line fails the whole read with a line-numbered
    /// [`ReqfileError::Parse`].
    pub fn from_str(content: &str) -> miette::Result<Self> {
        let mut requirements = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let req = Requirement::parse(line).map_err(|e| ReqfileError::Parse {
                line: idx + 1,
                message: e.to_string(),
            })?;
            tracing::trace!(line = idx + 1, name = %req.name, "parsed requirement");
            requirements.push(req);
        }
        tracing::debug!(
            requirements = requirements.len(),
            "parsed requirements manifest"
        );
        Ok(Self { requirements })
    }

    /// Look up a requirement by package name, folding case and `-`/`_` per
    /// pip's canonical-name rule.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        let wanted = canonical_name(name);
        self.requirements
            .iter()
            .find(|r| r.canonical_name() == wanted)
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Total number of version constraints across all requirements.
    pub fn constraint_count(&self) -> usize {
        self.requirements.iter().map(|r| r.constraints.len()).sum()
    }
}

impl fmt::Display for Manifest {
    /// Canonical re-serialization: one requirement per line, in input order.
    ///
    /// Round-trips structure, not byte-level whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for req in &self.requirements {
            writeln!(f, "{req}")?;
        }
        Ok(())
    }
}
