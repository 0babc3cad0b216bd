use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a single requirement line failed to parse.
///
/// Callers wrap this with the 1-based line number; see
/// [`crate::manifest::Manifest::from_str`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequirementError {
    #[error("missing package name")]
    MissingName,

    #[error("invalid character '{0}' in package name")]
    InvalidName(char),

    #[error("unknown operator in constraint '{0}'")]
    UnknownOperator(String),

    #[error("missing version in constraint '{0}'")]
    MissingVersion(String),

    #[error("invalid character '{1}' in version '{0}'")]
    InvalidVersion(String, char),
}

/// A version comparison operator, as written in a requirement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "<")]
    Lt,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Ge => ">=",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Lt => "<",
        }
    }

    /// Split an operator off the front of a constraint string.
    ///
    /// Returns the operator and the remaining version text. Two-character
    /// operators are tried first so `>=` is never read as `>` followed by
    /// `=1.0`.
    pub fn strip(s: &str) -> Option<(Self, &str)> {
        for (token, op) in [
            ("==", CompareOp::Eq),
            ("!=", CompareOp::Ne),
            (">=", CompareOp::Ge),
            ("<=", CompareOp::Le),
        ] {
            if let Some(rest) = s.strip_prefix(token) {
                return Some((op, rest));
            }
        }
        if let Some(rest) = s.strip_prefix('>') {
            return Some((CompareOp::Gt, rest));
        }
        if let Some(rest) = s.strip_prefix('<') {
            return Some((CompareOp::Lt, rest));
        }
        None
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single version bound: one operator and one version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub op: CompareOp,
    pub version: String,
}

impl Constraint {
    /// Parse one comma-separated constraint such as `>=0.6` or `!= 0.7`.
    pub fn parse(s: &str) -> Result<Self, RequirementError> {
        let s = s.trim();
        let (op, rest) =
            CompareOp::strip(s).ok_or_else(|| RequirementError::UnknownOperator(s.to_string()))?;
        let version = rest.trim();
        if version.is_empty() {
            return Err(RequirementError::MissingVersion(s.to_string()));
        }
        if let Some(bad) = version
            .chars()
            .find(|c| matches!(c, '<' | '>' | '!' | '=' | '~') || c.is_whitespace())
        {
            return Err(RequirementError::InvalidVersion(version.to_string(), bad));
        }
        Ok(Self {
            op,
            version: version.to_string(),
        })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

/// One line of a requirements manifest: a package name, its conjunctive
/// version constraints, and an optional trailing comment (typically a license
/// annotation in the source manifests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Requirement {
    /// Parse a single requirement line.
    ///
    /// Accepts `name[<op><version>[,<op><version>...]]  [# comment]` with
    /// insignificant whitespace around every element. The caller is expected
    /// to have skipped blank and comment-only lines already.
    pub fn parse(line: &str) -> Result<Self, RequirementError> {
        let (code, comment) = split_comment(line);
        let code = code.trim();

        let split_at = code
            .find(|c| matches!(c, '<' | '>' | '!' | '=' | '~'))
            .unwrap_or(code.len());
        let name = code[..split_at].trim_end();
        let spec = &code[split_at..];

        if name.is_empty() {
            return Err(RequirementError::MissingName);
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '-' | '_'))
        {
            return Err(RequirementError::InvalidName(bad));
        }

        let constraints = if spec.is_empty() {
            Vec::new()
        } else {
            spec.split(',')
                .map(Constraint::parse)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            name: name.to_string(),
            constraints,
            comment: comment.map(str::to_string),
        })
    }

    /// The package name with pip's canonical-name folding applied.
    pub fn canonical_name(&self) -> String {
        canonical_name(&self.name)
    }

    /// Whether this requirement places no version bounds at all.
    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, c) in self.constraints.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        if let Some(ref comment) = self.comment {
            write!(f, "  # {comment}")?;
        }
        Ok(())
    }
}

/// Fold a package name to pip's canonical form: ASCII-lowercased with `_`
/// treated as `-`.
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '_' => '-',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Split a line at its first `#`, returning the code part and the trimmed
/// comment text (if non-empty).
fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.split_once('#') {
        Some((code, comment)) => {
            let comment = comment.trim();
            (code, (!comment.is_empty()).then_some(comment))
        }
        None => (line, None),
    }
}
