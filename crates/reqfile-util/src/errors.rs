use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all reqfile operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ReqfileError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A requirements manifest line could not be parsed.
    ///
    /// The whole manifest read fails on the first malformed line; `line` is
    /// 1-based.
    #[error("Parse error at line {line}: {message}")]
    #[diagnostic(help(
        "Each line must be `name[<op><version>[,<op><version>...]]` with an optional trailing `# comment`"
    ))]
    Parse { line: usize, message: String },

    /// A package name was looked up that the manifest does not list.
    #[error("Package '{name}' is not listed in the manifest")]
    PackageNotFound { name: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ReqfileResult<T> = miette::Result<T>;
