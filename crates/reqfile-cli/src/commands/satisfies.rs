//! Handler for `reqfile satisfies`.

use std::path::Path;

use miette::Result;
use reqfile_core::manifest::Manifest;
use reqfile_resolver::{matcher, version::PackageVersion};
use reqfile_util::errors::ReqfileError;

pub fn exec(file: &Path, package: &str, version: &str) -> Result<()> {
    let manifest = Manifest::from_path(file)?;
    let requirement = manifest
        .get(package)
        .ok_or_else(|| ReqfileError::PackageNotFound {
            name: package.to_string(),
        })?;

    let candidate = PackageVersion::parse(version);
    let report = matcher::evaluate(requirement, &candidate);
    println!("{report}");

    if report.is_satisfied() {
        Ok(())
    } else {
        Err(ReqfileError::Generic {
            message: format!("{package} {version} does not satisfy the manifest"),
        }
        .into())
    }
}
