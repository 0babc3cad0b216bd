//! Handler for `reqfile check`.

use std::path::Path;

use miette::Result;
use reqfile_core::manifest::Manifest;
use reqfile_util::status;

pub fn exec(file: &Path, verbose: bool) -> Result<()> {
    status::status("Checking", &file.display().to_string());
    let manifest = Manifest::from_path(file)?;

    if verbose {
        for req in &manifest.requirements {
            status::status_info("Requirement", &req.to_string());
        }
    }

    let unconstrained = manifest
        .requirements
        .iter()
        .filter(|r| r.is_unconstrained())
        .count();
    if unconstrained > 0 {
        status::status_warn(
            "Unpinned",
            &format!("{unconstrained} requirement(s) carry no version constraint"),
        );
    }

    status::status(
        "Checked",
        &format!(
            "{} requirement(s), {} constraint(s)",
            manifest.len(),
            manifest.constraint_count()
        ),
    );
    println!("ok");
    Ok(())
}
