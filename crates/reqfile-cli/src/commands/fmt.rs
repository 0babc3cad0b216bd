//! Handler for `reqfile fmt`.

use std::path::Path;

use miette::Result;
use reqfile_core::manifest::Manifest;
use reqfile_util::errors::ReqfileError;
use reqfile_util::status;

pub fn exec(file: &Path, write: bool) -> Result<()> {
    let manifest = Manifest::from_path(file)?;
    let canonical = manifest.to_string();

    if write {
        std::fs::write(file, &canonical).map_err(ReqfileError::Io)?;
        status::status("Formatted", &file.display().to_string());
    } else {
        print!("{canonical}");
    }
    Ok(())
}
