//! Handler for `reqfile list`.

use std::path::Path;

use miette::Result;
use reqfile_core::manifest::Manifest;
use reqfile_util::errors::ReqfileError;

pub fn exec(file: &Path, format: &str) -> Result<()> {
    let manifest = Manifest::from_path(file)?;

    match format {
        "text" => {
            for req in &manifest.requirements {
                println!("{req}");
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&manifest.requirements).map_err(|e| {
                ReqfileError::Generic {
                    message: format!("Failed to serialize requirements: {e}"),
                }
            })?;
            println!("{json}");
        }
        other => {
            return Err(ReqfileError::Generic {
                message: format!("Unknown format '{other}' (expected text or json)"),
            }
            .into());
        }
    }
    Ok(())
}
