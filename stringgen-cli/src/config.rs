//! Resolution of catalog and output paths from the build environment.
//!
//! With no flags the layout is `<SRCROOT>/<target>/Resources/Localizable.xcstrings`
//! in, `<SRCROOT>/<target>/Resources/Generated/<TypeName>.swift` out.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_TARGET: &str = "Giveaway";
pub const CATALOG_FILE_NAME: &str = "Localizable.xcstrings";
pub const GENERATED_DIR_NAME: &str = "Generated";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "SRCROOT is not set; run from an Xcode build phase or pass --srcroot (or both --catalog and --output)"
    )]
    MissingSourceRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub catalog: PathBuf,
    pub output: PathBuf,
}

/// Picks the catalog and output paths. Explicit paths win; anything left
/// unspecified is derived from `srcroot`, which must then be non-empty.
pub fn resolve_paths(
    srcroot: Option<&Path>,
    target: &str,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    output_file_name: &str,
) -> Result<Paths, ConfigError> {
    let resources = || -> Result<PathBuf, ConfigError> {
        let root = srcroot
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or(ConfigError::MissingSourceRoot)?;
        Ok(root.join(target).join("Resources"))
    };

    let catalog = match catalog {
        Some(path) => path,
        None => resources()?.join(CATALOG_FILE_NAME),
    };
    let output = match output {
        Some(path) => path,
        None => resources()?.join(GENERATED_DIR_NAME).join(output_file_name),
    };

    Ok(Paths { catalog, output })
}
