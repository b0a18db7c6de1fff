//! The catalog → Swift compile step.
//!
//! [`compile`] takes explicit paths; deriving them from the build environment
//! is left to the caller (see the `stringgen` CLI).

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    catalog::Catalog,
    codegen::{DeclarationKind, GenerateOptions, SwiftFile},
    error::Error,
    traits::Parser,
};

/// What a compile run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub constants: usize,
    pub accessors: usize,
    /// Entries without localizations.
    pub skipped: usize,
    /// `false` when the file already held the exact same text and was left alone.
    pub changed: bool,
}

impl Summary {
    pub fn declarations(&self) -> usize {
        self.constants + self.accessors
    }
}

/// Result of rendering without touching the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub constants: usize,
    pub accessors: usize,
    pub skipped: usize,
}

/// Loads the catalog at `catalog_path` and renders it, failing with
/// [`Error::MissingCatalog`] when the file does not exist.
pub fn render_catalog<P: AsRef<Path>>(
    catalog_path: P,
    options: &GenerateOptions,
) -> Result<Rendered, Error> {
    let catalog_path = catalog_path.as_ref();
    if !catalog_path.is_file() {
        return Err(Error::MissingCatalog(catalog_path.to_path_buf()));
    }

    let catalog = Catalog::read_from(catalog_path)?;
    tracing::debug!(
        path = %catalog_path.display(),
        entries = catalog.strings.len(),
        "loaded string catalog"
    );

    let file = SwiftFile::from_catalog(&catalog, options)?;
    let declarations = file.declarations.len();
    Ok(Rendered {
        constants: file.count(DeclarationKind::Constant),
        accessors: file.count(DeclarationKind::Accessor),
        skipped: catalog.strings.len() - declarations,
        text: file.to_string(),
    })
}

/// Compiles the catalog at `catalog_path` into the Swift file at `output_path`.
///
/// The output's parent directory is created when missing. The file is fully
/// replaced, except that identical content is not rewritten.
///
/// # Example
///
/// ```rust,no_run
/// use stringgen::{GenerateOptions, compile};
///
/// let summary = compile(
///     "Resources/Localizable.xcstrings",
///     "Resources/Generated/StringConstants.swift",
///     &GenerateOptions::default(),
/// )?;
/// println!("{} declarations", summary.declarations());
/// # Ok::<(), stringgen::Error>(())
/// ```
pub fn compile<P: AsRef<Path>, Q: AsRef<Path>>(
    catalog_path: P,
    output_path: Q,
    options: &GenerateOptions,
) -> Result<Summary, Error> {
    let output_path = output_path.as_ref();
    let rendered = render_catalog(catalog_path, options)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let changed = !is_up_to_date(output_path, &rendered.text)?;
    if changed {
        fs::write(output_path, &rendered.text)?;
        tracing::info!(path = %output_path.display(), "updated generated file");
    } else {
        tracing::info!(path = %output_path.display(), "generated file unchanged");
    }

    Ok(Summary {
        output: output_path.to_path_buf(),
        constants: rendered.constants,
        accessors: rendered.accessors,
        skipped: rendered.skipped,
        changed,
    })
}

/// Reports whether `output_path` already holds what [`compile`] would write.
/// Nothing is written.
pub fn check<P: AsRef<Path>, Q: AsRef<Path>>(
    catalog_path: P,
    output_path: Q,
    options: &GenerateOptions,
) -> Result<bool, Error> {
    let rendered = render_catalog(catalog_path, options)?;
    is_up_to_date(output_path.as_ref(), &rendered.text)
}

fn is_up_to_date(path: &Path, text: &str) -> Result<bool, Error> {
    match fs::read(path) {
        Ok(current) => Ok(current == text.as_bytes()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{"strings": {"title": {"localizations": {"en": {"stringUnit": {"value": "Welcome"}}}}}}"#;

    #[test]
    fn test_compile_creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("Localizable.xcstrings");
        fs::write(&catalog, CATALOG).unwrap();
        let output = dir.path().join("a").join("b").join("StringConstants.swift");

        let summary = compile(&catalog, &output, &GenerateOptions::default()).unwrap();
        assert!(output.is_file());
        assert!(summary.changed);
        assert_eq!(summary.constants, 1);
        assert_eq!(summary.accessors, 0);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_second_compile_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("Localizable.xcstrings");
        fs::write(&catalog, CATALOG).unwrap();
        let output = dir.path().join("StringConstants.swift");

        assert!(compile(&catalog, &output, &GenerateOptions::default()).unwrap().changed);
        assert!(!compile(&catalog, &output, &GenerateOptions::default()).unwrap().changed);
    }

    #[test]
    fn test_missing_catalog_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("missing.xcstrings");
        let output = dir.path().join("Generated").join("StringConstants.swift");

        let err = compile(&catalog, &output, &GenerateOptions::default()).unwrap_err();
        assert!(err.is_missing_catalog());
        assert!(!output.exists());
        assert!(!output.parent().unwrap().exists());
    }

    #[test]
    fn test_directory_is_not_a_catalog() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("StringConstants.swift");
        let err = compile(dir.path(), &output, &GenerateOptions::default()).unwrap_err();
        assert!(err.is_missing_catalog());
    }

    #[test]
    fn test_check_reports_stale_output() {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("Localizable.xcstrings");
        fs::write(&catalog, CATALOG).unwrap();
        let output = dir.path().join("StringConstants.swift");

        assert!(!check(&catalog, &output, &GenerateOptions::default()).unwrap());
        compile(&catalog, &output, &GenerateOptions::default()).unwrap();
        assert!(check(&catalog, &output, &GenerateOptions::default()).unwrap());

        fs::write(&output, "// edited by hand\n").unwrap();
        assert!(!check(&catalog, &output, &GenerateOptions::default()).unwrap());
    }
}
