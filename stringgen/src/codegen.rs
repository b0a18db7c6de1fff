//! Rendering of `StringConstants.swift` from a parsed catalog.

use std::{collections::HashMap, fmt};

use crate::{
    catalog::{Catalog, Item},
    error::Error,
    identifier::{comment_text, swift_identifier, swift_string_literal},
    placeholder::PlaceholderMode,
};

pub const DEFAULT_TYPE_NAME: &str = "StringConstants";
pub const DEFAULT_IMPORT: &str = "SwiftUI";

/// Knobs for the generated Swift file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Name of the enclosing `enum`.
    pub type_name: String,
    /// Module imported at the top of the file.
    pub import: String,
    pub placeholders: PlaceholderMode,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_TYPE_NAME.to_string(),
            import: DEFAULT_IMPORT.to_string(),
            placeholders: PlaceholderMode::default(),
        }
    }
}

impl GenerateOptions {
    /// File name of the generated source, e.g. `StringConstants.swift`.
    pub fn file_name(&self) -> String {
        format!("{}.swift", self.type_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `static let key = LocalizedStringKey("key")`
    Constant,
    /// `static func key(_ args: CVarArg...) -> String`
    Accessor,
}

/// One generated binding plus the comment block listing its translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub key: &'a str,
    pub identifier: String,
    pub kind: DeclarationKind,
    pub localizations: Vec<(&'a str, &'a str)>,
}

impl<'a> Declaration<'a> {
    /// Builds the declaration for a localized entry. The kind is decided per entry:
    /// one matching locale is enough to make it an accessor.
    pub fn new(key: &'a str, item: &'a Item, placeholders: PlaceholderMode) -> Self {
        let localizations: Vec<(&str, &str)> = item.values().collect();
        let kind = if localizations
            .iter()
            .any(|(_, value)| placeholders.matches(value))
        {
            DeclarationKind::Accessor
        } else {
            DeclarationKind::Constant
        };

        Declaration {
            key,
            identifier: swift_identifier(key),
            kind,
            localizations,
        }
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    // Localizations for '{}':", comment_text(self.key))?;
        for (locale, value) in &self.localizations {
            writeln!(f, "    // - {}: {}", comment_text(locale), comment_text(value))?;
        }

        let literal = swift_string_literal(self.key);
        match self.kind {
            DeclarationKind::Accessor => {
                writeln!(
                    f,
                    "    static func {}(_ args: CVarArg...) -> String {{",
                    self.identifier
                )?;
                writeln!(
                    f,
                    "        return String(format: NSLocalizedString(\"{}\", comment: \"\"), arguments: args)",
                    literal
                )?;
                writeln!(f, "    }}")
            }
            DeclarationKind::Constant => writeln!(
                f,
                "    static let {} = LocalizedStringKey(\"{}\")",
                self.identifier, literal
            ),
        }
    }
}

/// The whole generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftFile<'a> {
    pub type_name: &'a str,
    pub import: &'a str,
    pub declarations: Vec<Declaration<'a>>,
}

impl<'a> SwiftFile<'a> {
    /// Collects one declaration per localized entry, in catalog order.
    pub fn from_catalog(catalog: &'a Catalog, options: &'a GenerateOptions) -> Result<Self, Error> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut declarations = Vec::new();

        for (key, item) in catalog.localized_items() {
            let declaration = Declaration::new(key, item, options.placeholders);
            if let Some(first) = seen.insert(declaration.identifier.clone(), key) {
                return Err(Error::DuplicateIdentifier {
                    identifier: declaration.identifier,
                    first: first.to_string(),
                    second: key.to_string(),
                });
            }
            tracing::debug!(key, kind = ?declaration.kind, "declaration");
            declarations.push(declaration);
        }

        Ok(SwiftFile {
            type_name: &options.type_name,
            import: &options.import,
            declarations,
        })
    }

    pub fn count(&self, kind: DeclarationKind) -> usize {
        self.declarations.iter().filter(|d| d.kind == kind).count()
    }
}

impl fmt::Display for SwiftFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// Auto-generated from String Catalog")?;
        writeln!(f, "// DO NOT EDIT MANUALLY")?;
        writeln!(f)?;
        writeln!(f, "import {}", self.import)?;
        writeln!(f)?;
        writeln!(f, "enum {} {{", self.type_name)?;
        for declaration in &self.declarations {
            write!(f, "{}", declaration)?;
        }
        writeln!(f, "}}")
    }
}

/// Renders the Swift source for `catalog`.
pub fn render(catalog: &Catalog, options: &GenerateOptions) -> Result<String, Error> {
    Ok(SwiftFile::from_catalog(catalog, options)?.to_string())
}
