#![forbid(unsafe_code)]
//! Typed Swift constants from Xcode String Catalogs.
//!
//! Reads a `Localizable.xcstrings` document and writes a `StringConstants.swift`
//! with one declaration per localized key: a `LocalizedStringKey` constant, or a
//! formatting function when a translation carries a `%@` placeholder.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringgen::{GenerateOptions, compile};
//!
//! let summary = compile(
//!     "Giveaway/Resources/Localizable.xcstrings",
//!     "Giveaway/Resources/Generated/StringConstants.swift",
//!     &GenerateOptions::default(),
//! )?;
//! println!("wrote {}", summary.output.display());
//! # Ok::<(), stringgen::Error>(())
//! ```
//!
//! # Generated shape
//!
//! ```swift
//! // Auto-generated from String Catalog
//! // DO NOT EDIT MANUALLY
//!
//! import SwiftUI
//!
//! enum StringConstants {
//!     // Localizations for 'greeting':
//!     // - en: Hello %@
//!     static func greeting(_ args: CVarArg...) -> String {
//!         return String(format: NSLocalizedString("greeting", comment: ""), arguments: args)
//!     }
//!     // Localizations for 'title':
//!     // - en: Welcome
//!     static let title = LocalizedStringKey("title")
//! }
//! ```

pub mod catalog;
pub mod codegen;
pub mod compiler;
pub mod error;
pub mod identifier;
pub mod placeholder;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{Catalog, Item, Localization, StringUnit},
    codegen::{Declaration, DeclarationKind, GenerateOptions, SwiftFile, render},
    compiler::{Rendered, Summary, check, compile, render_catalog},
    error::Error,
    placeholder::PlaceholderMode,
};
