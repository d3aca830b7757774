// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Catalogues embedded in the binary or read from a directory of `.ftl` files
//! - Runtime language switching through the async [`Translator`] seam
//! - Fallback to a default locale, then to the key, when translations are missing

pub mod fluent;
pub mod loader;
pub mod translator;

pub use fluent::{resolve_locale, I18n, TranslationParams};
pub use loader::{DirectoryLoader, EmbeddedLoader, TranslationLoader};
pub use translator::{FluentTranslator, Translations, Translator};
