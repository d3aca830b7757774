// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and localization.
//!
//! # Categories
//!
//! - **Locale**: Locale used when nothing else resolves, and the fallback
//!   catalogue consulted for missing keys
//! - **Files**: Names of files and directories owned by the application

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config file nor the OS yields one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locale whose catalogue answers keys missing from the active catalogue.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en-US";

// ==========================================================================
// File Defaults
// ==========================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "LinguaNav";

/// Name of the preferences file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// File extension of Fluent catalogues.
pub const CATALOGUE_EXTENSION: &str = "ftl";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOCALE.is_empty());
    assert!(!DEFAULT_FALLBACK_LOCALE.is_empty());
    assert!(!APP_NAME.is_empty());
};
