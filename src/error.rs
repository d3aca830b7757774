// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Translation Error: {0}")]
    Translation(#[from] TranslationError),
}

/// Failures reported by the translation collaborator.
/// Each variant maps to a localized message shown by the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum TranslationError {
    /// The requested language code was empty or blank.
    #[error("language code is empty")]
    EmptyLanguageCode,

    /// The language code is not a valid BCP-47 identifier.
    #[error("invalid language code: {0}")]
    InvalidLocale(String),

    /// No catalogue exists for the requested locale.
    #[error("no translations available for locale {0}")]
    UnknownLocale(String),

    /// The catalogue exists but could not be parsed.
    #[error("failed to parse translations for {locale}: {message}")]
    Parse { locale: String, message: String },

    /// A key required to build the menu was absent from the response.
    #[error("translation for key {0} is missing")]
    MissingKey(String),

    /// The catalogue could not be read from disk.
    #[error("failed to read translations: {0}")]
    Io(String),

    /// The translation store lock was poisoned by a panicking writer.
    #[error("translation store is unavailable")]
    Unavailable,
}

impl TranslationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TranslationError::EmptyLanguageCode => "error-language-empty",
            TranslationError::InvalidLocale(_) => "error-language-invalid",
            TranslationError::UnknownLocale(_) => "error-language-unknown",
            TranslationError::Parse { .. } => "error-translation-parse",
            TranslationError::MissingKey(_) => "error-translation-missing-key",
            TranslationError::Io(_) => "error-translation-io",
            TranslationError::Unavailable => "error-translation-unavailable",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn translation_error_converts_into_crate_error() {
        let err: Error = TranslationError::UnknownLocale("xx".into()).into();
        assert_eq!(
            format!("{}", err),
            "Translation Error: no translations available for locale xx"
        );
    }

    #[test]
    fn translation_error_i18n_keys() {
        assert_eq!(
            TranslationError::EmptyLanguageCode.i18n_key(),
            "error-language-empty"
        );
        assert_eq!(
            TranslationError::UnknownLocale("xx".into()).i18n_key(),
            "error-language-unknown"
        );
        assert_eq!(
            TranslationError::MissingKey("home".into()).i18n_key(),
            "error-translation-missing-key"
        );
    }

    #[test]
    fn parse_error_display_names_locale() {
        let err = TranslationError::Parse {
            locale: "fr".into(),
            message: "expected token".into(),
        };
        assert!(format!("{}", err).contains("fr"));
    }
}
