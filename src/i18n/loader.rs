// SPDX-License-Identifier: MPL-2.0
//! Sources of Fluent catalogues.
//!
//! Catalogues ship inside the binary (`assets/i18n/<locale>.ftl`) and can be
//! overridden per locale by a directory given on the command line or in the
//! config file.

use crate::config::CATALOGUE_EXTENSION;
use crate::error::TranslationError;
use async_trait::async_trait;
use rust_embed::RustEmbed;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Provides the Fluent source for a locale.
#[async_trait]
pub trait TranslationLoader: Send + Sync {
    /// Returns the catalogue source for `locale`, or `UnknownLocale`.
    async fn load(&self, locale: &LanguageIdentifier) -> Result<String, TranslationError>;

    /// Lists the locales this loader can provide, sorted by tag.
    fn available(&self) -> Vec<LanguageIdentifier>;
}

fn catalogue_name(locale: &LanguageIdentifier) -> String {
    format!("{locale}.{CATALOGUE_EXTENSION}")
}

fn locale_from_file_name(name: &str) -> Option<LanguageIdentifier> {
    let stem = name.strip_suffix(CATALOGUE_EXTENSION)?.strip_suffix('.')?;
    stem.parse().ok()
}

fn sorted(mut locales: Vec<LanguageIdentifier>) -> Vec<LanguageIdentifier> {
    locales.sort_by_key(|locale| locale.to_string());
    locales.dedup();
    locales
}

/// Catalogues compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    fn read(locale: &LanguageIdentifier) -> Result<String, TranslationError> {
        Asset::get(&catalogue_name(locale))
            .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
            .ok_or_else(|| TranslationError::UnknownLocale(locale.to_string()))
    }
}

#[async_trait]
impl TranslationLoader for EmbeddedLoader {
    async fn load(&self, locale: &LanguageIdentifier) -> Result<String, TranslationError> {
        Self::read(locale)
    }

    fn available(&self) -> Vec<LanguageIdentifier> {
        sorted(
            Asset::iter()
                .filter_map(|file| locale_from_file_name(file.as_ref()))
                .collect(),
        )
    }
}

/// Catalogues read from `<dir>/<locale>.ftl`, optionally backed by the
/// embedded ones for locales the directory does not provide.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    dir: PathBuf,
    fallback: Option<EmbeddedLoader>,
}

impl DirectoryLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback: None,
        }
    }

    pub fn with_embedded_fallback(mut self) -> Self {
        self.fallback = Some(EmbeddedLoader);
        self
    }

    fn listed(&self) -> Vec<LanguageIdentifier> {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            log::warn!("Cannot list catalogue directory {}", self.dir.display());
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| locale_from_file_name(&entry.file_name().to_string_lossy()))
            .collect()
    }
}

#[async_trait]
impl TranslationLoader for DirectoryLoader {
    async fn load(&self, locale: &LanguageIdentifier) -> Result<String, TranslationError> {
        let path = self.dir.join(catalogue_name(locale));
        match tokio::fs::read_to_string(&path).await {
            Ok(source) => {
                log::debug!("Loaded catalogue {}", path.display());
                Ok(source)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => match &self.fallback {
                Some(fallback) => fallback.load(locale).await,
                None => Err(TranslationError::UnknownLocale(locale.to_string())),
            },
            Err(err) => Err(TranslationError::Io(format!("{}: {}", path.display(), err))),
        }
    }

    fn available(&self) -> Vec<LanguageIdentifier> {
        let mut locales = self.listed();
        if let Some(fallback) = &self.fallback {
            locales.extend(fallback.available());
        }
        sorted(locales)
    }
}
