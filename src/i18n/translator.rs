// SPDX-License-Identifier: MPL-2.0
//! Asynchronous translation collaborator.
//!
//! The navigation controller only talks to [`Translator`]: prepare a locale,
//! resolve a list of keys in it, and make it active once the menu built from
//! those keys is accepted. [`FluentTranslator`] implements it on top of the
//! [`I18n`] store and a [`TranslationLoader`].

use super::fluent::{I18n, TranslationParams};
use super::loader::TranslationLoader;
use crate::error::TranslationError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use unic_langid::LanguageIdentifier;

/// Localized text keyed by message id.
pub type Translations = HashMap<String, String>;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Parses `code` and loads its catalogue on first use, without touching
    /// the active locale.
    async fn prepare_locale(&self, code: &str) -> Result<LanguageIdentifier, TranslationError>;

    /// Makes an already prepared `locale` the active one.
    fn set_active_locale(&self, locale: &LanguageIdentifier) -> Result<(), TranslationError>;

    fn active_locale(&self) -> Option<LanguageIdentifier>;

    /// Makes `code` the active locale, loading its catalogue on first use.
    async fn use_locale(&self, code: &str) -> Result<LanguageIdentifier, TranslationError> {
        let locale = self.prepare_locale(code).await?;
        self.set_active_locale(&locale)?;
        Ok(locale)
    }

    /// Resolves `keys` in the active locale.
    async fn get(
        &self,
        keys: &[&str],
        params: &TranslationParams,
    ) -> Result<Translations, TranslationError>;

    /// Resolves `keys` in `locale`, regardless of the active locale.
    async fn get_in(
        &self,
        locale: &LanguageIdentifier,
        keys: &[&str],
        params: &TranslationParams,
    ) -> Result<Translations, TranslationError>;
}

pub struct FluentTranslator {
    store: RwLock<I18n>,
    loader: Arc<dyn TranslationLoader>,
}

impl std::fmt::Debug for FluentTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluentTranslator")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl FluentTranslator {
    pub fn new(store: I18n, loader: Arc<dyn TranslationLoader>) -> Self {
        Self {
            store: RwLock::new(store),
            loader,
        }
    }

    pub fn available_locales(&self) -> Vec<LanguageIdentifier> {
        self.loader.available()
    }

    pub fn current_locale(&self) -> Option<LanguageIdentifier> {
        self.read().ok()?.current_locale().cloned()
    }

    /// Synchronous lookup for window chrome in the active locale.
    pub fn tr(&self, key: &str) -> String {
        match self.read() {
            Ok(store) => store.tr(key),
            Err(_) => format!("MISSING: {}", key),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, I18n>, TranslationError> {
        self.store.read().map_err(|_| TranslationError::Unavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, I18n>, TranslationError> {
        self.store.write().map_err(|_| TranslationError::Unavailable)
    }

    /// Loads the catalogue for `locale` unless it is already in the store.
    async fn ensure_loaded(&self, locale: &LanguageIdentifier) -> Result<(), TranslationError> {
        if self.read()?.has_locale(locale) {
            return Ok(());
        }
        let source = self.loader.load(locale).await?;
        self.write()?.add_catalogue(locale.clone(), source)?;
        log::info!("Loaded translations for {locale}");
        Ok(())
    }

    fn resolve_keys(
        &self,
        locale: &LanguageIdentifier,
        keys: &[&str],
        params: &TranslationParams,
    ) -> Result<Translations, TranslationError> {
        let store = self.read()?;
        let params = (!params.is_empty()).then_some(params);
        Ok(keys
            .iter()
            .map(|key| {
                // Unknown keys resolve to themselves
                let text = store
                    .resolve(locale, key, params)
                    .unwrap_or_else(|| (*key).to_string());
                ((*key).to_string(), text)
            })
            .collect())
    }
}

#[async_trait]
impl Translator for FluentTranslator {
    async fn prepare_locale(&self, code: &str) -> Result<LanguageIdentifier, TranslationError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(TranslationError::EmptyLanguageCode);
        }
        let locale: LanguageIdentifier = code
            .parse()
            .map_err(|_| TranslationError::InvalidLocale(code.to_string()))?;

        self.ensure_loaded(&locale).await?;

        let fallback = self.read()?.fallback_locale().clone();
        if fallback != locale {
            if let Err(err) = self.ensure_loaded(&fallback).await {
                log::warn!("Fallback translations for {fallback} unavailable: {err}");
            }
        }

        Ok(locale)
    }

    fn set_active_locale(&self, locale: &LanguageIdentifier) -> Result<(), TranslationError> {
        self.write()?.set_locale(locale.clone())?;
        log::debug!("Active locale is now {locale}");
        Ok(())
    }

    fn active_locale(&self) -> Option<LanguageIdentifier> {
        self.current_locale()
    }

    async fn get(
        &self,
        keys: &[&str],
        params: &TranslationParams,
    ) -> Result<Translations, TranslationError> {
        let locale = {
            let store = self.read()?;
            store
                .current_locale()
                .unwrap_or(store.fallback_locale())
                .clone()
        };
        self.resolve_keys(&locale, keys, params)
    }

    async fn get_in(
        &self,
        locale: &LanguageIdentifier,
        keys: &[&str],
        params: &TranslationParams,
    ) -> Result<Translations, TranslationError> {
        self.resolve_keys(locale, keys, params)
    }
}
