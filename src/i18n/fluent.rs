// SPDX-License-Identifier: MPL-2.0
//! Fluent catalogue store.
//!
//! Holds one bundle per loaded locale plus the active and fallback locales.
//! Bundles use the concurrent memoizer so the store can be shared with the
//! async translator behind a lock.

use crate::config::{Config, DEFAULT_FALLBACK_LOCALE};
use crate::error::TranslationError;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Named values substituted into Fluent placeables.
pub type TranslationParams = HashMap<String, String>;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: Option<LanguageIdentifier>,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(default_fallback())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("loaded", &self.loaded_locales())
            .field("current_locale", &self.current_locale)
            .field("fallback_locale", &self.fallback_locale)
            .finish()
    }
}

fn default_fallback() -> LanguageIdentifier {
    // Checked at compile time by config::defaults
    DEFAULT_FALLBACK_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

impl I18n {
    pub fn new(fallback_locale: LanguageIdentifier) -> Self {
        Self {
            bundles: HashMap::new(),
            current_locale: None,
            fallback_locale,
        }
    }

    /// Builds a store whose fallback locale comes from the config,
    /// ignoring unparsable values.
    pub fn from_config(config: &Config) -> Self {
        let fallback = config
            .i18n
            .fallback_language
            .parse()
            .unwrap_or_else(|_| {
                log::warn!(
                    "Ignoring invalid fallback language {:?}",
                    config.i18n.fallback_language
                );
                default_fallback()
            });
        Self::new(fallback)
    }

    /// Parses `source` and installs it as the catalogue for `locale`,
    /// replacing any previous one.
    pub fn add_catalogue(
        &mut self,
        locale: LanguageIdentifier,
        source: String,
    ) -> Result<(), TranslationError> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            TranslationError::Parse {
                locale: locale.to_string(),
                message: join_errors(&errors),
            }
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Isolation marks would leak into plain-text widgets
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| TranslationError::Parse {
                locale: locale.to_string(),
                message: join_errors(&errors),
            })?;

        self.bundles.insert(locale, bundle);
        Ok(())
    }

    pub fn has_locale(&self, locale: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(locale)
    }

    pub fn loaded_locales(&self) -> Vec<LanguageIdentifier> {
        let mut locales: Vec<_> = self.bundles.keys().cloned().collect();
        locales.sort_by_key(|locale| locale.to_string());
        locales
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> Result<(), TranslationError> {
        if !self.bundles.contains_key(&locale) {
            return Err(TranslationError::UnknownLocale(locale.to_string()));
        }
        self.current_locale = Some(locale);
        Ok(())
    }

    pub fn current_locale(&self) -> Option<&LanguageIdentifier> {
        self.current_locale.as_ref()
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    /// Formats `key` in `locale` only, without fallback.
    pub fn lookup(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        params: Option<&TranslationParams>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;

        let args = params.map(|params| {
            let mut args = FluentArgs::new();
            for (name, value) in params {
                args.set(name.as_str(), value.as_str());
            }
            args
        });

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args.as_ref(), &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            log::debug!("Formatting {key} in {locale} failed: {errors:?}");
            None
        }
    }

    /// Formats `key` in `locale`, then in the fallback locale.
    pub fn resolve(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        params: Option<&TranslationParams>,
    ) -> Option<String> {
        self.lookup(locale, key, params).or_else(|| {
            if locale == &self.fallback_locale {
                None
            } else {
                self.lookup(&self.fallback_locale, key, params)
            }
        })
    }

    /// Translates `key` in the active locale for window chrome.
    pub fn tr(&self, key: &str) -> String {
        let locale = self.current_locale.as_ref().unwrap_or(&self.fallback_locale);
        self.resolve(locale, key, None)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }
}

fn join_errors<E: std::fmt::Debug>(errors: &[E]) -> String {
    errors
        .iter()
        .map(|error| format!("{error:?}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Picks the startup locale among `available`: CLI flag, then config, then OS.
pub fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
