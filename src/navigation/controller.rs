// SPDX-License-Identifier: MPL-2.0
//! Navigation menu controller.
//!
//! A language change is split in two halves so the UI thread never blocks:
//! [`NavigationController::change_language`] moves the state to Loading and
//! hands back a [`MenuRequest`], whose future loads the locale and fetches the
//! menu labels; [`NavigationController::apply`] folds the resulting
//! [`MenuResponse`] back into the state and activates its locale on the
//! translator. Each request carries a token and only the latest one may update
//! the menu or the active locale.

use super::menu::{build_menu, MenuItem, MENU_KEYS};
use super::state::{NavigationState, Phase, RequestToken};
use crate::error::TranslationError;
use crate::i18n::{TranslationParams, Translator};
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// What `apply` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The menu was replaced.
    Updated,
    /// A newer request superseded this one; nothing changed.
    Stale,
}

/// An in-flight menu request, ready to be awaited off the UI thread.
pub struct MenuRequest {
    token: RequestToken,
    language: String,
    translator: Arc<dyn Translator>,
}

impl std::fmt::Debug for MenuRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuRequest")
            .field("token", &self.token)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl MenuRequest {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Loads the locale and resolves the menu in it.
    pub async fn run(self) -> MenuResponse {
        let result = self.resolve().await;
        MenuResponse {
            token: self.token,
            language: self.language,
            result,
        }
    }

    async fn resolve(&self) -> Result<(LanguageIdentifier, Vec<MenuItem>), TranslationError> {
        let locale = self.translator.prepare_locale(&self.language).await?;
        let texts = self
            .translator
            .get_in(&locale, &MENU_KEYS, &TranslationParams::new())
            .await?;
        let menu = build_menu(&texts)?;
        Ok((locale, menu))
    }
}

/// Completed [`MenuRequest`].
#[derive(Debug, Clone)]
pub struct MenuResponse {
    token: RequestToken,
    language: String,
    result: Result<(LanguageIdentifier, Vec<MenuItem>), TranslationError>,
}

impl MenuResponse {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// Language code the request was issued for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the request produced a menu.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct NavigationController {
    translator: Arc<dyn Translator>,
    state: NavigationState,
    next_token: u64,
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state)
            .field("next_token", &self.next_token)
            .finish_non_exhaustive()
    }
}

impl NavigationController {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            state: NavigationState::default(),
            next_token: 0,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Starts switching to `language_code`.
    ///
    /// A blank code is rejected without touching the state. Otherwise the
    /// controller enters Loading and any earlier request becomes stale.
    pub fn change_language(&mut self, language_code: &str) -> Result<MenuRequest, TranslationError> {
        let language = language_code.trim();
        if language.is_empty() {
            return Err(TranslationError::EmptyLanguageCode);
        }
        log::debug!("Switching navigation language to {language}");
        Ok(self.issue(language.to_string()))
    }

    fn issue(&mut self, language: String) -> MenuRequest {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.state.phase = Phase::Loading(token);
        MenuRequest {
            token,
            language,
            translator: Arc::clone(&self.translator),
        }
    }

    /// Folds a completed request into the state.
    ///
    /// Responses from superseded requests are dropped. Only an accepted
    /// response moves the translator's active locale. Failures leave the
    /// menu and the active locale as they were and are returned to the caller.
    pub fn apply(&mut self, response: MenuResponse) -> Result<Outcome, TranslationError> {
        if self.state.phase != Phase::Loading(response.token) {
            log::debug!(
                "Dropping stale menu response {:?} for {}",
                response.token,
                response.language
            );
            return Ok(Outcome::Stale);
        }

        self.state.phase = Phase::Idle;
        match response.result {
            Ok((locale, menu)) => {
                if let Err(err) = self.translator.set_active_locale(&locale) {
                    log::error!("Failed to activate {locale}: {err}");
                    return Err(err);
                }
                log::info!("Navigation menu rebuilt for {locale}");
                self.state.current_language = Some(locale);
                self.state.menu_items = Some(menu);
                Ok(Outcome::Updated)
            }
            Err(err) => {
                log::error!(
                    "Failed to switch navigation language to {}: {}",
                    response.language,
                    err
                );
                Err(err)
            }
        }
    }

    /// Runs a full language change and waits for it.
    pub async fn change_language_and_wait(
        &mut self,
        language_code: &str,
    ) -> Result<(), TranslationError> {
        let request = self.change_language(language_code)?;
        let response = request.run().await;
        self.apply(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translations;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory collaborator with a fixed table of labels per language.
    struct FakeTranslator {
        labels: HashMap<&'static str, Vec<(&'static str, &'static str)>>,
        active: Mutex<Option<LanguageIdentifier>>,
    }

    impl FakeTranslator {
        fn new() -> Self {
            let mut labels = HashMap::new();
            labels.insert("en", vec![("home", "Home"), ("heroesList", "Heroes")]);
            labels.insert("fr", vec![("home", "Accueil"), ("heroesList", "Héros")]);
            labels.insert("de", vec![("heroesList", "Helden")]);
            Self {
                labels,
                active: Mutex::new(None),
            }
        }

        fn lookup(
            &self,
            locale: &LanguageIdentifier,
            keys: &[&str],
        ) -> Result<Translations, TranslationError> {
            let table = self
                .labels
                .get(locale.to_string().as_str())
                .ok_or_else(|| TranslationError::UnknownLocale(locale.to_string()))?;
            Ok(table
                .iter()
                .filter(|(key, _)| keys.contains(key))
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect())
        }
    }

    #[async_trait]
    impl Translator for FakeTranslator {
        async fn prepare_locale(&self, code: &str) -> Result<LanguageIdentifier, TranslationError> {
            let locale: LanguageIdentifier = code
                .parse()
                .map_err(|_| TranslationError::InvalidLocale(code.to_string()))?;
            if !self.labels.contains_key(code) {
                return Err(TranslationError::UnknownLocale(code.to_string()));
            }
            Ok(locale)
        }

        fn set_active_locale(&self, locale: &LanguageIdentifier) -> Result<(), TranslationError> {
            *self.active.lock().expect("lock") = Some(locale.clone());
            Ok(())
        }

        fn active_locale(&self) -> Option<LanguageIdentifier> {
            self.active.lock().expect("lock").clone()
        }

        async fn get(
            &self,
            keys: &[&str],
            _params: &TranslationParams,
        ) -> Result<Translations, TranslationError> {
            let active = self.active.lock().expect("lock").clone();
            let locale = active.ok_or(TranslationError::Unavailable)?;
            self.lookup(&locale, keys)
        }

        async fn get_in(
            &self,
            locale: &LanguageIdentifier,
            keys: &[&str],
            _params: &TranslationParams,
        ) -> Result<Translations, TranslationError> {
            self.lookup(locale, keys)
        }
    }

    fn controller() -> NavigationController {
        controller_with_translator().0
    }

    fn controller_with_translator() -> (NavigationController, Arc<FakeTranslator>) {
        let translator = Arc::new(FakeTranslator::new());
        (NavigationController::new(translator.clone()), translator)
    }

    fn active(translator: &FakeTranslator) -> Option<String> {
        translator.active_locale().map(|l| l.to_string())
    }

    #[tokio::test]
    async fn change_language_builds_home_entry() {
        let mut nav = controller();
        assert!(nav.state().menu_items().is_none());

        nav.change_language_and_wait("en").await.expect("en succeeds");

        assert_eq!(
            nav.state().menu_items(),
            Some(&[MenuItem::new("/", "Home")][..])
        );
        assert_eq!(nav.state().current_language().map(|l| l.to_string()), Some("en".into()));
        assert!(!nav.state().is_loading());
    }

    #[tokio::test]
    async fn change_language_to_french() {
        let mut nav = controller();
        nav.change_language_and_wait("fr").await.expect("fr succeeds");
        assert_eq!(
            nav.state().menu_items(),
            Some(&[MenuItem::new("/", "Accueil")][..])
        );
    }

    #[tokio::test]
    async fn rejected_switch_keeps_menu() {
        let mut nav = controller();
        nav.change_language_and_wait("en").await.expect("en succeeds");
        let before = nav.state().clone();

        let err = nav
            .change_language_and_wait("xx")
            .await
            .expect_err("xx is unknown");

        assert_eq!(err, TranslationError::UnknownLocale("xx".into()));
        assert_eq!(nav.state(), &before);
    }

    #[tokio::test]
    async fn rejected_first_switch_leaves_menu_unset() {
        let mut nav = controller();
        assert!(nav.change_language_and_wait("xx").await.is_err());
        assert!(nav.state().menu_items().is_none());
        assert!(!nav.state().is_loading());
    }

    #[tokio::test]
    async fn missing_home_label_fails_whole_rebuild() {
        let (mut nav, translator) = controller_with_translator();
        nav.change_language_and_wait("fr").await.expect("fr succeeds");

        let err = nav
            .change_language_and_wait("de")
            .await
            .expect_err("de lacks home");

        assert_eq!(err, TranslationError::MissingKey("home".into()));
        assert_eq!(
            nav.state().menu_items(),
            Some(&[MenuItem::new("/", "Accueil")][..])
        );
        assert_eq!(nav.state().current_language().map(|l| l.to_string()), Some("fr".into()));
        assert_eq!(active(&translator), Some("fr".into()));
    }

    #[tokio::test]
    async fn same_language_twice_yields_same_menu() {
        let mut nav = controller();
        nav.change_language_and_wait("fr").await.expect("first");
        let first = nav.state().menu_items().map(<[MenuItem]>::to_vec);
        nav.change_language_and_wait("fr").await.expect("second");
        assert_eq!(nav.state().menu_items().map(<[MenuItem]>::to_vec), first);
    }

    #[test]
    fn blank_language_is_rejected_without_loading() {
        let mut nav = controller();
        let err = nav.change_language("   ").expect_err("blank code");
        assert_eq!(err, TranslationError::EmptyLanguageCode);
        assert!(!nav.state().is_loading());
    }

    #[test]
    fn change_language_enters_loading() {
        let mut nav = controller();
        let request = nav.change_language("fr").expect("request issued");
        assert_eq!(nav.state().phase(), Phase::Loading(request.token()));
        assert_eq!(request.language(), "fr");
    }

    #[tokio::test]
    async fn running_a_request_does_not_activate_its_locale() {
        let (mut nav, translator) = controller_with_translator();
        nav.change_language_and_wait("en").await.expect("en succeeds");

        let response = nav.change_language("fr").expect("request").run().await;
        assert!(response.is_ok());
        assert_eq!(active(&translator), Some("en".into()));

        assert_eq!(nav.apply(response), Ok(Outcome::Updated));
        assert_eq!(active(&translator), Some("fr".into()));
    }

    #[tokio::test]
    async fn stale_response_is_ignored() {
        let (mut nav, translator) = controller_with_translator();
        let first = nav.change_language("en").expect("first request");
        let second = nav.change_language("fr").expect("second request");

        // The second request completes first, then the first one straggles in
        let second_response = second.run().await;
        let first_response = first.run().await;

        assert_eq!(nav.apply(second_response), Ok(Outcome::Updated));
        assert_eq!(nav.apply(first_response), Ok(Outcome::Stale));
        assert_eq!(
            nav.state().menu_items(),
            Some(&[MenuItem::new("/", "Accueil")][..])
        );
        assert_eq!(translator.active_locale().as_ref(), nav.state().current_language());
        assert_eq!(active(&translator), Some("fr".into()));
    }

    #[tokio::test]
    async fn stale_failure_does_not_end_loading() {
        let mut nav = controller();
        let failing = nav.change_language("xx").expect("first request");
        let pending = nav.change_language("fr").expect("second request");

        let failed = failing.run().await;
        assert!(!failed.is_ok());
        assert_eq!(nav.apply(failed), Ok(Outcome::Stale));
        assert_eq!(nav.state().phase(), Phase::Loading(pending.token()));

        let done = pending.run().await;
        assert_eq!(nav.apply(done), Ok(Outcome::Updated));
        assert!(!nav.state().is_loading());
    }
}
