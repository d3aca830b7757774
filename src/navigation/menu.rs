// SPDX-License-Identifier: MPL-2.0
//! Menu entries and the fixed key list they are built from.

use crate::error::TranslationError;
use crate::i18n::Translations;

/// Message id of the home entry label.
pub const HOME_KEY: &str = "home";

/// Message id of the heroes list label.
///
/// Requested with every rebuild but not rendered: the entry is reserved for
/// when the heroes route exists.
pub const HEROES_LIST_KEY: &str = "heroesList";

/// Keys requested on every rebuild, in menu order.
pub const MENU_KEYS: [&str; 2] = [HOME_KEY, HEROES_LIST_KEY];

/// Link of the home entry.
pub const HOME_LINK: &str = "/";

/// One navigable entry of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    link: String,
    name: String,
}

impl MenuItem {
    pub fn new(link: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            name: name.into(),
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Builds the menu from resolved labels.
///
/// Order follows [`MENU_KEYS`], never the order of `texts`. Fails without
/// producing a partial menu when a rendered label is missing.
pub fn build_menu(texts: &Translations) -> Result<Vec<MenuItem>, TranslationError> {
    let home = texts
        .get(HOME_KEY)
        .ok_or_else(|| TranslationError::MissingKey(HOME_KEY.to_string()))?;

    Ok(vec![MenuItem::new(HOME_LINK, home.clone())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pairs: &[(&str, &str)]) -> Translations {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn build_menu_contains_only_home_entry() {
        let menu = build_menu(&texts(&[("home", "Home"), ("heroesList", "Heroes")]))
            .expect("home is present");
        assert_eq!(menu, vec![MenuItem::new("/", "Home")]);
    }

    #[test]
    fn build_menu_does_not_need_heroes_label() {
        let menu = build_menu(&texts(&[("home", "Accueil")])).expect("home is present");
        assert_eq!(menu[0].name(), "Accueil");
        assert_eq!(menu[0].link(), "/");
    }

    #[test]
    fn build_menu_fails_without_home_label() {
        let err = build_menu(&texts(&[("heroesList", "Heroes")])).expect_err("home missing");
        assert_eq!(err, TranslationError::MissingKey("home".into()));
    }

    #[test]
    fn menu_keys_start_with_home() {
        assert_eq!(MENU_KEYS[0], HOME_KEY);
        assert!(MENU_KEYS.contains(&HEROES_LIST_KEY));
    }
}
