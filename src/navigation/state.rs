// SPDX-License-Identifier: MPL-2.0
//! Navigation state owned by the controller and read by the navbar view.

use super::menu::MenuItem;
use unic_langid::LanguageIdentifier;

/// How the progress indicator should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressMode {
    /// Nothing in flight.
    #[default]
    Determinate,
    /// A locale switch or menu fetch is in flight.
    Indeterminate,
}

/// Identifies one menu request. Later requests carry larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading(RequestToken),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub(crate) current_language: Option<LanguageIdentifier>,
    pub(crate) menu_items: Option<Vec<MenuItem>>,
    pub(crate) phase: Phase,
}

impl NavigationState {
    /// Locale of the last successful rebuild.
    pub fn current_language(&self) -> Option<&LanguageIdentifier> {
        self.current_language.as_ref()
    }

    /// Entries of the last successful rebuild, `None` before the first one.
    pub fn menu_items(&self) -> Option<&[MenuItem]> {
        self.menu_items.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn progress_mode(&self) -> ProgressMode {
        match self.phase {
            Phase::Idle => ProgressMode::Determinate,
            Phase::Loading(_) => ProgressMode::Indeterminate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_and_empty() {
        let state = NavigationState::default();
        assert!(state.menu_items().is_none());
        assert!(state.current_language().is_none());
        assert_eq!(state.progress_mode(), ProgressMode::Determinate);
    }

    #[test]
    fn loading_phase_is_indeterminate() {
        let state = NavigationState {
            phase: Phase::Loading(RequestToken(1)),
            ..Default::default()
        };
        assert!(state.is_loading());
        assert_eq!(state.progress_mode(), ProgressMode::Indeterminate);
    }
}
