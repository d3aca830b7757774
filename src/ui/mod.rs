// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`navbar`] - Navigation bar with localized menu and language switcher
//! - [`styles`] - Button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod navbar;
pub mod styles;
