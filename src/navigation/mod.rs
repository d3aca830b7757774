// SPDX-License-Identifier: MPL-2.0
//! Navigation menu state and its language-switch-driven rebuild.
//!
//! - [`menu`] - Menu entries and the fixed key list
//! - [`state`] - State read by the navbar view
//! - [`controller`] - Locale switch followed by menu rebuild

pub mod controller;
pub mod menu;
pub mod state;

pub use controller::{MenuRequest, MenuResponse, NavigationController, Outcome};
pub use menu::{build_menu, MenuItem, MENU_KEYS};
pub use state::{NavigationState, Phase, ProgressMode, RequestToken};
