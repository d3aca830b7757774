// SPDX-License-Identifier: MPL-2.0
//! `lingua_nav` is a small navigation shell built with the Iced GUI framework.
//!
//! Its navigation bar switches the UI language at runtime and rebuilds the
//! menu labels from Fluent catalogues after every successful switch.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod ui;
