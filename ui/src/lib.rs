//! Shared UI crate for Shapescore. Most cross-platform logic and views live here.

use dioxus::prelude::*;

pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    // Shared application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Unified theme shared by every platform shell. Desktop embeds the same file
/// via `include_str!`; see `desktop/src/main.rs`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
