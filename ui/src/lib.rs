//! Shared UI crate for the DDoS Analyzer dashboard: analysis core, app state,
//! components, exports and localization. The `web` and `desktop` crates only
//! add routing and launch configuration.

pub mod app;
pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod report;
pub mod state;
pub mod view;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

mod shell;
pub use shell::AppShell;
