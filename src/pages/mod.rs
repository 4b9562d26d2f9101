//! Page view controllers.
//!
//! One struct per console page, owning that page's state and borrowing the
//! fixture store read-only. State never crosses page boundaries: a page's
//! filters, selection, toggles, and thresholds drop with the page.

pub mod activity;
pub mod behavior;
pub mod dashboard;
pub mod integrations;
pub mod policies;
pub mod settings;
pub mod threats;

pub use activity::{ActivityPage, RiskIndicators};
pub use behavior::BehaviorPage;
pub use dashboard::DashboardPage;
pub use integrations::{IntegrationsPage, StatusTallies};
pub use policies::PoliciesPage;
pub use settings::SettingsPage;
pub use threats::ThreatsPage;
