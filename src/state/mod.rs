//! View-state primitives.
//!
//! Each page owns its state through these building blocks; nothing here is
//! global, and every value is discarded when its page drops. All transitions
//! run synchronously inside the action that triggered them.

pub mod animation;
pub mod drawer;
pub mod filter;
pub mod thresholds;
pub mod toggles;

pub use animation::{AnimationHandle, GlobeRotation};
pub use drawer::Drawer;
pub use filter::ThreatFilters;
pub use thresholds::Thresholds;
pub use toggles::{ImpactPreview, PolicyToggles};
