//! Overview (dashboard) page.

use crate::fixtures::{
    ConnectedAsset, FixtureStore, GeoRegion, Kpi, RecentIncident, TrendPoint,
};
use crate::state::{AnimationHandle, GlobeRotation};
use std::time::Duration;
use tracing::debug;

/// View controller for the overview page.
///
/// Mounting starts the globe's frame loop; the handle lives inside the page
/// so teardown on any path stops the animation with it. No other page holds
/// a background resource.
#[derive(Debug)]
pub struct DashboardPage<'a> {
    store: &'a FixtureStore,
    rotation: GlobeRotation,
    animation: Option<AnimationHandle>,
}

impl<'a> DashboardPage<'a> {
    /// Mount without the globe animation (non-interactive rendering).
    pub fn new(store: &'a FixtureStore) -> Self {
        Self {
            store,
            rotation: GlobeRotation::new(),
            animation: None,
        }
    }

    /// Mount and start the globe frame loop.
    pub fn mount_animated(store: &'a FixtureStore, frame_interval: Duration) -> Self {
        let rotation = GlobeRotation::new();
        let animation = AnimationHandle::spin(rotation.clone(), frame_interval);
        debug!(frame_interval_ms = frame_interval.as_millis() as u64, "Globe animation started");
        Self {
            store,
            rotation,
            animation: Some(animation),
        }
    }

    pub fn kpi(&self) -> &'a Kpi {
        &self.store.kpi
    }

    pub fn threat_trend(&self) -> &'a [TrendPoint] {
        &self.store.threat_trend
    }

    pub fn recent_incidents(&self) -> &'a [RecentIncident] {
        &self.store.recent_incidents
    }

    pub fn connected_assets(&self) -> &'a [ConnectedAsset] {
        &self.store.connected_assets
    }

    pub fn geo_threats(&self) -> &'a [GeoRegion] {
        &self.store.geo_threats
    }

    /// Current globe rotation in radians.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation.radians()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(AnimationHandle::is_running)
    }

    /// Explicit unmount of the animation; `Drop` covers every other path.
    pub fn stop_animation(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.stop();
            debug!(radians = self.rotation.radians(), "Globe animation stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn unanimated_mount_has_static_globe() {
        let store = FixtureStore::builtin();
        let page = DashboardPage::new(&store);
        assert!(!page.is_animating());
        assert_eq!(page.rotation_radians(), 0.0);
        assert_eq!(page.recent_incidents().len(), 4);
        assert_eq!(page.connected_assets().len(), 5);
    }

    #[test]
    fn animated_mount_spins_until_teardown() {
        let store = FixtureStore::builtin();
        let mut page = DashboardPage::mount_animated(&store, Duration::from_millis(1));
        assert!(page.is_animating());
        thread::sleep(Duration::from_millis(15));
        assert!(page.rotation_radians() > 0.0);
        page.stop_animation();
        assert!(!page.is_animating());
        let stopped_at = page.rotation_radians();
        thread::sleep(Duration::from_millis(15));
        assert_eq!(page.rotation_radians(), stopped_at);
    }
}
