//! Frame-callback loop for the rotating globe.
//!
//! The globe is the one continuously-redrawing element in the console, and
//! therefore the one resource that needs scoped acquisition and release: the
//! frame callback is registered on mount and must be cancelled on unmount,
//! on every exit path. [`AnimationHandle`] guarantees that by stopping the
//! loop on `Drop`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Rotation advanced per frame, in radians.
pub const RADIANS_PER_FRAME: f64 = 0.002;

/// Shared rotation state advanced once per animation frame.
#[derive(Debug, Clone, Default)]
pub struct GlobeRotation {
    radians: Arc<Mutex<f64>>,
}

impl GlobeRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame.
    pub fn tick(&self) {
        let mut radians = self.radians.lock().unwrap_or_else(|e| e.into_inner());
        *radians += RADIANS_PER_FRAME;
    }

    /// Current rotation in radians.
    pub fn radians(&self) -> f64 {
        *self.radians.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Handle to a running frame loop.
///
/// The loop invokes its callback once per frame interval until [`stop`] is
/// called or the handle drops. `stop` is idempotent and joins the frame
/// thread, so no callback fires after it returns.
///
/// [`stop`]: AnimationHandle::stop
#[derive(Debug)]
pub struct AnimationHandle {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl AnimationHandle {
    /// Register a frame callback firing every `frame_interval`.
    pub fn start<F>(frame_interval: Duration, mut on_frame: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let thread = thread::spawn(move || {
            while flag.load(Ordering::Relaxed) {
                on_frame();
                thread::sleep(frame_interval);
            }
        });
        Self {
            running,
            thread: Some(thread),
        }
    }

    /// Convenience: drive a [`GlobeRotation`] at the given frame interval.
    pub fn spin(rotation: GlobeRotation, frame_interval: Duration) -> Self {
        Self::start(frame_interval, move || rotation.tick())
    }

    /// Stop the loop and wait for the frame thread to exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn rotation_advances_per_tick() {
        let rotation = GlobeRotation::new();
        assert_eq!(rotation.radians(), 0.0);
        rotation.tick();
        rotation.tick();
        assert!((rotation.radians() - 2.0 * RADIANS_PER_FRAME).abs() < 1e-12);
    }

    #[test]
    fn no_frames_fire_after_stop_returns() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let mut handle = AnimationHandle::start(Duration::from_millis(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(20));
        handle.stop();
        let after_stop = fired.load(Ordering::SeqCst);
        assert!(after_stop > 0);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(fired.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut handle = AnimationHandle::start(Duration::from_millis(1), || {});
        handle.stop();
        handle.stop();
        assert!(!handle.is_running());
    }

    #[test]
    fn drop_stops_the_loop() {
        let rotation = GlobeRotation::new();
        {
            let _handle = AnimationHandle::spin(rotation.clone(), Duration::from_millis(1));
            thread::sleep(Duration::from_millis(10));
        }
        let at_drop = rotation.radians();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(rotation.radians(), at_drop);
    }
}
