//! Async helpers for deferred work on the UI event loop.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydration, the simulated login latency, the post-login redirect, and
//! notice expiry all suspend on `sleep`. Completion callbacks check a
//! `MountFlag` so work finishing after its component unmounted is dropped.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Suspend for `duration`; resolves immediately outside the browser.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}

/// Shared liveness flag for a mounted component.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl MountFlag {
    /// A flag that starts mounted and is released manually.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A flag released when the current reactive owner is cleaned up.
    #[must_use]
    pub fn for_current_owner() -> Self {
        let flag = Self::new();
        let release = flag.clone();
        leptos::prelude::on_cleanup(move || release.release());
        flag
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}
