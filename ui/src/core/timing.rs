//! Timer utilities shared by the analysis delay, toasts and the header clock.

use std::time::Duration;

/// Artificial "processing" delay before an analysis result is applied.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2_000);

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3_000);

/// Header clock refresh interval.
pub const CLOCK_TICK: Duration = Duration::from_secs(60);

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}
