use std::time::Duration;

use epic_game_api::contract::Timer;

/// Browser timers on wasm, tokio elsewhere.
#[derive(Clone, Copy, Default)]
pub struct AppTimer;

impl Timer for AppTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
