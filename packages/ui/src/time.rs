//! Platform timers and the local calendar date.

use std::time::Duration;

use chrono::NaiveDate;

/// Sleep without blocking the event loop.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Today's date in the user's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
