//! Content task
//!
//! The cooperative main flow: polls the content director, which draws into
//! the staging surface and commits frames, and applies host requests as
//! they arrive. While the display is off it only waits for requests, waking
//! at least every `IDLE_DELAY_MS`.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};

use marquee_core::{ContentDirector, FrameStager, SignConfig};

use crate::channels::{FRAME_EXCHANGE, REQUEST_CHANNEL};

/// Poll period while the display is on; the director gates the real cadence
const POLL_INTERVAL_MS: u64 = 1;

/// Wait between checks while the display is off
const IDLE_DELAY_MS: u64 = 100;

/// Content task - draw frames and apply host requests
#[embassy_executor::task]
pub async fn content_task(config: &'static SignConfig) {
    info!("Content task started: mode {:?}", config.message.mode);

    let mut stager = FrameStager::new(&FRAME_EXCHANGE, config.geometry());
    let mut director = ContentDirector::from_config(config);
    director.start(&mut stager);

    loop {
        let wait_ms = if director.is_display_enabled() {
            director.poll(Instant::now().as_millis(), &mut stager);
            POLL_INTERVAL_MS
        } else {
            IDLE_DELAY_MS
        };

        let request = match select(
            REQUEST_CHANNEL.receive(),
            Timer::after(Duration::from_millis(wait_ms)),
        )
        .await
        {
            Either::First(request) => request,
            Either::Second(()) => continue,
        };

        debug!("Applying {:?}", request);
        if let Err(e) = director.apply(request, Instant::now().as_millis(), &mut stager) {
            warn!("Request rejected: {:?}", e);
        }
    }
}
