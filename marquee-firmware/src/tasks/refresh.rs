//! Panel refresh task
//!
//! Runs on the high-priority interrupt executor so it preempts the content
//! and bus tasks at any await point. Each tick drives one row (or one blank
//! cycle) and never blocks or logs.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use marquee_core::RefreshDriver;
use marquee_hal::{BitBangChain, EhOutput};

/// Refresh ticks per second
pub const REFRESH_HZ: u64 = 8_000;

/// Bit-banged data/clock/latch chain on RP2040 GPIO
pub type PanelChain =
    BitBangChain<EhOutput<Output<'static>>, EhOutput<Output<'static>>, EhOutput<Output<'static>>>;

pub type PanelRefresh = RefreshDriver<'static, PanelChain>;

/// Refresh task - one driver tick per ticker period
#[embassy_executor::task]
pub async fn refresh_task(mut driver: PanelRefresh) {
    let geometry = driver.geometry();
    info!(
        "Refresh task started: {} Hz, {} ticks per frame",
        REFRESH_HZ,
        geometry.ticks_per_frame()
    );

    let mut ticker = Ticker::every(Duration::from_hz(REFRESH_HZ));

    loop {
        ticker.next().await;
        driver.tick();
    }
}
