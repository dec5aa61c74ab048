//! Marquee - LED Dot-Matrix Sign Firmware
//!
//! Main firmware binary for RP2040 boards driving an 8x8 or 16x16
//! shift-register LED matrix. A host sets the message, scroll speed and
//! display mode over I2C.
//!
//! Pin map:
//! - GPIO0 / GPIO1: I2C0 SDA / SCL (target)
//! - GPIO2 / GPIO3 / GPIO4: shift chain data / clock / latch
//! - GPIO5: auxiliary input reported on status reads

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c_slave::{self, I2cSlave};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::I2C0;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use marquee_core::config::parse_config;
use marquee_core::{AnimationSource, RefreshDriver, SignConfig};
use marquee_hal::{BitBangChain, BitOrder, EhInput, EhOutput};

mod channels;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit sign.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../sign.toml");

bind_interrupts!(struct Irqs {
    I2C0_IRQ => embassy_rp::i2c::InterruptHandler<I2C0>;
});

/// Executor for the refresh task; preempts everything on the thread executor
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

static SIGN_CONFIG: StaticCell<SignConfig> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Marquee firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: &'static SignConfig = SIGN_CONFIG.init(load_config());
    let geometry = config.geometry();
    info!(
        "Panel {}x{}, {} blank cycles, bus address {:#04x}",
        geometry.rows(),
        geometry.cols(),
        geometry.blank_cycles(),
        config.bus.address
    );

    // Panel shift chain
    let chain = BitBangChain::new(
        EhOutput::new(Output::new(p.PIN_2, Level::Low), false),
        EhOutput::new(Output::new(p.PIN_3, Level::Low), false),
        EhOutput::new(Output::new(p.PIN_4, Level::Low), false),
        BitOrder::LsbFirst,
    );
    let driver = RefreshDriver::new(
        chain,
        &channels::FRAME_EXCHANGE,
        geometry,
        AnimationSource::for_geometry(&geometry),
    );

    // Refresh runs from a software interrupt above the thread executor
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(tasks::refresh_task(driver)).unwrap();

    // Control bus
    let mut i2c_config = i2c_slave::Config::default();
    i2c_config.addr = config.bus.address as u16;
    let i2c = I2cSlave::new(p.I2C0, p.PIN_1, p.PIN_0, Irqs, i2c_config);
    let aux = EhInput::new(Input::new(p.PIN_5, Pull::Down));

    spawner.spawn(tasks::bus_task(i2c, aux)).unwrap();
    spawner.spawn(tasks::content_task(config)).unwrap();

    info!("All tasks spawned");
}

/// Parse and validate the embedded sign.toml, falling back to defaults
fn load_config() -> SignConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse sign.toml: {:?}, using defaults", e);
            return SignConfig::new();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!("Configuration loaded from sign.toml");
            config
        }
        Err(e) => {
            warn!("Invalid sign.toml: {:?}, using defaults", e);
            SignConfig::new()
        }
    }
}
