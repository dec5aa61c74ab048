//! Control bus task
//!
//! Acts as an I2C target. Host writes go through the protocol decoder and
//! complete requests are queued for the content task. Host reads get one
//! status byte carrying the auxiliary input level.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_rp::i2c_slave::{Command, I2cSlave};
use embassy_rp::peripherals::I2C0;

use marquee_hal::{EhInput, InputPin};
use marquee_protocol::{BusDecoder, StatusByte};

use crate::channels::REQUEST_CHANNEL;

/// Largest single bus write accepted
const RX_BUF_SIZE: usize = 64;

/// Fill byte when the host reads past the status byte
const READ_FILL: u8 = 0x00;

pub type I2cBus = I2cSlave<'static, I2C0>;

/// Bus task - decode host writes and answer status reads
#[embassy_executor::task]
pub async fn bus_task(mut dev: I2cBus, mut aux: EhInput<Input<'static>>) {
    info!("Bus task started");

    let mut decoder = BusDecoder::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match dev.listen(&mut buf).await {
            Ok(Command::Write(len)) => {
                handle_write(&mut decoder, &buf[..len]).await;
            }
            Ok(Command::WriteRead(len)) => {
                handle_write(&mut decoder, &buf[..len]).await;
                respond_status(&mut dev, &mut aux).await;
            }
            Ok(Command::Read) => {
                respond_status(&mut dev, &mut aux).await;
            }
            Ok(Command::GeneralCall(len)) => {
                trace!("General call ignored ({} bytes)", len);
            }
            Err(e) => {
                warn!("I2C listen error: {:?}, dropping partial messages", e);
                decoder.reset();
            }
        }
    }
}

/// Decode one write and queue any completed request
async fn handle_write(decoder: &mut BusDecoder, write: &[u8]) {
    trace!("RX: {} bytes", write.len());

    match decoder.feed(write) {
        Ok(Some(request)) => {
            debug!("Request: {:?}", request);
            REQUEST_CHANNEL.send(request).await;
        }
        Ok(None) => {
            // Text message still incomplete
        }
        Err(e) => {
            warn!("Ignoring bus write: {:?}", e);
        }
    }
}

async fn respond_status(dev: &mut I2cBus, aux: &mut EhInput<Input<'static>>) {
    let status = StatusByte::from_input(aux.is_high());
    trace!("Status read: {}", status);

    if let Err(e) = dev.respond_and_fill(&[status.to_byte()], READ_FILL).await {
        warn!("I2C read response error: {:?}", e);
    }
}
