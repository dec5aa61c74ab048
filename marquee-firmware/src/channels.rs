//! Inter-task communication
//!
//! The bus task hands complete requests to the content task. The refresh
//! task shares nothing here: it talks to the main flow only through the
//! frame exchange.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use marquee_core::FrameExchange;
use marquee_protocol::Request;

/// Channel capacity for host requests
const REQUEST_CHANNEL_SIZE: usize = 4;

/// Complete host requests, in arrival order
pub static REQUEST_CHANNEL: Channel<CriticalSectionRawMutex, Request, REQUEST_CHANNEL_SIZE> =
    Channel::new();

/// Frame handoff between the content task and the refresh task
pub static FRAME_EXCHANGE: FrameExchange = FrameExchange::new();
