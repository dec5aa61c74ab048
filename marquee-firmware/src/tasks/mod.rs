//! Embassy async tasks
//!
//! - `refresh`: runs on the interrupt executor, one panel row per tick
//! - `content`: cooperative main flow, draws frames and applies requests
//! - `bus`: I2C target, decodes host writes and answers status reads

pub mod bus;
pub mod content;
pub mod refresh;

pub use bus::bus_task;
pub use content::content_task;
pub use refresh::refresh_task;
