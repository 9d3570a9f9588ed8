pub mod cache;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod ticker;

pub use cache::DateCache;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, NightBaseline, expand_tilde, resolve_config_path};
pub use controller::{ControllerOptions, DateModeController, Mode};
pub use error::{Error, Result};
pub use frame::{EventRow, Frame};
pub use ticker::{LiveTicker, RenderSink, TickerEvent, drive};
