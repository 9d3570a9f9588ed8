//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models/` hold raw data (`Serialize`). Durations are seconds, not
//!   `IN 03H 00M`; JSON output is an API.
//! * `presenters/` turn runtime frames and timetable data into view models and
//!   decide when a badge or tip is shown.
//! * `views/` implement `fmt::Display`: layout, colour and formatting.
//! * `formatters/` are the string helpers views share.
//! * `renderers/` drive output: `ConsoleRenderer` for one-shot commands,
//!   `TuiRenderer` as the live loop's full-screen sink.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, StatusBadge, StatusLevel, Tip,
};
