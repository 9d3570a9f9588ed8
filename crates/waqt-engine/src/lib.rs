// Engine module - pure timeline logic (schedule, status, progress)
// Sits between raw day data (types/providers) and the runtime controller.
// Nothing in here reads the system clock or the environment: "now" and the
// operating timezone are always parameters.

pub mod duration;
pub mod hijri;
pub mod progress;
pub mod resolver;
pub mod schedule;
mod status;

pub use duration::{DeltaLabel, delta_label, format_duration};
pub use hijri::HijriDate;
pub use progress::{
    DEFAULT_RING_RADIUS, fraction, ring_circumference, ring_dash_offset, span_fraction,
};
pub use resolver::resolve;
pub use schedule::{build_schedule, clock_time_of, local_midnight, resolve_instant};
pub use status::{NightContext, evaluate};

pub use chrono_tz::Tz;
