pub mod bar;
pub mod time;

pub use bar::progress_bar;
pub use time::countdown;
