pub mod formatting;
pub mod logging;
pub mod path;

pub use formatting::format_number;
