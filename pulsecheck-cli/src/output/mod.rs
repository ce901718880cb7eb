//! Output formatting and report sinks for the monitor.

mod json;
mod reporter;
mod text;

pub use json::JsonFormatter;
pub use reporter::{LogReporter, PlainReporter, Reporter};
pub use text::TextFormatter;
