//! Script buffers, in-buffer directives and console output processing

pub mod buffer;
pub mod directives;
pub mod output;

pub use buffer::ScriptBuffer;
pub use output::{OutputProcessor, OutputSink, ProcessedOutput};
