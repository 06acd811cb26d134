//! Device console output processing
//!
//! The device may prefix a response with a status header terminated by a
//! single `0x01` framing byte; only the payload after the marker is shown
//! to the user. Payloads carrying a Berry `syntax_error` report name the
//! offending source line as `input:<n>` (1-based).

use regex::Regex;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Framing byte separating a response header from the console payload
pub const FRAME_MARKER: char = '\u{1}';

/// Append-only destination for console text shown to the user
pub trait OutputSink {
    fn append(&mut self, text: &str);
}

/// Sink that streams console text straight to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn append(&mut self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }
}

/// Capture sink, used by tests
impl OutputSink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Result of one [`OutputProcessor::process`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOutput {
    /// Console payload with any framing header stripped
    pub text: String,
    /// Zero-based source line implicated by a reported syntax error
    pub highlight: Option<usize>,
}

/// Turns raw device responses into console output and error locations.
///
/// The sink only ever grows; clearing the console is not this
/// component's job.
pub struct OutputProcessor<S> {
    sink: S,
}

impl<S: OutputSink> OutputProcessor<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Strip the framing header, append the payload to the sink and scan
    /// it for a reported syntax error location.
    pub fn process(&mut self, raw: &str) -> ProcessedOutput {
        let payload = match raw.find(FRAME_MARKER) {
            Some(index) => &raw[index + 1..],
            None => raw,
        };
        self.sink.append(payload);
        ProcessedOutput {
            text: payload.to_string(),
            highlight: error_line(payload),
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn input_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"input:(\d+)").expect("valid regex"))
}

/// Zero-based line number of a `syntax_error ... input:<n>` report.
///
/// A `syntax_error` without a parseable `input:<n>` yields no line; the
/// report still reaches the sink untouched.
pub fn error_line(payload: &str) -> Option<usize> {
    if !payload.contains("syntax_error") {
        return None;
    }
    let captures = input_line_re().captures(payload)?;
    let reported: usize = captures[1].parse().ok()?;
    // the device reports 1-based lines, display is 0-based
    Some(reported.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_is_zero_based() {
        assert_eq!(error_line("syntax_error: ... input:7 ..."), Some(6));
    }

    #[test]
    fn error_line_requires_both_markers() {
        assert_eq!(error_line("input:7 but all fine"), None);
        assert_eq!(error_line("syntax_error without a location"), None);
    }

    #[test]
    fn process_appends_payload_to_sink() {
        let mut processor = OutputProcessor::new(String::new());
        processor.process("one\n");
        processor.process("header\u{1}two\n");
        assert_eq!(processor.into_sink(), "one\ntwo\n");
    }
}
