use std::fmt;

use crate::config::{CALL_MARKER, COMBINE_MARKER};

/// One observable step of the demonstration, carrying the value of the
/// operand that emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A call step fired on an operand.
    Call(i64),
    /// A combine step fired; holds the left operand's value only.
    Combine(i64),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call(val) => write!(f, "{val}{CALL_MARKER}"),
            Self::Combine(val) => write!(f, "{val}{COMBINE_MARKER}"),
        }
    }
}

/// Destination for trace events. Emission is infallible, like `log::Log`.
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Production sink: one rendered event per line on stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&mut self, event: TraceEvent) {
        println!("{event}");
    }
}

/// Test sink: keeps events in memory so order and payloads can be asserted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<TraceEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Events rendered the way `StdoutSink` would print them.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl TraceSink for RecordingSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
