/// Marker appended to a trace line emitted by a call step.
pub const CALL_MARKER: &str = "()";

/// Marker appended to a trace line emitted by a combine step.
pub const COMBINE_MARKER: &str = "||";
