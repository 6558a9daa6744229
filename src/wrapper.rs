use log::debug;

use crate::trace::{TraceEvent, TraceSink};

/// A value with traced operations. The held value is fixed at construction;
/// combining two wrappers produces a new instance rather than mutating either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper {
    val: i64,
}

impl Wrapper {
    pub fn new(val: i64) -> Self {
        Self { val }
    }

    pub fn val(&self) -> i64 {
        self.val
    }

    /// The call step: traces `<val>()` and hands back the same instance so
    /// the result can be used as an operand of a further operation.
    pub fn invoke<S: TraceSink>(&self, sink: &mut S) -> &Self {
        sink.emit(TraceEvent::Call(self.val));
        self
    }

    /// The combine step: traces `<val>||` for the left operand only, then
    /// returns a new wrapper holding the product of both values. Overflow is
    /// outside the demonstrated contract and is left to the native `i64`
    /// multiply.
    pub fn combine<S: TraceSink>(&self, other: &Wrapper, sink: &mut S) -> Wrapper {
        sink.emit(TraceEvent::Combine(self.val));
        let product = self.val * other.val;
        debug!("combined {} and {} into {}", self.val, other.val, product);
        Wrapper::new(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RecordingSink;

    #[test]
    fn test_invoke_returns_same_instance() {
        let mut sink = RecordingSink::new();
        let wrapper = Wrapper::new(2);

        let returned = wrapper.invoke(&mut sink);

        assert!(std::ptr::eq(returned, &wrapper));
        assert_eq!(sink.events(), [TraceEvent::Call(2)]);
    }

    #[test]
    fn test_invoke_is_idempotent() {
        let mut sink = RecordingSink::new();
        let wrapper = Wrapper::new(9);

        wrapper.invoke(&mut sink);
        wrapper.invoke(&mut sink);
        wrapper.invoke(&mut sink);

        assert_eq!(wrapper.val(), 9);
        assert_eq!(
            sink.events(),
            [
                TraceEvent::Call(9),
                TraceEvent::Call(9),
                TraceEvent::Call(9),
            ]
        );
    }

    #[test]
    fn test_combine_traces_left_operand_only() {
        let mut sink = RecordingSink::new();
        let left = Wrapper::new(2);
        let right = Wrapper::new(3);

        let combined = left.combine(&right, &mut sink);

        assert_eq!(combined.val(), 6);
        assert_eq!(sink.events(), [TraceEvent::Combine(2)]);
    }

    #[test]
    fn test_combine_leaves_operands_unchanged() {
        let mut sink = RecordingSink::new();
        let left = Wrapper::new(-1);
        let right = Wrapper::new(4);

        let combined = left.combine(&right, &mut sink);

        assert_eq!(combined.val(), -4);
        assert_eq!(left.val(), -1);
        assert_eq!(right.val(), 4);
    }
}
