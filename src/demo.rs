use crate::trace::TraceSink;
use crate::wrapper::Wrapper;

/// Evaluates `Wrapper(a).invoke() combined with Wrapper(b).invoke()` as a
/// single expression and returns the combined result.
///
/// The receiver and the arguments of the final `combine` are evaluated left
/// to right, so the sink observes the left call, then the right call, then
/// the combine, in that order.
pub fn run<S: TraceSink>(a: i64, b: i64, sink: &mut S) -> Wrapper {
    let left = Wrapper::new(a);
    let right = Wrapper::new(b);

    left.invoke(sink).combine(right.invoke(sink), sink)
}
