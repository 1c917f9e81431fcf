/// Watches a benchmark while it measures.
///
/// [`measure`](crate::measure) hands every recorded size to the observer as
/// an [`Event`](crate::Event). Answering `Some(Action::StopEarly)` ends the
/// measurement and keeps the sizes timed so far; `None` moves on to the next
/// size.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` watches
/// without ever intervening.
pub trait Observer<E, A> {
    /// Inspects one event and optionally asks for an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
