/// Watches a solver as it evaluates the segment endpoints.
///
/// The solver hands every evaluated endpoint to `observe` before deciding
/// whether to keep it. Returning `Some(action)` steers that decision, for
/// example to stop after the first acceptable endpoint or to exclude an
/// endpoint a caller knows is unusable. Returning `None` leaves the solver's
/// own bound checks in charge.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never acts.
pub trait Observer<E, A> {
    /// Inspects one endpoint event.
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
