/// A trait alias for types usable as outcomes of a probability space.
/// Outcomes need a total order so event operations can merge ordered sets deterministically.
pub trait Outcome: Ord {}

// Blanket implementation for all types that satisfy the bounds
impl<T> Outcome for T where T: Ord {}
