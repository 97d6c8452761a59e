//! Where dice get their faces from.

use rand::Rng;

use crate::die::{MAX_FACE, MIN_FACE};

/// Something that can produce die faces, uniformly distributed over `MIN_FACE..=MAX_FACE`.
///
/// Every [`rand::Rng`] is one already, so you'll rarely need to implement this yourself. It mostly exists so tests
/// can load the dice.
pub trait FaceSource {
    /// Produce the next face. Must be in `MIN_FACE..=MAX_FACE`.
    fn face(&mut self) -> u8;
}

impl<R: Rng + ?Sized> FaceSource for R {
    fn face(&mut self) -> u8 {
        self.gen_range(MIN_FACE..=MAX_FACE)
    }
}
