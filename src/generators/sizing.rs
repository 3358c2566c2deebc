use std::cmp;

use crate::data::*;
use crate::generators::core::*;
use crate::generators::numbers::*;

/// The size hint used by size-directed generators unless told otherwise.
pub const DEFAULT_SIZE_HINT: usize = 100;

/// See [`small`](fn.small.html)
#[derive(Debug, Clone)]
pub struct SmallGenerator<F> {
    size_hint: usize,
    min: usize,
    build: F,
}

/// Picks a size between `min` and `max(size_hint, min)`, biased toward small
/// values, and draws from the generator that `build` returns for it.
///
/// The size follows an exponential distribution scaled so that, for the
/// default hint of 100, the mean is about 4. A source of zeroes yields `min`,
/// so values shrink toward the smallest size.
pub fn small<F: Fn(usize) -> G, G: Generator>(size_hint: usize, min: usize, build: F) -> SmallGenerator<F> {
    SmallGenerator {
        size_hint,
        min,
        build,
    }
}

impl<F> SmallGenerator<F> {
    fn max_size(&self) -> usize {
        cmp::max(self.size_hint, self.min)
    }

    fn draw_size<I: InfoSource>(&self, src: &mut I) -> Maybe<usize> {
        let max = self.max_size();
        let u = uniform_f64s().generate(src)?;
        let exponential = -(1.0 - u).ln();
        // Float to integer casts saturate, so an infinite draw lands on `max`.
        let scaled = (exponential * max as f64 / 25.0).round() as usize;
        Ok(cmp::min(cmp::max(scaled, self.min), max))
    }
}

impl<F: Fn(usize) -> G, G: Generator> Generator for SmallGenerator<F> {
    type Item = G::Item;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let size = self.draw_size(src)?;
        trace!("small: size {} of {}..={}", size, self.min, self.max_size());
        (self.build)(size).generate(src)
    }
}
