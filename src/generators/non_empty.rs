use std::collections::BTreeSet;

use crate::data::*;
use crate::generators::collections::*;
use crate::generators::core::*;
use crate::generators::numbers::*;
use crate::types::{NonEmptyMultiSet, NonEmptySet, NonEmptyVec};

const DEFAULT_MEAN_LENGTH: usize = 10;
const DEFAULT_MAX_MULTIPLICITY: u64 = 8;

/// See [`non_empty_vecs`](fn.non_empty_vecs.html)
#[derive(Debug, Clone)]
pub struct NonEmptyVecGenerator<G> {
    inner: G,
    mean_length: usize,
}

/// See [`non_empty_sets`](fn.non_empty_sets.html)
#[derive(Debug, Clone)]
pub struct NonEmptySetGenerator<G> {
    inner: G,
    mean_length: usize,
}

/// See [`non_empty_multi_sets`](fn.non_empty_multi_sets.html)
#[derive(Debug, Clone)]
pub struct NonEmptyMultiSetGenerator<G> {
    inner: G,
    mean_length: usize,
    max_multiplicity: u64,
}

/// Generates vectors of at least one item from `inner`. The mean length
/// counts the items after the first.
pub fn non_empty_vecs<G>(inner: G) -> NonEmptyVecGenerator<G> {
    NonEmptyVecGenerator {
        inner,
        mean_length: DEFAULT_MEAN_LENGTH,
    }
}

/// Generates sets of at least one item from `inner`.
pub fn non_empty_sets<G>(inner: G) -> NonEmptySetGenerator<G> {
    NonEmptySetGenerator {
        inner,
        mean_length: DEFAULT_MEAN_LENGTH,
    }
}

/// Generates multisets of at least one item from `inner`, where each drawn
/// item is added between one and `max_multiplicity` times.
pub fn non_empty_multi_sets<G>(inner: G) -> NonEmptyMultiSetGenerator<G> {
    NonEmptyMultiSetGenerator {
        inner,
        mean_length: DEFAULT_MEAN_LENGTH,
        max_multiplicity: DEFAULT_MAX_MULTIPLICITY,
    }
}

impl<G> NonEmptyVecGenerator<G> {
    /// Specify the mean number of items beyond the first.
    pub fn mean_length(mut self, mean: usize) -> Self {
        self.mean_length = mean;
        self
    }
}

impl<G> NonEmptySetGenerator<G> {
    /// Specify the mean number of items drawn beyond the first. Duplicates
    /// collapse, so sets may come out smaller.
    pub fn mean_length(mut self, mean: usize) -> Self {
        self.mean_length = mean;
        self
    }
}

impl<G> NonEmptyMultiSetGenerator<G> {
    /// Specify the mean number of items drawn beyond the first.
    pub fn mean_length(mut self, mean: usize) -> Self {
        self.mean_length = mean;
        self
    }

    /// The most copies any one draw adds. Panics on zero.
    pub fn max_multiplicity(mut self, max: u64) -> Self {
        assert!(max >= 1, "multiplicities start at one");
        self.max_multiplicity = max;
        self
    }
}

impl<G: Generator> Generator for NonEmptyVecGenerator<G> {
    type Item = NonEmptyVec<G::Item>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let head = self.inner.generate(src)?;
        let tail = vecs(&self.inner).mean_length(self.mean_length).generate(src)?;
        Ok(NonEmptyVec::new(head, tail))
    }
}

impl<G: Generator> Generator for NonEmptySetGenerator<G>
where
    G::Item: Ord,
{
    type Item = NonEmptySet<G::Item>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let head = self.inner.generate(src)?;
        let rest = collections::<BTreeSet<_>, _>(&self.inner)
            .mean_length(self.mean_length)
            .generate(src)?;
        Ok(NonEmptySet::new(head, rest))
    }
}

impl<G: Generator> Generator for NonEmptyMultiSetGenerator<G>
where
    G::Item: Ord,
{
    type Item = NonEmptyMultiSet<G::Item>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let entries = (&self.inner, u64s().between(1, self.max_multiplicity));
        let (head, count) = entries.generate(src)?;
        let mut bag = NonEmptyMultiSet::singleton(head, count);
        for (item, count) in vecs(&entries).mean_length(self.mean_length).generate(src)? {
            bag.add(item, count);
        }
        Ok(bag)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::*;
    use crate::generators::core::tests::*;
    use crate::generators::*;
    use crate::property;
    use crate::types::{NonEmptyMultiSet, NonEmptySet, NonEmptyVec};

    #[test]
    fn non_empty_vecs_minimize_to_a_single_zero() {
        should_minimize_to(non_empty_vecs(u8s()), NonEmptyVec::singleton(0))
    }

    #[test]
    fn non_empty_sets_minimize_to_a_single_zero() {
        should_minimize_to(non_empty_sets(u8s()), NonEmptySet::singleton(0))
    }

    #[test]
    fn non_empty_multi_sets_minimize_to_a_single_zero() {
        should_minimize_to(non_empty_multi_sets(u8s()), NonEmptyMultiSet::singleton(0, 1))
    }

    #[test]
    fn non_empty_vecs_should_generate_same_output_given_same_input() {
        should_generate_same_output_given_same_input(non_empty_vecs(u8s()))
    }

    #[test]
    fn non_empty_sets_usually_generates_different_output_for_different_inputs() {
        usually_generates_different_output_for_different_inputs(non_empty_sets(u8s()))
    }

    #[test]
    fn zero_mean_length_still_yields_one_item() {
        let pool = InfoPool::of_vec(vec![0xff; 64]);
        let v = non_empty_vecs(u8s()).mean_length(0).generate_from(&pool);
        assert_eq!(v, Ok(NonEmptyVec::singleton(0xff)));
    }

    #[test]
    fn multiplicities_stay_in_bounds() {
        property(non_empty_multi_sets(booleans()).max_multiplicity(3).mean_length(0))
            .check(|bag| bag.distinct() == 1 && (1..=3).contains(&bag.total()));
    }

    #[test]
    fn filtered_elements_propagate_skips() {
        let gen = non_empty_vecs(u8s().filter(|&v| v > 0));
        assert_eq!(gen.generate_from(&InfoPool::new()), Err(DataError::SkipItem));
    }
}
