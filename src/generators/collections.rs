use std::iter;
use std::marker::PhantomData;

use crate::data::*;
use crate::generators::core::*;
use crate::generators::numbers::*;

/// See [`vecs`](fn.vecs.html)
#[derive(Debug, Clone)]
pub struct VecGenerator<G> {
    inner: G,
    mean_length: usize,
}

/// See [`info_pools`](fn.info_pools.html)
#[derive(Debug, Clone)]
pub struct InfoPoolGenerator(usize);

/// See [`collections`](fn.collections.html)
#[derive(Debug, Clone)]
pub struct CollectionGenerator<C, G> {
    witness: PhantomData<C>,
    inner: G,
    mean_length: usize,
}

/// Generates vectors with items given by `inner`.
pub fn vecs<G>(inner: G) -> VecGenerator<G> {
    VecGenerator {
        inner,
        mean_length: 10,
    }
}

/// Randomly generates an info-pool of exactly `len` bytes (mostly used for
/// testing generators).
pub fn info_pools(len: usize) -> InfoPoolGenerator {
    InfoPoolGenerator(len)
}

/// Generates a collection of the given type, populated with elements from the
/// item generator.
///
/// To generate values of BTreeSet<u8>:
///
/// ```
/// use std::collections::BTreeSet;
/// use prelude_gens::generators::*;
/// let gen = collections::<BTreeSet<_>, _>(u8s());
/// ```
pub fn collections<C, G: Generator>(item: G) -> CollectionGenerator<C, G>
where
    C: Extend<G::Item>,
{
    CollectionGenerator {
        witness: PhantomData,
        inner: item,
        mean_length: 16,
    }
}

/// Draws the "keep going?" coin for a sequence with the given mean length.
/// An exhausted source stops the sequence.
pub(crate) fn continuation_coin(mean_length: usize) -> CoinFlipGenerator {
    let p_is_final = 1.0 / (1.0 + mean_length as f64);
    weighted_coin(1.0 - p_is_final)
}

impl<G> VecGenerator<G> {
    /// Specify the mean length of the vector.
    pub fn mean_length(mut self, mean: usize) -> Self {
        self.mean_length = mean;
        self
    }
}

impl<G: Generator> Generator for VecGenerator<G> {
    type Item = Vec<G::Item>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let mut result = Vec::new();
        let more = continuation_coin(self.mean_length);
        while more.generate(src)? {
            let item = self.inner.generate(src)?;
            result.push(item)
        }

        Ok(result)
    }
}

impl Generator for InfoPoolGenerator {
    type Item = InfoPool;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let vals = u8s();
        let mut result = Vec::with_capacity(self.0);
        for _ in 0..self.0 {
            result.push(vals.generate(src)?)
        }

        Ok(InfoPool::of_vec(result))
    }
}

impl<G, C> CollectionGenerator<C, G> {
    /// Specify the mean number of _generated_ items. For collections with
    /// set semantics, this many not be the same as the mean size of the
    /// collection.
    pub fn mean_length(mut self, mean: usize) -> Self {
        self.mean_length = mean;
        self
    }
}

impl<G: Generator, C: Default + Extend<G::Item>> Generator for CollectionGenerator<C, G> {
    type Item = C;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let mut coll: C = Default::default();
        let more = continuation_coin(self.mean_length);
        while more.generate(src)? {
            let item = self.inner.generate(src)?;
            coll.extend(iter::once(item));
        }

        Ok(coll)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::*;
    use crate::generators::core::tests::*;
    use crate::generators::*;
    use std::collections::{BTreeMap, BTreeSet, LinkedList};

    #[test]
    fn vecs_should_generate_same_output_given_same_input() {
        should_generate_same_output_given_same_input(vecs(booleans()));
    }

    #[test]
    fn vecs_usually_generates_different_output_for_different_inputs() {
        usually_generates_different_output_for_different_inputs(vecs(booleans()))
    }

    #[test]
    fn vec_bools_minimize_to_empty() {
        let _ = env_logger::try_init();
        should_minimize_to(vecs(booleans()), vec![])
    }

    #[test]
    fn vec_with_zero_mean_length_is_always_empty() {
        let pool = InfoPool::of_vec(vec![0xff; 64]);
        assert_eq!(vecs(u8s()).mean_length(0).generate_from(&pool), Ok(vec![]));
    }

    #[test]
    fn info_pools_minimize_to_zeros() {
        // We force the generator to output a fixed length.
        should_minimize_to(info_pools(8), InfoPool::of_vec(vec![0; 8]))
    }

    #[test]
    fn collections_u8s_minimize_to_empty() {
        should_minimize_to(collections::<BTreeSet<_>, _>(u8s()), BTreeSet::new());
    }

    fn mean_length_of<F: FnMut(&mut InfoReplay) -> usize>(mut draw_len: F, len: usize) {
        let _ = env_logger::try_init();
        let trials = 4096usize;
        let expected = len as f64;
        let allowed_error = expected * 0.1;
        let mut lengths = BTreeMap::new();
        let p = seeded_of_size(len as u64, 1 << 20);
        let mut t = p.replay();
        for _ in 0..trials {
            *lengths.entry(draw_len(&mut t)).or_insert(0) += 1;
        }

        debug!("Histogram: {:?}", lengths);
        let mean: f64 = lengths
            .iter()
            .map(|(&l, &n)| (l * n) as f64 / trials as f64)
            .sum();
        assert!(
            mean >= (expected - allowed_error) && mean <= (expected + allowed_error),
            "Expected mean of {} trials ({}+/-{}); got {}",
            trials,
            expected,
            allowed_error,
            mean
        );
    }

    #[test]
    fn vec_mean_length_can_be_set_as_3() {
        let gen = vecs(u8s()).mean_length(3);
        mean_length_of(|t| gen.generate(t).expect("a trial").len(), 3);
    }

    #[test]
    fn vec_mean_length_can_be_set_as_10() {
        let gen = vecs(u8s()).mean_length(10);
        mean_length_of(|t| gen.generate(t).expect("a trial").len(), 10);
    }

    #[test]
    fn collection_mean_length_can_be_set_as_7() {
        let gen = collections::<LinkedList<_>, _>(u8s()).mean_length(7);
        mean_length_of(|t| gen.generate(t).expect("a trial").len(), 7);
    }
}
