use crate::data::*;
use crate::generators::numbers::*;

/// An object that can generate test data from an underlying data source.
///
/// Generators are expected to produce "smaller" values from "smaller"
/// sources; in particular, a source of nothing but zero bytes should give the
/// simplest value the generator knows about. Shrinking relies on this.
pub trait Generator {
    /// The type of values that we generate.
    type Item;

    /// This is the main entry point for users of the library.
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item>;

    /// Replays `pool` through this generator.
    fn generate_from(&self, pool: &InfoPool) -> Maybe<Self::Item> {
        self.generate(&mut pool.replay())
    }

    /// Only yields values that satisfy `pred`; everything else is skipped.
    fn filter<F: Fn(&Self::Item) -> bool>(self, pred: F) -> Filtered<Self, F>
    where
        Self: Sized,
    {
        Filtered(self, pred)
    }

    /// Transforms each generated value with `f`.
    fn map<F: Fn(Self::Item) -> T, T>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
    {
        Mapped(self, f)
    }

    /// Combined `map` and `filter`; `f` may reject a value with
    /// `Err(DataError::SkipItem)`.
    fn filter_map<F: Fn(Self::Item) -> Maybe<T>, T>(self, f: F) -> FilterMapped<Self, F>
    where
        Self: Sized,
    {
        FilterMapped(self, f)
    }

    /// Uses each generated value to pick the generator for the next one.
    fn flat_map<F: Fn(Self::Item) -> H, H: Generator>(self, f: F) -> FlatMapped<Self, F>
    where
        Self: Sized,
    {
        FlatMapped(self, f)
    }

    /// Erases the generator's type, which is handy for recursive generators.
    fn boxed(self) -> Box<dyn GeneratorObject<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// An object-safe counterpart to `Generator`. Anything that implements
/// `Generator` implements this, and boxed generator objects are generators
/// again.
pub trait GeneratorObject {
    /// See [`Generator::Item`](trait.Generator.html#associatedtype.Item)
    type Item;
    /// See [`Generator::generate`](trait.Generator.html#tymethod.generate)
    fn generate_obj(&self, src: &mut dyn InfoSource) -> Maybe<Self::Item>;
}

/// See [`Generator::filter`](trait.Generator.html#method.filter)
#[derive(Debug, Clone)]
pub struct Filtered<G, F>(G, F);
/// See [`Generator::map`](trait.Generator.html#method.map)
#[derive(Debug, Clone)]
pub struct Mapped<G, F>(G, F);
/// See [`Generator::filter_map`](trait.Generator.html#method.filter_map)
#[derive(Debug, Clone)]
pub struct FilterMapped<G, F>(G, F);
/// See [`Generator::flat_map`](trait.Generator.html#method.flat_map)
#[derive(Debug, Clone)]
pub struct FlatMapped<G, F>(G, F);

/// See [`consts`](fn.consts.html)
#[derive(Debug, Clone)]
pub struct Const<V>(V);
/// See [`booleans`](fn.booleans.html)
#[derive(Debug, Clone)]
pub struct BoolGenerator;
/// See [`weighted_coin`](fn.weighted_coin.html)
#[derive(Debug, Clone)]
pub struct CoinFlipGenerator(f64);
/// See [`lazy`](fn.lazy.html)
#[derive(Debug, Clone)]
pub struct LazyGenerator<F>(F);
/// See [`one_of`](fn.one_of.html)
pub struct OneOfGenerator<T> {
    alternatives: Vec<Box<dyn GeneratorObject<Item = T>>>,
}

/// Always generates `val`, without drawing anything.
pub fn consts<V: Clone>(val: V) -> Const<V> {
    Const(val)
}

/// Generates `true` or `false` with equal probability, shrinking toward
/// `false`.
pub fn booleans() -> BoolGenerator {
    BoolGenerator
}

/// Generates `true` with probability `p`, where `0.0 <= p < 1.0`. Shrinks
/// toward `false`.
pub fn weighted_coin(p: f64) -> CoinFlipGenerator {
    CoinFlipGenerator(p)
}

/// Defers building the generator until a value is needed; this is what lets
/// a generator refer to itself.
pub fn lazy<F: Fn() -> G, G: Generator>(f: F) -> LazyGenerator<F> {
    LazyGenerator(f)
}

/// Picks uniformly between `first` and any generators added via
/// [`or`](struct.OneOfGenerator.html#method.or). Shrinks toward the first
/// alternative.
pub fn one_of<G: Generator + 'static>(first: G) -> OneOfGenerator<G::Item> {
    OneOfGenerator {
        alternatives: vec![first.boxed()],
    }
}

impl<T> OneOfGenerator<T> {
    /// Adds another alternative.
    pub fn or<G: Generator<Item = T> + 'static>(mut self, alt: G) -> Self {
        self.alternatives.push(alt.boxed());
        self
    }
}

impl<G: Generator> GeneratorObject for G {
    type Item = G::Item;
    fn generate_obj(&self, mut src: &mut dyn InfoSource) -> Maybe<Self::Item> {
        self.generate(&mut src)
    }
}

impl<T> Generator for Box<dyn GeneratorObject<Item = T>> {
    type Item = T;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        (**self).generate_obj(src)
    }
}

impl<'a, G: Generator> Generator for &'a G {
    type Item = G::Item;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        (**self).generate(src)
    }
}

impl<G: Generator, F: Fn(&G::Item) -> bool> Generator for Filtered<G, F> {
    type Item = G::Item;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let Filtered(gen, pred) = self;
        let val = gen.generate(src)?;
        if pred(&val) {
            Ok(val)
        } else {
            Err(DataError::SkipItem)
        }
    }
}

impl<G: Generator, F: Fn(G::Item) -> T, T> Generator for Mapped<G, F> {
    type Item = T;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let Mapped(gen, f) = self;
        gen.generate(src).map(f)
    }
}

impl<G: Generator, F: Fn(G::Item) -> Maybe<T>, T> Generator for FilterMapped<G, F> {
    type Item = T;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let FilterMapped(gen, f) = self;
        gen.generate(src).and_then(f)
    }
}

impl<G: Generator, F: Fn(G::Item) -> H, H: Generator> Generator for FlatMapped<G, F> {
    type Item = H::Item;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let FlatMapped(gen, f) = self;
        let next = f(gen.generate(src)?);
        next.generate(src)
    }
}

impl<V: Clone> Generator for Const<V> {
    type Item = V;
    fn generate<I: InfoSource>(&self, _: &mut I) -> Maybe<Self::Item> {
        Ok(self.0.clone())
    }
}

impl Generator for BoolGenerator {
    type Item = bool;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        Ok(src.draw_u8() >= 0x80)
    }
}

impl Generator for CoinFlipGenerator {
    type Item = bool;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let limit = ((1.0 - self.0) * u32::max_value() as f64) as u32;
        Ok(u32s().generate(src)? > limit)
    }
}

impl<F: Fn() -> G, G: Generator> Generator for LazyGenerator<F> {
    type Item = G::Item;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        (self.0)().generate(src)
    }
}

impl<T> Generator for OneOfGenerator<T> {
    type Item = T;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let last = self.alternatives.len() - 1;
        let idx = usizes().between(0, last).generate(src)?;
        self.alternatives[idx].generate_obj(src)
    }
}

/// Shrinks `pool` for as long as the value generated from it still makes
/// `check` return true. Returns the original pool if nothing smaller works.
pub fn find_minimal<G: Generator, F: Fn(G::Item) -> bool>(
    gen: &G,
    pool: InfoPool,
    check: F,
) -> InfoPool {
    minimize(&pool, &|t| gen.generate(t).map(|v| check(v)).unwrap_or(false)).unwrap_or(pool)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fmt;
    use std::iter;

    const SHORT_VEC_SIZE: usize = 256;

    pub(crate) fn unseeded_of_size(size: usize) -> InfoPool {
        pool_from(RngSource::new(), size)
    }

    pub(crate) fn seeded_of_size(seed: u64, size: usize) -> InfoPool {
        pool_from(RngSource::seeded(seed), size)
    }

    fn pool_from<I: InfoSource>(src: I, size: usize) -> InfoPool {
        let mut src = InfoRecorder::new(src);
        for _ in 0..size {
            src.draw_u8();
        }
        src.into_pool()
    }

    fn gen_random_pool() -> InfoPool {
        unseeded_of_size(SHORT_VEC_SIZE)
    }

    pub(crate) fn should_generate_same_output_given_same_input<G: Generator>(gen: G)
    where
        G::Item: fmt::Debug + PartialEq,
    {
        for (p, v0, v1) in iter::repeat(())
            .map(|_| gen_random_pool())
            .flat_map(|p| {
                gen.generate_from(&p)
                    .and_then(|v0| gen.generate_from(&p).map(|v1| (p, v0, v1)))
            })
            .take(100)
        {
            assert!(v0 == v1, "{:?}: ({:?} == {:?})", p, v0, v1);
        }
    }

    pub(crate) fn usually_generates_different_output_for_different_inputs<G: Generator>(gen: G)
    where
        G::Item: PartialEq,
    {
        let nitems = 100;
        let differing = iter::repeat(())
            .map(|_| (gen_random_pool(), gen_random_pool()))
            .filter(|(p0, p1)| p0 != p1)
            .flat_map(|(p0, p1)| {
                gen.generate_from(&p0)
                    .and_then(|v0| gen.generate_from(&p1).map(|v1| (v0, v1)))
            })
            .take(nitems)
            .filter(|(v0, v1)| v0 != v1)
            .count();
        assert!(differing > 0, "Differing items:{} > 0", differing);
    }

    pub(crate) fn should_minimize_to<G: Generator>(gen: G, expected: G::Item)
    where
        G::Item: fmt::Debug + PartialEq,
    {
        let p = loop {
            let mut src = InfoRecorder::new(RngSource::new());
            if gen.generate(&mut src).is_ok() {
                break src.into_pool();
            }
        };
        debug!("Before: {:?}", p);
        let p = find_minimal(&gen, p, |_| true);
        debug!("After: {:?}", p);

        let val = gen.generate_from(&p).expect("generated value");
        assert_eq!(val, expected);
    }

    #[test]
    fn consts_should_generate_same_values() {
        let gen = consts("forty two");
        assert_eq!(gen.generate_from(&gen_random_pool()), Ok("forty two"));
    }

    #[test]
    fn bools_should_generate_false_booleans_from_zeros() {
        let bools = booleans();
        assert_eq!(bools.generate_from(&InfoPool::of_vec(vec![0])), Ok(false));
    }

    #[test]
    fn bools_should_generate_true_booleans_from_saturated_values() {
        let bools = booleans();
        assert_eq!(bools.generate_from(&InfoPool::of_vec(vec![0xff])), Ok(true));
    }

    #[test]
    fn bools_should_generate_same_output_given_same_input() {
        should_generate_same_output_given_same_input(booleans())
    }

    // These really need to be proper statistical tests.
    #[test]
    fn bools_usually_generates_different_output_for_different_inputs() {
        usually_generates_different_output_for_different_inputs(booleans())
    }

    #[test]
    fn bools_minimize_to_false() {
        should_minimize_to(booleans(), false)
    }

    #[test]
    fn coins_minimize_to_false() {
        should_minimize_to(weighted_coin(0.9), false)
    }

    #[test]
    fn filter_should_pass_through_when_true() {
        let gen = consts(()).filter(|&_| true);
        assert_eq!(gen.generate_from(&InfoPool::new()), Ok(()));
    }

    #[test]
    fn filter_should_skip_when_false() {
        let gen = consts(()).filter(|&_| false);
        assert_eq!(gen.generate_from(&InfoPool::new()), Err(DataError::SkipItem));
    }

    #[test]
    fn filter_map_can_reject() {
        let gen = u8s().filter_map(|v| if v > 10 { Ok(v) } else { Err(DataError::SkipItem) });
        assert_eq!(gen.generate_from(&InfoPool::of_vec(vec![3])), Err(DataError::SkipItem));
        assert_eq!(gen.generate_from(&InfoPool::of_vec(vec![30])), Ok(30));
    }

    #[test]
    fn flat_map_draws_from_chosen_generator() {
        let gen = booleans().flat_map(|b| if b { consts(1u8) } else { consts(2u8) });
        assert_eq!(gen.generate_from(&InfoPool::of_vec(vec![0xff])), Ok(1));
        assert_eq!(gen.generate_from(&InfoPool::of_vec(vec![0])), Ok(2));
    }

    #[test]
    fn one_of_picks_first_alternative_from_zeros() {
        let gen = one_of(consts('a')).or(consts('b')).or(consts('c'));
        assert_eq!(gen.generate_from(&InfoPool::new()), Ok('a'));
    }

    #[test]
    fn one_of_picks_last_alternative_from_saturated_values() {
        let gen = one_of(consts('a')).or(consts('b')).or(consts('c'));
        assert_eq!(gen.generate_from(&InfoPool::of_vec(vec![0xff; 8])), Ok('c'));
    }

    #[test]
    fn one_of_usually_generates_different_output_for_different_inputs() {
        usually_generates_different_output_for_different_inputs(one_of(consts(0)).or(consts(1)))
    }

    #[test]
    fn boxed_generators_behave_like_the_original() {
        let p = gen_random_pool();
        let boxed = u64s().boxed();
        assert_eq!(boxed.generate_from(&p), u64s().generate_from(&p));
    }

    #[test]
    fn lazy_defers_construction() {
        use std::cell::Cell;
        let built = Cell::new(0);
        let gen = lazy(|| {
            built.set(built.get() + 1);
            u8s()
        });
        assert_eq!(built.get(), 0);
        let _ = gen.generate_from(&InfoPool::new());
        assert_eq!(built.get(), 1);
    }
}
