use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::Rc;

use crate::data::*;
use crate::generators::core::*;
use crate::generators::numbers::*;
use crate::types::State;

// A generated function keeps drawing until its output generator stops
// skipping, but gives up eventually.
const MAX_ATTEMPTS: usize = 1000;

/// See [`functions`](fn.functions.html)
pub struct FunctionGenerator<A, G> {
    output: Rc<G>,
    witness: PhantomData<fn(&A)>,
}

/// A pure function from `&A` to `T`, produced by
/// [`functions`](fn.functions.html).
pub struct GeneratedFn<A, T> {
    seed: u64,
    output: Rc<dyn GeneratorObject<Item = T>>,
    witness: PhantomData<fn(&A)>,
}

/// Generates functions whose results are drawn from `output`.
///
/// Each function is identified by a seed drawn from the source. Applying it
/// hashes the argument together with that seed, and uses the hash to seed the
/// data that `output` draws from, so equal arguments always give equal
/// results, and different arguments are independent samples.
pub fn functions<A: Hash, G: Generator + 'static>(output: G) -> FunctionGenerator<A, G> {
    FunctionGenerator {
        output: Rc::new(output),
        witness: PhantomData,
    }
}

/// Generates state transitions, where both the next state and the value are
/// a generated function of the current state.
pub fn states<S, A, GS, GA>(next_states: GS, values: GA) -> impl Generator<Item = State<S, A>>
where
    S: Hash + 'static,
    A: 'static,
    GS: Generator<Item = S> + 'static,
    GA: Generator<Item = A> + 'static,
{
    functions::<S, _>((next_states, values)).map(|f| State::new(move |s: S| f.call(&s)))
}

impl<A, G> Clone for FunctionGenerator<A, G> {
    fn clone(&self) -> Self {
        FunctionGenerator {
            output: self.output.clone(),
            witness: PhantomData,
        }
    }
}

impl<A: Hash, G: Generator + 'static> Generator for FunctionGenerator<A, G> {
    type Item = GeneratedFn<A, G::Item>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let seed = u64s().generate(src)?;
        let output: Rc<dyn GeneratorObject<Item = G::Item>> = self.output.clone();
        Ok(GeneratedFn {
            seed,
            output,
            witness: PhantomData,
        })
    }
}

impl<A: Hash, T> GeneratedFn<A, T> {
    /// Applies the function. Panics if the output generator skipped every
    /// value it was offered.
    pub fn call(&self, arg: &A) -> T {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        arg.hash(&mut hasher);
        let mut src = RngSource::seeded(hasher.finish());
        for _ in 0..MAX_ATTEMPTS {
            match self.output.generate_obj(&mut src) {
                Ok(val) => return val,
                Err(DataError::SkipItem) => trace!("function output skipped; redrawing"),
            }
        }
        panic!(
            "Could not generate a function result after {} attempts",
            MAX_ATTEMPTS
        )
    }
}

impl<A, T> Clone for GeneratedFn<A, T> {
    fn clone(&self) -> Self {
        GeneratedFn {
            seed: self.seed,
            output: self.output.clone(),
            witness: PhantomData,
        }
    }
}

impl<A, T> fmt::Debug for GeneratedFn<A, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("GeneratedFn")
            .field("seed", &format_args!("{:#x}", self.seed))
            .finish()
    }
}
