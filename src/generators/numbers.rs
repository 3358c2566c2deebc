use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;
use std::ops;

use crate::data::*;
use crate::generators::core::*;

/// See [`u64s`](fn.u64s.html), [`usizes`](fn.usizes.html), etc.
#[derive(Debug, Clone)]
pub struct IntGenerator<N>(PhantomData<N>);
/// See [`uniform_f64s`](fn.uniform_f64s.html)
#[derive(Debug, Clone)]
pub struct UniformFloatGenerator(());
/// See [`uptos`](fn.uptos.html)
#[derive(Debug, Clone)]
pub struct UptoGenerator<G: Generator>(G, G::Item);

impl<T, N: ScaleInt> IntGenerator<T>
where
    IntGenerator<T>: Generator<Item = N>,
{
    /// Scales the output of g generating an unsigned integer up to max. See also [`uptos`](fn.uptos.html)
    pub fn upto(self, max: N) -> UptoGenerator<Self> {
        uptos(self, max)
    }
}

impl<T: Clone, N> IntGenerator<T>
where
    IntGenerator<T>: Generator<Item = N>,
    N: ScaleInt + PartialOrd + fmt::Debug + ops::Sub<N, Output = N> + ops::Add<N, Output = N>,
{
    /// Yields a value between min and max, inclusive of both. Panics if
    /// `min > max`.
    pub fn between(self, min: N, max: N) -> impl Generator<Item = N> + Clone {
        assert!(min <= max, "empty range: {:?} > {:?}", min, max);
        let diff = max - min;
        uptos(self, diff).map(move |x| x + min)
    }
}

macro_rules! unsigned_integer_gen {
    ($name:ident, $ty:ty) => {
        /// A generator that generates integers of the specified type.
        pub fn $name() -> IntGenerator<$ty> {
            IntGenerator(PhantomData)
        }

        impl Generator for IntGenerator<$ty> {
            type Item = $ty;
            fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
                let nbytes = size_of::<$ty>();
                let mut val: $ty = 0;
                for _ in 0..nbytes {
                    val = val.wrapping_shl(8) | src.draw_u8() as $ty;
                }
                Ok(val)
            }
        }
    };
}

unsigned_integer_gen!(u8s, u8);
unsigned_integer_gen!(u16s, u16);
unsigned_integer_gen!(u32s, u32);
unsigned_integer_gen!(u64s, u64);
unsigned_integer_gen!(usizes, usize);

/// Generates values that are uniformly distributed, such that the
/// output value x satisifes 0.0 <= x <= 1.0
pub fn uniform_f64s() -> UniformFloatGenerator {
    UniformFloatGenerator(())
}

impl Generator for UniformFloatGenerator {
    type Item = f64;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let uval = u64s().generate(src)?;
        Ok(uval as f64 / u64::max_value() as f64)
    }
}

/// Scales the output of g generating an unsigned integer into `0..=max`.
pub fn uptos<G: Generator>(g: G, max: G::Item) -> UptoGenerator<G> {
    UptoGenerator(g, max)
}

#[doc(hidden)]
pub trait ScaleInt: Copy {
    /// Maps a value drawn from the whole range of the type onto `0..=max`,
    /// preserving order.
    fn scale(self, max: Self) -> Self;
}

impl<G: Generator> Generator for UptoGenerator<G>
where
    G::Item: ScaleInt,
{
    type Item = G::Item;

    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let UptoGenerator(gen, limit) = self;
        let v = gen.generate(src)?;
        Ok(v.scale(*limit))
    }
}

macro_rules! scale_int_impl {
    ($ty: ident, $next_size: ident) => {
        impl ScaleInt for $ty {
            fn scale(self, max: Self) -> Self {
                if max == $ty::max_value() {
                    return self;
                }
                let shift = size_of::<$ty>() * 8;
                let res = (self as $next_size * (max as $next_size + 1)) >> shift;
                res as Self
            }
        }
    };
}

scale_int_impl!(u8, u16);
scale_int_impl!(u16, u32);
scale_int_impl!(u32, u64);
scale_int_impl!(u64, u128);
scale_int_impl!(usize, u128);
