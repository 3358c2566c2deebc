use crate::data::*;
use crate::generators::core::*;

// Tuples of generators draw each component in order, left to right.
macro_rules! tuple_generator_impl {
    ($($gen:ident: $var:ident: $ty:ident),+) => {
        impl<$($ty: Generator),+> Generator for ($($ty,)+) {
            type Item = ($($ty::Item,)+);
            fn generate<In: InfoSource>(&self, src: &mut In) -> Maybe<Self::Item> {
                let ($($gen,)+) = self;
                $(let $var = $gen.generate(src)?;)+
                Ok(($($var,)+))
            }
        }
    };
}

tuple_generator_impl!(ga: a: A);
tuple_generator_impl!(ga: a: A, gb: b: B);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C, gd: d: D);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C, gd: d: D, ge: e: E);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C, gd: d: D, ge: e: E, gf: f: F);
