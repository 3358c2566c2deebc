use crate::data::*;
use crate::generators::collections::*;
use crate::generators::core::*;
use crate::generators::non_empty::*;
use crate::types::Validation;

/// See [`validations`](fn.validations.html)
#[derive(Debug, Clone)]
pub struct ValidationGenerator<W, E, A> {
    warnings: W,
    errors: E,
    values: A,
}

/// Generates validations: a log of warnings, then, with equal probability,
/// either a success holding a value, or a failure holding one or more errors.
/// Shrinks toward a success with an empty log.
pub fn validations<W, E, A>(warnings: W, errors: E, values: A) -> ValidationGenerator<W, E, A> {
    ValidationGenerator {
        warnings,
        errors,
        values,
    }
}

impl<W: Generator, E: Generator, A: Generator> Generator for ValidationGenerator<W, E, A> {
    type Item = Validation<W::Item, E::Item, A::Item>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        let log = vecs(&self.warnings).generate(src)?;
        if booleans().generate(src)? {
            let errors = non_empty_vecs(&self.errors).generate(src)?;
            Ok(Validation::fail(log, errors))
        } else {
            let value = self.values.generate(src)?;
            Ok(Validation::succeed(log, value))
        }
    }
}
