use super::NonEmptyVec;

/// The outcome of a validation: a log of warnings accumulated along the way,
/// followed by either a value or at least one error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validation<W, E, A> {
    Success { log: Vec<W>, value: A },
    Failure { log: Vec<W>, errors: NonEmptyVec<E> },
}

impl<W, E, A> Validation<W, E, A> {
    pub fn succeed(log: Vec<W>, value: A) -> Self {
        Validation::Success { log, value }
    }

    pub fn fail(log: Vec<W>, errors: NonEmptyVec<E>) -> Self {
        Validation::Failure { log, errors }
    }

    pub fn log(&self) -> &[W] {
        match self {
            Validation::Success { log, .. } | Validation::Failure { log, .. } => log.as_slice(),
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            Validation::Success { .. } => true,
            Validation::Failure { .. } => false,
        }
    }

    /// Discards the log.
    pub fn into_result(self) -> Result<A, NonEmptyVec<E>> {
        match self {
            Validation::Success { value, .. } => Ok(value),
            Validation::Failure { errors, .. } => Err(errors),
        }
    }
}
