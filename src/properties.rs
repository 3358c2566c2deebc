use std::fmt;
use std::panic;

use crate::data::*;
use crate::generators::*;

/// Configuration that allows the user to override how many tests, skipped-tests etc.
/// are permitted.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    num_tests: usize,
    max_skips: usize,
    seed: Option<u64>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        let num_tests = 100;
        CheckConfig {
            num_tests,
            max_skips: num_tests * 10,
            seed: None,
        }
    }
}

impl CheckConfig {
    /// Overrides how many tests (either failing or successful) are executed.
    pub fn num_tests(&self, num_tests: usize) -> Self {
        CheckConfig {
            num_tests,
            ..self.clone()
        }
    }
    /// Overrides how many times the generators can skip generation before we
    /// abort the test run.
    pub fn max_skips(&self, max_skips: usize) -> Self {
        CheckConfig {
            max_skips,
            ..self.clone()
        }
    }
    /// Draws every test case from a generator seeded with `seed`, so that a
    /// run can be repeated exactly.
    pub fn seed(&self, seed: u64) -> Self {
        CheckConfig {
            seed: Some(seed),
            ..self.clone()
        }
    }
    /// This is the main entry point for users of the library.
    pub fn property<G: Generator>(&self, gen: G) -> Property<G> {
        Property {
            config: self.clone(),
            gen,
        }
    }
}

/// This represents a configuration for a particular test, ie: a set of generators
/// and a set of test parameters.
pub struct Property<G> {
    config: CheckConfig,
    gen: G,
}

/// This represents something that a check can return.
pub trait CheckResult {
    /// Check whether this result witnesses a failure.
    fn is_failure(&self) -> bool;
}

/// See [`CheckConfig::property`](struct.CheckConfig.html#method.property)
/// Initiates a test with default configuration.
pub fn property<G: Generator>(gen: G) -> Property<G> {
    CheckConfig::default().property(gen)
}

impl<G: Generator> Property<G>
where
    G::Item: fmt::Debug,
{
    /// Use this function to specify the thing you wish to check. Because we
    /// include the debug representation of the (minimised) input and the
    /// output within the panic message, both need to implement `Debug`.
    pub fn check<R: CheckResult + fmt::Debug, F: Fn(G::Item) -> R>(self, subject: F) {
        let mut rng = match self.config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::new(),
        };
        let mut tests_run = 0usize;
        let mut items_skipped = 0usize;
        while tests_run < self.config.num_tests {
            let mut recorder = InfoRecorder::new(&mut rng);
            let generated = self.gen.generate(&mut recorder);
            let pool = recorder.into_pool();
            trace!("Tests run: {}; skipped:{}", tests_run, items_skipped);
            match generated {
                Ok(arg) => {
                    let res = Self::attempt(&subject, arg);
                    trace!("Result: {:?} -> {:?}", self.gen.generate_from(&pool), res);
                    tests_run += 1;
                    if res.is_failure() {
                        let minpool = find_minimal(&self.gen, pool, |v| {
                            Self::attempt(&subject, v).is_failure()
                        });
                        panic!(
                            "Predicate failed for argument {:?}; check returned {:?}",
                            self.gen.generate_from(&minpool),
                            res
                        )
                    }
                }
                Err(DataError::SkipItem) => {
                    trace!("Skip: {:?}", pool);
                    items_skipped += 1;
                    if items_skipped >= self.config.max_skips {
                        panic!(
                            "Could not finish on {}/{} tests (have skipped {} times)",
                            tests_run, self.config.num_tests, items_skipped
                        );
                    }
                }
            }
        }
        trace!("Completing okay");
    }

    fn attempt<R: CheckResult, F: Fn(G::Item) -> R>(subject: F, arg: G::Item) -> Result<R, String> {
        let res = panic::catch_unwind(panic::AssertUnwindSafe(|| subject(arg)));
        match res {
            Ok(r) => Ok(r),
            Err(err) => {
                let msg = if let Some(s) = err.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = err.downcast_ref::<String>() {
                    s.to_string()
                } else {
                    format!("Unrecognised panic result: {:?}", err)
                };
                Err(msg)
            }
        }
    }
}

impl CheckResult for bool {
    fn is_failure(&self) -> bool {
        !self
    }
}

impl<O: CheckResult, E> CheckResult for Result<O, E> {
    fn is_failure(&self) -> bool {
        self.as_ref().map(|r| r.is_failure()).unwrap_or(true)
    }
}

impl CheckResult for () {
    fn is_failure(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn runs_the_configured_number_of_tests() {
        let calls = Cell::new(0);
        CheckConfig::default()
            .num_tests(17)
            .property(u8s())
            .check(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 17);
    }

    #[test]
    fn seeded_runs_see_the_same_inputs() {
        let seen = |seed| {
            let vals = std::cell::RefCell::new(Vec::new());
            CheckConfig::default()
                .seed(seed)
                .num_tests(8)
                .property(u64s())
                .check(|v| vals.borrow_mut().push(v));
            vals.into_inner()
        };
        assert_eq!(seen(9), seen(9));
    }

    #[test]
    #[should_panic(expected = "Could not finish")]
    fn gives_up_after_too_many_skips() {
        CheckConfig::default()
            .max_skips(5)
            .property(u8s().filter(|_| false))
            .check(|_| true);
    }

    #[test]
    #[should_panic(expected = "Predicate failed for argument Ok(10)")]
    fn reports_the_minimal_failing_argument() {
        property(u8s()).check(|n| n < 10);
    }
}
