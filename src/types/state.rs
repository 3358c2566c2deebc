use std::fmt;
use std::rc::Rc;

/// A state transition: given the current state, produce the next state and
/// a value.
pub struct State<S, A> {
    run: Rc<dyn Fn(S) -> (S, A)>,
}

impl<S, A> State<S, A> {
    pub fn new<F: Fn(S) -> (S, A) + 'static>(f: F) -> Self {
        State { run: Rc::new(f) }
    }

    /// Runs the transition, returning the next state and the value.
    pub fn run(&self, initial: S) -> (S, A) {
        (self.run)(initial)
    }

    pub fn run_state(&self, initial: S) -> S {
        self.run(initial).0
    }

    pub fn run_value(&self, initial: S) -> A {
        self.run(initial).1
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        State {
            run: self.run.clone(),
        }
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("State").finish()
    }
}
