//! Generators for [`ParSeq`](../types/enum.ParSeq.html) cause trees.

use crate::data::*;
use crate::generators::core::*;
use crate::generators::numbers::*;
use crate::generators::sizing::*;
use crate::types::ParSeq;

/// See [`par_seqs_of_size`](fn.par_seqs_of_size.html)
#[derive(Debug, Clone)]
pub struct ParSeqGenerator<L> {
    leaves: L,
    size: usize,
}

/// See [`par_seqs`](fn.par_seqs.html)
pub struct ParSeqs<A> {
    leaves: OneOfGenerator<ParSeq<A>>,
    size_hint: usize,
}

/// Generates trees with exactly `size` leaves, each drawn from `leaves`.
///
/// A tree of size one is a single leaf. Larger trees are a `Then` or `Both`
/// branch (equally likely) whose left side gets `i` leaves and right side
/// `size - i`, with `i` drawn uniformly from `1..size`. Sub-trees are only
/// built while a value is being drawn.
///
/// `leaves` should only ever produce leaves; the leaf count of a tree is
/// otherwise meaningless. Panics if `size` is zero.
pub fn par_seqs_of_size<L: Generator<Item = ParSeq<A>>, A>(leaves: L, size: usize) -> ParSeqGenerator<L> {
    assert!(size >= 1, "a tree needs at least one leaf");
    ParSeqGenerator { leaves, size }
}

/// Generates trees whose leaves are picked uniformly between `empties` and a
/// failure wrapping a value from `failures`. The number of leaves is chosen
/// with [`small`](fn.small.html), so it is at least one and at most the size
/// hint (see [`ParSeqs::size_hint`](struct.ParSeqs.html#method.size_hint)).
///
/// Shrinks toward `ParSeq::Empty`, assuming `empties` does.
pub fn par_seqs<Z, F, A>(empties: Z, failures: F) -> ParSeqs<A>
where
    Z: Generator<Item = ParSeq<A>> + 'static,
    F: Generator<Item = A> + 'static,
    A: 'static,
{
    ParSeqs {
        leaves: one_of(empties).or(failures.map(ParSeq::Single)),
        size_hint: DEFAULT_SIZE_HINT,
    }
}

impl<A> ParSeqs<A> {
    /// Bounds the number of leaves; a hint of zero still yields single leaves.
    pub fn size_hint(mut self, size_hint: usize) -> Self {
        self.size_hint = size_hint;
        self
    }
}

impl<A> Generator for ParSeqs<A> {
    type Item = ParSeq<A>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        small(self.size_hint, 1, |size| par_seqs_of_size(&self.leaves, size)).generate(src)
    }
}

// A branch whose tag and split have been drawn, waiting on its sub-trees.
struct Branch<A> {
    parallel: bool,
    right_size: usize,
    left: Option<ParSeq<A>>,
}

impl<L: Generator<Item = ParSeq<A>>, A> ParSeqGenerator<L> {
    // Draws in pre-order (tag, split, left sub-tree, right sub-tree), keeping
    // unfinished branches on the heap so deep trees cannot exhaust the stack.
    fn generate_sized<I: InfoSource>(&self, size: usize, src: &mut I) -> Maybe<ParSeq<A>> {
        let mut pending: Vec<Branch<A>> = Vec::new();
        let mut size = size;
        loop {
            while size > 1 {
                let parallel = booleans().generate(src)?;
                let split = usizes().between(1, size - 1).generate(src)?;
                trace!("par_seq: {} -> {} + {}", size, split, size - split);
                pending.push(Branch {
                    parallel,
                    right_size: size - split,
                    left: None,
                });
                size = split;
            }

            let mut tree = self.leaves.generate(src)?;
            loop {
                match pending.pop() {
                    None => return Ok(tree),
                    Some(Branch {
                        parallel,
                        left: Some(left),
                        ..
                    }) => {
                        tree = if parallel {
                            ParSeq::both(left, tree)
                        } else {
                            ParSeq::then(left, tree)
                        };
                    }
                    Some(Branch {
                        parallel,
                        right_size,
                        left: None,
                    }) => {
                        pending.push(Branch {
                            parallel,
                            right_size,
                            left: Some(tree),
                        });
                        size = right_size;
                        break;
                    }
                }
            }
        }
    }
}

impl<L: Generator<Item = ParSeq<A>>, A> Generator for ParSeqGenerator<L> {
    type Item = ParSeq<A>;
    fn generate<I: InfoSource>(&self, src: &mut I) -> Maybe<Self::Item> {
        self.generate_sized(self.size, src)
    }
}
