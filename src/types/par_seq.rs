use std::mem;

/// A tree of outcomes combined sequentially (`Then`) or in parallel
/// (`Both`). Leaves are either `Empty`, or a `Single` failure value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParSeq<A> {
    /// A leaf with no payload.
    Empty,
    /// A leaf carrying one failure.
    Single(A),
    /// Sequential composition: the left side happened before the right.
    Then(Box<ParSeq<A>>, Box<ParSeq<A>>),
    /// Parallel composition: both sides happened concurrently.
    Both(Box<ParSeq<A>>, Box<ParSeq<A>>),
}

impl<A> ParSeq<A> {
    pub fn then(left: ParSeq<A>, right: ParSeq<A>) -> Self {
        ParSeq::Then(Box::new(left), Box::new(right))
    }

    pub fn both(left: ParSeq<A>, right: ParSeq<A>) -> Self {
        ParSeq::Both(Box::new(left), Box::new(right))
    }

    pub fn is_leaf(&self) -> bool {
        match self {
            ParSeq::Empty | ParSeq::Single(_) => true,
            ParSeq::Then(..) | ParSeq::Both(..) => false,
        }
    }

    /// The two sub-trees of a branch; `None` for leaves.
    pub fn children(&self) -> Option<(&ParSeq<A>, &ParSeq<A>)> {
        match self {
            ParSeq::Empty | ParSeq::Single(_) => None,
            ParSeq::Then(l, r) | ParSeq::Both(l, r) => Some((&**l, &**r)),
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.counts().0
    }

    pub fn branch_count(&self) -> usize {
        self.counts().1
    }

    // (leaves, branches), walked with an explicit stack.
    fn counts(&self) -> (usize, usize) {
        let (mut leaves, mut branches) = (0, 0);
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.children() {
                None => leaves += 1,
                Some((l, r)) => {
                    branches += 1;
                    stack.push(l);
                    stack.push(r);
                }
            }
        }
        (leaves, branches)
    }

    /// The leaves, left to right.
    pub fn leaves(&self) -> Vec<&ParSeq<A>> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.children() {
                None => out.push(node),
                Some((l, r)) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        out
    }

    /// The failure values carried by `Single` leaves, left to right.
    pub fn failures(&self) -> Vec<&A> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| match leaf {
                ParSeq::Single(a) => Some(a),
                _ => None,
            })
            .collect()
    }
}

// Detaches sub-trees onto a worklist, so dropping a deep tree does not recurse.
impl<A> Drop for ParSeq<A> {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_children(self, &mut detached);
        while let Some(mut node) = detached.pop() {
            detach_children(&mut node, &mut detached);
        }
    }
}

fn detach_children<A>(node: &mut ParSeq<A>, into: &mut Vec<ParSeq<A>>) {
    match node {
        ParSeq::Empty | ParSeq::Single(_) => (),
        ParSeq::Then(l, r) | ParSeq::Both(l, r) => {
            into.push(mem::replace(&mut **l, ParSeq::Empty));
            into.push(mem::replace(&mut **r, ParSeq::Empty));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_leaves_and_branches() {
        let tree = ParSeq::both(
            ParSeq::Single(1),
            ParSeq::then(ParSeq::Empty, ParSeq::Single(2)),
        );
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.branch_count(), 2);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn failures_are_listed_in_order() {
        let tree = ParSeq::then(
            ParSeq::both(ParSeq::Single('a'), ParSeq::Empty),
            ParSeq::Single('b'),
        );
        assert_eq!(tree.failures(), vec![&'a', &'b']);
        assert_eq!(tree.leaves().len(), 3);
    }

    #[test]
    fn deep_trees_are_counted_and_dropped() {
        let depth = 200_000;
        let mut tree = ParSeq::Single(0u32);
        for i in 1..=depth {
            tree = ParSeq::then(tree, ParSeq::Single(i));
        }
        assert_eq!(tree.leaf_count(), depth as usize + 1);
        assert_eq!(tree.branch_count(), depth as usize);
        drop(tree);
    }

    #[test]
    fn a_leaf_has_no_children() {
        let leaf: ParSeq<()> = ParSeq::Empty;
        assert!(leaf.is_leaf());
        assert_eq!(leaf.children(), None);
        assert_eq!(leaf.leaf_count(), 1);
        assert_eq!(leaf.branch_count(), 0);
    }
}
