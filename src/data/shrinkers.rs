use std::cmp::min;

use crate::data::source::*;

/// Iterates over a series of shrunk pools. If we imagine that our buffer has
/// a sz of (1 << (log2sz-1)) < sz ≤ (1 << log2sz), then where:
/// f(x) = 1<<(log2sz-x) we want to cut out
/// chunks of:
/// ```text
/// 0..f(0),
/// 0..f(1), f(1)..2f(1),
/// 0..f(2), f(2)..2f(2), 2f(2)..3f(2), 3f(2)..4f(2),
/// ```
///
/// In other words, we remove the whole lot, then first half, second half,
/// first quarter, second quarter, etc.
#[derive(Debug)]
struct RemovalShrinker {
    seed: InfoPool,
    log2sz: usize,
    // Ranges from 0..=log2sz
    level: usize,
    // Ranges from 0..(1<<level)
    chunk: usize,
}

/// Walks over each byte, replacing it with zero, then with progressively
/// smaller reductions (`x - x/2`, `x - x/4`, ...).
#[derive(Debug)]
struct ScalarShrinker {
    seed: InfoPool,
    pos: usize,
    bitoff: u32,
}

impl RemovalShrinker {
    fn new(seed: InfoPool) -> Self {
        let max_idx = seed.data.len().saturating_sub(1);
        let log2sz = (usize::max_value().count_ones() - max_idx.leading_zeros()) as usize;
        RemovalShrinker {
            seed,
            log2sz,
            level: 0,
            chunk: 0,
        }
    }
}

impl Iterator for RemovalShrinker {
    type Item = InfoPool;
    fn next(&mut self) -> Option<Self::Item> {
        while self.level <= self.log2sz {
            let width = 1 << (self.log2sz - self.level);
            let start = self.chunk * width;
            let len = self.seed.data.len();

            if start >= len {
                self.chunk = 0;
                self.level += 1;
                continue;
            }
            self.chunk += 1;

            let end = min(start + width, len);
            let mut data = Vec::with_capacity(len - (end - start));
            data.extend_from_slice(&self.seed.data[..start]);
            data.extend_from_slice(&self.seed.data[end..]);
            trace!("removed {}..{} of {}", start, end, len);

            return Some(InfoPool::of_vec(data));
        }
        None
    }
}

impl ScalarShrinker {
    fn new(seed: InfoPool) -> Self {
        ScalarShrinker {
            seed,
            pos: 0,
            bitoff: 0,
        }
    }
}

impl Iterator for ScalarShrinker {
    type Item = InfoPool;
    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.seed.data.len() {
            let orig = self.seed.data[self.pos];
            let bits = u8::max_value().count_ones() - orig.leading_zeros();
            if self.bitoff >= bits {
                self.pos += 1;
                self.bitoff = 0;
                continue;
            }

            let reduced = orig - (orig >> self.bitoff);
            self.bitoff += 1;

            let mut candidate = self.seed.clone();
            candidate.data[self.pos] = reduced;
            trace!("shrunk byte {}: {} -> {}", self.pos, orig, reduced);
            return Some(candidate);
        }
        None
    }
}

/// Try to find the smallest pool `p` such that the predicate `pred` returns
/// true. Given that our [generators](../generators/index.html) tend to
/// generate smaller outputs from smaller inputs, by minimizing the source
/// pool we can find the smallest value that provokes a failure.
///
/// If we do not find any smaller pool that satisifies `pred`; we return
/// `None`.
///
/// We try removing slices first (as much of the pool as we can, then halves,
/// quarters and so on), and then reducing individual bytes. Every accepted
/// candidate is either shorter than, or bytewise below, its predecessor, so
/// the search always terminates.
pub fn minimize<F: Fn(&mut InfoReplay) -> bool>(p: &InfoPool, pred: &F) -> Option<InfoPool> {
    let mut best: Option<InfoPool> = None;
    loop {
        let current = best.clone().unwrap_or_else(|| p.clone());
        debug!("Shrinking pool of {} bytes", current.len());
        let found = RemovalShrinker::new(current.clone())
            .chain(ScalarShrinker::new(current))
            .find(|c| pred(&mut c.replay()));

        match found {
            Some(candidate) => {
                trace!("candidate {:?}", candidate);
                best = Some(candidate);
            }
            None => {
                debug!("Nothing smaller found");
                return best;
            }
        }
    }
}
