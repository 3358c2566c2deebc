use hex_slice::AsHex;
use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::error;
use std::fmt;

/// Something that can act as a source of test data.
pub trait InfoSource {
    /// Take a single byte from the source.
    fn draw_u8(&mut self) -> u8;
}

/// Generates data from an underlying Rng instance.
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

/// An adapter that can record the data drawn from an underlying source.
#[derive(Debug)]
pub struct InfoRecorder<I> {
    inner: I,
    data: Vec<u8>,
}

/// A pool of data that we can draw upon to generate other types of data.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InfoPool {
    pub(in crate::data) data: Vec<u8>,
}

/// A handle to an info pool that we can draw replayed bytes from, and zero after.
#[derive(Debug, Clone)]
pub struct InfoReplay<'a> {
    data: &'a [u8],
    off: usize,
}

/// The reasons why drawing data from a pool can fail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DataError {
    /// One of our combinators said that we should not test this value.
    SkipItem,
}

/// The result of drawing a value from a source.
pub type Maybe<T> = Result<T, DataError>;

impl<'a, I: InfoSource + ?Sized> InfoSource for &'a mut I {
    fn draw_u8(&mut self) -> u8 {
        (**self).draw_u8()
    }
}

impl RngSource<XorShiftRng> {
    /// Creates a RngSource with a XorShift generator seeded by the operating system.
    pub fn new() -> Self {
        RngSource::of(XorShiftRng::from_entropy())
    }

    /// Creates a RngSource that always produces the same stream for `seed`.
    pub fn seeded(seed: u64) -> Self {
        RngSource::of(XorShiftRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RngSource<R> {
    /// Wraps an existing random number generator.
    pub fn of(rng: R) -> Self {
        RngSource { rng }
    }
}

impl<R: RngCore> InfoSource for RngSource<R> {
    fn draw_u8(&mut self) -> u8 {
        (self.rng.next_u32() >> 24) as u8
    }
}

impl<I> InfoRecorder<I> {
    /// Creates a recording InfoSource.
    pub fn new(inner: I) -> Self {
        InfoRecorder {
            inner,
            data: Vec::new(),
        }
    }

    /// Extracts the data recorded.
    pub fn into_pool(self) -> InfoPool {
        InfoPool::of_vec(self.data)
    }
}

impl<I: InfoSource> InfoSource for InfoRecorder<I> {
    fn draw_u8(&mut self) -> u8 {
        let byte = self.inner.draw_u8();
        self.data.push(byte);
        byte
    }
}

impl fmt::Debug for InfoPool {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("InfoPool")
            .field("data", &format_args!("{:x}", self.data.as_hex()))
            .finish()
    }
}

impl InfoPool {
    /// Create an `InfoPool` with a given vector of bytes. (Mostly used for
    /// testing).
    pub fn of_vec(data: Vec<u8>) -> Self {
        InfoPool { data }
    }

    /// Creates an empty pool; replaying it yields only zeroes.
    pub fn new() -> Self {
        InfoPool::default()
    }

    /// Allows access to the underlying buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.data
    }

    /// The number of recorded bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the pool holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Creates a tap that allows drawing information from this pool.
    pub fn replay(&self) -> InfoReplay<'_> {
        InfoReplay {
            data: &self.data,
            off: 0,
        }
    }
}

impl<'a> InfoReplay<'a> {
    /// Consumes the next byte from this tap, or zero once the pool has been
    /// used up.
    pub fn next_byte(&mut self) -> u8 {
        if let Some(res) = self.data.get(self.off).cloned() {
            self.off += 1;
            res
        } else {
            0
        }
    }
}

impl<'a> InfoSource for InfoReplay<'a> {
    fn draw_u8(&mut self) -> u8 {
        self.next_byte()
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DataError::SkipItem => write!(fmt, "generator skipped this item"),
        }
    }
}

impl error::Error for DataError {}
