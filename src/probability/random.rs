use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

///
/// The source of randomness for a weighted collection.
///
/// `next_below(n)` must return a value drawn uniformly from `0..n`. The
/// collections only ever call it with `n > 0`, and will report a
/// [`super::ProbabilityError::InconsistentDraw`] rather than pick a wrong
/// element if the value is out of range.
///
/// Any `FnMut(u64) -> u64` closure is a random source.
///
pub trait RandomSource {
    fn next_below(&mut self, bound: u64) -> u64;
}

impl<F> RandomSource for F
where
    F: FnMut(u64) -> u64,
{
    fn next_below(&mut self, bound: u64) -> u64 {
        self(bound)
    }
}

/// Adapts any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<G>(pub G);

impl<G: Rng> RandomSource for RngSource<G> {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.0.gen_range(0..bound)
    }
}

///
/// The generator used when none is given: a `StdRng`, either seeded from the
/// operating system or from a fixed seed for reproducible draws.
///
#[derive(Clone, Debug)]
pub struct DefaultRandom {
    rng: StdRng,
}

impl DefaultRandom {
    pub fn new() -> DefaultRandom {
        DefaultRandom {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> DefaultRandom {
        DefaultRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        DefaultRandom::new()
    }
}

impl RandomSource for DefaultRandom {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.rng.gen_range(0..bound)
    }
}

///
/// One random stream shared by several collections on the same thread.
///
/// Clones hand out the same underlying source, so draws from any of the
/// collections advance the one stream.
///
#[derive(Debug)]
pub struct SharedRandom<R> {
    source: Rc<RefCell<R>>,
}

impl<R> SharedRandom<R> {
    pub fn new(source: R) -> SharedRandom<R> {
        SharedRandom {
            source: Rc::new(RefCell::new(source)),
        }
    }
}

impl<R> Clone for SharedRandom<R> {
    fn clone(&self) -> Self {
        SharedRandom {
            source: Rc::clone(&self.source),
        }
    }
}

impl<R: RandomSource> RandomSource for SharedRandom<R> {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.source.borrow_mut().next_below(bound)
    }
}
