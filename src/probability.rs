//! Weighted random selection over a changing set of elements.
pub mod collection;
pub mod entry;
pub mod error;
pub mod map;
pub mod random;

pub use collection::ProbabilityCollection;
pub use entry::ProbabilityEntry;
pub use error::ProbabilityError;
pub use map::ProbabilityMap;
pub use random::{DefaultRandom, RandomSource, RngSource, SharedRandom};

///
/// The operations shared by every weighted collection, whatever backs the draw.
///
/// Elements are compared with `PartialEq`; removing an element removes every
/// entry equal to it.
///
pub trait WeightedCollection {
    type Element: PartialEq;
    fn add(&mut self, element: Self::Element, probability: u32) -> Result<(), ProbabilityError>;
    fn remove(&mut self, element: &Self::Element) -> bool;
    fn contains(&self, element: &Self::Element) -> bool;
    fn get(&mut self) -> Result<&Self::Element, ProbabilityError>;
    fn len(&self) -> usize;
    fn total_probability(&self) -> u64;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: PartialEq, R: RandomSource> WeightedCollection for ProbabilityCollection<E, R> {
    type Element = E;
    fn add(&mut self, element: E, probability: u32) -> Result<(), ProbabilityError> {
        ProbabilityCollection::add(self, element, probability)
    }
    fn remove(&mut self, element: &E) -> bool {
        ProbabilityCollection::remove(self, element)
    }
    fn contains(&self, element: &E) -> bool {
        ProbabilityCollection::contains(self, element)
    }
    fn get(&mut self) -> Result<&E, ProbabilityError> {
        ProbabilityCollection::get(self)
    }
    fn len(&self) -> usize {
        ProbabilityCollection::len(self)
    }
    fn total_probability(&self) -> u64 {
        ProbabilityCollection::total_probability(self)
    }
    fn clear(&mut self) {
        ProbabilityCollection::clear(self)
    }
}

impl<E: PartialEq, R: RandomSource> WeightedCollection for ProbabilityMap<E, R> {
    type Element = E;
    fn add(&mut self, element: E, probability: u32) -> Result<(), ProbabilityError> {
        ProbabilityMap::add(self, element, probability)
    }
    fn remove(&mut self, element: &E) -> bool {
        ProbabilityMap::remove(self, element)
    }
    fn contains(&self, element: &E) -> bool {
        ProbabilityMap::contains(self, element)
    }
    fn get(&mut self) -> Result<&E, ProbabilityError> {
        ProbabilityMap::get(self)
    }
    fn len(&self) -> usize {
        ProbabilityMap::len(self)
    }
    fn total_probability(&self) -> u64 {
        ProbabilityMap::total_probability(self)
    }
    fn clear(&mut self) {
        ProbabilityMap::clear(self)
    }
}
