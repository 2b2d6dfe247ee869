use super::entry::ProbabilityEntry;
use super::error::ProbabilityError;
use super::random::{DefaultRandom, RandomSource};
use log::{debug, trace};
use std::fmt;

///
/// A collection that returns random elements based on their probability share.
///
/// Each element owns a "block" of space as large as its share. Blocks are laid
/// out in insertion order from 0 to the total probability with no gaps. A draw
/// picks a number in `0..total` and returns the element whose block holds it,
/// so elements with larger blocks are picked more often.
///
/// Adding is O(1); removing and drawing walk the blocks and are O(n). See
/// [`super::map::ProbabilityMap`] for O(log n) draws.
///
pub struct ProbabilityCollection<E, R = DefaultRandom> {
    entries: Vec<ProbabilityEntry<E>>,
    total_probability: u64,
    random: R,
}

impl<E> ProbabilityCollection<E, DefaultRandom> {
    pub fn new() -> ProbabilityCollection<E, DefaultRandom> {
        ProbabilityCollection::with_random(DefaultRandom::new())
    }

    pub fn with_seed(seed: u64) -> ProbabilityCollection<E, DefaultRandom> {
        ProbabilityCollection::with_random(DefaultRandom::seeded(seed))
    }
}

impl<E> Default for ProbabilityCollection<E, DefaultRandom> {
    fn default() -> Self {
        ProbabilityCollection::new()
    }
}

impl<E, R: RandomSource> ProbabilityCollection<E, R> {
    pub fn with_random(random: R) -> ProbabilityCollection<E, R> {
        ProbabilityCollection {
            entries: Vec::new(),
            total_probability: 0,
            random,
        }
    }

    ///
    /// Builds a collection from (element, share) pairs in order.
    ///
    /// Fails on the first zero share; no partial collection is returned.
    ///
    pub fn try_from_entries<I>(entries: I, random: R) -> Result<Self, ProbabilityError>
    where
        I: IntoIterator<Item = (E, u32)>,
    {
        let mut collection = ProbabilityCollection::with_random(random);
        for (element, probability) in entries {
            collection.add(element, probability)?;
        }
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the probability shares of every entry
    pub fn total_probability(&self) -> u64 {
        self.total_probability
    }

    ///
    /// Appends `element` with the given share. A share of 0 is rejected and
    /// leaves the collection untouched.
    ///
    pub fn add(&mut self, element: E, probability: u32) -> Result<(), ProbabilityError> {
        if probability == 0 {
            return Err(ProbabilityError::InvalidProbability { probability });
        }
        self.entries.push(ProbabilityEntry::new(element, probability));
        self.total_probability += u64::from(probability);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_probability = 0;
    }

    ///
    /// Returns a random element, chosen with probability share / total.
    ///
    pub fn get(&mut self) -> Result<&E, ProbabilityError> {
        if self.is_empty() {
            return Err(ProbabilityError::EmptyCollection);
        }

        let draw = self.random.next_below(self.total_probability);
        trace!("Drew {} of {}", draw, self.total_probability);

        let mut cursor: u64 = 0;
        for entry in self.entries.iter() {
            cursor += u64::from(entry.probability());
            if draw < cursor {
                return Ok(entry.element());
            }
        }

        Err(ProbabilityError::InconsistentDraw {
            draw,
            total: self.total_probability,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbabilityEntry<E>> {
        self.entries.iter()
    }
}

impl<E: PartialEq, R: RandomSource> ProbabilityCollection<E, R> {
    pub fn contains(&self, element: &E) -> bool {
        self.entries.iter().any(|entry| entry.element() == element)
    }

    ///
    /// Removes every entry equal to `element`, not just the first.
    ///
    /// Returns true if anything was removed.
    ///
    pub fn remove(&mut self, element: &E) -> bool {
        let before = self.entries.len();
        let mut removed_probability: u64 = 0;
        self.entries.retain(|entry| {
            if entry.element() == element {
                removed_probability += u64::from(entry.probability());
                false
            } else {
                true
            }
        });
        self.total_probability -= removed_probability;

        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(
                "Removed {} entries, total probability now {}",
                removed, self.total_probability
            );
        }
        removed > 0
    }
}

impl<'a, E, R> IntoIterator for &'a ProbabilityCollection<E, R> {
    type Item = &'a ProbabilityEntry<E>;
    type IntoIter = std::slice::Iter<'a, ProbabilityEntry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<E: Clone, R: Clone> Clone for ProbabilityCollection<E, R> {
    fn clone(&self) -> Self {
        ProbabilityCollection {
            entries: self.entries.clone(),
            total_probability: self.total_probability,
            random: self.random.clone(),
        }
    }
}

impl<E: fmt::Debug, R> fmt::Debug for ProbabilityCollection<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbabilityCollection")
            .field("entries", &self.entries)
            .field("total_probability", &self.total_probability)
            .finish_non_exhaustive()
    }
}
