use super::entry::ProbabilityEntry;
use super::error::ProbabilityError;
use super::random::{DefaultRandom, RandomSource};
use log::{debug, trace};
use std::fmt;

///
/// Same blocks as [`super::collection::ProbabilityCollection`], but the end
/// of every block is kept alongside the entries so a draw is a binary search.
///
/// `block_ends[i]` is the sum of the shares of entries `0..=i`. Draws are
/// O(log n); removal rebuilds the block ends and is O(n).
///
pub struct ProbabilityMap<E, R = DefaultRandom> {
    entries: Vec<ProbabilityEntry<E>>,
    block_ends: Vec<u64>,
    random: R,
}

impl<E> ProbabilityMap<E, DefaultRandom> {
    pub fn new() -> ProbabilityMap<E, DefaultRandom> {
        ProbabilityMap::with_random(DefaultRandom::new())
    }

    pub fn with_seed(seed: u64) -> ProbabilityMap<E, DefaultRandom> {
        ProbabilityMap::with_random(DefaultRandom::seeded(seed))
    }
}

impl<E> Default for ProbabilityMap<E, DefaultRandom> {
    fn default() -> Self {
        ProbabilityMap::new()
    }
}

impl<E, R: RandomSource> ProbabilityMap<E, R> {
    pub fn with_random(random: R) -> ProbabilityMap<E, R> {
        ProbabilityMap {
            entries: Vec::new(),
            block_ends: Vec::new(),
            random,
        }
    }

    /// Fails on the first zero share; no partial map is returned.
    pub fn try_from_entries<I>(entries: I, random: R) -> Result<Self, ProbabilityError>
    where
        I: IntoIterator<Item = (E, u32)>,
    {
        let mut map = ProbabilityMap::with_random(random);
        for (element, probability) in entries {
            map.add(element, probability)?;
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_probability(&self) -> u64 {
        self.block_ends.last().copied().unwrap_or(0)
    }

    pub fn add(&mut self, element: E, probability: u32) -> Result<(), ProbabilityError> {
        if probability == 0 {
            return Err(ProbabilityError::InvalidProbability { probability });
        }
        let end = self.total_probability() + u64::from(probability);
        self.entries.push(ProbabilityEntry::new(element, probability));
        self.block_ends.push(end);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.block_ends.clear();
    }

    pub fn get(&mut self) -> Result<&E, ProbabilityError> {
        let total = self.total_probability();
        if self.is_empty() {
            return Err(ProbabilityError::EmptyCollection);
        }

        let draw = self.random.next_below(total);
        trace!("Drew {} of {}", draw, total);

        // First block whose end is past the draw
        let index = self.block_ends.partition_point(|&end| end <= draw);
        match self.entries.get(index) {
            Some(entry) => Ok(entry.element()),
            None => Err(ProbabilityError::InconsistentDraw { draw, total }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbabilityEntry<E>> {
        self.entries.iter()
    }

    fn rebuild_block_ends(&mut self) {
        self.block_ends.clear();
        let mut end: u64 = 0;
        for entry in self.entries.iter() {
            end += u64::from(entry.probability());
            self.block_ends.push(end);
        }
    }
}

impl<E: PartialEq, R: RandomSource> ProbabilityMap<E, R> {
    pub fn contains(&self, element: &E) -> bool {
        self.entries.iter().any(|entry| entry.element() == element)
    }

    /// Removes every entry equal to `element`.
    pub fn remove(&mut self, element: &E) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.element() != element);
        let removed = before - self.entries.len();
        if removed == 0 {
            return false;
        }
        self.rebuild_block_ends();
        debug!(
            "Removed {} entries, total probability now {}",
            removed,
            self.total_probability()
        );
        true
    }
}

impl<'a, E, R> IntoIterator for &'a ProbabilityMap<E, R> {
    type Item = &'a ProbabilityEntry<E>;
    type IntoIter = std::slice::Iter<'a, ProbabilityEntry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<E: Clone, R: Clone> Clone for ProbabilityMap<E, R> {
    fn clone(&self) -> Self {
        ProbabilityMap {
            entries: self.entries.clone(),
            block_ends: self.block_ends.clone(),
            random: self.random.clone(),
        }
    }
}

impl<E: fmt::Debug, R> fmt::Debug for ProbabilityMap<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbabilityMap")
            .field("entries", &self.entries)
            .field("block_ends", &self.block_ends)
            .finish_non_exhaustive()
    }
}
