///
/// An element and its probability share within a collection.
///
/// The share is the size of the element's "block". Entries are never
/// adjusted in place; to change a share, remove the element and add it again.
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProbabilityEntry<E> {
    element: E,
    probability: u32,
}

impl<E> ProbabilityEntry<E> {
    /// Only the collections build entries, after the share has been checked.
    pub(crate) fn new(element: E, probability: u32) -> ProbabilityEntry<E> {
        debug_assert!(probability > 0);
        ProbabilityEntry {
            element,
            probability,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Probability share of this entry in the collection
    pub fn probability(&self) -> u32 {
        self.probability
    }

    pub fn into_element(self) -> E {
        self.element
    }
}
