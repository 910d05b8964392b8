use std::fmt::Debug;

/// A station tagged with the best distance known when it was pushed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<W> {
    pub station: String,
    pub distance: W,
}

impl<W> FrontierEntry<W> {
    pub fn new(station: impl Into<String>, distance: W) -> Self {
        FrontierEntry {
            station: station.into(),
            distance,
        }
    }
}

/// Working set of candidate stations for the relaxation loop
///
/// A station may be present several times with different snapshot distances.
/// Callers are expected to discard pops of stations they already finalized.
pub trait Frontier<W>: Debug
where
    W: Ord + Copy + Debug,
{
    /// Adds a candidate
    fn push(&mut self, entry: FrontierEntry<W>);

    /// Removes and returns a candidate with the smallest distance
    fn pop_smallest(&mut self) -> Option<FrontierEntry<W>>;

    /// Returns the number of entries, stale ones included
    fn len(&self) -> usize;

    /// Returns true if no candidates remain
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stack kept sorted so that the top always holds the smallest distance
///
/// Insertion scans down from the top past every strictly smaller entry, so a
/// push costs O(n) while a pop is O(1). Equal distances stack last-in first-out.
#[derive(Debug, Clone)]
pub struct OrderedFrontier<W> {
    /// Bottom of the stack at index 0, top at the end
    entries: Vec<FrontierEntry<W>>,
}

impl<W> OrderedFrontier<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates an empty frontier
    pub fn new() -> Self {
        OrderedFrontier {
            entries: Vec::new(),
        }
    }

    /// Returns the entry that the next pop would yield
    pub fn peek(&self) -> Option<&FrontierEntry<W>> {
        self.entries.last()
    }
}

impl<W> Default for OrderedFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W> for OrderedFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn push(&mut self, entry: FrontierEntry<W>) {
        let mut idx = self.entries.len();
        while idx > 0 && entry.distance > self.entries[idx - 1].distance {
            idx -= 1;
        }
        self.entries.insert(idx, entry);
    }

    fn pop_smallest(&mut self) -> Option<FrontierEntry<W>> {
        self.entries.pop()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
