use crate::engine::Candidate;
use rand::seq::SliceRandom;
use rand::Rng;

// An N×N board never has more than N² - 4 empty cells.
const MAX_CANDIDATES: usize = 64;

/// Fixed-capacity candidate buffer, built fresh at every search node.
pub struct MoveList {
    candidates: [Candidate; MAX_CANDIDATES],
    count: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            candidates: [Candidate::default(); MAX_CANDIDATES],
            count: 0,
        }
    }
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: Candidate) {
        if let Some(slot) = self.candidates.get_mut(self.count) {
            *slot = candidate;
            self.count += 1;
        } else {
            debug_assert!(false, "MoveList overflow! Max candidates: {MAX_CANDIDATES}");
        }
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_slice(&self) -> &[Candidate] {
        self.candidates.get(..self.count).unwrap_or(&[])
    }

    fn as_mut_slice(&mut self) -> &mut [Candidate] {
        self.candidates.get_mut(..self.count).unwrap_or(&mut [])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.as_slice().iter()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.as_mut_slice().shuffle(rng);
    }

    /// Stable: equal values keep their current relative order.
    pub fn sort_descending(&mut self) {
        self.as_mut_slice().sort_by(|a, b| b.value.cmp(&a.value));
    }

    /// Stable: equal values keep their current relative order.
    pub fn sort_ascending(&mut self) {
        self.as_mut_slice().sort_by(|a, b| a.value.cmp(&b.value));
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Candidate;
    type IntoIter = std::iter::Take<std::array::IntoIter<Candidate, MAX_CANDIDATES>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter().take(self.count)
    }
}
