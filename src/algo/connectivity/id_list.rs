//! Ordered lists of caller-supplied ids.

use std::fmt;

/// An ordered list of ids edited by value rather than by position.
///
/// Used for seed point/cell ids and for the region ids to extract. Duplicates
/// are allowed; [`IdList::delete`] removes every occurrence of a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList {
    ids: Vec<usize>,
}

impl IdList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all ids.
    pub fn initialize(&mut self) {
        self.ids.clear();
    }

    /// Append an id.
    pub fn add(&mut self, id: usize) {
        self.ids.push(id);
    }

    /// Remove every occurrence of `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: usize) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&x| x != id);
        self.ids.len() != before
    }

    /// Whether `id` is in the list.
    pub fn contains(&self, id: usize) -> bool {
        self.ids.contains(&id)
    }

    /// Number of ids, counting duplicates.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.ids.iter().copied()
    }

    /// The ids as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.ids
    }
}

impl FromIterator<usize> for IdList {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<usize>> for IdList {
    fn from(ids: Vec<usize>) -> Self {
        Self { ids }
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "]")
    }
}
