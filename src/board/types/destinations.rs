//! Fixed-capacity, ordered list of knight destinations.

use std::ops::Index;

use super::Position;
use crate::board::constants::MAX_DESTINATIONS;

/// Up to eight squares, kept in the order they were pushed.
///
/// Order matters: the solver breaks weight ties by taking the earliest
/// entry, so enumeration order must survive every filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destinations {
    squares: [Position; MAX_DESTINATIONS],
    len: usize,
}

impl Destinations {
    #[must_use]
    pub const fn new() -> Self {
        Destinations {
            squares: [Position::new(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    /// Callers never push more than `MAX_DESTINATIONS` squares.
    pub(crate) fn push(&mut self, pos: Position) {
        debug_assert!(self.len < MAX_DESTINATIONS, "destination list overflow");
        self.squares[self.len] = pos;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Position] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Position> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.iter().any(|&p| p == pos)
    }

    /// Keep only the squares matching `keep`, preserving order.
    #[must_use]
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(Position) -> bool,
    {
        let mut out = Destinations::new();
        for &pos in self {
            if keep(pos) {
                out.push(pos);
            }
        }
        out
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Destinations::new()
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

pub struct DestinationsIntoIter {
    list: Destinations,
    idx: usize,
}

impl Iterator for DestinationsIntoIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.list.get(self.idx)?;
        self.idx += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DestinationsIntoIter {}

impl IntoIterator for Destinations {
    type Item = Position;
    type IntoIter = DestinationsIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        DestinationsIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for Destinations {
    type Output = Position;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Destinations {
        let mut list = Destinations::new();
        list.push(Position::new(1, 2));
        list.push(Position::new(2, 1));
        list.push(Position::new(3, 3));
        list
    }

    #[test]
    fn test_push_preserves_order() {
        let list = sample();
        assert_eq!(list.len(), 3);
        assert_eq!(list.first(), Some(Position::new(1, 2)));
        assert_eq!(list[2], Position::new(3, 3));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn test_filtered_keeps_relative_order() {
        let list = sample().filtered(|p| p.x() != 2);
        assert_eq!(list.as_slice(), &[Position::new(1, 2), Position::new(3, 3)]);
    }

    #[test]
    fn test_into_iter_by_value() {
        let collected: Vec<Position> = sample().into_iter().collect();
        assert_eq!(collected.len(), 3);
        assert!(sample().contains(Position::new(2, 1)));
        assert!(!sample().contains(Position::new(0, 0)));
    }

    #[test]
    fn test_empty_list() {
        let list = Destinations::default();
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.into_iter().len(), 0);
    }
}
