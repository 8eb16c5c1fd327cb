//! Triangle identifiers.
//!
//! A [`TriangleId`] is the dense, zero-based position of a triangle inside
//! its mesh. Ids stand in for object identity: they are assigned in storage
//! order when the mesh is built, never change afterwards, and are cheap to
//! copy, compare and validate.

use std::fmt::{self, Debug};

/// A type-safe triangle index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TriangleId(u32);

impl TriangleId {
    /// Create a new id from a raw index.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "index {} too large for u32", index);
        Self(index as u32)
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Debug for TriangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({})", self.0)
    }
}

impl From<usize> for TriangleId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_raw_index() {
        let id = TriangleId::new(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn debug_is_compact() {
        assert_eq!(format!("{:?}", TriangleId::new(7)), "T(7)");
    }

    #[test]
    fn orders_by_index() {
        assert!(TriangleId::new(1) < TriangleId::new(2));
        assert_eq!(TriangleId::new(3), TriangleId::from(3));
    }
}
