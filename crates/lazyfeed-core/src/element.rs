#![forbid(unsafe_code)]

//! Element identity shared by the page model and the observers.

use std::fmt;

/// Opaque handle to an element on the page.
///
/// Ids are allocated by the page in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocator for fresh [`ElementId`]s.
#[derive(Debug, Clone, Default)]
pub struct ElementIdAllocator {
    next: u64,
}

impl ElementIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> ElementId {
        self.next += 1;
        ElementId(self.next)
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_unique() {
        let mut alloc = ElementIdAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(alloc.allocated(), 2);
        assert_eq!(a.to_string(), "#1");
    }
}
