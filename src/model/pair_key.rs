//! Vertex pair keys.
//!
//! Two 32-bit vertex ids packed into one 64-bit value, used as the hash key
//! for every "have we seen an edge between these two vertices" set in the
//! metric calculators.
//!
//! ```text
//!  63             32 31              0
//! ┌────────────────┬────────────────┐
//! │   first id     │   second id    │
//! └────────────────┴────────────────┘
//! ```
//!
//! The *ordered* variant keeps call order, so `(a, b)` and `(b, a)` differ.
//! The *unordered* variant sorts the ids first, so they collide.

use serde::{Deserialize, Serialize};
use super::VertexId;

/// Packed vertex pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexPairKey(pub u64);

impl VertexPairKey {
    /// Pack two ids. With `ordered == false` the smaller id goes first.
    pub fn pack(id1: VertexId, id2: VertexId, ordered: bool) -> Self {
        let (first, second) = if ordered || id1 <= id2 { (id1, id2) } else { (id2, id1) };
        Self(((first.0 as u64) << 32) | (second.0 as u64 & 0xFFFF_FFFF))
    }

    pub fn ordered(id1: VertexId, id2: VertexId) -> Self {
        Self::pack(id1, id2, true)
    }

    pub fn unordered(id1: VertexId, id2: VertexId) -> Self {
        Self::pack(id1, id2, false)
    }

    /// Recover the two ids. Unordered keys come back as `(min, max)`.
    pub fn unpack(self) -> (VertexId, VertexId) {
        (VertexId((self.0 >> 32) as u32), VertexId(self.0 as u32))
    }

    /// The ordered key with both ids swapped.
    pub fn reversed(self) -> Self {
        let (a, b) = self.unpack();
        Self::ordered(b, a)
    }

    pub fn is_self_pair(self) -> bool {
        let (a, b) = self.unpack();
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_layout() {
        let key = VertexPairKey::ordered(VertexId(1), VertexId(2));
        assert_eq!(key.0, (1u64 << 32) | 2);
        assert_ne!(key, VertexPairKey::ordered(VertexId(2), VertexId(1)));
    }

    #[test]
    fn test_unordered_canonical_form() {
        let key = VertexPairKey::unordered(VertexId(9), VertexId(4));
        assert_eq!(key, VertexPairKey::unordered(VertexId(4), VertexId(9)));
        assert_eq!(key.unpack(), (VertexId(4), VertexId(9)));
    }

    #[test]
    fn test_extreme_ids() {
        let key = VertexPairKey::ordered(VertexId(u32::MAX), VertexId(0));
        assert_eq!(key.unpack(), (VertexId(u32::MAX), VertexId(0)));
        assert_eq!(key.reversed().unpack(), (VertexId(0), VertexId(u32::MAX)));
    }

    #[test]
    fn test_self_pair() {
        assert!(VertexPairKey::unordered(VertexId(5), VertexId(5)).is_self_pair());
        assert!(!VertexPairKey::ordered(VertexId(5), VertexId(6)).is_self_pair());
    }
}
