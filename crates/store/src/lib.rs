// Byte-keyed in-memory node storage for the Verkle tree.
//
// The arithmetic layers hand this store fixed-width byte encodings of
// field elements and curve points as keys and values; the stem and
// branch node types belong to the tree logic and are generic here.

use std::collections::HashMap;

/// Three byte-keyed tables: raw leaf values, stem (suffix) nodes, and
/// branch (internal) nodes. `Vec<u8>` keys hash and compare by content.
///
/// Table management, eviction, and persistence live outside this crate.
pub struct MemoryDb<S, B> {
    pub leaf_table: HashMap<Vec<u8>, Vec<u8>>,
    pub stem_table: HashMap<Vec<u8>, S>,
    pub branch_table: HashMap<Vec<u8>, B>,
}

impl<S, B> MemoryDb<S, B> {
    pub fn new() -> Self {
        Self {
            leaf_table: HashMap::new(),
            stem_table: HashMap::new(),
            branch_table: HashMap::new(),
        }
    }
}

impl<S, B> Default for MemoryDb<S, B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verkle_ecc::curves::bandersnatch::{BandersnatchAffine, Fr};

    #[derive(Debug, PartialEq)]
    struct StemNode(u64);

    #[derive(Debug, PartialEq)]
    struct BranchNode(Vec<u8>);

    #[test]
    fn leaf_round_trip_keyed_by_field_encoding() {
        let mut db: MemoryDb<StemNode, BranchNode> = MemoryDb::new();
        let key = Fr::from_u64(42).to_be_bytes().to_vec();
        db.leaf_table.insert(key.clone(), vec![1, 2, 3]);
        assert_eq!(db.leaf_table.get(&key), Some(&vec![1, 2, 3]));
        // the same value encodes to the same key
        let same_key = Fr::from_u64(42).to_be_bytes().to_vec();
        assert_eq!(db.leaf_table.get(&same_key), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn stem_and_branch_tables_keyed_by_point_encoding() {
        let mut db: MemoryDb<StemNode, BranchNode> = MemoryDb::new();
        let commitment = BandersnatchAffine::generator().to_bytes().to_vec();
        db.stem_table.insert(commitment.clone(), StemNode(7));
        db.branch_table
            .insert(commitment.clone(), BranchNode(commitment.clone()));
        assert_eq!(db.stem_table.get(&commitment), Some(&StemNode(7)));
        assert_eq!(
            db.branch_table.get(&commitment),
            Some(&BranchNode(commitment.clone()))
        );
    }

    #[test]
    fn missing_keys_are_absent() {
        let db: MemoryDb<StemNode, BranchNode> = MemoryDb::default();
        assert!(db.leaf_table.get(&vec![0u8; 32]).is_none());
    }
}
