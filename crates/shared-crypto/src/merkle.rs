//! Merkle root over transaction ids
//!
//! Leaves are combined pairwise with SHA-256d over the 64-byte concatenation.
//! A level with an odd number of nodes pairs its last node with itself.

use shared_types::Hash256;

use crate::hashing::Sha256dHasher;

/// Root of a Merkle tree together with the mutation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerkleRoot {
    /// Tree root (zero for an empty leaf list).
    pub root: Hash256,
    /// Two identical siblings were combined somewhere in the tree.
    ///
    /// A list with a repeated trailing run of leaves can produce the same root
    /// as the list without the repetition; callers validating blocks reject
    /// such lists.
    pub mutated: bool,
}

fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut hasher = Sha256dHasher::new();
    hasher.update(left.as_bytes()).update(right.as_bytes());
    hasher.finalize()
}

/// Compute the root and the mutation flag.
pub fn compute_merkle_root(leaves: &[Hash256]) -> MerkleRoot {
    if leaves.is_empty() {
        return MerkleRoot {
            root: Hash256::ZERO,
            mutated: false,
        };
    }

    let mut level = leaves.to_vec();
    let mut mutated = false;

    while level.len() > 1 {
        // Only siblings that were both present in the input count as mutation
        for pair in level.chunks_exact(2) {
            if pair[0] == pair[1] {
                mutated = true;
            }
        }

        if level.len() % 2 == 1 {
            if let Some(last) = level.last().copied() {
                level.push(last);
            }
        }

        level = level
            .chunks_exact(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    MerkleRoot {
        root: level[0],
        mutated,
    }
}

/// Compute the Merkle root of `leaves`.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    compute_merkle_root(leaves).root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(byte: u8) -> Hash256 {
        Hash256::from_bytes([byte; 32])
    }

    #[test]
    fn test_empty_root_is_zero() {
        let result = compute_merkle_root(&[]);
        assert_eq!(result.root, Hash256::ZERO);
        assert!(!result.mutated);
    }

    #[test]
    fn test_single_leaf_is_root() {
        assert_eq!(merkle_root(&[leaf(3)]), leaf(3));
    }

    #[test]
    fn test_two_leaves() {
        let expected = hash_pair(&leaf(1), &leaf(2));
        assert_eq!(merkle_root(&[leaf(1), leaf(2)]), expected);
        assert_ne!(merkle_root(&[leaf(2), leaf(1)]), expected);
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let left = hash_pair(&leaf(1), &leaf(2));
        let right = hash_pair(&leaf(3), &leaf(3));
        let expected = hash_pair(&left, &right);

        let result = compute_merkle_root(&[leaf(1), leaf(2), leaf(3)]);
        assert_eq!(result.root, expected);
        assert!(!result.mutated);
    }

    #[test]
    fn test_duplicated_tail_is_flagged() {
        let honest = compute_merkle_root(&[leaf(1), leaf(2), leaf(3)]);
        let mutated = compute_merkle_root(&[leaf(1), leaf(2), leaf(3), leaf(3)]);

        // Same root, but only the explicit duplicate is flagged
        assert_eq!(honest.root, mutated.root);
        assert!(mutated.mutated);
    }
}
