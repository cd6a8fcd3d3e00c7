//! Tests for serde serialization/deserialization.
//!
//! These tests verify that the serializable types round-trip through JSON
//! preserving all observable behavior.

#![cfg(feature = "serde")]

use fastset::{BitVec, Relation, Transform};

// ============================================================================
// BitVec serialization tests
// ============================================================================

mod bitvec_serde {
    use super::*;

    #[test]
    fn test_empty_bitvec() {
        let v = BitVec::new();
        let json = serde_json::to_string(&v).unwrap();
        let restored: BitVec = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 0);
        assert_eq!(restored.count_ones(), 0);
    }

    #[test]
    fn test_simple_bitvec() {
        let v: BitVec = [0, 3, 64, 200].into_iter().collect();

        let json = serde_json::to_string(&v).unwrap();
        let restored: BitVec = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), v.len());
        assert_eq!(restored, v);
        assert_eq!(
            restored.ones().collect::<Vec<_>>(),
            v.ones().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_deserialize_masks_bits_beyond_len() {
        // Hand-edited input with every bit set but a 2-bit length; the
        // restored vector must not expose the out-of-range bits.
        let json = format!("{{\"words\":[{}],\"len\":2}}", u64::MAX);
        let v: BitVec = serde_json::from_str(&json).unwrap();

        assert_eq!(v.len(), 2);
        assert_eq!(v.count_ones(), 2);
        assert_eq!(v.next_set_bit(2), None);
        assert!(!v.test(5));
        assert_eq!(v.ones().collect::<Vec<_>>(), vec![0, 1]);

        // Algebra on the restored vector stays within the length.
        let other: BitVec = [1, 3].into_iter().collect();
        assert_eq!(v.union(&other).ones().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn test_deserialize_normalizes_word_count() {
        // Too many words for the length: surplus is dropped.
        let json = format!("{{\"words\":[1,{}],\"len\":3}}", u64::MAX);
        let v: BitVec = serde_json::from_str(&json).unwrap();
        assert_eq!(v.word_count(), 1);
        assert_eq!(v.ones().collect::<Vec<_>>(), vec![0]);

        // Too few words: missing range reads as zero.
        let v: BitVec = serde_json::from_str("{\"words\":[],\"len\":100}").unwrap();
        assert_eq!(v.len(), 100);
        assert_eq!(v.word_count(), 2);
        assert!(v.none());
        assert_eq!(v.next_set_bit(0), None);
    }

    #[test]
    fn test_boundary_word_bitvec() {
        // Non-word-aligned length after a shrink.
        let mut v: BitVec = (0..100usize).collect();
        v.resize(37);

        let json = serde_json::to_string(&v).unwrap();
        let restored: BitVec = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 37);
        assert_eq!(restored.count_ones(), 37);
        assert_eq!(restored.next_set_bit(37), None);
    }
}

// ============================================================================
// Transform serialization tests
// ============================================================================

mod transform_serde {
    use super::*;

    #[test]
    fn test_transform_roundtrip() {
        let mut t = Transform::new(5);
        t.add(0, Some(2)).unwrap();
        t.add(2, Some(4)).unwrap();

        let json = serde_json::to_string(&t).unwrap();
        let restored: Transform = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.domain_size(), 5);
        let v: BitVec = [0, 1, 3].into_iter().collect();
        assert_eq!(restored.apply(&v), t.apply(&v));
    }
}

// ============================================================================
// Relation serialization tests
// ============================================================================

mod relation_serde {
    use super::*;

    #[test]
    fn test_relation_roundtrip() {
        for rel in [
            Relation::Equal,
            Relation::Superset,
            Relation::Subset,
            Relation::Incomparable,
        ] {
            let json = serde_json::to_string(&rel).unwrap();
            let restored: Relation = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, rel);
        }
    }
}
