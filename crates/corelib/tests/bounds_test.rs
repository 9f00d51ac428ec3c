//! Behavioural tests for the bounds family and the range-set utility.
//!
//! # Test Strategy
//!
//! 1. **Inclusion table**: every variant against both of its endpoints
//! 2. **Scenarios**: wrapping range, excluding bounds split, invalid bounds
//! 3. **Edge cases**: full ring, unbounded right edge, origin handling
//! 4. **Range sets**: normalize and split for parallel scans
//! 5. **Thread safety**: shared bounds used from several threads

use std::sync::Arc;
use std::thread;

use corelib::{
    normalize, split_for_parallelism, BoundsKind, Error, RowBounds, RowPosition, Token,
    TokenBounds,
};

fn t(v: u64) -> Token {
    Token(v)
}

// ============================================================================
// Inclusion Table
// ============================================================================

#[test]
fn test_endpoint_inclusion_table() {
    // (variant, contains(left), contains(right))
    let table = [
        (BoundsKind::Range, false, true),
        (BoundsKind::Bounds, true, true),
        (BoundsKind::ExcludingBounds, false, false),
        (BoundsKind::IncludingExcludingBounds, true, false),
    ];

    for (kind, left, right) in table {
        let b = TokenBounds::new(kind, t(3), t(8)).unwrap();
        assert_eq!(b.contains(&t(3)), left, "{kind} contains left");
        assert_eq!(b.contains(&t(8)), right, "{kind} contains right");
        assert!(b.contains(&t(5)), "{kind} contains interior");
        assert!(!b.contains(&t(2)), "{kind} excludes below");
        assert!(!b.contains(&t(9)), "{kind} excludes above");
    }
}

#[test]
fn test_unbounded_right_for_every_non_wrapping_variant() {
    // `key > 3` with no upper limit, and friends.
    for kind in [
        BoundsKind::Bounds,
        BoundsKind::ExcludingBounds,
        BoundsKind::IncludingExcludingBounds,
    ] {
        let b = TokenBounds::new(kind, t(3), Token::MIN).unwrap();
        assert!(b.is_unbounded_above());
        assert!(b.contains(&Token::MAX), "{kind}");
        assert!(b.contains(&t(1_000_000)), "{kind}");
        assert_eq!(b.contains(&t(3)), kind.left_inclusive(), "{kind}");
        assert!(!b.contains(&Token::MIN), "{kind}");
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_wrapping_range_scenario() {
    let r = TokenBounds::range(t(10), t(5));

    assert!(r.contains(&t(12)));
    assert!(r.contains(&t(3)));
    assert!(!r.contains(&t(7)));

    let pieces = r.unwrap();
    assert_eq!(
        pieces,
        vec![
            TokenBounds::range(t(10), Token::MIN),
            TokenBounds::range(Token::MIN, t(5)),
        ]
    );
    assert!(pieces.iter().all(|p| p.kind() == BoundsKind::Range));
}

#[test]
fn test_excluding_bounds_scenario() {
    let b = TokenBounds::excluding(t(3), t(8)).unwrap();

    assert!(!b.contains(&t(3)));
    assert!(b.contains(&t(5)));
    assert!(!b.contains(&t(8)));

    let (lo, hi) = b.split(&t(5)).unwrap().expect("5 is interior");
    assert_eq!(lo, TokenBounds::range(t(3), t(5)));
    assert_eq!(hi, TokenBounds::excluding(t(5), t(8)).unwrap());
    assert_eq!(lo.to_string(), "(3,5]");
    assert_eq!(hi.to_string(), "(5,8)");
}

#[test]
fn test_invalid_bounds_scenario() {
    let err = TokenBounds::bounds(t(3), t(3)).unwrap_err();
    assert!(matches!(err, Error::InvalidRange { kind: BoundsKind::Bounds, .. }));
    assert_eq!(
        err.to_string(),
        "invalid Bounds bounds: left 3 must precede right 3"
    );
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_range_with_equal_endpoints_is_the_entire_ring() {
    // Pinned: (x, x] is the full ring, never the empty range.
    let r = TokenBounds::range(t(9), t(9));
    assert!(r.is_full_ring());
    for p in [0, 1, 8, 9, 10, u64::MAX] {
        assert!(r.contains(&t(p)), "(9,9] should contain {p}");
    }
    assert_eq!(r.unwrap(), vec![r.clone()]);
}

#[test]
fn test_split_requires_contained_position() {
    let b = TokenBounds::including_excluding(t(3), t(8)).unwrap();
    assert!(matches!(
        b.split(&t(8)),
        Err(Error::PositionNotInRange { .. })
    ));
    assert!(matches!(
        b.split(&t(1)),
        Err(Error::PositionNotInRange { .. })
    ));
    // The left endpoint is accepted even when excluded.
    let e = TokenBounds::excluding(t(3), t(8)).unwrap();
    assert!(e.split(&t(3)).unwrap().is_none());
}

#[test]
fn test_equality_across_variants_is_false() {
    let bounds: Vec<TokenBounds> = BoundsKind::ALL
        .iter()
        .map(|&kind| TokenBounds::new(kind, t(3), t(8)).unwrap())
        .collect();
    for (i, a) in bounds.iter().enumerate() {
        for (j, b) in bounds.iter().enumerate() {
            assert_eq!(a == b, i == j, "{a} vs {b}");
        }
    }
}

#[test]
fn test_row_bounds_resolve_rows_at_the_cut() {
    // A token boundary cannot say where a row at that token goes; row bounds can.
    let left = TokenBounds::range(t(3), t(5)).to_row_bounds();
    let right = TokenBounds::range(t(5), t(8)).to_row_bounds();
    let row = RowPosition::key(t(5));
    assert!(left.contains(&row));
    assert!(!right.contains(&row));
}

#[test]
fn test_row_space_bounds_use_kind_tie_break() {
    let b = RowBounds::including_excluding(
        t(4).min_key_bound(),
        t(4).max_key_bound(),
    )
    .unwrap();
    assert!(b.contains(&RowPosition::key(t(4))));
    assert!(!b.contains(&t(4).max_key_bound()));
    assert!(b.to_token_bounds().is_err());
}

// ============================================================================
// Range Sets
// ============================================================================

#[test]
fn test_normalize_overlapping_pair_is_union() {
    let a = TokenBounds::range(t(2), t(6));
    let b = TokenBounds::bounds(t(6), t(9)).unwrap();
    assert_eq!(normalize([a, b]), vec![TokenBounds::range(t(2), t(9))]);
}

#[test]
fn test_normalize_disjoint_pair_is_sorted() {
    let a = TokenBounds::bounds(t(12), t(14)).unwrap();
    let b = TokenBounds::range(t(2), t(6));
    assert_eq!(normalize([a.clone(), b.clone()]), vec![b, a]);
}

#[test]
fn test_normalize_ownership_around_the_origin() {
    // Two adjacent vnode ranges, one of them wrapping.
    let ranges = [TokenBounds::range(t(12), t(2)), TokenBounds::range(t(2), t(6))];
    assert_eq!(
        normalize(ranges),
        vec![
            TokenBounds::range(Token::MIN, t(6)),
            TokenBounds::range(t(12), Token::MIN),
        ]
    );
}

#[test]
fn test_split_for_parallelism_covers_input() {
    let b = TokenBounds::including_excluding(t(100), t(200)).unwrap();
    let pieces = split_for_parallelism(&b, 4).unwrap();
    assert_eq!(pieces.len(), 4);
    assert_eq!(pieces[0], TokenBounds::bounds(t(100), t(125)).unwrap());
    assert_eq!(pieces[3], TokenBounds::excluding(t(175), t(200)).unwrap());

    for p in 90..210 {
        let hits = pieces.iter().filter(|piece| piece.contains(&t(p))).count();
        assert_eq!(hits, usize::from(b.contains(&t(p))), "position {p}");
    }
}

#[test]
fn test_split_for_parallelism_in_row_space() {
    let b = TokenBounds::range(t(0), t(1000)).to_row_bounds();
    let pieces = split_for_parallelism(&b, 4).unwrap();
    assert_eq!(pieces.len(), 4);
    assert_eq!(pieces[1].left(), &t(250).max_key_bound());
    for p in [1, 250, 251, 999, 1000] {
        let row = RowPosition::key(t(p));
        let hits = pieces.iter().filter(|piece| piece.contains(&row)).count();
        assert_eq!(hits, 1, "row at {p}");
    }
}

// ============================================================================
// Thread Safety
// ============================================================================

#[test]
fn test_bounds_shared_across_threads() {
    let shared = Arc::new(TokenBounds::range(t(10), t(5)));

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let b = Arc::clone(&shared);
            thread::spawn(move || {
                let pieces = split_for_parallelism(&b, 2).unwrap();
                (b.contains(&t(12 + i)), normalize(pieces))
            })
        })
        .collect();

    for handle in handles {
        let (contained, normalized) = handle.join().unwrap();
        assert!(contained);
        assert_eq!(normalized, normalize([(*shared).clone()]));
    }
}
