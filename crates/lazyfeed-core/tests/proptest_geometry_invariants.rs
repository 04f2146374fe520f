//! Property-based invariant tests for lazyfeed-core geometry.
//!
//! 1. Intersection ratio is always within `0.0..=1.0`.
//! 2. Intersection is symmetric in its rectangle.
//! 3. The intersection rect lies inside both operands.
//! 4. A full-threshold match implies the target lies inside the root.
//! 5. Root margin shorthand display re-parses to the same margin.

use lazyfeed_core::{Intersection, Rect, RootMargin, Threshold};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..=500, -500i32..=500, 0u32..=300, 0u32..=300)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn margin_strategy() -> impl Strategy<Value = RootMargin> {
    (-50i32..=200, -50i32..=200, -50i32..=200, -50i32..=200).prop_map(|(t, r, b, l)| {
        RootMargin::px(f64::from(t), f64::from(r), f64::from(b), f64::from(l))
    })
}

proptest! {
    #[test]
    fn ratio_is_a_fraction(target in rect_strategy(), root in rect_strategy()) {
        let i = Intersection::compute(target, root);
        prop_assert!((0.0..=1.0).contains(&i.ratio));
    }

    #[test]
    fn intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_inside_both(a in rect_strategy(), b in rect_strategy()) {
        if let Some(hit) = a.intersection(&b) {
            for r in [a, b] {
                prop_assert!(hit.left() >= r.left());
                prop_assert!(hit.top() >= r.top());
                prop_assert!(hit.right() <= r.right());
                prop_assert!(hit.bottom() <= r.bottom());
            }
        }
    }

    #[test]
    fn full_threshold_means_contained(target in rect_strategy(), root in rect_strategy()) {
        prop_assume!(!target.is_empty());
        let i = Intersection::compute(target, root);
        if i.satisfies(Threshold::FULL) {
            prop_assert!(target.left() >= root.left());
            prop_assert!(target.right() <= root.right());
            prop_assert!(target.top() >= root.top());
            prop_assert!(target.bottom() <= root.bottom());
        }
    }

    #[test]
    fn margin_display_reparses(margin in margin_strategy()) {
        let text = margin.to_string();
        let parsed: RootMargin = text.parse().unwrap();
        prop_assert_eq!(parsed, margin);
    }

    #[test]
    fn applied_margin_never_inverts(root in rect_strategy(), margin in margin_strategy()) {
        let grown = margin.apply(root);
        prop_assert!(grown.right() >= grown.left());
        prop_assert!(grown.bottom() >= grown.top());
    }
}
