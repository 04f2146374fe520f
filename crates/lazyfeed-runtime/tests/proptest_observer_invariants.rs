//! Property-based invariant tests for the intersection observer.
//!
//! 1. Only watched elements are ever reported.
//! 2. An element appears at most once per batch.
//! 3. Entries follow registration order.
//! 4. A reported condition matches the geometry at that frame.
//! 5. A second pass over unchanged geometry reports nothing.

use lazyfeed_core::{ElementId, Intersection, Rect, RootMargin, Threshold};
use lazyfeed_runtime::{IntersectionObserver, LayoutSource, ObserverOptions};
use proptest::prelude::*;

struct Column {
    root: Rect,
    tops: Vec<i32>,
    height: u32,
}

impl LayoutSource for Column {
    fn root_bounds(&self) -> Rect {
        self.root
    }

    fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        let i = usize::try_from(id.get()).ok()?;
        self.tops.get(i).map(|&y| Rect::new(0, y, 10, self.height))
    }
}

#[derive(Debug, Clone)]
enum Op {
    Observe(u64),
    Unobserve(u64),
    Scroll(i32),
    Take,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..12).prop_map(Op::Observe),
        (0u64..12).prop_map(Op::Unobserve),
        (-30i32..=30).prop_map(Op::Scroll),
        Just(Op::Take),
    ]
}

proptest! {
    #[test]
    fn observer_reports_are_consistent(
        ops in proptest::collection::vec(op_strategy(), 1..=60),
        threshold in 0.0f64..=1.0,
        margin in 0i32..=20,
    ) {
        let options = ObserverOptions::new()
            .with_threshold(Threshold::new(threshold).unwrap())
            .with_root_margin(RootMargin::uniform_px(f64::from(margin)));
        let mut obs = IntersectionObserver::new("prop", options);
        let mut column = Column {
            root: Rect::from_size(10, 20),
            tops: (0..10).map(|i| i * 7).collect(),
            height: 6,
        };
        let mut frame = 0;

        for op in ops {
            match op {
                Op::Observe(n) => { obs.observe(ElementId::new(n)); }
                Op::Unobserve(n) => { obs.unobserve(ElementId::new(n)); }
                Op::Scroll(dy) => {
                    for top in &mut column.tops {
                        *top += dy;
                    }
                }
                Op::Take => {
                    frame += 1;
                    let order: Vec<_> = obs.watched_targets().collect();
                    let entries = obs.take_records(&column, frame);
                    let root = obs.effective_root(&column);

                    let mut last_pos = None;
                    for e in &entries {
                        let pos = order.iter().position(|t| *t == e.target);
                        prop_assert!(pos.is_some());
                        prop_assert!(last_pos < pos);
                        last_pos = pos;

                        let bounds = column.element_bounds(e.target).unwrap();
                        let hit = Intersection::compute(bounds, root);
                        prop_assert_eq!(e.is_intersecting, hit.satisfies(options.threshold));
                        prop_assert_eq!(e.frame, frame);
                    }

                    frame += 1;
                    prop_assert!(obs.take_records(&column, frame).is_empty());
                }
            }
        }
    }
}
