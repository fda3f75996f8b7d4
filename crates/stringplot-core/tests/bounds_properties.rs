use proptest::prelude::*;
use stringplot_core::{collection_bounds, Path, Point};

fn arb_path() -> impl Strategy<Value = Path> {
    prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..8)
        .prop_map(|pts| pts.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn bounds_contain_every_drawable_vertex(paths in prop::collection::vec(arb_path(), 0..12)) {
        let bounds = collection_bounds(&paths).unwrap();
        let drawable: Vec<&Path> = paths.iter().filter(|p| p.len() >= 2).collect();

        match bounds {
            None => prop_assert!(drawable.is_empty()),
            Some(b) => {
                for p in drawable.iter().flat_map(|p| p.iter()) {
                    prop_assert!(b.contains(*p));
                }
                prop_assert!(b.width() >= 0.0);
                prop_assert!(b.height() >= 0.0);
            }
        }
    }
}
