use crate::distance::haversine_km;
use crate::filter::PoiFilter;
use crate::kdtree::index::{Axis, PoiKdTree};
use crate::kdtree::KdTreeBuilder;
use crate::poi::Poi;

fn campus_pois() -> Vec<Poi> {
    vec![
        Poi::new(0, "Central Library", "library", 12.9716, 77.5946),
        Poi::new(1, "Corner Cafe", "food", 12.9721, 77.5933),
        Poi::new(2, "North Gym", "sport", 12.9850, 77.6000),
        Poi::new(3, "South Pharmacy", "health", 12.9600, 77.5900),
        Poi::new(4, "Science Block", "academic", 12.9730, 77.5960),
        Poi::new(5, "Food Court", "food", 12.9740, 77.5980),
        Poi::new(6, "City Stadium", "sport", 13.0500, 77.5700),
        Poi::new(7, "Lakeside Park", "park", 12.9300, 77.6200),
        Poi::new(8, "Old Bookstore", "shopping", 12.9718, 77.5950),
        Poi::new(9, "Airport Lounge", "food", 13.1986, 77.7066),
    ]
}

const LIBRARY: (f64, f64) = (12.9716, 77.5946);

fn make_index() -> PoiKdTree {
    PoiKdTree::from(campus_pois())
}

fn sorted_ids(pois: &[&Poi]) -> Vec<u64> {
    let mut ids: Vec<u64> = pois.iter().map(|poi| poi.id).collect();
    ids.sort_unstable();
    ids
}

fn subtree_ids(tree: &PoiKdTree, index: u32, out: &mut Vec<u32>) {
    out.push(index);
    let node = tree.node(index);
    if let Some(left) = node.left {
        subtree_ids(tree, left, out);
    }
    if let Some(right) = node.right {
        subtree_ids(tree, right, out);
    }
}

fn assert_kd_invariant(tree: &PoiKdTree, index: u32, depth: usize) {
    let node = tree.node(index);
    let axis = Axis::from_depth(depth);
    let split = axis.coord(&node.poi);

    if let Some(left) = node.left {
        let mut indices = Vec::new();
        subtree_ids(tree, left, &mut indices);
        for i in indices {
            assert!(
                axis.coord(&tree.node(i).poi) <= split,
                "left subtree crosses the splitting plane at depth {depth}"
            );
        }
        assert_kd_invariant(tree, left, depth + 1);
    }
    if let Some(right) = node.right {
        let mut indices = Vec::new();
        subtree_ids(tree, right, &mut indices);
        for i in indices {
            assert!(
                axis.coord(&tree.node(i).poi) >= split,
                "right subtree crosses the splitting plane at depth {depth}"
            );
        }
        assert_kd_invariant(tree, right, depth + 1);
    }
}

#[test]
fn creates_an_index() {
    let tree = make_index();
    assert_eq!(tree.len(), 10);
    assert!(!tree.is_empty());

    let mut ids: Vec<u64> = tree.iter().map(|poi| poi.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..10).collect::<Vec<u64>>());
}

#[test]
fn median_split_invariant_holds_everywhere() {
    let tree = make_index();
    let root = tree.root.expect("non-empty tree has a root");
    assert_kd_invariant(&tree, root, 0);
}

#[test]
fn empty_tree_yields_zero_results() {
    let tree = KdTreeBuilder::new().finish();
    assert!(tree.is_empty());
    assert!(tree.within(12.0, 77.0, 100.0, &PoiFilter::any()).is_empty());
    assert!(tree.nearest(12.0, 77.0, 5, &PoiFilter::any()).is_empty());
}

#[test]
fn single_poi_tree() {
    let tree = PoiKdTree::from(vec![Poi::new(0, "Lone Kiosk", "food", 12.0, 77.0)]);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.within(12.0, 77.0, 1.0, &PoiFilter::any()).len(), 1);
    assert!(tree.within(13.0, 78.0, 1.0, &PoiFilter::any()).is_empty());

    let nearest = tree.nearest(12.0, 77.0, 3, &PoiFilter::any());
    assert_eq!(nearest.len(), 1);
    assert_eq!(nearest[0].1, 0.0);
}

#[test]
fn range_search() {
    let tree = PoiKdTree::from(vec![
        Poi::new(0, "Lib", "library", 12.0, 77.0),
        Poi::new(1, "Cafe", "food", 12.01, 77.01),
        Poi::new(2, "Gym", "sport", 12.5, 77.5),
    ]);

    let hits = tree.within(12.0, 77.0, 2.0, &PoiFilter::any());
    assert_eq!(sorted_ids(&hits), vec![0, 1]);

    for poi in hits {
        assert!(haversine_km(12.0, 77.0, poi.lat, poi.lon) <= 2.0);
    }
}

#[test]
fn knn_search() {
    let tree = PoiKdTree::from(vec![
        Poi::new(0, "Lib", "library", 12.0, 77.0),
        Poi::new(1, "Cafe", "food", 12.01, 77.01),
        Poi::new(2, "Gym", "sport", 12.5, 77.5),
    ]);

    let nearest = tree.nearest(12.0, 77.0, 2, &PoiFilter::any());
    let ids: Vec<u64> = nearest.iter().map(|(poi, _)| poi.id).collect();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(nearest[0].1, 0.0);
    assert!(nearest[1].1 > 0.0);
}

#[test]
fn range_results_come_in_traversal_order() {
    let tree = make_index();
    // The root is the latitude median of the whole set and is visited
    // before its children, so it leads any all-matching result.
    let hits = tree.within(LIBRARY.0, LIBRARY.1, 1000.0, &PoiFilter::any());
    assert_eq!(hits.len(), 10);
    assert_eq!(hits[0].id, 4);
}

#[test]
fn range_respects_category_filter() {
    let tree = make_index();
    let filter = PoiFilter::any().with_category("food");
    let hits = tree.within(LIBRARY.0, LIBRARY.1, 5.0, &filter);
    assert_eq!(sorted_ids(&hits), vec![1, 5]);
}

#[test]
fn range_respects_text_filter() {
    let tree = make_index();
    let filter = PoiFilter::any().with_text("cafe");
    let hits = tree.within(LIBRARY.0, LIBRARY.1, 5.0, &filter);
    assert_eq!(sorted_ids(&hits), vec![1]);

    // Text matches category names as well.
    let filter = PoiFilter::any().with_text("FOOD");
    let hits = tree.within(LIBRARY.0, LIBRARY.1, 5.0, &filter);
    assert_eq!(sorted_ids(&hits), vec![1, 5]);
}

#[test]
fn knn_is_sorted_and_bounded() {
    let tree = make_index();
    let nearest = tree.nearest(LIBRARY.0, LIBRARY.1, 4, &PoiFilter::any());
    let ids: Vec<u64> = nearest.iter().map(|(poi, _)| poi.id).collect();
    assert_eq!(ids, vec![0, 8, 1, 4]);
    assert!(nearest
        .windows(2)
        .all(|pair| pair[0].1 <= pair[1].1));
}

#[test]
fn knn_caps_at_matching_count() {
    let tree = make_index();
    let filter = PoiFilter::any().with_category("food");
    let nearest = tree.nearest(LIBRARY.0, LIBRARY.1, 10, &filter);
    let ids: Vec<u64> = nearest.iter().map(|(poi, _)| poi.id).collect();
    assert_eq!(ids, vec![1, 5, 9]);
}

#[test]
fn repeated_queries_are_identical() {
    let tree = make_index();

    let first: Vec<u64> = tree
        .within(LIBRARY.0, LIBRARY.1, 3.0, &PoiFilter::any())
        .iter()
        .map(|poi| poi.id)
        .collect();
    let second: Vec<u64> = tree
        .within(LIBRARY.0, LIBRARY.1, 3.0, &PoiFilter::any())
        .iter()
        .map(|poi| poi.id)
        .collect();
    assert_eq!(first, second);

    let first = tree.nearest(LIBRARY.0, LIBRARY.1, 5, &PoiFilter::any());
    let second = tree.nearest(LIBRARY.0, LIBRARY.1, 5, &PoiFilter::any());
    assert_eq!(first, second);
}

#[test]
fn coord_queries_match_lat_lon_queries() {
    let tree = make_index();
    // geo convention: x is longitude, y is latitude.
    let coord = geo::coord! { x: LIBRARY.1, y: LIBRARY.0 };

    let by_coord = sorted_ids(&tree.within_coord(&coord, 3.0, &PoiFilter::any()));
    let by_lat_lon = sorted_ids(&tree.within(LIBRARY.0, LIBRARY.1, 3.0, &PoiFilter::any()));
    assert_eq!(by_coord, by_lat_lon);

    let by_coord = tree.nearest_coord(&coord, 3, &PoiFilter::any());
    let by_lat_lon = tree.nearest(LIBRARY.0, LIBRARY.1, 3, &PoiFilter::any());
    assert_eq!(by_coord, by_lat_lon);
}
