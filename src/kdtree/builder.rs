use crate::kdtree::index::{Axis, PoiKdTree, TreeNode};
use crate::poi::Poi;

/// A builder to create a [`PoiKdTree`].
///
/// POIs are collected first; [`finish`][KdTreeBuilder::finish] performs the
/// k-d sort and produces the immutable tree. The build is destructive over
/// the collected list (sort in place, recurse into sub-slices), so the
/// builder is consumed.
#[derive(Debug, Clone, Default)]
pub struct KdTreeBuilder {
    pois: Vec<Poi>,
}

impl KdTreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with capacity for the provided number of POIs.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            pois: Vec::with_capacity(num_items),
        }
    }

    /// Add a POI to the index. Returns its insertion index.
    pub fn add(&mut self, poi: Poi) -> usize {
        self.pois.push(poi);
        self.pois.len() - 1
    }

    /// Consume this builder, performing the k-d sort and generating a tree
    /// ready for queries.
    pub fn finish(self) -> PoiKdTree {
        assert!(
            self.pois.len() <= u32::MAX as usize,
            "Added more items than the arena can address."
        );

        let mut nodes = Vec::with_capacity(self.pois.len());
        let root = build(&mut nodes, self.pois, 0);
        PoiKdTree { nodes, root }
    }
}

impl Extend<Poi> for KdTreeBuilder {
    fn extend<T: IntoIterator<Item = Poi>>(&mut self, iter: T) {
        self.pois.extend(iter);
    }
}

impl From<Vec<Poi>> for PoiKdTree {
    fn from(pois: Vec<Poi>) -> Self {
        let mut builder = KdTreeBuilder::with_capacity(pois.len());
        builder.extend(pois);
        builder.finish()
    }
}

/// Median-split build: sort the list on the depth-derived axis, take the
/// middle element as this subtree's node, recurse into both halves at
/// `depth + 1`.
fn build(nodes: &mut Vec<TreeNode>, mut pois: Vec<Poi>, depth: usize) -> Option<u32> {
    if pois.is_empty() {
        return None;
    }

    let axis = Axis::from_depth(depth);
    // Unstable sort: order among equal coordinates is unspecified. The
    // median invariant (left <= node <= right on the axis) holds either way.
    pois.sort_unstable_by(|a, b| axis.coord(a).total_cmp(&axis.coord(b)));

    let mid = pois.len() / 2;
    let mut upper = pois.split_off(mid);
    let median = upper.remove(0);

    let left = build(nodes, pois, depth + 1);
    let right = build(nodes, upper, depth + 1);

    nodes.push(TreeNode {
        poi: median,
        left,
        right,
    });
    Some((nodes.len() - 1) as u32)
}
