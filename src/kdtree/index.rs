use crate::distance::{lat_degree_span, lon_degree_span, KM_PER_DEG};
use crate::poi::Poi;

/// One arena slot: a POI plus optional child links.
///
/// Children are arena indices rather than owning pointers, which keeps the
/// tree acyclic and strictly owned by the backing vector.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TreeNode {
    pub(crate) poi: Poi,
    pub(crate) left: Option<u32>,
    pub(crate) right: Option<u32>,
}

/// The coordinate a tree level splits on.
///
/// Depth 0 compares latitude, depth 1 longitude, alternating all the way
/// down. Construction and traversal must derive the axis from depth the
/// same way or pruning turns incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Lat,
    Lon,
}

impl Axis {
    #[inline]
    pub(crate) fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::Lat
        } else {
            Axis::Lon
        }
    }

    /// The POI coordinate compared on this axis.
    #[inline]
    pub(crate) fn coord(self, poi: &Poi) -> f64 {
        match self {
            Axis::Lat => poi.lat,
            Axis::Lon => poi.lon,
        }
    }

    /// The query target coordinate compared on this axis.
    #[inline]
    pub(crate) fn target_coord(self, lat: f64, lon: f64) -> f64 {
        match self {
            Axis::Lat => lat,
            Axis::Lon => lon,
        }
    }

    /// A search radius converted to a degree span along this axis, at the
    /// query latitude.
    #[inline]
    pub(crate) fn degree_span(self, radius_km: f64, target_lat: f64) -> f64 {
        match self {
            Axis::Lat => lat_degree_span(radius_km),
            Axis::Lon => lon_degree_span(radius_km, target_lat),
        }
    }

    /// Signed distance in approximate kilometers from the target to the
    /// node's splitting plane. Negative or zero means the target lies on
    /// the left (smaller-coordinate) side.
    #[inline]
    pub(crate) fn signed_km(self, target_lat: f64, target_lon: f64, node: &Poi) -> f64 {
        match self {
            Axis::Lat => (target_lat - node.lat) * KM_PER_DEG,
            Axis::Lon => (target_lon - node.lon) * KM_PER_DEG * target_lat.to_radians().cos(),
        }
    }
}

/// An immutable k-d tree over a set of POIs.
///
/// Usually this will be created from scratch via
/// [`KdTreeBuilder`][crate::kdtree::KdTreeBuilder]. The tree supports two
/// query forms, [`within`][PoiKdTree::within] and
/// [`nearest`][PoiKdTree::nearest], both filterable by category and
/// free text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoiKdTree {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) root: Option<u32>,
}

impl PoiKdTree {
    /// The number of indexed POIs.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree indexes no POIs. Every query against an empty tree
    /// yields zero results.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the indexed POIs, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.nodes.iter().map(|node| &node.poi)
    }

    #[inline]
    pub(crate) fn node(&self, index: u32) -> &TreeNode {
        &self.nodes[index as usize]
    }
}
