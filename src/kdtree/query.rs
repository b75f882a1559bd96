//! Range and nearest-neighbor searches over the k-d arena.

use geo_traits::CoordTrait;

use crate::distance::haversine_km;
use crate::filter::PoiFilter;
use crate::kdtree::index::{Axis, PoiKdTree};
use crate::kdtree::nearest::NearestSet;
use crate::poi::Poi;

impl PoiKdTree {
    /// Search the index for POIs within a given great-circle radius of the
    /// target that pass the filter.
    ///
    /// - `lat`, `lon`: target coordinate in degrees
    /// - `radius_km`: search radius in kilometers
    ///
    /// Results come back in traversal order (a node before its children),
    /// not sorted by distance. Subtree pruning uses the fixed 111 km/degree
    /// approximation, so subtrees are skipped conservatively; the emitted
    /// distances themselves are exact haversine.
    pub fn within(&self, lat: f64, lon: f64, radius_km: f64, filter: &PoiFilter) -> Vec<&Poi> {
        let mut results = Vec::new();
        if let Some(root) = self.root {
            self.range_recurse(root, lat, lon, radius_km, filter, 0, &mut results);
        }
        results
    }

    /// Search the index for POIs within a given radius of a coordinate
    /// (x = longitude, y = latitude).
    pub fn within_coord(
        &self,
        coord: &impl CoordTrait<T = f64>,
        radius_km: f64,
        filter: &PoiFilter,
    ) -> Vec<&Poi> {
        self.within(coord.y(), coord.x(), radius_km, filter)
    }

    /// Search the index for the k nearest POIs passing the filter.
    ///
    /// Returns at most k `(poi, distance_km)` pairs, ascending by
    /// great-circle distance. Fewer than k matching POIs yield fewer
    /// entries.
    pub fn nearest(&self, lat: f64, lon: f64, k: usize, filter: &PoiFilter) -> Vec<(&Poi, f64)> {
        let mut set = NearestSet::new(k);
        if let Some(root) = self.root {
            self.knn_recurse(root, lat, lon, filter, 0, &mut set);
        }
        set.into_sorted()
            .map(|candidate| (&self.node(candidate.index).poi, candidate.distance_km))
            .collect()
    }

    /// Search the index for the k nearest POIs to a coordinate
    /// (x = longitude, y = latitude).
    pub fn nearest_coord(
        &self,
        coord: &impl CoordTrait<T = f64>,
        k: usize,
        filter: &PoiFilter,
    ) -> Vec<(&Poi, f64)> {
        self.nearest(coord.y(), coord.x(), k, filter)
    }

    fn range_recurse<'a>(
        &'a self,
        node_index: u32,
        lat: f64,
        lon: f64,
        radius_km: f64,
        filter: &PoiFilter,
        depth: usize,
        out: &mut Vec<&'a Poi>,
    ) {
        let node = self.node(node_index);
        let poi = &node.poi;

        let dist = haversine_km(lat, lon, poi.lat, poi.lon);
        if dist <= radius_km && filter.matches(poi) {
            out.push(poi);
        }

        let axis = Axis::from_depth(depth);
        let span = axis.degree_span(radius_km, lat);
        let target = axis.target_coord(lat, lon);
        let node_coord = axis.coord(poi);

        // Both halves may overlap the radius box; descend into each only
        // when its side of the splitting plane can still contain matches.
        if target - span <= node_coord {
            if let Some(left) = node.left {
                self.range_recurse(left, lat, lon, radius_km, filter, depth + 1, out);
            }
        }
        if target + span >= node_coord {
            if let Some(right) = node.right {
                self.range_recurse(right, lat, lon, radius_km, filter, depth + 1, out);
            }
        }
    }

    fn knn_recurse(
        &self,
        node_index: u32,
        lat: f64,
        lon: f64,
        filter: &PoiFilter,
        depth: usize,
        set: &mut NearestSet,
    ) {
        let node = self.node(node_index);
        let poi = &node.poi;

        if filter.matches(poi) {
            set.offer(node_index, haversine_km(lat, lon, poi.lat, poi.lon));
        }

        let axis = Axis::from_depth(depth);
        let diff = axis.signed_km(lat, lon, poi);

        // Near side first: the target sits on the left of the splitting
        // plane when the signed difference is <= 0.
        let (near, far) = if diff <= 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.knn_recurse(near, lat, lon, filter, depth + 1, set);
        }

        // The far half can only hold a closer match when the splitting
        // plane itself is closer than the current k-th best distance.
        if diff.abs() < set.worst_distance() {
            if let Some(far) = far {
                self.knn_recurse(far, lat, lon, filter, depth + 1, set);
            }
        }
    }
}
