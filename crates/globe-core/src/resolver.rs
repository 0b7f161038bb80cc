//! "Which country is under this point?"
//!
//! Hover runs this once per pointer move, so callers go through the
//! [`CountryResolver`] trait and can swap the linear scan for the R-tree.

use crate::containment::{point_in_ring, GeoFeature};
use crate::geometry::GeoPoint;
use rstar::{RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub trait CountryResolver {
    /// Name of the first feature, in dataset order, containing `point`.
    fn country_at(&self, point: GeoPoint) -> Option<&str>;

    /// The boundary data this resolver answers for.
    fn features(&self) -> &[GeoFeature];

    fn feature(&self, name: &str) -> Option<&GeoFeature> {
        self.features().iter().find(|f| f.name == name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    #[default]
    LinearScan,
    RTree,
}

pub fn build_resolver(kind: ResolverKind, features: Vec<GeoFeature>) -> Box<dyn CountryResolver> {
    match kind {
        ResolverKind::LinearScan => Box::new(LinearScanResolver::new(features)),
        ResolverKind::RTree => Box::new(RTreeResolver::new(features)),
    }
}

/// Tests every feature in order.
#[derive(Clone, Debug, Default)]
pub struct LinearScanResolver {
    features: Vec<GeoFeature>,
}

impl LinearScanResolver {
    pub fn new(features: Vec<GeoFeature>) -> Self {
        Self { features }
    }
}

impl CountryResolver for LinearScanResolver {
    fn country_at(&self, point: GeoPoint) -> Option<&str> {
        crate::containment::country_containing(point, &self.features)
    }

    fn features(&self) -> &[GeoFeature] {
        &self.features
    }
}

/// Bounding box of one outer ring, tagged with where it came from.
#[derive(Clone, Debug)]
struct RingEnvelope {
    feature: usize,
    part: usize,
    bbox: AABB<[f64; 2]>,
}

impl RTreeObject for RingEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.bbox
    }
}

/// Outer-ring bounding boxes in an R-tree; only rings whose box holds the
/// point are ray-cast. Answers match [`LinearScanResolver`] exactly.
pub struct RTreeResolver {
    features: Vec<GeoFeature>,
    tree: RTree<RingEnvelope>,
}

impl RTreeResolver {
    pub fn new(features: Vec<GeoFeature>) -> Self {
        let mut entries = Vec::new();
        for (fi, feature) in features.iter().enumerate() {
            for (pi, ring) in feature.geometry.outer_rings().enumerate() {
                let Some(bbox) = ring_bbox(ring) else {
                    continue;
                };
                entries.push(RingEnvelope {
                    feature: fi,
                    part: pi,
                    bbox,
                });
            }
        }
        log::debug!("[resolver] indexed {} outer rings", entries.len());
        Self {
            features,
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of indexed rings.
    pub fn ring_count(&self) -> usize {
        self.tree.size()
    }
}

fn ring_bbox(ring: &[GeoPoint]) -> Option<AABB<[f64; 2]>> {
    let first = ring.first()?;
    let (mut lo, mut hi) = ([first.lon, first.lat], [first.lon, first.lat]);
    for p in &ring[1..] {
        lo = [lo[0].min(p.lon), lo[1].min(p.lat)];
        hi = [hi[0].max(p.lon), hi[1].max(p.lat)];
    }
    Some(AABB::from_corners(lo, hi))
}

impl CountryResolver for RTreeResolver {
    fn country_at(&self, point: GeoPoint) -> Option<&str> {
        let query = AABB::from_point([point.lon, point.lat]);
        let mut hits: SmallVec<[usize; 8]> = SmallVec::new();
        for entry in self.tree.locate_in_envelope_intersecting(&query) {
            let Some(ring) = self.features[entry.feature]
                .geometry
                .outer_rings()
                .nth(entry.part)
            else {
                continue;
            };
            if point_in_ring(point, ring) {
                hits.push(entry.feature);
            }
        }
        // tree order is arbitrary; keep the dataset's first-match rule
        let first = hits.into_iter().min()?;
        Some(self.features[first].name.as_str())
    }

    fn features(&self) -> &[GeoFeature] {
        &self.features
    }
}
