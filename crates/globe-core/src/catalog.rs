//! Flat country list derived from the boundary dataset.

use crate::containment::{GeoFeature, Geometry, Ring};
use crate::geometry::GeoPoint;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Asia,
    Europe,
    Americas,
    Africa,
    Oceania,
    World,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Asia,
        Region::Europe,
        Region::Americas,
        Region::Africa,
        Region::Oceania,
        Region::World,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
            Region::World => "World",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// One quiz entry: a country with its representative point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub region: Region,
}

impl CountryRecord {
    #[inline]
    pub fn centroid(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

// Countries whose continent should not be left to the coordinate rules.
const CONTINENT_TABLE: &[(&str, Region)] = &[
    ("Thailand", Region::Asia),
    ("Japan", Region::Asia),
    ("China", Region::Asia),
    ("India", Region::Asia),
    ("Vietnam", Region::Asia),
    ("South Korea", Region::Asia),
    ("Indonesia", Region::Asia),
    ("Philippines", Region::Asia),
    ("Malaysia", Region::Asia),
    ("Singapore", Region::Asia),
    ("Russia", Region::Asia),
    ("Turkey", Region::Asia),
    ("Iran", Region::Asia),
    ("Iraq", Region::Asia),
    ("Saudi Arabia", Region::Asia),
    ("Israel", Region::Asia),
    ("Pakistan", Region::Asia),
    ("United Kingdom", Region::Europe),
    ("France", Region::Europe),
    ("Germany", Region::Europe),
    ("Italy", Region::Europe),
    ("Spain", Region::Europe),
    ("Portugal", Region::Europe),
    ("Netherlands", Region::Europe),
    ("Belgium", Region::Europe),
    ("Sweden", Region::Europe),
    ("Norway", Region::Europe),
    ("Finland", Region::Europe),
    ("Denmark", Region::Europe),
    ("Poland", Region::Europe),
    ("Ukraine", Region::Europe),
    ("Greece", Region::Europe),
    ("Switzerland", Region::Europe),
    ("United States of America", Region::Americas),
    ("Canada", Region::Americas),
    ("Mexico", Region::Americas),
    ("Brazil", Region::Americas),
    ("Argentina", Region::Americas),
    ("Chile", Region::Americas),
    ("Peru", Region::Americas),
    ("Colombia", Region::Americas),
    ("Cuba", Region::Americas),
    ("Egypt", Region::Africa),
    ("South Africa", Region::Africa),
    ("Nigeria", Region::Africa),
    ("Kenya", Region::Africa),
    ("Morocco", Region::Africa),
    ("Ghana", Region::Africa),
    ("Ethiopia", Region::Africa),
    ("Australia", Region::Oceania),
    ("New Zealand", Region::Oceania),
    ("Fiji", Region::Oceania),
];

fn continent_table() -> &'static FnvHashMap<&'static str, Region> {
    static TABLE: OnceLock<FnvHashMap<&'static str, Region>> = OnceLock::new();
    TABLE.get_or_init(|| CONTINENT_TABLE.iter().copied().collect())
}

/// Continent for a country: table lookup first, then coordinate rules.
pub fn classify_region(name: &str, lat: f64, lon: f64) -> Region {
    if let Some(region) = continent_table().get(name) {
        return *region;
    }
    if lat < -10.0 && lon > 110.0 {
        Region::Oceania
    } else if lon < -30.0 {
        Region::Americas
    } else if lat > 35.0 && lon > -30.0 && lon < 45.0 {
        Region::Europe
    } else if lat < 35.0 && lon > -20.0 && lon < 55.0 {
        Region::Africa
    } else if lon > 55.0 {
        Region::Asia
    } else {
        Region::World
    }
}

/// The ring used for the centroid: the outer ring of a polygon, or the outer
/// ring with the most vertices across a multipolygon's parts.
pub fn largest_ring(geometry: &Geometry) -> Option<&Ring> {
    let mut best: Option<&Ring> = None;
    for ring in geometry.outer_rings() {
        match best {
            Some(b) if ring.len() <= b.len() => {}
            _ => best = Some(ring),
        }
    }
    best
}

/// Midpoint of the ring's lat/lon bounding box.
pub fn bounding_box_center(ring: &[GeoPoint]) -> Option<GeoPoint> {
    if ring.is_empty() {
        return None;
    }
    let (mut min_lon, mut max_lon) = (180.0_f64, -180.0_f64);
    let (mut min_lat, mut max_lat) = (90.0_f64, -90.0_f64);
    for p in ring {
        min_lon = min_lon.min(p.lon);
        max_lon = max_lon.max(p.lon);
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
    }
    Some(GeoPoint::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0))
}

pub fn build_catalog(features: &[GeoFeature]) -> Vec<CountryRecord> {
    features
        .iter()
        .filter(|f| !f.name.trim().is_empty())
        .filter_map(|f| {
            let center = largest_ring(&f.geometry).and_then(|r| bounding_box_center(r))?;
            Some(CountryRecord {
                region: classify_region(&f.name, center.lat, center.lon),
                name: f.name.clone(),
                lat: center.lat,
                lon: center.lon,
            })
        })
        .collect()
}

/// Immutable country list with name lookup and region filtering.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<CountryRecord>,
    by_name: FnvHashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let mut by_name = FnvHashMap::default();
        for (i, r) in records.iter().enumerate() {
            by_name.entry(r.name.clone()).or_insert(i);
        }
        Self { records, by_name }
    }

    pub fn from_features(features: &[GeoFeature]) -> Self {
        Self::new(build_catalog(features))
    }

    #[inline]
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&CountryRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Records for a region. `World`, and any region with fewer than
    /// `min_size` members, yields the whole catalog.
    pub fn filter(&self, region: Region, min_size: usize) -> Vec<CountryRecord> {
        if region == Region::World {
            return self.records.clone();
        }
        let matching: Vec<CountryRecord> = self
            .records
            .iter()
            .filter(|r| r.region == region)
            .cloned()
            .collect();
        if matching.len() < min_size {
            log::info!(
                "[catalog] region {} has {} countries; using the whole world",
                region,
                matching.len()
            );
            return self.records.clone();
        }
        matching
    }
}
