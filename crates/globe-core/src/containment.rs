use crate::geometry::GeoPoint;

/// One closed boundary loop. The closing edge is implicit.
pub type Ring = Vec<GeoPoint>;

/// Rings of a single landmass; the first ring is the outer boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    #[inline]
    pub fn outer(&self) -> Option<&Ring> {
        self.rings.first()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Outer rings tested by containment, in dataset order.
    pub fn outer_rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        let parts: &[Polygon] = match self {
            Geometry::Polygon(p) => std::slice::from_ref(p),
            Geometry::MultiPolygon(parts) => parts,
        };
        parts.iter().filter_map(Polygon::outer)
    }

    /// Every ring including holes, for border drawing.
    pub fn all_rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        let parts: &[Polygon] = match self {
            Geometry::Polygon(p) => std::slice::from_ref(p),
            Geometry::MultiPolygon(parts) => parts,
        };
        parts.iter().flat_map(|p| p.rings.iter())
    }
}

/// A named country boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
    pub name: String,
    pub geometry: Geometry,
}

impl GeoFeature {
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.geometry
            .outer_rings()
            .any(|ring| point_in_ring(point, ring))
    }
}

/// Even-odd ray casting along the line of constant latitude.
///
/// Exact for simple rings. Rings that cross the antimeridian are treated as
/// planar and will report the wrong side.
pub fn point_in_ring(point: GeoPoint, ring: &[GeoPoint]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i];
        let b = ring[j];
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let crossing = (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if point.lon < crossing {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Linear scan in dataset order; the first containing feature wins.
pub fn country_containing(point: GeoPoint, features: &[GeoFeature]) -> Option<&str> {
    features
        .iter()
        .find(|f| f.contains(point))
        .map(|f| f.name.as_str())
}
