//! Mapping between geographic coordinates and points on the globe mesh.
//!
//! Y is the polar axis. Longitude is offset by 180 degrees so that the
//! boundary dataset lines up with the earth texture used by the frontends.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A position on the earth's surface in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from a GeoJSON `[lon, lat]` position.
    #[inline]
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }
}

/// Spherical to Cartesian on a sphere of `radius` centred at the origin.
pub fn lat_lon_to_surface_point(lat: f64, lon: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    DVec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Inverse of [`lat_lon_to_surface_point`]. The point need not lie exactly on
/// the sphere; it is normalised by its own length. The origin maps to (0, 0).
pub fn surface_point_to_lat_lon(x: f64, y: f64, z: f64) -> GeoPoint {
    let r = (x * x + y * y + z * z).sqrt();
    if r <= f64::EPSILON {
        return GeoPoint::default();
    }
    let phi = (y / r).clamp(-1.0, 1.0).acos();
    let theta = z.atan2(-x);
    let mut lon = theta.to_degrees() - 180.0;
    if lon <= -180.0 {
        lon += 360.0;
    }
    if lon > 180.0 {
        lon -= 360.0;
    }
    GeoPoint {
        lat: 90.0 - phi.to_degrees(),
        lon,
    }
}

#[inline]
pub fn vec_to_lat_lon(p: DVec3) -> GeoPoint {
    surface_point_to_lat_lon(p.x, p.y, p.z)
}

/// Nearest non-negative hit distance along a normalised ray.
#[inline]
pub fn ray_sphere(ray_origin: DVec3, ray_dir: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    // origin inside the sphere: take the exit point
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}

/// Intersect a picking ray with the globe and return the lat/lon under it.
///
/// `globe_center` is the globe's origin in the same space as the ray; the
/// caller is expected to have already undone any globe rotation.
pub fn pointer_ray_to_lat_lon(
    ray_origin: DVec3,
    ray_dir: DVec3,
    globe_center: DVec3,
    radius: f64,
) -> Option<GeoPoint> {
    let dir = ray_dir.try_normalize()?;
    let t = ray_sphere(ray_origin, dir, globe_center, radius)?;
    let local = ray_origin + dir * t - globe_center;
    Some(vec_to_lat_lon(local))
}
