use crate::catalog::Catalog;
use crate::containment::GeoFeature;
use crate::dataset::{self, DatasetError};
use crate::geometry::{vec_to_lat_lon, GeoPoint};
use crate::resolver::{build_resolver, CountryResolver, ResolverKind};
use glam::DVec3;
use std::io::Read;

/// Loaded boundary data: the resolver that hit-tests it and the catalog
/// derived from it. Built once, read-only afterwards.
pub struct Atlas {
    catalog: Catalog,
    resolver: Box<dyn CountryResolver>,
}

impl Atlas {
    pub fn new(features: Vec<GeoFeature>, kind: ResolverKind) -> Self {
        let catalog = Catalog::from_features(&features);
        log::info!(
            "[atlas] {} countries from {} features ({:?})",
            catalog.len(),
            features.len(),
            kind
        );
        Self {
            catalog,
            resolver: build_resolver(kind, features),
        }
    }

    pub fn from_geojson_str(text: &str, kind: ResolverKind) -> Result<Self, DatasetError> {
        Ok(Self::new(dataset::parse_features(text)?, kind))
    }

    pub fn from_reader<R: Read>(reader: R, kind: ResolverKind) -> Result<Self, DatasetError> {
        Ok(Self::new(dataset::read_features(reader)?, kind))
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn resolver(&self) -> &dyn CountryResolver {
        self.resolver.as_ref()
    }

    #[inline]
    pub fn country_at(&self, point: GeoPoint) -> Option<&str> {
        self.resolver.country_at(point)
    }

    /// Hit-test a point in globe-local space (rotation already undone).
    pub fn country_at_surface(&self, local: DVec3) -> Option<&str> {
        self.country_at(vec_to_lat_lon(local))
    }
}
