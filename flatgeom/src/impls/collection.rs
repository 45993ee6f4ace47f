use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::geometry::{Geom, Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::layout::Layout;

/// What a [`GeometryCollection`] does when a pushed geometry has a different SRID than the collection.
///
/// SRID `0` on either side means "not specified" and is never considered a mismatch.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SridPolicy {
    /// Accept the geometry silently.
    Ignore,
    /// Accept the geometry and log a warning.
    #[default]
    Warn,
    /// Refuse the geometry with [`FlatGeomError::SridMismatch`].
    Reject,
}

/// Ordered collection of arbitrary geometries, including other collections.
///
/// Layout and bounds of the collection are derived from its members every time they are requested.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryCollection {
    geoms: Vec<Geom>,
    srid: Srid,
    #[cfg_attr(feature = "serde", serde(skip))]
    srid_policy: SridPolicy,
}

impl GeometryCollection {
    /// Creates an empty collection with unspecified SRID.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the SRID.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = srid;
        self
    }

    /// Sets the SRID.
    pub fn set_srid(&mut self, srid: Srid) -> &mut Self {
        self.srid = srid;
        self
    }

    /// Sets the policy for members with a mismatching SRID.
    pub fn with_srid_policy(mut self, srid_policy: SridPolicy) -> Self {
        self.srid_policy = srid_policy;
        self
    }

    /// Sets the policy for members with a mismatching SRID.
    pub fn set_srid_policy(&mut self, srid_policy: SridPolicy) -> &mut Self {
        self.srid_policy = srid_policy;
        self
    }

    /// Policy for members with a mismatching SRID.
    pub fn srid_policy(&self) -> SridPolicy {
        self.srid_policy
    }

    /// Appends a geometry.
    ///
    /// Fails only if the SRID policy is [`SridPolicy::Reject`] and the SRIDs differ.
    pub fn push(&mut self, geom: impl Into<Geom>) -> Result<&mut Self, FlatGeomError> {
        let geom = geom.into();
        self.check_srid(&geom)?;
        self.geoms.push(geom);
        Ok(self)
    }

    /// Appends several geometries. If any of them is refused, none is added.
    pub fn push_all<G: Into<Geom>>(
        &mut self,
        geoms: impl IntoIterator<Item = G>,
    ) -> Result<&mut Self, FlatGeomError> {
        let geoms: Vec<Geom> = geoms.into_iter().map(Into::into).collect();
        for geom in &geoms {
            self.check_srid(geom)?;
        }

        self.geoms.extend(geoms);
        Ok(self)
    }

    /// Number of member geometries.
    pub fn num_geoms(&self) -> usize {
        self.geoms.len()
    }

    /// Returns `index`-th member.
    pub fn geom(&self, index: usize) -> Option<&Geom> {
        self.geoms.get(index)
    }

    /// All members in insertion order.
    pub fn geoms(&self) -> &[Geom] {
        &self.geoms
    }

    /// Iterates over the members.
    pub fn iter(&self) -> impl Iterator<Item = &Geom> {
        self.geoms.iter()
    }

    fn check_srid(&self, geom: &Geom) -> Result<(), FlatGeomError> {
        let got = geom.srid();
        if got == 0 || self.srid == 0 || got == self.srid {
            return Ok(());
        }

        match self.srid_policy {
            SridPolicy::Ignore => Ok(()),
            SridPolicy::Warn => {
                warn!(
                    "{} with SRID {got} added to a collection with SRID {}",
                    geom.geometry_type(),
                    self.srid
                );
                Ok(())
            }
            SridPolicy::Reject => Err(FlatGeomError::SridMismatch {
                got,
                want: self.srid,
            }),
        }
    }
}

impl Geometry for GeometryCollection {
    /// Merge of the layouts of all members; `NoLayout` for an empty collection.
    fn layout(&self) -> Layout {
        self.geoms
            .iter()
            .fold(Layout::NoLayout, |layout, geom| layout.merge(geom.layout()))
    }

    /// Members' bounds folded with [`Bounds::extend`] in insertion order.
    fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(Layout::NoLayout);
        for geom in &self.geoms {
            bounds.extend(geom);
        }
        bounds
    }

    fn num_coords(&self) -> usize {
        self.geoms.iter().map(Geometry::num_coords).sum()
    }

    /// Walks the members in order. The coordinate has the layout of the member it belongs to.
    fn coord(&self, mut index: usize) -> Option<Coord> {
        for geom in &self.geoms {
            let n = geom.num_coords();
            if index < n {
                return geom.coord(index);
            }
            index -= n;
        }

        None
    }

    /// True if there are no members or every member is empty.
    fn is_empty(&self) -> bool {
        self.geoms.iter().all(Geometry::is_empty)
    }

    fn srid(&self) -> Srid {
        self.srid
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }
}

impl FromIterator<Geom> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geom>>(iter: T) -> Self {
        Self {
            geoms: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}
