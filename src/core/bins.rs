//! Uniform-grid spatial index for hover snapping.
//!
//! The indexed rectangle is split into `nx * ny` equal cells. Each point is
//! registered in exactly one cell; nearest-point queries scan only the cell
//! under the pointer (or its 3x3 neighbourhood when configured).

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::ScreenRect;
use crate::error::{PlotError, PlotResult};

/// Multiplier mixing y into the point identifier.
const POINT_ID_Y_STRIDE: f64 = 10_001.0;

/// Deterministic identifier derived from screen coordinates.
///
/// Computed as `trunc(x + y * 10001)`. Distinct coordinates may collide; such
/// points are visually indistinguishable at realistic screen magnitudes, so
/// the first one inserted wins. Identifiers are unique across the whole index,
/// so a later point colliding with one in another cell is dropped and cannot
/// be found at its own coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub i64);

impl PointId {
    #[must_use]
    pub fn from_coordinates(x: f64, y: f64) -> Self {
        Self((x + y * POINT_ID_Y_STRIDE).trunc() as i64)
    }
}

/// Which cells a nearest-point query scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BinSearch {
    /// Only the cell containing the query. A closer point just across a cell
    /// boundary is not considered.
    #[default]
    Local,
    /// The containing cell plus its (up to) eight neighbours.
    Neighborhood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinEntry<T> {
    pub x: f64,
    pub y: f64,
    pub payload: T,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestHit<'a, T> {
    pub id: PointId,
    pub entry: &'a BinEntry<T>,
    pub distance: f64,
}

type Bucket = SmallVec<[PointId; 4]>;

#[derive(Debug, Clone)]
pub struct SpatialIndex<T> {
    x0: f64,
    y0: f64,
    width: f64,
    height: f64,
    nx: usize,
    ny: usize,
    lx: f64,
    ly: f64,
    search: BinSearch,
    bins: Vec<Bucket>,
    registry: IndexMap<PointId, BinEntry<T>>,
}

impl<T> SpatialIndex<T> {
    /// Builds an empty index over `[x0, x0 + width] x [y0, y0 + height]`.
    ///
    /// Cell counts are `floor(extent / bin_edge)` with a minimum of one, so an
    /// edge longer than the extent degenerates to a single cell on that axis.
    pub fn new(x0: f64, y0: f64, width: f64, height: f64, bin_edge: f64) -> PlotResult<Self> {
        if !x0.is_finite() || !y0.is_finite() {
            return Err(PlotError::InvalidData(
                "spatial index origin must be finite".to_owned(),
            ));
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidData(
                "spatial index extent must be finite and > 0".to_owned(),
            ));
        }
        if !bin_edge.is_finite() || bin_edge <= 0.0 {
            return Err(PlotError::InvalidData(
                "spatial index bin edge must be finite and > 0".to_owned(),
            ));
        }

        let nx = ((width / bin_edge).floor() as usize).max(1);
        let ny = ((height / bin_edge).floor() as usize).max(1);
        Ok(Self {
            x0,
            y0,
            width,
            height,
            nx,
            ny,
            lx: width / nx as f64,
            ly: height / ny as f64,
            search: BinSearch::default(),
            bins: vec![Bucket::new(); nx * ny],
            registry: IndexMap::new(),
        })
    }

    /// Builds an index covering `rect`.
    pub fn covering(rect: ScreenRect, bin_edge: f64) -> PlotResult<Self> {
        Self::new(rect.left, rect.top, rect.width, rect.height, bin_edge)
    }

    #[must_use]
    pub fn with_search(mut self, search: BinSearch) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub fn search(&self) -> BinSearch {
        self.search
    }

    pub fn set_search(&mut self, search: BinSearch) {
        self.search = search;
    }

    /// `(nx, ny)`.
    #[must_use]
    pub fn bin_counts(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// `(lx, ly)`.
    #[must_use]
    pub fn cell_size(&self) -> (f64, f64) {
        (self.lx, self.ly)
    }

    #[must_use]
    pub fn bounds(&self) -> ScreenRect {
        ScreenRect::new(self.x0, self.y0, self.width, self.height)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds().contains(x, y)
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.bins {
            bucket.clear();
        }
        self.registry.clear();
    }

    /// Registers a point; returns `false` when it lies outside the index or
    /// its identifier is already present.
    pub fn insert(&mut self, x: f64, y: f64, payload: T) -> bool {
        let Some(n) = self.bin_index(x, y) else {
            return false;
        };

        let id = PointId::from_coordinates(x, y);
        if self.registry.contains_key(&id) {
            return false;
        }

        self.bins[n].push(id);
        self.registry.insert(id, BinEntry { x, y, payload });
        true
    }

    /// Nearest registered point to `(x, y)` within the configured search cells.
    ///
    /// Among equally distant points the one inserted first is returned.
    #[must_use]
    pub fn find_nearest(&self, x: f64, y: f64) -> Option<NearestHit<'_, T>> {
        let (i, j) = self.cell_coords(x, y)?;
        match self.search {
            BinSearch::Local => self.nearest_in(x, y, std::iter::once(i + j * self.nx)),
            BinSearch::Neighborhood => {
                let columns = i.saturating_sub(1)..=(i + 1).min(self.nx - 1);
                let rows = j.saturating_sub(1)..=(j + 1).min(self.ny - 1);
                let nx = self.nx;
                let cells =
                    rows.flat_map(move |row| columns.clone().map(move |col| col + row * nx));
                self.nearest_in(x, y, cells)
            }
        }
    }

    fn nearest_in(
        &self,
        x: f64,
        y: f64,
        cells: impl Iterator<Item = usize>,
    ) -> Option<NearestHit<'_, T>> {
        cells
            .flat_map(|n| self.bins[n].iter())
            .filter_map(|id| {
                let entry = self.registry.get(id)?;
                let dx = x - entry.x;
                let dy = y - entry.y;
                Some(NearestHit {
                    id: *id,
                    entry,
                    distance: (dx * dx + dy * dy).sqrt(),
                })
            })
            .min_by_key(|hit| OrderedFloat(hit.distance))
    }

    /// Linear cell index `i + j * nx` for an in-bounds position.
    #[must_use]
    pub fn bin_index(&self, x: f64, y: f64) -> Option<usize> {
        self.cell_coords(x, y).map(|(i, j)| i + j * self.nx)
    }

    /// Column/row of the cell containing `(x, y)`.
    ///
    /// Positions on the far edges are clamped into the last column/row.
    #[must_use]
    pub fn cell_coords(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !self.contains(x, y) {
            return None;
        }
        let i = (((x - self.x0) / self.lx).floor() as usize).min(self.nx - 1);
        let j = (((y - self.y0) / self.ly).floor() as usize).min(self.ny - 1);
        Some((i, j))
    }

    /// Screen rectangle of the cell containing `(x, y)`.
    #[must_use]
    pub fn cell_rect(&self, x: f64, y: f64) -> Option<ScreenRect> {
        let (i, j) = self.cell_coords(x, y)?;
        Some(ScreenRect::new(
            self.x0 + i as f64 * self.lx,
            self.y0 + j as f64 * self.ly,
            self.lx,
            self.ly,
        ))
    }

    /// Cell boundary positions: `nx + 1` vertical and `ny + 1` horizontal lines.
    #[must_use]
    pub fn grid_lines(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = (0..=self.nx)
            .map(|i| self.x0 + i as f64 * self.lx)
            .collect();
        let ys = (0..=self.ny)
            .map(|j| self.y0 + j as f64 * self.ly)
            .collect();
        (xs, ys)
    }

    /// Identifiers registered in cell `n`, in insertion order.
    #[must_use]
    pub fn bucket(&self, n: usize) -> &[PointId] {
        self.bins.get(n).map_or(&[], |bucket| bucket.as_slice())
    }

    #[must_use]
    pub fn entry(&self, id: PointId) -> Option<&BinEntry<T>> {
        self.registry.get(&id)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (PointId, &BinEntry<T>)> {
        self.registry.iter().map(|(id, entry)| (*id, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::{BinSearch, PointId, SpatialIndex};

    #[test]
    fn cell_counts_follow_bin_edge() {
        let index: SpatialIndex<()> =
            SpatialIndex::new(0.0, 0.0, 600.0, 400.0, 60.0).expect("index");
        assert_eq!(index.bin_counts(), (10, 6));
        let (lx, ly) = index.cell_size();
        assert_eq!(lx, 60.0);
        assert!((ly - 400.0 / 6.0).abs() <= 1e-12);
    }

    #[test]
    fn oversized_edge_degenerates_to_single_cell() {
        let index: SpatialIndex<()> =
            SpatialIndex::new(0.0, 0.0, 50.0, 40.0, 60.0).expect("index");
        assert_eq!(index.bin_counts(), (1, 1));
        assert_eq!(index.bin_index(50.0, 40.0), Some(0));
    }

    #[test]
    fn far_edge_is_clamped_into_last_cell() {
        let index: SpatialIndex<()> =
            SpatialIndex::new(10.0, 20.0, 600.0, 400.0, 60.0).expect("index");
        assert_eq!(index.cell_coords(610.0, 420.0), Some((9, 5)));
        assert_eq!(index.bin_index(610.0, 420.0), Some(59));
        assert_eq!(index.bin_index(10.0, 20.0), Some(0));
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        assert!(SpatialIndex::<()>::new(0.0, 0.0, 0.0, 10.0, 5.0).is_err());
        assert!(SpatialIndex::<()>::new(0.0, 0.0, 10.0, 10.0, 0.0).is_err());
        assert!(SpatialIndex::<()>::new(f64::NAN, 0.0, 10.0, 10.0, 5.0).is_err());
    }

    #[test]
    fn point_id_truncates_toward_zero() {
        assert_eq!(PointId::from_coordinates(3.9, 1.0), PointId(10_004));
        assert_eq!(PointId::from_coordinates(-3.9, 0.0), PointId(-3));
    }

    #[test]
    fn colliding_identifier_in_another_cell_is_dropped() {
        let mut index = SpatialIndex::new(0.0, 0.0, 20_000.0, 10.0, 60.0).expect("index");
        assert!(index.insert(10_001.0, 0.0, "first"));
        assert!(!index.insert(0.0, 1.0, "second"));
        assert_eq!(index.len(), 1);
        assert!(index.find_nearest(0.0, 1.0).is_none());
    }

    #[test]
    fn neighborhood_search_crosses_cell_boundaries() {
        let mut index = SpatialIndex::new(0.0, 0.0, 600.0, 400.0, 60.0).expect("index");
        index.insert(61.0, 10.0, "right");
        index.insert(10.0, 10.0, "left");

        assert_eq!(
            index.find_nearest(59.0, 10.0).map(|hit| hit.entry.payload),
            Some("left")
        );

        index.set_search(BinSearch::Neighborhood);
        let hit = index.find_nearest(59.0, 10.0).expect("hit");
        assert_eq!(hit.entry.payload, "right");
        assert!((hit.distance - 2.0).abs() <= 1e-12);
    }
}
