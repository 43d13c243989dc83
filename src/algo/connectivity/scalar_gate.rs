//! Scalar admissibility test for cells.

use crate::mesh::{CellId, DataArray, MeshIndex, MeshTopology};

use super::options::ScalarRange;

/// Decides whether a cell may join a region based on its point scalars.
///
/// Only the first component of the scalar array is read.
#[derive(Debug, Clone, Copy)]
pub struct ScalarGate<'a> {
    scalars: &'a DataArray,
    range: ScalarRange,
    full: bool,
}

impl<'a> ScalarGate<'a> {
    /// Create a gate over `scalars`. The range is normalized so that `hi >= lo`.
    pub fn new(scalars: &'a DataArray, range: ScalarRange, full: bool) -> Self {
        Self {
            scalars,
            range: range.normalized(),
            full,
        }
    }

    /// The range the gate tests against.
    pub fn range(&self) -> ScalarRange {
        self.range
    }

    /// Whether `cell` is admitted.
    ///
    /// With `full` set, every point scalar must lie in the range; otherwise the
    /// cell's scalar interval only has to overlap it.
    pub fn admits<I: MeshIndex, T: MeshTopology<I>>(&self, mesh: &T, cell: CellId<I>) -> bool {
        let (min, max) = mesh
            .cell_points(cell)
            .iter()
            .map(|p| self.scalars.component(p.index(), 0))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s), hi.max(s))
            });

        if self.full {
            min >= self.range.lo && max <= self.range.hi
        } else {
            max >= self.range.lo && min <= self.range.hi
        }
    }
}
