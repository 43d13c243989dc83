//! Point-to-cell adjacency.
//!
//! [`PolyData`] only records which points each cell uses. Traversal algorithms
//! also need the reverse relation, which cells use a given point. A
//! [`LinkedMesh`] pairs a mesh's cells with that reverse index, built once in
//! two passes (count, then fill) into a flat buffer.

use super::cell::{CellArray, CellType};
use super::index::{CellId, MeshIndex, PointId};
use super::poly_data::PolyData;
use crate::error::{MeshError, Result};

/// Read-only topological queries over a mesh.
///
/// This is the capability set traversal algorithms rely on; they never look at
/// point coordinates through it.
pub trait MeshTopology<I: MeshIndex> {
    /// Number of points.
    fn num_points(&self) -> usize;

    /// Number of cells.
    fn num_cells(&self) -> usize;

    /// The ordered point list of a cell.
    fn cell_points(&self, cell: CellId<I>) -> &[PointId<I>];

    /// The cells that use a point, in increasing cell id order.
    fn point_cells(&self, point: PointId<I>) -> &[CellId<I>];

    /// The type of a cell.
    fn cell_type(&self, cell: CellId<I>) -> CellType;
}

/// Point-to-cell links in compressed row layout.
#[derive(Debug, Clone)]
pub struct CellLinks<I: MeshIndex = u32> {
    offsets: Vec<usize>,
    cells: Vec<CellId<I>>,
}

impl<I: MeshIndex> CellLinks<I> {
    /// Build links for `num_points` points from a cell array.
    ///
    /// Fails if a cell references a point at or beyond `num_points`.
    pub fn build(num_points: usize, cells: &CellArray<I>) -> Result<Self> {
        let mut counts = vec![0usize; num_points + 1];
        for (cell, _, points) in cells.iter() {
            for p in points {
                let i = p.index();
                if i >= num_points {
                    return Err(MeshError::InvalidPointIndex {
                        cell: cell.index(),
                        point: i,
                    });
                }
                counts[i + 1] += 1;
            }
        }

        // Prefix sum turns counts into offsets.
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }
        let offsets = counts;

        let mut cursor = offsets.clone();
        let mut links = vec![CellId::new(0); cells.connectivity_len()];
        for (cell, _, points) in cells.iter() {
            for p in points {
                let slot = &mut cursor[p.index()];
                links[*slot] = cell;
                *slot += 1;
            }
        }

        Ok(Self {
            offsets,
            cells: links,
        })
    }

    /// The cells using a point.
    #[inline]
    pub fn cells(&self, point: PointId<I>) -> &[CellId<I>] {
        let i = point.index();
        &self.cells[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Number of cells using a point.
    #[inline]
    pub fn degree(&self, point: PointId<I>) -> usize {
        let i = point.index();
        self.offsets[i + 1] - self.offsets[i]
    }
}

/// A mesh's cells together with their point-to-cell links.
///
/// Borrows the cells of the source mesh and owns only the links, so it lives no
/// longer than one traversal.
#[derive(Debug, Clone)]
pub struct LinkedMesh<'a, I: MeshIndex = u32> {
    num_points: usize,
    cells: &'a CellArray<I>,
    links: CellLinks<I>,
}

impl<'a, I: MeshIndex> LinkedMesh<'a, I> {
    /// Build the linked view of a mesh.
    ///
    /// Fails with [`MeshError::EmptyMesh`] when the mesh has no points or no
    /// cells, and with [`MeshError::InvalidPointIndex`] on dangling references.
    pub fn build(mesh: &'a PolyData<I>) -> Result<Self> {
        if mesh.num_points() == 0 || mesh.num_cells() == 0 {
            return Err(MeshError::EmptyMesh);
        }
        let links = CellLinks::build(mesh.num_points(), mesh.cells())?;
        Ok(Self {
            num_points: mesh.num_points(),
            cells: mesh.cells(),
            links,
        })
    }

    /// The underlying links.
    pub fn links(&self) -> &CellLinks<I> {
        &self.links
    }
}

impl<I: MeshIndex> MeshTopology<I> for LinkedMesh<'_, I> {
    #[inline]
    fn num_points(&self) -> usize {
        self.num_points
    }

    #[inline]
    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn cell_points(&self, cell: CellId<I>) -> &[PointId<I>] {
        self.cells.points(cell)
    }

    #[inline]
    fn point_cells(&self, point: PointId<I>) -> &[CellId<I>] {
        self.links.cells(point)
    }

    #[inline]
    fn cell_type(&self, cell: CellId<I>) -> CellType {
        self.cells.cell_type(cell)
    }
}
