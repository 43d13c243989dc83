//! Cell types and cell storage.
//!
//! A polygonal mesh mixes zero-, one- and two-dimensional cells. Every cell is an
//! ordered list of point indices tagged with a [`CellType`]. Cells are stored in a
//! compact [`CellArray`] (offsets into one shared connectivity buffer) so that
//! meshes with millions of cells do not pay for one allocation per cell.

use std::fmt;

use super::index::{CellId, MeshIndex, PointId};

/// The kind of a polygonal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// A single point.
    Vertex,
    /// A set of unconnected points.
    PolyVertex,
    /// A line segment between two points.
    Line,
    /// A connected chain of line segments.
    PolyLine,
    /// A triangle.
    Triangle,
    /// A quadrilateral.
    Quad,
    /// A planar polygon with three or more points.
    Polygon,
    /// A strip of triangles sharing edges (`n` points describe `n - 2` triangles).
    TriangleStrip,
}

impl CellType {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> usize {
        match self {
            CellType::Vertex | CellType::PolyVertex => 0,
            CellType::Line | CellType::PolyLine => 1,
            CellType::Triangle | CellType::Quad | CellType::Polygon | CellType::TriangleStrip => 2,
        }
    }

    /// Whether a cell of this type may hold `n` points.
    pub fn accepts(self, n: usize) -> bool {
        match self {
            CellType::Vertex => n == 1,
            CellType::PolyVertex => n >= 1,
            CellType::Line => n == 2,
            CellType::PolyLine => n >= 2,
            CellType::Triangle => n == 3,
            CellType::Quad => n == 4,
            CellType::Polygon | CellType::TriangleStrip => n >= 3,
        }
    }

    /// The natural two-dimensional type for a face with `n` points.
    pub fn for_face(n: usize) -> CellType {
        match n {
            3 => CellType::Triangle,
            4 => CellType::Quad,
            _ => CellType::Polygon,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Vertex => "vertex",
            CellType::PolyVertex => "poly-vertex",
            CellType::Line => "line",
            CellType::PolyLine => "poly-line",
            CellType::Triangle => "triangle",
            CellType::Quad => "quad",
            CellType::Polygon => "polygon",
            CellType::TriangleStrip => "triangle strip",
        };
        f.write_str(name)
    }
}

/// Compact storage for an ordered sequence of cells.
///
/// Cell `i` owns `connectivity[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CellArray<I: MeshIndex = u32> {
    offsets: Vec<usize>,
    connectivity: Vec<PointId<I>>,
    types: Vec<CellType>,
}

impl<I: MeshIndex> Default for CellArray<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> CellArray<I> {
    /// Create an empty cell array.
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            connectivity: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Create an empty cell array with room for `num_cells` cells holding
    /// `num_indices` point references in total.
    pub fn with_capacity(num_cells: usize, num_indices: usize) -> Self {
        let mut offsets = Vec::with_capacity(num_cells + 1);
        offsets.push(0);
        Self {
            offsets,
            connectivity: Vec::with_capacity(num_indices),
            types: Vec::with_capacity(num_cells),
        }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the array holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Total number of point references over all cells.
    #[inline]
    pub fn connectivity_len(&self) -> usize {
        self.connectivity.len()
    }

    /// Append a cell and return its id.
    ///
    /// No validation is performed here; see [`crate::mesh::PolyData::push_cell`].
    pub fn push(&mut self, cell_type: CellType, points: &[PointId<I>]) -> CellId<I> {
        let id = CellId::new(self.types.len());
        self.connectivity.extend_from_slice(points);
        self.offsets.push(self.connectivity.len());
        self.types.push(cell_type);
        id
    }

    /// The ordered point list of a cell.
    #[inline]
    pub fn points(&self, cell: CellId<I>) -> &[PointId<I>] {
        let i = cell.index();
        &self.connectivity[self.offsets[i]..self.offsets[i + 1]]
    }

    /// The type of a cell.
    #[inline]
    pub fn cell_type(&self, cell: CellId<I>) -> CellType {
        self.types[cell.index()]
    }

    /// Iterate over all cells as `(id, type, points)`.
    pub fn iter(&self) -> impl Iterator<Item = (CellId<I>, CellType, &[PointId<I>])> + '_ {
        self.types.iter().enumerate().map(move |(i, &t)| {
            (
                CellId::new(i),
                t,
                &self.connectivity[self.offsets[i]..self.offsets[i + 1]],
            )
        })
    }

    /// Flat view of all point references, in cell order.
    #[inline]
    pub fn connectivity(&self) -> &[PointId<I>] {
        &self.connectivity
    }
}
