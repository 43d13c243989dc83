//! Polygonal mesh container.
//!
//! [`PolyData`] holds points, typed cells and attribute data. Unlike a
//! half-edge structure it places no manifold requirements on its input: cells
//! may be isolated vertices, poly-lines, polygons of any size or triangle
//! strips, and any number of cells may share a point.

use nalgebra::Point3;

use super::attributes::{AttributeData, DataArray};
use super::cell::{CellArray, CellType};
use super::index::{ensure_addressable, CellId, MeshIndex, PointId};
use crate::error::{MeshError, Result};

/// Storage precision of point coordinates.
///
/// Coordinates are always handled as `f64`; single-precision points are
/// rounded through `f32` when inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// 32-bit floating point coordinates.
    Single,
    /// 64-bit floating point coordinates.
    #[default]
    Double,
}

impl Precision {
    #[inline]
    fn store(self, p: Point3<f64>) -> Point3<f64> {
        match self {
            Precision::Single => p.map(|c| c as f32 as f64),
            Precision::Double => p,
        }
    }
}

/// A polygonal mesh: points, cells and their attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyData<I: MeshIndex = u32> {
    pub(crate) points: Vec<Point3<f64>>,
    pub(crate) precision: Precision,
    pub(crate) cells: CellArray<I>,
    pub(crate) point_data: AttributeData,
    pub(crate) cell_data: AttributeData,
}

impl<I: MeshIndex> Default for PolyData<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> PolyData<I> {
    /// Create a new empty mesh with double-precision points.
    pub fn new() -> Self {
        Self::with_capacity(0, 0, 0)
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_points: usize, num_cells: usize, num_indices: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_points),
            precision: Precision::Double,
            cells: CellArray::with_capacity(num_cells, num_indices),
            point_data: AttributeData::new(),
            cell_data: AttributeData::new(),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Get the number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mesh has no points and no cells.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.cells.is_empty()
    }

    /// Get a point position.
    #[inline]
    pub fn position(&self, p: PointId<I>) -> &Point3<f64> {
        &self.points[p.index()]
    }

    /// All point positions, indexed by point id.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Storage precision of the points.
    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// The cell storage.
    #[inline]
    pub fn cells(&self) -> &CellArray<I> {
        &self.cells
    }

    /// The ordered point list of a cell.
    #[inline]
    pub fn cell_points(&self, c: CellId<I>) -> &[PointId<I>] {
        self.cells.points(c)
    }

    /// The type of a cell.
    #[inline]
    pub fn cell_type(&self, c: CellId<I>) -> CellType {
        self.cells.cell_type(c)
    }

    /// Iterate over all point IDs.
    pub fn point_ids(&self) -> impl Iterator<Item = PointId<I>> + '_ {
        (0..self.points.len()).map(PointId::new)
    }

    /// Iterate over all cell IDs.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId<I>> + '_ {
        (0..self.cells.len()).map(CellId::new)
    }

    /// Per-point attributes.
    #[inline]
    pub fn point_data(&self) -> &AttributeData {
        &self.point_data
    }

    /// Per-cell attributes.
    #[inline]
    pub fn cell_data(&self) -> &AttributeData {
        &self.cell_data
    }

    // ==================== Mutation ====================

    /// Change the storage precision. Switching to single precision rounds the
    /// existing coordinates.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
        if precision == Precision::Single {
            for p in &mut self.points {
                *p = precision.store(*p);
            }
        }
    }

    /// Add a point and return its id.
    ///
    /// Fails if the new id does not fit in the index width `I`.
    pub fn add_point(&mut self, position: Point3<f64>) -> Result<PointId<I>> {
        ensure_addressable::<I>("points", self.points.len() + 1)?;
        let id = PointId::new(self.points.len());
        self.points.push(self.precision.store(position));
        Ok(id)
    }

    /// Add a cell after checking its size and point references.
    pub fn push_cell(&mut self, cell_type: CellType, points: &[PointId<I>]) -> Result<CellId<I>> {
        let cell = self.cells.len();
        ensure_addressable::<I>("cells", cell + 1)?;
        if !cell_type.accepts(points.len()) {
            return Err(MeshError::InvalidCellSize {
                cell,
                cell_type,
                points: points.len(),
            });
        }
        if let Some(bad) = points.iter().find(|p| p.index() >= self.points.len()) {
            return Err(MeshError::InvalidPointIndex {
                cell,
                point: bad.index(),
            });
        }
        Ok(self.cells.push(cell_type, points))
    }

    /// Attach a point attribute array. It must hold one tuple per point.
    pub fn add_point_array(&mut self, array: DataArray) -> Result<()> {
        check_tuples(&array, self.points.len())?;
        self.point_data.add_array(array);
        Ok(())
    }

    /// Attach a cell attribute array. It must hold one tuple per cell.
    pub fn add_cell_array(&mut self, array: DataArray) -> Result<()> {
        check_tuples(&array, self.cells.len())?;
        self.cell_data.add_array(array);
        Ok(())
    }

    /// Attach a point array and make it the active point scalars.
    pub fn set_point_scalars(&mut self, array: DataArray) -> Result<()> {
        let name = array.name().to_string();
        self.add_point_array(array)?;
        self.point_data.set_active_scalars(&name);
        Ok(())
    }

    /// Check that every attribute array still holds one tuple per element.
    ///
    /// Arrays are checked when attached; points or cells added afterwards
    /// leave them short.
    pub fn validate_attributes(&self) -> Result<()> {
        for array in self.point_data.arrays() {
            check_tuples(array, self.points.len())?;
        }
        for array in self.cell_data.arrays() {
            check_tuples(array, self.cells.len())?;
        }
        Ok(())
    }

    /// Mutable access to point attributes, for selecting active scalars.
    pub fn point_data_mut(&mut self) -> &mut AttributeData {
        &mut self.point_data
    }

    /// Mutable access to cell attributes, for selecting active scalars.
    pub fn cell_data_mut(&mut self) -> &mut AttributeData {
        &mut self.cell_data
    }
}

fn check_tuples(array: &DataArray, expected: usize) -> Result<()> {
    if array.num_tuples() != expected {
        return Err(MeshError::AttributeLength {
            name: array.name().to_string(),
            expected,
            actual: array.num_tuples(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh: PolyData = PolyData::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_points(), 0);
        assert_eq!(mesh.num_cells(), 0);
        assert_eq!(mesh.precision(), Precision::Double);
    }

    #[test]
    fn test_push_cell_validation() {
        let mut mesh: PolyData = PolyData::new();
        let a = mesh.add_point(Point3::new(0.0, 0.0, 0.0)).unwrap();
        let b = mesh.add_point(Point3::new(1.0, 0.0, 0.0)).unwrap();

        let line = mesh.push_cell(CellType::Line, &[a, b]).unwrap();
        assert_eq!(line.index(), 0);
        assert_eq!(mesh.cell_type(line), CellType::Line);

        let err = mesh.push_cell(CellType::Triangle, &[a, b]).unwrap_err();
        assert!(matches!(err, MeshError::InvalidCellSize { cell: 1, points: 2, .. }));

        let err = mesh
            .push_cell(CellType::Line, &[a, PointId::new(9)])
            .unwrap_err();
        assert!(matches!(err, MeshError::InvalidPointIndex { cell: 1, point: 9 }));
        assert_eq!(mesh.num_cells(), 1);
    }

    #[test]
    fn test_single_precision_rounds() {
        let mut mesh: PolyData = PolyData::new();
        mesh.set_precision(Precision::Single);
        let p = mesh.add_point(Point3::new(0.1, 0.2, 0.3)).unwrap();

        assert_eq!(mesh.position(p).x, 0.1f32 as f64);
        assert_ne!(mesh.position(p).x, 0.1);
    }

    #[test]
    fn test_attribute_length_checked() {
        let mut mesh: PolyData = PolyData::new();
        mesh.add_point(Point3::origin()).unwrap();
        mesh.add_point(Point3::new(1.0, 0.0, 0.0)).unwrap();

        let err = mesh
            .add_point_array(DataArray::scalars_f64("s", vec![1.0]))
            .unwrap_err();
        assert!(matches!(err, MeshError::AttributeLength { expected: 2, actual: 1, .. }));

        mesh.set_point_scalars(DataArray::scalars_f64("s", vec![1.0, 2.0]))
            .unwrap();
        assert_eq!(mesh.point_data().scalars().unwrap().name(), "s");
    }

    #[test]
    fn test_attributes_go_stale_when_mesh_grows() {
        let mut mesh: PolyData = PolyData::new();
        let a = mesh.add_point(Point3::origin()).unwrap();
        mesh.set_point_scalars(DataArray::scalars_f64("s", vec![1.0]))
            .unwrap();
        mesh.add_cell_array(DataArray::scalars_i64("tag", Vec::new()))
            .unwrap();
        assert!(mesh.validate_attributes().is_ok());

        let b = mesh.add_point(Point3::new(1.0, 0.0, 0.0)).unwrap();
        let err = mesh.validate_attributes().unwrap_err();
        assert!(matches!(err, MeshError::AttributeLength { expected: 2, actual: 1, .. }));

        mesh.point_data_mut()
            .add_array(DataArray::scalars_f64("s", vec![1.0, 2.0]));
        mesh.push_cell(CellType::Line, &[a, b]).unwrap();
        let err = mesh.validate_attributes().unwrap_err();
        assert!(matches!(err, MeshError::AttributeLength { expected: 1, actual: 0, .. }));
    }

    #[test]
    fn test_narrow_index_width_refuses_growth() {
        let mut mesh: PolyData<u16> = PolyData::new();
        for i in 0..=u16::MAX as usize {
            mesh.add_point(Point3::new(i as f64, 0.0, 0.0)).unwrap();
        }
        assert_eq!(mesh.num_points(), 65_536);

        let err = mesh.add_point(Point3::origin()).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { name: "points", .. }));
        assert_eq!(mesh.num_points(), 65_536);
    }
}
