//! Mesh construction utilities.
//!
//! This module provides functions for building polygonal meshes from
//! face-vertex lists as commonly found in mesh file formats, and for turning a
//! mesh back into such lists.

use nalgebra::Point3;

use super::cell::CellType;
use super::index::{MeshIndex, PointId};
use super::poly_data::PolyData;
use crate::error::{MeshError, Result};

/// Build a mesh from points and triangle faces.
///
/// # Arguments
/// * `points` - List of point positions
/// * `faces` - List of triangle faces, each as [p0, p1, p2] indices
///
/// # Returns
/// A polygonal mesh, or an error if the input is invalid.
///
/// # Example
/// ```
/// use islet::mesh::{build_from_triangles, PolyData};
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let mesh: PolyData = build_from_triangles(&points, &faces).unwrap();
/// assert_eq!(mesh.num_points(), 3);
/// assert_eq!(mesh.num_cells(), 1);
/// ```
pub fn build_from_triangles<I: MeshIndex>(
    points: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<PolyData<I>> {
    build_faces(points, faces.iter().map(|f| f.as_slice()), faces.len() * 3)
}

/// Build a mesh from points and quad faces.
///
/// # Arguments
/// * `points` - List of point positions
/// * `faces` - List of quad faces, each as [p0, p1, p2, p3] indices (counter-clockwise)
pub fn build_from_quads<I: MeshIndex>(
    points: &[Point3<f64>],
    faces: &[[usize; 4]],
) -> Result<PolyData<I>> {
    build_faces(points, faces.iter().map(|f| f.as_slice()), faces.len() * 4)
}

/// Build a mesh from points and faces of arbitrary size.
///
/// Each face becomes a triangle, quad or polygon cell depending on its length.
/// Faces with fewer than three points are rejected.
///
/// # Example
/// ```
/// use islet::mesh::{build_from_polygons, CellType, CellId, PolyData};
/// use nalgebra::Point3;
///
/// let points: Vec<Point3<f64>> = (0..5)
///     .map(|i| Point3::new(i as f64, (i % 2) as f64, 0.0))
///     .collect();
/// let faces = vec![vec![0, 1, 2, 3, 4], vec![0, 2, 4]];
///
/// let mesh: PolyData = build_from_polygons(&points, &faces).unwrap();
/// assert_eq!(mesh.cell_type(CellId::new(0)), CellType::Polygon);
/// assert_eq!(mesh.cell_type(CellId::new(1)), CellType::Triangle);
/// ```
pub fn build_from_polygons<I: MeshIndex>(
    points: &[Point3<f64>],
    faces: &[Vec<usize>],
) -> Result<PolyData<I>> {
    let num_indices = faces.iter().map(Vec::len).sum();
    build_faces(points, faces.iter().map(Vec::as_slice), num_indices)
}

fn build_faces<'f, I: MeshIndex>(
    points: &[Point3<f64>],
    faces: impl ExactSizeIterator<Item = &'f [usize]>,
    num_indices: usize,
) -> Result<PolyData<I>> {
    if faces.len() == 0 {
        return Err(MeshError::EmptyMesh);
    }

    let mut mesh = PolyData::with_capacity(points.len(), faces.len(), num_indices);
    for &p in points {
        mesh.add_point(p)?;
    }

    let mut ids: Vec<PointId<I>> = Vec::new();
    for face in faces {
        if let Some(&bad) = face.iter().find(|&&i| i >= points.len()) {
            return Err(MeshError::InvalidPointIndex {
                cell: mesh.num_cells(),
                point: bad,
            });
        }
        ids.clear();
        ids.extend(face.iter().map(|&i| PointId::new(i)));
        mesh.push_cell(CellType::for_face(face.len()), &ids)?;
    }

    Ok(mesh)
}

/// Convert the two-dimensional cells of a mesh back to a face-vertex
/// representation.
///
/// Triangles, quads and polygons are returned as-is; triangle strips are
/// expanded into triangles with alternating winding. Vertex and line cells are
/// skipped.
///
/// Returns (points, faces) tuple.
pub fn to_face_vertex<I: MeshIndex>(mesh: &PolyData<I>) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let points = mesh.positions().to_vec();

    let mut faces = Vec::with_capacity(mesh.num_cells());
    for (_, cell_type, pts) in mesh.cells().iter() {
        if cell_type.dimension() < 2 {
            continue;
        }
        match cell_type {
            CellType::TriangleStrip => {
                for i in 0..pts.len().saturating_sub(2) {
                    let (a, b, c) = (pts[i].index(), pts[i + 1].index(), pts[i + 2].index());
                    if i % 2 == 0 {
                        faces.push(vec![a, b, c]);
                    } else {
                        faces.push(vec![b, a, c]);
                    }
                }
            }
            _ => faces.push(pts.iter().map(|p| p.index()).collect()),
        }
    }

    (points, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::CellId;

    fn unit_square() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_build_triangles() {
        let mesh: PolyData = build_from_triangles(&unit_square(), &[[0, 1, 2], [0, 2, 3]]).unwrap();
        assert_eq!(mesh.num_points(), 4);
        assert_eq!(mesh.num_cells(), 2);
        assert_eq!(mesh.cell_type(CellId::new(1)), CellType::Triangle);
    }

    #[test]
    fn test_build_quads() {
        let mesh: PolyData = build_from_quads(&unit_square(), &[[0, 1, 2, 3]]).unwrap();
        assert_eq!(mesh.num_cells(), 1);
        assert_eq!(mesh.cell_type(CellId::new(0)), CellType::Quad);
    }

    #[test]
    fn test_empty_faces_rejected() {
        let result: Result<PolyData> = build_from_triangles(&unit_square(), &[]);
        assert!(matches!(result, Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_invalid_index_rejected() {
        let result: Result<PolyData> = build_from_triangles(&unit_square(), &[[0, 1, 7]]);
        assert!(matches!(
            result,
            Err(MeshError::InvalidPointIndex { cell: 0, point: 7 })
        ));

        // Would wrap around if converted to u16 first.
        let points = vec![Point3::origin(); 3];
        let result: Result<PolyData<u16>> = build_from_triangles(&points, &[[0, 1, 65_537]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_too_many_points_for_index_width() {
        let points: Vec<Point3<f64>> = (0..70_000).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
        let result: Result<PolyData<u16>> = build_from_triangles(&points, &[[0, 1, 2]]);
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "points", .. })
        ));

        let mesh: PolyData<u32> = build_from_triangles(&points, &[[0, 1, 69_999]]).unwrap();
        assert_eq!(mesh.num_points(), 70_000);
    }

    #[test]
    fn test_short_polygon_rejected() {
        let result: Result<PolyData> = build_from_polygons(&unit_square(), &[vec![0, 1]]);
        assert!(matches!(result, Err(MeshError::InvalidCellSize { points: 2, .. })));
    }

    #[test]
    fn test_round_trip_with_strip() {
        let mut mesh: PolyData = build_from_quads(&unit_square(), &[[0, 1, 2, 3]]).unwrap();
        let ids: Vec<PointId> = [0, 1, 3, 2].iter().map(|&i| PointId::new(i)).collect();
        mesh.push_cell(CellType::TriangleStrip, &ids).unwrap();
        mesh.push_cell(CellType::Vertex, &[PointId::new(0)]).unwrap();

        let (points, faces) = to_face_vertex(&mesh);
        assert_eq!(points.len(), 4);
        assert_eq!(faces, vec![vec![0, 1, 2, 3], vec![0, 1, 3], vec![3, 1, 2]]);
    }
}
