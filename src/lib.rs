//! # Islet
//!
//! Connected-region extraction for polygonal meshes.
//!
//! Islet partitions the cells of a mesh into regions of cells that are
//! transitively linked through shared points, then keeps a subset of those
//! regions: the largest one, all of them, a chosen list, or the region grown
//! from seed points, seed cells or the point nearest a location. Growth can be
//! restricted to cells whose point scalars fall inside a range.
//!
//! ## Features
//!
//! - **Mixed-cell meshes**: vertices, lines, poly-lines, triangles, quads,
//!   polygons and triangle strips in one [`PolyData`](mesh::PolyData)
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Attribute passthrough**: point and cell arrays follow the kept elements
//! - **Progress and cancellation**: see [`Progress`](algo::Progress)
//!
//! ## Quick Start
//!
//! ```
//! use islet::prelude::*;
//! use nalgebra::Point3;
//!
//! // A quad split in two, plus a separate triangle.
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(3.0, 0.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//!     Point3::new(3.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2], [0, 2, 3], [4, 5, 6]];
//! let mesh: PolyData = build_from_triangles(&points, &faces).unwrap();
//!
//! // The default mode keeps the largest region.
//! let result = extract_connected_regions(&mesh, &ConnectivityOptions::default()).unwrap();
//! assert_eq!(result.region_sizes(), &[2, 1]);
//! assert_eq!(result.mesh().num_cells(), 2);
//! assert_eq!(result.mesh().num_points(), 4);
//! ```
//!
//! ## Scalar Connectivity
//!
//! ```
//! use islet::prelude::*;
//! use islet::mesh::DataArray;
//! use nalgebra::Point3;
//!
//! # let points = vec![
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(1.0, 1.0, 0.0),
//! #     Point3::new(0.0, 1.0, 0.0),
//! # ];
//! let mut mesh: PolyData = build_from_triangles(&points, &[[0, 1, 2], [0, 2, 3]]).unwrap();
//! mesh.set_point_scalars(DataArray::scalars_f64("elevation", vec![0.0, 0.5, 0.8, 4.0]))
//!     .unwrap();
//!
//! // Only cells whose scalars all lie in [0, 1] may join the seeded region.
//! let options = ConnectivityOptions::default()
//!     .with_mode(ExtractionMode::CellSeededRegions)
//!     .with_seeds([0])
//!     .with_scalar_range(0.0, 1.0)
//!     .with_full_scalar_connectivity(true);
//! let result = extract_connected_regions(&mesh, &options).unwrap();
//! assert_eq!(result.mesh().num_cells(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use islet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::connectivity::{
        extract_connected_regions, ConnectivityOptions, ConnectivityResult, ExtractionMode,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_polygons, build_from_quads, build_from_triangles, CellId, CellType,
        MeshIndex, PointId, PolyData,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    #[test]
    fn test_tetrahedron_is_one_region() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];

        let faces = vec![
            [0, 2, 1], // bottom
            [0, 1, 3], // front
            [1, 2, 3], // right
            [2, 0, 3], // left
        ];

        let mesh: PolyData = build_from_triangles(&points, &faces).unwrap();
        let options = ConnectivityOptions::default().with_mode(ExtractionMode::AllRegions);
        let result = extract_connected_regions(&mesh, &options).unwrap();

        assert_eq!(result.num_extracted_regions(), 1);
        assert_eq!(result.mesh().num_points(), 4);
        assert_eq!(result.mesh().num_cells(), 4);
    }
}
