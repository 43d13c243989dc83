//! Core mesh data structures.
//!
//! This module provides the polygonal mesh representation and the adjacency
//! index that traversal algorithms are written against.
//!
//! # Overview
//!
//! The primary type is [`PolyData`], an ordered list of points and an ordered
//! list of typed cells ([`CellType`]): vertices, lines, poly-lines, triangles,
//! quads, polygons and triangle strips may all appear in one mesh. Points and
//! cells carry named attribute arrays ([`AttributeData`]).
//!
//! [`LinkedMesh`] adds point-to-cell links on top of a mesh and implements
//! [`MeshTopology`], the narrow query interface used by region traversal.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`PointId`] - Identifies a point
//! - [`CellId`] - Identifies a cell
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`] trait),
//! allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//!
//! # Construction
//!
//! ```
//! use islet::mesh::{build_from_triangles, PolyData};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh: PolyData = build_from_triangles(&points, &faces).unwrap();
//! ```

mod attributes;
mod builder;
mod cell;
mod index;
mod links;
mod poly_data;

pub use attributes::{ArrayValues, AttributeData, DataArray};
pub use builder::{build_from_polygons, build_from_quads, build_from_triangles, to_face_vertex};
pub use cell::{CellArray, CellType};
pub use index::{CellId, MeshIndex, PointId};
pub use links::{CellLinks, LinkedMesh, MeshTopology};
pub use poly_data::{PolyData, Precision};
