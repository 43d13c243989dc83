//! Connected-region extraction.
//!
//! Two cells are connected when they share a point. A region is a maximal set
//! of connected cells; when scalar connectivity is enabled a cell may only join
//! a region if its point scalars pass a range test. Regions are discovered by
//! breadth-first waves over the point-to-cell links of the mesh and numbered in
//! the order they are found.
//!
//! # Extraction Modes
//!
//! - [`ExtractionMode::LargestRegion`]: keep the region with the most cells
//!   (the lowest region id wins ties)
//! - [`ExtractionMode::AllRegions`]: keep everything, usually with
//!   [`ConnectivityOptions::color_regions`]
//! - [`ExtractionMode::SpecifiedRegions`]: keep the listed region ids
//! - [`ExtractionMode::PointSeededRegions`], [`ExtractionMode::CellSeededRegions`],
//!   [`ExtractionMode::ClosestPointRegion`]: grow a single region from seeds
//!
//! When scalar connectivity is active, seed cells are held to the same scalar
//! test as the cells they reach; a seed that fails it contributes nothing.
//!
//! # Example
//!
//! ```
//! use islet::prelude::*;
//! use islet::algo::connectivity::{extract_connected_regions, ConnectivityOptions, ExtractionMode};
//! use nalgebra::Point3;
//!
//! // Two triangles that do not touch.
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(5.0, 0.0, 0.0),
//!     Point3::new(6.0, 0.0, 0.0),
//!     Point3::new(5.0, 1.0, 0.0),
//! ];
//! let mesh: PolyData = build_from_triangles(&points, &[[0, 1, 2], [3, 4, 5]]).unwrap();
//!
//! let options = ConnectivityOptions::default()
//!     .with_mode(ExtractionMode::AllRegions)
//!     .with_color_regions(true);
//! let result = extract_connected_regions(&mesh, &options).unwrap();
//!
//! assert_eq!(result.num_extracted_regions(), 2);
//! assert_eq!(result.mesh().num_cells(), 2);
//! ```

mod assemble;
mod id_list;
mod labeler;
mod options;
mod scalar_gate;
mod selector;

use std::fmt;

use tracing::{debug, warn};

pub use assemble::REGION_ID_ARRAY;
pub use id_list::IdList;
pub use options::{ConnectivityOptions, ExtractionMode, OutputPrecision, ScalarRange};
pub use scalar_gate::ScalarGate;

use crate::algo::Progress;
use crate::error::Result;
use crate::mesh::{CellId, LinkedMesh, MeshIndex, MeshTopology, PointId, PolyData, Precision};

use assemble::{assemble, AssembleFlags};
use labeler::RegionLabeler;
use selector::{closest_point, select_regions};

/// Result of connected-region extraction.
#[derive(Debug, Clone)]
pub struct ConnectivityResult<I: MeshIndex = u32> {
    mesh: PolyData<I>,
    region_sizes: Vec<usize>,
    visited_point_ids: Option<Vec<usize>>,
}

impl<I: MeshIndex> ConnectivityResult<I> {
    fn empty(precision: Precision) -> Self {
        let mut mesh = PolyData::new();
        mesh.set_precision(precision);
        Self {
            mesh,
            region_sizes: Vec::new(),
            visited_point_ids: None,
        }
    }

    /// The extracted mesh.
    #[inline]
    pub fn mesh(&self) -> &PolyData<I> {
        &self.mesh
    }

    /// Take ownership of the extracted mesh.
    pub fn into_mesh(self) -> PolyData<I> {
        self.mesh
    }

    /// Number of regions labeled. Seeded modes always label exactly one.
    #[inline]
    pub fn num_extracted_regions(&self) -> usize {
        self.region_sizes.len()
    }

    /// Cell count of every region, indexed by region id.
    #[inline]
    pub fn region_sizes(&self) -> &[usize] {
        &self.region_sizes
    }

    /// Cell count of one region.
    pub fn region_size(&self, region: usize) -> Option<usize> {
        self.region_sizes.get(region).copied()
    }

    /// Original ids of the points used by the output cells, in order of first
    /// use. Only present when [`ConnectivityOptions::mark_visited_point_ids`]
    /// was set.
    pub fn visited_point_ids(&self) -> Option<&[usize]> {
        self.visited_point_ids.as_deref()
    }
}

impl<I: MeshIndex> fmt::Display for ConnectivityResult<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.num_extracted_regions();
        writeln!(f, "Extracted regions: {}", n)?;
        write!(f, "RegionSizes:")?;
        if n > 10 {
            write!(f, " Only first ten of {} listed", n)?;
        }
        writeln!(f)?;
        for (id, size) in self.region_sizes.iter().take(10).enumerate() {
            writeln!(f, "  {}: {}", id, size)?;
        }
        writeln!(
            f,
            "Output: {} points, {} cells",
            self.mesh.num_points(),
            self.mesh.num_cells()
        )
    }
}

/// Extract connected regions from a mesh.
///
/// # Arguments
///
/// * `mesh` - The input mesh (not modified)
/// * `options` - Extraction mode, seeds and scalar criteria
///
/// # Returns
///
/// The compacted output mesh with region statistics. A mesh with no points or
/// no cells yields an empty result rather than an error.
///
/// # Errors
///
/// Fails if a cell references a missing point, or with
/// [`MeshError::AttributeLength`](crate::error::MeshError::AttributeLength) if
/// an attribute array no longer holds one tuple per point or cell.
///
/// # Panics
///
/// Panics if region labeling and selection disagree about the seeded region,
/// which indicates a bug rather than bad input.
pub fn extract_connected_regions<I: MeshIndex>(
    mesh: &PolyData<I>,
    options: &ConnectivityOptions,
) -> Result<ConnectivityResult<I>> {
    extract_connected_regions_with_progress(mesh, options, &Progress::none())
}

/// Extract connected regions with progress reporting and abort support.
///
/// See [`extract_connected_regions`]. Additionally fails with
/// [`MeshError::Aborted`](crate::error::MeshError::Aborted) when the progress
/// abort flag is raised during labeling.
pub fn extract_connected_regions_with_progress<I: MeshIndex>(
    mesh: &PolyData<I>,
    options: &ConnectivityOptions,
    progress: &Progress,
) -> Result<ConnectivityResult<I>> {
    debug!(mode = %options.extraction_mode, "Executing polygon connectivity filter");

    let precision = options.output_points_precision.resolve(mesh.precision());
    if mesh.num_points() == 0 || mesh.num_cells() == 0 {
        warn!(
            points = mesh.num_points(),
            cells = mesh.num_cells(),
            "No data to connect"
        );
        return Ok(ConnectivityResult::empty(precision));
    }

    mesh.validate_attributes()?;

    let gate = if options.scalar_connectivity {
        match mesh.point_data().scalars() {
            Some(scalars) => {
                let gate = ScalarGate::new(
                    scalars,
                    options.scalar_range,
                    options.full_scalar_connectivity,
                );
                debug!(
                    lo = gate.range().lo,
                    hi = gate.range().hi,
                    full = options.full_scalar_connectivity,
                    "Scalar connectivity enabled"
                );
                Some(gate)
            }
            None => {
                debug!("Scalar connectivity requested but input has no point scalars");
                None
            }
        }
    } else {
        None
    };

    let linked = LinkedMesh::build(mesh)?;
    progress.report_fraction(0.1, "Built cell links");

    let labeler = RegionLabeler::new(&linked, gate);
    let labels = if options.extraction_mode.labels_all_cells() {
        labeler.label_all(progress)?
    } else {
        let seeds = seed_cells(mesh, &linked, options);
        labeler.label_seeded(seeds, progress)?
    };
    debug!(regions = labels.region_sizes.len(), "Extracted region(s)");

    let keep = select_regions(&labels, options);
    let assembled = assemble(
        mesh,
        &linked,
        &labels,
        &keep,
        AssembleFlags {
            color_regions: options.color_regions,
            mark_visited_point_ids: options.mark_visited_point_ids,
            precision,
        },
    )?;

    debug!(
        accounted = labels.region_sizes.iter().sum::<usize>(),
        extracted = assembled.mesh.num_cells(),
        "Total cells accounted for"
    );
    progress.report_fraction(1.0, "Assembled output");

    Ok(ConnectivityResult {
        mesh: assembled.mesh,
        region_sizes: labels.region_sizes,
        visited_point_ids: assembled.visited_point_ids,
    })
}

/// Seed cells for the seeded modes. Out-of-range seed ids are skipped.
fn seed_cells<I: MeshIndex>(
    mesh: &PolyData<I>,
    linked: &LinkedMesh<'_, I>,
    options: &ConnectivityOptions,
) -> Vec<CellId<I>> {
    match options.extraction_mode {
        ExtractionMode::PointSeededRegions => seed_point_cells(linked, options.seeds.iter()),
        ExtractionMode::CellSeededRegions => {
            let num_cells = linked.num_cells();
            options
                .seeds
                .iter()
                .filter(|&c| c < num_cells)
                .map(CellId::new)
                .collect()
        }
        ExtractionMode::ClosestPointRegion => {
            let nearest = closest_point(mesh.positions(), &options.closest_point, options.parallel);
            debug!(point = ?nearest, "Closest point to seed location");
            seed_point_cells(linked, nearest)
        }
        // Global modes grow from every cell, not from seeds.
        ExtractionMode::LargestRegion
        | ExtractionMode::AllRegions
        | ExtractionMode::SpecifiedRegions => Vec::new(),
    }
}

/// Cells incident to the given points, skipping ids that are out of range.
fn seed_point_cells<I: MeshIndex, T: MeshTopology<I>>(
    mesh: &T,
    points: impl IntoIterator<Item = usize>,
) -> Vec<CellId<I>> {
    let num_points = mesh.num_points();
    points
        .into_iter()
        .filter(|&p| p < num_points)
        .flat_map(|p| mesh.point_cells(PointId::new(p)).iter().copied())
        .collect()
}
