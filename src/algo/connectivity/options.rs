//! Configuration for connected-region extraction.

use std::fmt;

use nalgebra::Point3;

use super::id_list::IdList;
use crate::mesh::Precision;

/// Which regions end up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionMode {
    /// Label every region and keep the one with the most cells.
    #[default]
    LargestRegion,
    /// Label every region and keep them all.
    AllRegions,
    /// Grow one region from the cells using the seed point ids.
    PointSeededRegions,
    /// Grow one region from the seed cell ids.
    CellSeededRegions,
    /// Grow one region from the cells using the point nearest to
    /// [`ConnectivityOptions::closest_point`].
    ClosestPointRegion,
    /// Label every region and keep those listed in
    /// [`ConnectivityOptions::specified_regions`].
    SpecifiedRegions,
}

impl ExtractionMode {
    /// Whether this mode labels the whole mesh rather than growing from seeds.
    pub fn labels_all_cells(self) -> bool {
        matches!(
            self,
            ExtractionMode::LargestRegion
                | ExtractionMode::AllRegions
                | ExtractionMode::SpecifiedRegions
        )
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionMode::LargestRegion => "ExtractLargestRegion",
            ExtractionMode::AllRegions => "ExtractAllRegions",
            ExtractionMode::PointSeededRegions => "ExtractPointSeededRegions",
            ExtractionMode::CellSeededRegions => "ExtractCellSeededRegions",
            ExtractionMode::ClosestPointRegion => "ExtractClosestPointRegion",
            ExtractionMode::SpecifiedRegions => "ExtractSpecifiedRegions",
        };
        f.write_str(name)
    }
}

/// Inclusive range of admissible point scalar values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarRange {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

impl ScalarRange {
    /// Create a range. Bounds are taken as given; see [`ScalarRange::normalized`].
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The range with `hi` raised to `lo` if it was below it.
    pub fn normalized(self) -> Self {
        if self.hi < self.lo {
            Self {
                lo: self.lo,
                hi: self.lo,
            }
        } else {
            self
        }
    }
}

impl Default for ScalarRange {
    fn default() -> Self {
        Self { lo: 0.0, hi: 1.0 }
    }
}

/// Precision of the output points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPrecision {
    /// Same as the input points.
    #[default]
    Default,
    /// Single precision.
    Single,
    /// Double precision.
    Double,
}

impl OutputPrecision {
    /// Resolve against the input precision.
    pub fn resolve(self, input: Precision) -> Precision {
        match self {
            OutputPrecision::Default => input,
            OutputPrecision::Single => Precision::Single,
            OutputPrecision::Double => Precision::Double,
        }
    }
}

/// Options for connected-region extraction.
#[derive(Debug, Clone)]
pub struct ConnectivityOptions {
    /// Which regions are kept.
    pub extraction_mode: ExtractionMode,

    /// Restrict growth to cells whose point scalars fall in `scalar_range`.
    /// Has no effect if the input has no active point scalars.
    pub scalar_connectivity: bool,

    /// With scalar connectivity, require every point of a cell to be in range
    /// rather than at least one.
    pub full_scalar_connectivity: bool,

    /// Admissible point scalar range. If `hi < lo`, `hi` is raised to `lo`
    /// when extraction starts.
    pub scalar_range: ScalarRange,

    /// Target location for [`ExtractionMode::ClosestPointRegion`].
    pub closest_point: Point3<f64>,

    /// Seed point ids or cell ids, depending on the mode.
    pub seeds: IdList,

    /// Region ids kept by [`ExtractionMode::SpecifiedRegions`].
    pub specified_regions: IdList,

    /// Attach a per-point `"RegionId"` array and make it the active scalars.
    pub color_regions: bool,

    /// Collect the original ids of the points used by the output cells.
    pub mark_visited_point_ids: bool,

    /// Precision of the output points.
    pub output_points_precision: OutputPrecision,

    /// Whether to use parallel execution for the closest point search (default: true).
    pub parallel: bool,
}

impl Default for ConnectivityOptions {
    fn default() -> Self {
        Self {
            extraction_mode: ExtractionMode::LargestRegion,
            scalar_connectivity: false,
            full_scalar_connectivity: false,
            scalar_range: ScalarRange::default(),
            closest_point: Point3::origin(),
            seeds: IdList::new(),
            specified_regions: IdList::new(),
            color_regions: false,
            mark_visited_point_ids: false,
            output_points_precision: OutputPrecision::Default,
            parallel: true,
        }
    }
}

impl ConnectivityOptions {
    /// Create options with the given extraction mode.
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.extraction_mode = mode;
        self
    }

    /// Enable scalar connectivity over the given range.
    pub fn with_scalar_range(mut self, lo: f64, hi: f64) -> Self {
        self.scalar_connectivity = true;
        self.scalar_range = ScalarRange::new(lo, hi);
        self
    }

    /// Set whether every point of a cell must be in the scalar range.
    pub fn with_full_scalar_connectivity(mut self, full: bool) -> Self {
        self.full_scalar_connectivity = full;
        self
    }

    /// Set the target point for [`ExtractionMode::ClosestPointRegion`].
    pub fn with_closest_point(mut self, point: Point3<f64>) -> Self {
        self.closest_point = point;
        self
    }

    /// Replace the seed list.
    pub fn with_seeds(mut self, seeds: impl IntoIterator<Item = usize>) -> Self {
        self.seeds = seeds.into_iter().collect();
        self
    }

    /// Replace the specified-region list.
    pub fn with_specified_regions(mut self, regions: impl IntoIterator<Item = usize>) -> Self {
        self.specified_regions = regions.into_iter().collect();
        self
    }

    /// Set whether to emit the `"RegionId"` point array.
    pub fn with_color_regions(mut self, color: bool) -> Self {
        self.color_regions = color;
        self
    }

    /// Set whether to collect visited point ids.
    pub fn with_mark_visited_point_ids(mut self, mark: bool) -> Self {
        self.mark_visited_point_ids = mark;
        self
    }

    /// Set the output point precision.
    pub fn with_output_points_precision(mut self, precision: OutputPrecision) -> Self {
        self.output_points_precision = precision;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Clear the seed list.
    pub fn initialize_seed_list(&mut self) {
        self.seeds.initialize();
    }

    /// Add a seed point or cell id.
    pub fn add_seed(&mut self, id: usize) {
        self.seeds.add(id);
    }

    /// Remove every occurrence of a seed id.
    pub fn delete_seed(&mut self, id: usize) {
        self.seeds.delete(id);
    }

    /// Clear the specified-region list.
    pub fn initialize_specified_region_list(&mut self) {
        self.specified_regions.initialize();
    }

    /// Add a region id to extract.
    pub fn add_specified_region(&mut self, id: usize) {
        self.specified_regions.add(id);
    }

    /// Remove every occurrence of a region id.
    pub fn delete_specified_region(&mut self, id: usize) {
        self.specified_regions.delete(id);
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "On"
    } else {
        "Off"
    }
}

impl fmt::Display for ConnectivityOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.closest_point;
        writeln!(f, "Extraction Mode: {}", self.extraction_mode)?;
        writeln!(f, "Closest Point: ({}, {}, {})", p.x, p.y, p.z)?;
        writeln!(f, "Color Regions: {}", on_off(self.color_regions))?;
        writeln!(f, "Scalar Connectivity: {}", on_off(self.scalar_connectivity))?;
        if self.scalar_connectivity {
            writeln!(f, "Full Connectivity: {}", on_off(self.full_scalar_connectivity))?;
        }
        writeln!(
            f,
            "Mark visited point ids: {}",
            on_off(self.mark_visited_point_ids)
        )?;
        writeln!(
            f,
            "Scalar Range: ({}, {})",
            self.scalar_range.lo, self.scalar_range.hi
        )?;
        writeln!(f, "Seeds: {}", self.seeds)?;
        writeln!(f, "Specified Regions: {}", self.specified_regions)?;
        writeln!(f, "Output Points Precision: {:?}", self.output_points_precision)
    }
}
