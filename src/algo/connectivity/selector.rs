//! Choosing which labeled regions are kept.

use nalgebra::Point3;
use rayon::prelude::*;

use super::labeler::{Labeling, SEEDED_REGION};
use super::options::{ConnectivityOptions, ExtractionMode};

/// The set of regions retained in the output.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum KeepSet {
    /// Every labeled cell.
    All,
    /// One region.
    Region(usize),
    /// Regions flagged by id.
    Regions(Vec<bool>),
}

impl KeepSet {
    /// Whether a cell with the given label is retained.
    #[inline]
    pub fn retains(&self, label: Option<usize>) -> bool {
        match (self, label) {
            (_, None) => false,
            (KeepSet::All, Some(_)) => true,
            (KeepSet::Region(r), Some(l)) => *r == l,
            (KeepSet::Regions(flags), Some(l)) => flags.get(l).copied().unwrap_or(false),
        }
    }
}

/// Derive the keep set for the configured mode from a finished labeling.
///
/// # Panics
///
/// Panics if a seeded mode finds no entry for the seeded region in the region
/// size table, which means labeling and selection disagree.
pub(crate) fn select_regions(labels: &Labeling, options: &ConnectivityOptions) -> KeepSet {
    match options.extraction_mode {
        ExtractionMode::LargestRegion => KeepSet::Region(largest_region(&labels.region_sizes)),
        ExtractionMode::AllRegions => KeepSet::All,
        ExtractionMode::SpecifiedRegions => {
            let mut flags = vec![false; labels.region_sizes.len()];
            for id in options.specified_regions.iter() {
                if let Some(flag) = flags.get_mut(id) {
                    *flag = true;
                }
            }
            KeepSet::Regions(flags)
        }
        ExtractionMode::PointSeededRegions
        | ExtractionMode::CellSeededRegions
        | ExtractionMode::ClosestPointRegion => {
            assert!(
                SEEDED_REGION < labels.region_sizes.len(),
                "seeded region {} missing from region size table of length {}",
                SEEDED_REGION,
                labels.region_sizes.len()
            );
            KeepSet::Region(SEEDED_REGION)
        }
    }
}

/// Id of the first region with the strictly greatest cell count.
pub(crate) fn largest_region(sizes: &[usize]) -> usize {
    let mut best = 0;
    let mut best_size = 0;
    for (id, &size) in sizes.iter().enumerate() {
        if size > best_size {
            best = id;
            best_size = size;
        }
    }
    best
}

/// Index of the point nearest to `target` by squared distance, lowest index on
/// ties. Returns `None` for an empty slice.
pub(crate) fn closest_point(points: &[Point3<f64>], target: &Point3<f64>, parallel: bool) -> Option<usize> {
    let keyed = |(i, p): (usize, &Point3<f64>)| ((p - target).norm_squared(), i);
    let nearer = |a: (f64, usize), b: (f64, usize)| {
        if b.0.total_cmp(&a.0).then(b.1.cmp(&a.1)).is_lt() {
            b
        } else {
            a
        }
    };

    let best = if parallel {
        points.par_iter().enumerate().map(keyed).reduce_with(nearer)
    } else {
        points.iter().enumerate().map(keyed).reduce(nearer)
    };
    best.map(|(_, i)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeling_with_sizes(sizes: Vec<usize>) -> Labeling {
        let visited = sizes
            .iter()
            .enumerate()
            .flat_map(|(r, &n)| std::iter::repeat(Some(r)).take(n))
            .collect();
        Labeling {
            visited,
            point_map: Vec::new(),
            point_order: Vec::new(),
            point_regions: Vec::new(),
            region_sizes: sizes,
        }
    }

    #[test]
    fn test_largest_region_first_wins_ties() {
        assert_eq!(largest_region(&[2, 5, 5, 1]), 1);
        assert_eq!(largest_region(&[3, 3]), 0);
        assert_eq!(largest_region(&[1, 2, 7]), 2);
        assert_eq!(largest_region(&[]), 0);
    }

    #[test]
    fn test_specified_regions_ignore_unknown_ids() {
        let labels = labeling_with_sizes(vec![1, 1, 1]);
        let options = ConnectivityOptions::default()
            .with_mode(ExtractionMode::SpecifiedRegions)
            .with_specified_regions([2, 40]);

        let keep = select_regions(&labels, &options);
        assert_eq!(keep, KeepSet::Regions(vec![false, false, true]));
        assert!(keep.retains(Some(2)));
        assert!(!keep.retains(Some(0)));
        assert!(!keep.retains(Some(40)));
        assert!(!keep.retains(None));
    }

    #[test]
    fn test_seeded_modes_keep_seed_region() {
        let labels = labeling_with_sizes(vec![4]);
        for mode in [
            ExtractionMode::PointSeededRegions,
            ExtractionMode::CellSeededRegions,
            ExtractionMode::ClosestPointRegion,
        ] {
            let options = ConnectivityOptions::default().with_mode(mode);
            assert_eq!(select_regions(&labels, &options), KeepSet::Region(0));
        }
    }

    #[test]
    #[should_panic(expected = "seeded region 0 missing")]
    fn test_seeded_mode_without_region_panics() {
        let labels = labeling_with_sizes(Vec::new());
        let options = ConnectivityOptions::default().with_mode(ExtractionMode::CellSeededRegions);
        select_regions(&labels, &options);
    }

    #[test]
    fn test_all_regions_keeps_every_label() {
        let labels = labeling_with_sizes(vec![2, 3]);
        let options = ConnectivityOptions::default().with_mode(ExtractionMode::AllRegions);
        let keep = select_regions(&labels, &options);
        assert!(labels.visited.iter().all(|&l| keep.retains(l)));
    }

    #[test]
    fn test_closest_point_sequential_matches_parallel() {
        let points: Vec<Point3<f64>> = (0..1000)
            .map(|i| {
                let t = i as f64 * 0.37;
                Point3::new(t.sin() * 10.0, t.cos() * 10.0, (i % 7) as f64)
            })
            .collect();
        let target = Point3::new(3.0, -2.0, 4.0);

        let seq = closest_point(&points, &target, false);
        let par = closest_point(&points, &target, true);
        assert_eq!(seq, par);
        assert!(seq.is_some());
    }

    #[test]
    fn test_closest_point_ties_pick_lowest_index() {
        let points = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let origin = Point3::origin();
        assert_eq!(closest_point(&points, &origin, false), Some(0));
        assert_eq!(closest_point(&points, &origin, true), Some(0));
        assert_eq!(closest_point(&[], &origin, false), None);
    }
}
