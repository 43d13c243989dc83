//! Breadth-first region labeling.
//!
//! Regions grow in waves: every cell in the current wave that has not been
//! labeled yet receives the current region id, and each of its points that has
//! not been reached before pulls every cell using that point (subject to the
//! scalar gate) into the next wave. Growth stops when a wave comes up empty.

use tracing::trace;

use crate::algo::Progress;
use crate::error::{MeshError, Result};
use crate::mesh::{CellId, MeshIndex, MeshTopology};

use super::scalar_gate::ScalarGate;

/// Region id used for the single region grown from seeds.
pub(crate) const SEEDED_REGION: usize = 0;

/// Number of cells scanned between progress reports and abort polls.
const PROGRESS_INTERVAL: usize = 5000;

/// Labels produced by one traversal.
#[derive(Debug, Clone)]
pub(crate) struct Labeling {
    /// Region of each cell, `None` if never reached.
    pub visited: Vec<Option<usize>>,
    /// Label order of each input point, `None` if never reached.
    pub point_map: Vec<Option<usize>>,
    /// Input point ids in label order (inverse of `point_map`).
    pub point_order: Vec<usize>,
    /// Region that first reached each point, in label order.
    pub point_regions: Vec<usize>,
    /// Cell count of each region, indexed by region id.
    pub region_sizes: Vec<usize>,
}

impl Labeling {
    fn new(num_points: usize, num_cells: usize) -> Self {
        Self {
            visited: vec![None; num_cells],
            point_map: vec![None; num_points],
            point_order: Vec::with_capacity(num_points),
            point_regions: Vec::with_capacity(num_points),
            region_sizes: Vec::new(),
        }
    }
}

/// Run state for labeling one mesh. Consumed by the labeling call.
pub(crate) struct RegionLabeler<'m, I: MeshIndex, T: MeshTopology<I>> {
    mesh: &'m T,
    gate: Option<ScalarGate<'m>>,
    labels: Labeling,
    wave: Vec<CellId<I>>,
    next_wave: Vec<CellId<I>>,
    region: usize,
    cells_in_region: usize,
}

impl<'m, I: MeshIndex, T: MeshTopology<I>> RegionLabeler<'m, I, T> {
    pub fn new(mesh: &'m T, gate: Option<ScalarGate<'m>>) -> Self {
        Self {
            mesh,
            gate,
            labels: Labeling::new(mesh.num_points(), mesh.num_cells()),
            wave: Vec::new(),
            next_wave: Vec::new(),
            region: 0,
            cells_in_region: 0,
        }
    }

    /// Label every cell. Each cell not reached by an earlier region starts a
    /// new one; the starting cell itself is not gated.
    pub fn label_all(mut self, progress: &Progress) -> Result<Labeling> {
        let num_cells = self.mesh.num_cells();
        for c in 0..num_cells {
            if c > 0 && c % PROGRESS_INTERVAL == 0 {
                if progress.abort_requested() {
                    return Err(MeshError::Aborted);
                }
                progress.report_fraction(
                    0.1 + 0.8 * c as f64 / num_cells as f64,
                    "Labeling regions",
                );
            }

            if self.labels.visited[c].is_none() {
                self.wave.push(CellId::new(c));
                self.traverse(progress)?;
                self.close_region();
            }
        }
        Ok(self.labels)
    }

    /// Grow a single region from `seeds`. When a scalar gate is active the
    /// seed cells must pass it like any other cell.
    pub fn label_seeded(
        mut self,
        seeds: impl IntoIterator<Item = CellId<I>>,
        progress: &Progress,
    ) -> Result<Labeling> {
        let mesh = self.mesh;
        let gate = self.gate;
        self.wave.extend(
            seeds
                .into_iter()
                .filter(|&c| gate.map_or(true, |g| g.admits(mesh, c))),
        );
        trace!(seed_cells = self.wave.len(), "Seeded initial wave");
        progress.report_fraction(0.5, "Labeling seeded region");

        debug_assert_eq!(self.region, SEEDED_REGION);
        self.traverse(progress)?;
        self.close_region();
        progress.report_fraction(0.9, "Labeling seeded region");
        Ok(self.labels)
    }

    fn traverse(&mut self, progress: &Progress) -> Result<()> {
        let mesh = self.mesh;
        let gate = self.gate;
        let labels = &mut self.labels;
        let mut wave = std::mem::take(&mut self.wave);
        let mut next = std::mem::take(&mut self.next_wave);

        while !wave.is_empty() {
            if progress.abort_requested() {
                return Err(MeshError::Aborted);
            }

            for &cell in &wave {
                let slot = &mut labels.visited[cell.index()];
                if slot.is_some() {
                    continue;
                }
                *slot = Some(self.region);
                self.cells_in_region += 1;

                for &p in mesh.cell_points(cell) {
                    let pi = p.index();
                    if labels.point_map[pi].is_some() {
                        continue;
                    }
                    labels.point_map[pi] = Some(labels.point_order.len());
                    labels.point_order.push(pi);
                    labels.point_regions.push(self.region);

                    match gate {
                        Some(g) => next.extend(
                            mesh.point_cells(p)
                                .iter()
                                .copied()
                                .filter(|&c| g.admits(mesh, c)),
                        ),
                        None => next.extend_from_slice(mesh.point_cells(p)),
                    }
                }
            }

            std::mem::swap(&mut wave, &mut next);
            next.clear();
        }

        self.wave = wave;
        self.next_wave = next;
        Ok(())
    }

    fn close_region(&mut self) {
        trace!(region = self.region, cells = self.cells_in_region, "Closed region");
        self.labels.region_sizes.push(self.cells_in_region);
        self.region += 1;
        self.cells_in_region = 0;
    }
}
