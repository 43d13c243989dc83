//! Building the output mesh from a labeling and a keep set.

use crate::mesh::{
    AttributeData, CellArray, CellId, DataArray, MeshIndex, MeshTopology, PointId, PolyData,
    Precision,
};

use crate::error::Result;

use super::labeler::Labeling;
use super::selector::KeepSet;

/// Name of the per-point region array.
pub const REGION_ID_ARRAY: &str = "RegionId";

/// Output of the assembly step.
pub(crate) struct Assembled<I: MeshIndex> {
    pub mesh: PolyData<I>,
    pub visited_point_ids: Option<Vec<usize>>,
}

/// What the assembler should emit besides points and cells.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AssembleFlags {
    pub color_regions: bool,
    pub mark_visited_point_ids: bool,
    pub precision: Precision,
}

/// Compact the retained cells of `input` into a new mesh.
///
/// Output points are the points of retained cells, numbered in the order the
/// labeling first reached them. Output cells keep their input order and type.
pub(crate) fn assemble<I: MeshIndex, T: MeshTopology<I>>(
    input: &PolyData<I>,
    topology: &T,
    labels: &Labeling,
    keep: &KeepSet,
    flags: AssembleFlags,
) -> Result<Assembled<I>> {
    let retained: Vec<usize> = (0..labels.visited.len())
        .filter(|&c| keep.retains(labels.visited[c]))
        .collect();

    let mut uses_point = vec![false; input.num_points()];
    let mut num_indices = 0;
    for &c in &retained {
        let points = topology.cell_points(CellId::new(c));
        num_indices += points.len();
        for p in points {
            uses_point[p.index()] = true;
        }
    }

    // Restrict the label order to retained points and renumber densely.
    let mut out_map: Vec<Option<usize>> = vec![None; input.num_points()];
    let mut out_points: Vec<usize> = Vec::new();
    let mut out_regions: Vec<i64> = Vec::new();
    for (&p, &region) in labels.point_order.iter().zip(&labels.point_regions) {
        if uses_point[p] {
            out_map[p] = Some(out_points.len());
            out_points.push(p);
            out_regions.push(region as i64);
        }
    }

    let mut mesh: PolyData<I> = PolyData::with_capacity(out_points.len(), retained.len(), num_indices);
    mesh.set_precision(flags.precision);

    mesh.point_data = AttributeData::copy_allocate(input.point_data(), out_points.len());
    for &p in &out_points {
        mesh.add_point(input.positions()[p])?;
        mesh.point_data.push_tuple_from(input.point_data(), p);
    }
    if flags.color_regions {
        mesh.point_data
            .add_array(DataArray::scalars_i64(REGION_ID_ARRAY, out_regions));
        mesh.point_data.set_active_scalars(REGION_ID_ARRAY);
    }

    let mut visited_point_ids = flags.mark_visited_point_ids.then(Vec::new);
    let mut marked = vec![false; if flags.mark_visited_point_ids { input.num_points() } else { 0 }];

    let mut cells = CellArray::with_capacity(retained.len(), num_indices);
    mesh.cell_data = AttributeData::copy_allocate(input.cell_data(), retained.len());
    let mut ids: Vec<PointId<I>> = Vec::new();
    for &c in &retained {
        let cell: CellId<I> = CellId::new(c);
        ids.clear();
        for p in topology.cell_points(cell) {
            let pi = p.index();
            // Every point of a retained cell is a retained point.
            if let Some(out) = out_map[pi] {
                ids.push(PointId::new(out));
            }
            if let Some(list) = visited_point_ids.as_mut() {
                if !marked[pi] {
                    marked[pi] = true;
                    list.push(pi);
                }
            }
        }
        cells.push(topology.cell_type(cell), &ids);
        mesh.cell_data.push_tuple_from(input.cell_data(), c);
    }
    mesh.cells = cells;

    Ok(Assembled {
        mesh,
        visited_point_ids,
    })
}
