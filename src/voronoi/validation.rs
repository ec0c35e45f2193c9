//! Structural validation of a diagram.
//!
//! The hot path only checks what a single call can break (ids in range, seed
//! pairs distinct, build order). The checks here walk the whole structure and
//! catch what sequences of calls can break: references left dangling by a list
//! clear, duplicate neighbor pairs, open region boundaries and vertices outside
//! the clip window.

use super::diagram::Diagram;
use crate::geometry::point::Coordinate;
use crate::mesh_error::MeshError;
use crate::topology::ids::{EdgeId, SeedId};
use hashbrown::HashSet;

/// Optional validation toggles for diagram checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramValidationOptions {
    /// Every vertex, seed and line id stored in an edge or region exists.
    pub check_references: bool,
    /// Every neighbor entry has its mirror.
    pub check_neighbor_symmetry: bool,
    /// Every built region with at least three points is a closed cycle.
    pub check_region_closure: bool,
    /// How to handle a seed listing the same neighbor twice.
    pub duplicate_neighbors: IssueHandling,
    /// How to handle vertices outside the bounding window.
    pub vertices_outside_window: IssueHandling,
}

impl DiagramValidationOptions {
    /// Enable all checks and treat every finding as an error.
    pub fn all() -> Self {
        Self {
            check_references: true,
            check_neighbor_symmetry: true,
            check_region_closure: true,
            duplicate_neighbors: IssueHandling::Error,
            vertices_outside_window: IssueHandling::Error,
        }
    }

    /// Only the checks whose failure makes the diagram unsafe to query.
    pub fn structural() -> Self {
        Self {
            check_references: true,
            check_neighbor_symmetry: true,
            check_region_closure: true,
            duplicate_neighbors: IssueHandling::Ignore,
            vertices_outside_window: IssueHandling::Ignore,
        }
    }
}

impl Default for DiagramValidationOptions {
    fn default() -> Self {
        Self {
            duplicate_neighbors: IssueHandling::Warn,
            vertices_outside_window: IssueHandling::Warn,
            ..Self::structural()
        }
    }
}

/// What to do with a finding that may be legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueHandling {
    /// Skip the check.
    Ignore,
    /// Log a warning and continue.
    Warn,
    /// Return an error.
    Error,
}

impl IssueHandling {
    fn report(self, err: MeshError) -> Result<(), MeshError> {
        match self {
            IssueHandling::Ignore => Ok(()),
            IssueHandling::Warn => {
                log::warn!("diagram validation: {err}");
                Ok(())
            }
            IssueHandling::Error => Err(err),
        }
    }
}

/// Validate `diagram` against `options`, returning the first error.
pub fn validate_diagram<T>(
    diagram: &Diagram<T>,
    options: &DiagramValidationOptions,
) -> Result<(), MeshError>
where
    T: Coordinate,
{
    let seeds = diagram.number_of_seeds();
    if diagram.regions().len() != seeds {
        return Err(MeshError::RegionCountMismatch {
            regions: diagram.regions().len(),
            seeds,
        });
    }
    if options.check_references {
        validate_references(diagram)?;
    }
    if options.check_neighbor_symmetry {
        validate_neighbor_symmetry(diagram)?;
    }
    if options.duplicate_neighbors != IssueHandling::Ignore {
        validate_duplicate_neighbors(diagram, options.duplicate_neighbors)?;
    }
    if options.check_region_closure {
        validate_region_closure(diagram)?;
    }
    if options.vertices_outside_window != IssueHandling::Ignore {
        validate_window(diagram, options.vertices_outside_window)?;
    }
    Ok(())
}

fn dangling(owner: &'static str, owner_id: usize, kind: &'static str, id: usize, len: usize) -> MeshError {
    MeshError::DanglingReference {
        owner,
        owner_id,
        kind,
        id,
        len,
    }
}

fn validate_references<T>(diagram: &Diagram<T>) -> Result<(), MeshError>
where
    T: Coordinate,
{
    let seeds = diagram.number_of_seeds();
    let vertices = diagram.vertex_count();
    let lines = diagram.line_count();

    for (id, pair) in diagram.line_list().iter() {
        for s in [pair.0, pair.1] {
            if s.index() >= seeds {
                return Err(dangling("line", id.index(), "seed", s.index(), seeds));
            }
        }
    }

    for (id, edge) in diagram.edge_list().iter() {
        let owner = id.index();
        for v in [edge.left, edge.right] {
            if v.index() >= vertices {
                return Err(dangling("edge", owner, "vertex", v.index(), vertices));
            }
        }
        for s in [edge.left_seed, edge.right_seed] {
            if s.index() >= seeds {
                return Err(dangling("edge", owner, "seed", s.index(), seeds));
            }
        }
        if edge.line.index() >= lines {
            return Err(dangling("edge", owner, "line", edge.line.index(), lines));
        }
    }

    for region in diagram.regions().iter() {
        let owner = region.seed().index();
        for v in region.point_ids() {
            if v.index() >= vertices {
                return Err(dangling("region", owner, "vertex", v.index(), vertices));
            }
        }
    }
    Ok(())
}

fn validate_neighbor_symmetry<T>(diagram: &Diagram<T>) -> Result<(), MeshError>
where
    T: Coordinate,
{
    let graph = diagram.neighbor_graph();
    for (seed, neighbors) in graph.iter() {
        for &n in neighbors {
            let mirrored = graph.neighbors(n).is_some_and(|back| back.contains(&seed));
            if !mirrored {
                return Err(MeshError::AsymmetricNeighbors {
                    seed: seed.index(),
                    neighbor: n.index(),
                });
            }
        }
    }
    Ok(())
}

fn validate_duplicate_neighbors<T>(
    diagram: &Diagram<T>,
    handling: IssueHandling,
) -> Result<(), MeshError>
where
    T: Coordinate,
{
    let mut seen: HashSet<SeedId> = HashSet::new();
    for (seed, neighbors) in diagram.neighbor_graph().iter() {
        seen.clear();
        for &n in neighbors {
            if !seen.insert(n) {
                handling.report(MeshError::DuplicateNeighbor {
                    seed: seed.index(),
                    neighbor: n.index(),
                })?;
            }
        }
    }
    Ok(())
}

fn validate_region_closure<T>(diagram: &Diagram<T>) -> Result<(), MeshError>
where
    T: Coordinate,
{
    for region in diagram.regions().iter() {
        if let Some(poly) = region.polygon() {
            let points = poly.number_of_points();
            if points >= 3 && !poly.is_closed() {
                return Err(MeshError::OpenRegion {
                    region: region.seed().index(),
                    points,
                });
            }
        }
    }
    Ok(())
}

fn validate_window<T>(diagram: &Diagram<T>, handling: IssueHandling) -> Result<(), MeshError>
where
    T: Coordinate,
{
    let window = diagram.boundary();
    for (id, p) in diagram.point_store().iter() {
        if !window.contains(p) {
            handling.report(MeshError::VertexOutsideWindow { vertex: id.index() })?;
        }
    }
    Ok(())
}

/// Edges whose seed pair does not appear in the neighbor graph.
///
/// Every edge separates two neighboring regions, so a non-empty result means
/// the Generator forgot an `add_cell_neighbor` call.
pub fn edges_without_neighbor_pair<T>(diagram: &Diagram<T>) -> Vec<EdgeId>
where
    T: Coordinate,
{
    let graph = diagram.neighbor_graph();
    diagram
        .edge_list()
        .iter()
        .filter(|(_, e)| !graph.contains(e.left_seed, e.right_seed))
        .map(|(id, _)| id)
        .collect()
}
