#![allow(dead_code)]
use voronoi_mesh::prelude::*;

pub fn sid(i: usize) -> SeedId {
    SeedId::new(i)
}

pub fn vid(i: usize) -> VertexId {
    VertexId::new(i)
}

/// A rectangular lattice of square regions, `nx` by `ny`, lower-left corner
/// at `origin`, side `spacing`.
///
/// Seed `j * nx + i` sits at the center of square `(i, j)`; vertex
/// `j * (nx + 1) + i` is the lattice corner `origin + spacing * (i, j)`.
#[derive(Clone, Copy, Debug)]
pub struct Lattice {
    pub nx: usize,
    pub ny: usize,
    pub origin: Point2<f64>,
    pub spacing: f64,
}

impl Lattice {
    pub fn new(nx: usize, ny: usize, origin: Point2<f64>, spacing: f64) -> Self {
        Lattice {
            nx,
            ny,
            origin,
            spacing,
        }
    }

    pub fn seed(&self, i: usize, j: usize) -> SeedId {
        sid(j * self.nx + i)
    }

    pub fn vertex(&self, i: usize, j: usize) -> VertexId {
        vid(j * (self.nx + 1) + i)
    }

    pub fn seeds(&self) -> Vec<Point2<f64>> {
        let mut out = Vec::with_capacity(self.nx * self.ny);
        for j in 0..self.ny {
            for i in 0..self.nx {
                out.push(Point2::new(
                    self.origin.x + self.spacing * (i as f64 + 0.5),
                    self.origin.y + self.spacing * (j as f64 + 0.5),
                ));
            }
        }
        out
    }

    pub fn size(&self) -> Point2<f64> {
        Point2::new(self.spacing * self.nx as f64, self.spacing * self.ny as f64)
    }

    /// Every adjacent seed pair: horizontal pairs row by row, then vertical.
    pub fn neighbor_pairs(&self) -> Vec<(SeedPair, VertexId, VertexId)> {
        let mut out = Vec::new();
        for j in 0..self.ny {
            for i in 0..self.nx.saturating_sub(1) {
                out.push((
                    SeedPair::new(self.seed(i, j), self.seed(i + 1, j)),
                    self.vertex(i + 1, j),
                    self.vertex(i + 1, j + 1),
                ));
            }
        }
        for j in 0..self.ny.saturating_sub(1) {
            for i in 0..self.nx {
                out.push((
                    SeedPair::new(self.seed(i, j), self.seed(i, j + 1)),
                    self.vertex(i, j + 1),
                    self.vertex(i + 1, j + 1),
                ));
            }
        }
        out
    }

    /// `set_seeds`, `set_boundary` and `set_origin`.
    pub fn configure(&self, d: &mut Diagram<f64>) -> Result<(), MeshError> {
        d.set_seeds(&self.seeds())?;
        d.set_boundary(self.size())?;
        d.set_origin(self.origin)
    }

    /// Plays the Generator from `Configured` to `Built`.
    pub fn fill(&self, d: &mut Diagram<f64>) -> Result<(), MeshError> {
        for j in 0..=self.ny {
            for i in 0..=self.nx {
                d.add_vert(Point2::new(
                    self.origin.x + self.spacing * i as f64,
                    self.origin.y + self.spacing * j as f64,
                ))?;
            }
        }
        for (pair, a, b) in self.neighbor_pairs() {
            let line = d.add_line(pair)?;
            d.add_edge(VoronoiEdge::new(a, b, pair.0, pair.1, line))?;
            d.add_cell_neighbor(pair)?;
        }
        for j in 0..self.ny {
            for i in 0..self.nx {
                let seed = self.seed(i, j);
                for v in [
                    self.vertex(i, j),
                    self.vertex(i + 1, j),
                    self.vertex(i + 1, j + 1),
                    self.vertex(i, j + 1),
                ] {
                    d.region_add_point_id(seed, v)?;
                }
                d.build_edge(seed)?;
            }
        }
        Ok(())
    }

    /// A queryable diagram built from scratch.
    pub fn build(&self) -> Diagram<f64> {
        let mut d = Diagram::new();
        self.configure(&mut d).unwrap();
        self.fill(&mut d).unwrap();
        d.insert_cells().unwrap();
        d
    }
}

/// The four-seed square used by the scenario tests.
pub fn four_seeds() -> Lattice {
    Lattice::new(2, 2, Point2::new(-5.0, -5.0), 10.0)
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
