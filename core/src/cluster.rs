use serde::{Deserialize, Serialize};

use crate::*;

/// Connected region of empty cells plus the numbered cells around it.
///
/// The core is connected through orthogonal adjacency only, while the border is collected
/// through all eight neighbors. Mines never appear in either set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    core_positions: Vec<Coord2>,
    border_positions: Vec<Coord2>,
    revealed: bool,
}

impl Cluster {
    pub fn core_positions(&self) -> &[Coord2] {
        &self.core_positions
    }

    pub fn border_positions(&self) -> &[Coord2] {
        &self.border_positions
    }

    /// Core followed by border.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> {
        self.core_positions
            .iter()
            .chain(&self.border_positions)
            .copied()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.core_positions.contains(&coords)
    }

    /// Whether the cluster was force-opened by the engine.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.revealed = true;
    }

    /// Whether every core and border cell is open, however it got opened.
    pub fn is_open(&self, grid: &Grid) -> bool {
        self.positions().all(|pos| grid[pos].status().is_open())
    }
}

/// Safe clusters of a grid, largest core first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterIndex {
    clusters: Vec<Cluster>,
}

impl ClusterIndex {
    pub fn partition(grid: &Grid) -> Self {
        let mut grouped = grid.make_map();
        let mut cores = Vec::new();

        for start in grid.coords() {
            if !grid[start].kind().is_empty() || grouped[start.to_nd_index()] {
                continue;
            }

            grouped[start.to_nd_index()] = true;
            let mut positions = vec![start];
            let mut stack = vec![start];
            while let Some(coords) = stack.pop() {
                for next in grid.orthogonal_neighbors(coords) {
                    if grid[next].kind().is_empty() && !grouped[next.to_nd_index()] {
                        grouped[next.to_nd_index()] = true;
                        positions.push(next);
                        stack.push(next);
                    }
                }
            }
            log::trace!("Cluster from {:?} has {} empty cells", start, positions.len());
            cores.push(positions);
        }

        // stable, so equal sizes keep discovery order
        cores.sort_by(|a, b| b.len().cmp(&a.len()));

        let clusters: Vec<_> = cores
            .into_iter()
            .map(|core_positions| Cluster {
                border_positions: compute_border(grid, &core_positions),
                core_positions,
                revealed: false,
            })
            .collect();

        log::debug!(
            "Partitioned {}x{} grid into {} safe clusters",
            grid.width(),
            grid.height(),
            clusters.len()
        );
        Self { clusters }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn cluster_of(&self, coords: Coord2) -> Option<&Cluster> {
        self.clusters.iter().find(|cluster| cluster.contains(coords))
    }

    pub fn next_unrevealed_mut(&mut self) -> Option<&mut Cluster> {
        self.clusters.iter_mut().find(|cluster| !cluster.revealed)
    }
}

/// Cells next to the core that have a mine nearby, excluding the mines themselves.
fn compute_border(grid: &Grid, core_positions: &[Coord2]) -> Vec<Coord2> {
    let mut seen = grid.make_map();
    let mut border = Vec::new();

    for &coords in core_positions {
        for next in grid.neighbors(coords) {
            if seen[next.to_nd_index()] {
                continue;
            }
            seen[next.to_nd_index()] = true;

            let kind = grid[next].kind();
            if kind.has_mine_nearby() && !kind.is_mine() {
                border.push(next);
            }
        }
    }

    border
}
