/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Offsets used for mine counting, border detection and the reveal cascade.
///
/// The order is fixed so traversals are deterministic.
pub const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Up, left, down, right. Only used to connect the cores of safe clusters.
pub const ORTHOGONAL_DISPLACEMENTS: [(isize, isize); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta((x, y): Coord2, (dx, dy): (isize, isize), (end_x, end_y): Coord2) -> Option<Coord2> {
    Some((offset_axis(x, dx, end_x)?, offset_axis(y, dy, end_y)?))
}

fn offset_axis(value: Coord, delta: isize, end: Coord) -> Option<Coord> {
    let next = value.checked_add_signed(i16::try_from(delta).ok()?)?;
    (next < end).then_some(next)
}

/// In-bounds coordinates around a center, following one of the displacement tables.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    /// All eight surrounding cells.
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self::with_deltas(center, bounds, &DISPLACEMENTS)
    }

    /// The four orthogonally adjacent cells.
    pub fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::with_deltas(center, bounds, &ORTHOGONAL_DISPLACEMENTS)
    }

    fn with_deltas(center: Coord2, bounds: Coord2, deltas: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            bounds,
            deltas,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.deltas.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let bounds = (5, 4);
        assert_eq!(NeighborIter::new((0, 0), bounds).count(), 3);
        assert_eq!(NeighborIter::new((4, 0), bounds).count(), 3);
        assert_eq!(NeighborIter::new((0, 3), bounds).count(), 3);
        assert_eq!(NeighborIter::new((4, 3), bounds).count(), 3);
    }

    #[test]
    fn edge_has_five_neighbors() {
        let bounds = (5, 4);
        assert_eq!(NeighborIter::new((2, 0), bounds).count(), 5);
        assert_eq!(NeighborIter::new((0, 2), bounds).count(), 5);
        assert_eq!(NeighborIter::new((4, 2), bounds).count(), 5);
        assert_eq!(NeighborIter::new((2, 3), bounds).count(), 5);
    }

    #[test]
    fn interior_neighbors_follow_offset_order() {
        let around: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();
        assert_eq!(
            around,
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0)]
        );
    }

    #[test]
    fn orthogonal_neighbors_are_up_left_down_right() {
        let around: Vec<_> = NeighborIter::orthogonal((1, 1), (3, 3)).collect();
        assert_eq!(around, vec![(1, 0), (0, 1), (1, 2), (2, 1)]);

        let corner: Vec<_> = NeighborIter::orthogonal((0, 0), (3, 3)).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn offsets_stop_at_axis_limits() {
        let around: Vec<_> = NeighborIter::new((Coord::MAX - 1, 0), (Coord::MAX, 1)).collect();
        assert_eq!(around, vec![(Coord::MAX - 2, 0)]);
        assert_eq!(apply_delta((Coord::MAX, 0), (1, 0), (Coord::MAX, 1)), None);
        assert_eq!(apply_delta((0, 0), (-1, 0), (3, 3)), None);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }
}
