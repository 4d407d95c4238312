use core::fmt;

use serde::{Deserialize, Serialize};

/// What a cell contains, fixed once mines are placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// No adjacent mine.
    Empty,
    /// Between 1 and 8 adjacent mines.
    Numbered(u8),
    Mine,
}

impl CellKind {
    /// Kind of a non-mine cell with `count` adjacent mines.
    pub const fn from_count(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Numbered(count)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Numbered cells and mines, i.e. anything a cascade must not spread from.
    pub const fn has_mine_nearby(self) -> bool {
        matches!(self, Self::Numbered(_) | Self::Mine)
    }

    /// Adjacent mine count, `None` for mines.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Numbered(count) => Some(count),
            Self::Mine => None,
        }
    }

    fn short_char(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Numbered(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            Self::Mine => 'B',
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Hidden,
    Flagged,
    Questioned,
    Revealed,
    /// Only ever set on mines.
    Exploded,
}

impl CellStatus {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Revealed | Self::Exploded)
    }

    pub const fn is_unopened(self) -> bool {
        !self.is_open()
    }

    /// Next state of the flag cycle, `None` for open cells.
    pub const fn next_mark(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Flagged),
            Self::Flagged => Some(Self::Questioned),
            Self::Questioned => Some(Self::Hidden),
            Self::Revealed | Self::Exploded => None,
        }
    }

    fn short_char(self) -> char {
        match self {
            Self::Hidden => 'U',
            Self::Flagged => 'F',
            Self::Questioned => 'Q',
            Self::Revealed => 'O',
            Self::Exploded => 'X',
        }
    }
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    status: CellStatus,
}

impl Cell {
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            status: CellStatus::Hidden,
        }
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn status(&self) -> CellStatus {
        self.status
    }

    pub const fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }

    pub const fn view(&self) -> CellView {
        CellView {
            kind: self.kind,
            status: self.status,
        }
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }

    /// Opens an unopened cell. Mines explode when `exploded_context` is set and are shown
    /// as plain revealed mines otherwise. Returns whether anything changed.
    pub(crate) fn open(&mut self, exploded_context: bool) -> bool {
        if self.status.is_open() {
            return false;
        }
        self.status = if exploded_context && self.is_mine() {
            CellStatus::Exploded
        } else {
            CellStatus::Revealed
        };
        true
    }
}

/// Two characters per cell: kind (`0`-`8`, `B`) then status (`U`, `F`, `Q`, `O`, `X`).
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.short_char(), self.status.short_char())
    }
}

/// Read-only snapshot of a cell handed to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub kind: CellKind,
    pub status: CellStatus,
}

/// What a renderer should draw for a cell, independent of any asset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    Unopened,
    Flag,
    Question,
    /// Open safe cell showing its adjacent mine count.
    Open(u8),
    Mine,
    Exploded,
}

impl CellView {
    pub const fn appearance(self) -> Appearance {
        use CellStatus::*;

        match (self.status, self.kind) {
            (Hidden, _) => Appearance::Unopened,
            (Flagged, _) => Appearance::Flag,
            (Questioned, _) => Appearance::Question,
            (Exploded, _) => Appearance::Exploded,
            (Revealed, CellKind::Mine) => Appearance::Mine,
            (Revealed, CellKind::Empty) => Appearance::Open(0),
            (Revealed, CellKind::Numbered(count)) => Appearance::Open(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_cycle_has_three_states() {
        let mut status = CellStatus::Hidden;
        for _ in 0..3 {
            status = status.next_mark().unwrap();
        }
        assert_eq!(status, CellStatus::Hidden);
        assert_eq!(CellStatus::Revealed.next_mark(), None);
        assert_eq!(CellStatus::Exploded.next_mark(), None);
    }

    #[test]
    fn open_explodes_mines_only_in_exploded_context() {
        let mut mine = Cell::new(CellKind::Mine);
        assert!(mine.open(false));
        assert_eq!(mine.status(), CellStatus::Revealed);

        let mut mine = Cell::new(CellKind::Mine);
        assert!(mine.open(true));
        assert_eq!(mine.status(), CellStatus::Exploded);
        assert!(!mine.open(true));

        let mut safe = Cell::new(CellKind::Numbered(2));
        assert!(safe.open(true));
        assert_eq!(safe.status(), CellStatus::Revealed);
    }

    #[test]
    fn appearance_follows_status_then_kind() {
        let view = |kind, status| CellView { kind, status }.appearance();

        assert_eq!(view(CellKind::Mine, CellStatus::Hidden), Appearance::Unopened);
        assert_eq!(view(CellKind::Empty, CellStatus::Flagged), Appearance::Flag);
        assert_eq!(view(CellKind::Mine, CellStatus::Questioned), Appearance::Question);
        assert_eq!(view(CellKind::Numbered(3), CellStatus::Revealed), Appearance::Open(3));
        assert_eq!(view(CellKind::Empty, CellStatus::Revealed), Appearance::Open(0));
        assert_eq!(view(CellKind::Mine, CellStatus::Revealed), Appearance::Mine);
        assert_eq!(view(CellKind::Mine, CellStatus::Exploded), Appearance::Exploded);
    }

    #[test]
    fn display_uses_kind_and_status_chars() {
        let mut cell = Cell::new(CellKind::Numbered(4));
        assert_eq!(cell.to_string(), "4U");
        cell.set_status(CellStatus::Flagged);
        assert_eq!(cell.to_string(), "4F");
        let mut mine = Cell::new(CellKind::Mine);
        mine.open(true);
        assert_eq!(mine.to_string(), "BX");
    }
}
