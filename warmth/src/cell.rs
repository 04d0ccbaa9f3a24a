// cell.rs - Cell categories of the placement grid

/// What a single grid cell holds.
///
/// The numeric codes are part of the observable contract: neighborhood sums
/// are taken over them, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    ColdSensor,
    WarmSensor,
    Emitter,
    Forbidden, // Derived only, never read from input
}

impl Cell {
    pub fn code(self) -> i32 {
        match self {
            Cell::Empty      => 0,
            Cell::ColdSensor => -1,
            Cell::WarmSensor => 1,
            Cell::Emitter    => 255,
            Cell::Forbidden  => -2,
        }
    }

    /// Maps an input character to its category. Anything outside `.`, `c`
    /// and `w` is an emitter.
    pub fn from_marker(marker: char) -> Self {
        match marker {
            '.' => Cell::Empty,
            'c' => Cell::ColdSensor,
            'w' => Cell::WarmSensor,
            _   => Cell::Emitter,
        }
    }

    /// Character used when the grid is printed back out.
    pub fn marker(self) -> char {
        match self {
            Cell::Empty      => '.',
            Cell::ColdSensor => 'c',
            Cell::WarmSensor => 'w',
            Cell::Emitter    => 'H',
            Cell::Forbidden  => 'x',
        }
    }
}
