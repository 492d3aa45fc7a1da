//! Grid geometry
//!
//! Cells are addressed by a row-major linear index into a
//! `GRID_WIDTH x GRID_HEIGHT` grid: `i = y * GRID_WIDTH + x`.

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 10;
pub const GRID_LEN: usize = GRID_WIDTH * GRID_HEIGHT;

/// Cell the flood fill starts from. Always a normal room.
pub const START_ROOM_INDEX: usize = 45;

/// Columns and rows the flood fill may place rooms in (inclusive).
pub const FILL_MIN_COL: usize = 1;
pub const FILL_MAX_COL: usize = GRID_WIDTH - 1;
pub const FILL_MIN_ROW: usize = 1;
pub const FILL_MAX_ROW: usize = GRID_HEIGHT - 3;

/// Sub-grid the secret room search draws candidates from (inclusive).
///
/// Rows 8 and 9 lie outside the flood fill region, so candidates there
/// can only ever touch row 7.
pub const SECRET_MIN_COL: usize = 1;
pub const SECRET_MAX_COL: usize = GRID_WIDTH - 1;
pub const SECRET_MIN_ROW: usize = 2;
pub const SECRET_MAX_ROW: usize = GRID_HEIGHT - 1;

/// One of the four orthogonal grid directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions, in neighbor-count order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Order the flood fill tries neighbors in
    pub const FILL_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Linear index offset (-1, -10, +1, +10 on the default grid)
    pub const fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Up => -(GRID_WIDTH as isize),
            Direction::Right => 1,
            Direction::Down => GRID_WIDTH as isize,
        }
    }
}

/// `(x, y)` of a cell index
pub const fn coords(index: usize) -> (usize, usize) {
    (index % GRID_WIDTH, index / GRID_WIDTH)
}

/// Cell index of `(x, y)`, or `None` off the grid
pub const fn index_of(x: usize, y: usize) -> Option<usize> {
    if x < GRID_WIDTH && y < GRID_HEIGHT {
        Some(y * GRID_WIDTH + x)
    } else {
        None
    }
}

/// The cell next to `index` in `dir`. Never wraps across rows.
pub fn neighbor(index: usize, dir: Direction) -> Option<usize> {
    if index >= GRID_LEN {
        return None;
    }
    let (x, y) = coords(index);
    match dir {
        Direction::Left if x > 0 => index_of(x - 1, y),
        Direction::Up if y > 0 => index_of(x, y - 1),
        Direction::Right => index_of(x + 1, y),
        Direction::Down => index_of(x, y + 1),
        _ => None,
    }
}

/// All on-grid neighbors of `index`
pub fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| neighbor(index, dir))
}

/// True if `a` and `b` share an edge
pub fn are_adjacent(a: usize, b: usize) -> bool {
    neighbors(a).any(|n| n == b)
}

/// True if `index` lies inside the flood fill region
pub const fn in_fill_region(index: usize) -> bool {
    let (x, y) = coords(index);
    index < GRID_LEN
        && x >= FILL_MIN_COL
        && x <= FILL_MAX_COL
        && y >= FILL_MIN_ROW
        && y <= FILL_MAX_ROW
}

/// Neighbor of `index` the flood fill is allowed to expand into
pub fn fill_neighbor(index: usize, dir: Direction) -> Option<usize> {
    neighbor(index, dir).filter(|&n| in_fill_region(n))
}
