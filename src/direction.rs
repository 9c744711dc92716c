//! Facing / movement directions and the small rotation tables used by the
//! directional element rules (fireflies, butterflies, oranges).

/// Movement / facing direction. The first four are the only legal agent
/// actions; the remaining five are used internally by the explosion work
/// queue (diagonal neighbors) and grid primitive defaults (`Noop`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Up,
  Right,
  Down,
  Left,
  Noop,
  UpRight,
  DownRight,
  DownLeft,
  UpLeft,
}

impl Direction {
  /// Row/column delta for a single step in this direction.
  pub fn offset(self) -> (i32, i32) {
    match self {
      Direction::Up => (-1, 0),
      Direction::Right => (0, 1),
      Direction::Down => (1, 0),
      Direction::Left => (0, -1),
      Direction::Noop => (0, 0),
      Direction::UpRight => (-1, 1),
      Direction::DownRight => (1, 1),
      Direction::DownLeft => (1, -1),
      Direction::UpLeft => (-1, -1),
    }
  }

  /// All eight non-Noop directions, used when scanning explosion neighbors.
  pub fn all_eight() -> [Direction; 8] {
    [
      Direction::Up,
      Direction::Right,
      Direction::Down,
      Direction::Left,
      Direction::UpRight,
      Direction::DownRight,
      Direction::DownLeft,
      Direction::UpLeft,
    ]
  }

  /// The four cardinal agent actions.
  pub fn cardinal() -> [Direction; 4] {
    [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
  }

  /// Counterclockwise neighbor among the four cardinal directions.
  /// Panics (debug) if called on a non-cardinal direction.
  pub fn rotate_left(self) -> Direction {
    match self {
      Direction::Up => Direction::Left,
      Direction::Left => Direction::Down,
      Direction::Down => Direction::Right,
      Direction::Right => Direction::Up,
      other => {
        debug_assert!(false, "rotate_left called on non-cardinal direction {:?}", other);
        other
      }
    }
  }

  /// Clockwise neighbor among the four cardinal directions.
  pub fn rotate_right(self) -> Direction {
    match self {
      Direction::Up => Direction::Right,
      Direction::Right => Direction::Down,
      Direction::Down => Direction::Left,
      Direction::Left => Direction::Up,
      other => {
        debug_assert!(false, "rotate_right called on non-cardinal direction {:?}", other);
        other
      }
    }
  }
}
