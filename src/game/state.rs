use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a new snake with the given head, facing `direction`, body
    /// extending behind the head
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        *self.body.last().expect("snake is never empty")
    }

    /// Check if a cell is occupied by any segment, head and tail included
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepend a new head, dropping the tail unless the snake grows
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle phase of a game session
///
/// `Over` is terminal until an explicit restart; `Paused` freezes the
/// simulation without touching the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Over,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// No free cell left to place food on
    BoardFull,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub grid_extent: usize,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(snake: Snake, food: Cell, grid_extent: usize) -> Self {
        Self {
            snake,
            food,
            grid_extent,
            score: 0,
            phase: Phase::NotStarted,
        }
    }

    /// Check if a cell is within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.grid_extent as i32
            && cell.y >= 0
            && cell.y < self.grid_extent as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 10), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 10));
        assert_eq!(snake.body[1], Cell::new(4, 10));
        assert_eq!(snake.body[2], Cell::new(3, 10));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);

        // Advance without growing: length stays, tail vacates
        snake.advance(Cell::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(!snake.contains(Cell::new(3, 5)));

        // Advance with growing: length increases, tail stays
        snake.advance(Cell::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Cell::new(4, 5));
    }

    #[test]
    fn test_snake_occupancy_includes_head_and_tail() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(snake.contains(Cell::new(5, 5))); // head
        assert!(snake.contains(Cell::new(4, 5))); // body
        assert!(snake.contains(Cell::new(3, 5))); // tail
        assert!(!snake.contains(Cell::new(10, 10)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Cell::new(5, 5), Direction::Right, 3),
            Cell::new(10, 10),
            20,
        );

        assert!(state.in_bounds(Cell::new(0, 0)));
        assert!(state.in_bounds(Cell::new(19, 19)));
        assert!(!state.in_bounds(Cell::new(-1, 0)));
        assert!(!state.in_bounds(Cell::new(20, 0)));
        assert!(!state.in_bounds(Cell::new(0, 20)));
    }
}
