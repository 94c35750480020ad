//! Snake module: ordered body, movement, deferred growth, and direction
//! discipline.
//!
//! Movement is prepend-then-pop: the new head is pushed first and the tail
//! is only removed afterwards (and not at all while growth is pending), so
//! the body never transiently shrinks in a way that would change
//! self-collision results.

use std::collections::VecDeque;

use crate::types::{Cell, Direction};

#[derive(Debug, Clone)]
pub struct Snake {
    /// Head first, tail last.
    body: VecDeque<Cell>,
    /// Direction committed by the last `advance`; reversal checks run
    /// against this, not against queued turns, so two direction changes
    /// within one tick cannot reverse the snake.
    heading: Direction,
    /// Direction the next `advance` will commit.
    pending: Direction,
    grow_pending: bool,
}

impl Snake {
    /// Build a snake with its head at `head` and `length` cells trailing
    /// opposite to `direction`.
    pub fn new(head: Cell, length: usize, direction: Direction) -> Self {
        debug_assert!(length >= 1);
        let (dx, dy) = direction.delta();
        let body = (0..length as i16)
            .map(|i| Cell::new(head.x - dx * i, head.y - dy * i))
            .collect();

        Self {
            body,
            heading: direction,
            pending: direction,
            grow_pending: false,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// The direction the next `advance` will use.
    pub fn direction(&self) -> Direction {
        self.pending
    }

    /// The direction committed by the previous `advance`.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn growth_pending(&self) -> bool {
        self.grow_pending
    }

    /// The cell the next `advance` will occupy.
    pub fn next_head(&self) -> Cell {
        self.head().step(self.pending)
    }

    /// Queue a direction change for the next `advance`.
    ///
    /// The exact opposite of the committed heading is ignored while the
    /// snake is longer than one cell; a length-1 snake may reverse freely.
    pub fn change_direction(&mut self, requested: Direction) {
        if self.body.len() > 1 && requested == self.heading.opposite() {
            return;
        }
        self.pending = requested;
    }

    /// Arm tail retention: the next `advance` will not pop the tail, for a
    /// net length of +1.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Move one step in the pending direction, committing it as the heading.
    pub fn advance(&mut self) {
        self.heading = self.pending;
        let new_head = self.head().step(self.heading);
        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    /// True iff the head cell appears elsewhere in the body.
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake3() -> Snake {
        // Head at (10, 5), body trailing left, moving right.
        Snake::new(Cell::new(10, 5), 3, Direction::Right)
    }

    #[test]
    fn test_new_builds_body_behind_head() {
        let snake = snake3();
        let cells: Vec<Cell> = snake.cells().collect();
        assert_eq!(
            cells,
            vec![Cell::new(10, 5), Cell::new(9, 5), Cell::new(8, 5)]
        );
        assert_eq!(snake.head(), Cell::new(10, 5));
        assert_eq!(snake.tail(), Cell::new(8, 5));
    }

    #[test]
    fn test_advance_keeps_length_without_growth() {
        let mut snake = snake3();
        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(11, 5));
        assert_eq!(snake.tail(), Cell::new(9, 5));
    }

    #[test]
    fn test_grow_defers_to_next_advance() {
        let mut snake = snake3();
        snake.grow();
        assert_eq!(snake.len(), 3, "grow alone must not change length");

        snake.advance();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Cell::new(8, 5), "tail retained while growing");

        snake.advance();
        assert_eq!(snake.len(), 4, "growth is consumed by a single advance");
    }

    #[test]
    fn test_reversal_rejected_when_longer_than_one() {
        let mut snake = snake3();
        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        snake.change_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_reversal_allowed_at_length_one() {
        let mut snake = Snake::new(Cell::new(4, 4), 1, Direction::Right);
        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_two_turns_in_one_tick_cannot_reverse() {
        // Heading is committed Right. Queuing Up and then Left within the
        // same tick must not end with the snake moving Left.
        let mut snake = snake3();
        snake.change_direction(Direction::Up);
        snake.change_direction(Direction::Left);
        assert_eq!(
            snake.direction(),
            Direction::Up,
            "Left reverses the committed Right heading and must be ignored"
        );
    }

    #[test]
    fn test_self_collision_detection() {
        // 2x2 loop: head runs into its own body after four turns.
        let mut snake = Snake::new(Cell::new(5, 5), 5, Direction::Right);
        assert!(!snake.self_collision());

        snake.change_direction(Direction::Down);
        snake.advance();
        snake.change_direction(Direction::Left);
        snake.advance();
        snake.change_direction(Direction::Up);
        snake.advance();
        assert!(snake.self_collision());
    }

    #[test]
    fn test_occupies() {
        let snake = snake3();
        assert!(snake.occupies(Cell::new(9, 5)));
        assert!(!snake.occupies(Cell::new(11, 5)));
    }
}
