use std::fmt;
use std::ops::{Index, IndexMut};

use owo_colors::OwoColorize;

use crate::env::Vec2D;

/// Represents a single tile of the maze
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Food,
    /// Power item, makes the adversaries vulnerable
    Capsule,
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Free => write!(f, " "),
            Cell::Wall => write!(f, "{}", "%".blue()),
            Cell::Food => write!(f, "."),
            Cell::Capsule => write!(f, "{}", "o".bright_white()),
        }
    }
}

/// The static maze with the remaining food and capsules.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn has(&self, p: Vec2D) -> bool {
        p.within(self.width, self.height)
    }

    /// Returns if `p` is on the board and not a wall.
    pub fn walkable(&self, p: Vec2D) -> bool {
        self.has(p) && self[p] != Cell::Wall
    }

    /// All positions containing the given cell type, row by row from the bottom.
    pub fn positions(&self, cell: Cell) -> impl Iterator<Item = Vec2D> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(move |(i, _)| Vec2D::new((i % width) as _, (i / width) as _))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl Index<Vec2D> for Grid {
    type Output = Cell;

    fn index(&self, p: Vec2D) -> &Self::Output {
        assert!(self.has(p));
        &self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl IndexMut<Vec2D> for Grid {
    fn index_mut(&mut self, p: Vec2D) -> &mut Self::Output {
        assert!(self.has(p));
        &mut self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for y in (0..self.height).rev() {
            write!(f, "  ")?;
            for x in 0..self.width {
                write!(f, "{:?}", self[Vec2D::new(x as _, y as _)])?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::v2;

    #[test]
    fn positions() {
        let mut grid = Grid::new(3, 2);
        grid[v2(2, 0)] = Cell::Food;
        grid[v2(0, 1)] = Cell::Food;
        grid[v2(1, 1)] = Cell::Wall;

        assert_eq!(
            grid.positions(Cell::Food).collect::<Vec<_>>(),
            vec![v2(2, 0), v2(0, 1)]
        );
        assert_eq!(grid.count(Cell::Free), 3);
        assert!(grid.walkable(v2(0, 0)));
        assert!(!grid.walkable(v2(1, 1)));
        assert!(!grid.walkable(v2(3, 0)));
        assert!(!grid.walkable(v2(0, -1)));
    }
}
