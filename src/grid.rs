use std::fmt::Display;

use crate::{Error, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
    Visited,
}

impl Cell {
    pub fn value(&self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
            Cell::Visited => 2,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell_char = match self {
            Cell::Open => ' ',
            Cell::Wall => '#',
            Cell::Visited => '.',
        };

        write!(f, "{}", cell_char)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.width == 0 {
            return Ok(());
        }

        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Grid {
    /// A grid of the given size with every cell open.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        let cell_n = width
            .checked_mul(height)
            .ok_or(Error::GridTooLarge(width, height))?;

        Ok(Self {
            cells: vec![Cell::Open; cell_n],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, pos: &Point) -> Option<Cell> {
        self.pos_to_ind(pos).map(|ind| self.cells[ind])
    }

    /// Inside the grid and not a wall. Visited cells are still legal.
    pub fn is_legal_position(&self, pos: &Point) -> bool {
        self.cell(pos).is_some_and(|cell| cell != Cell::Wall)
    }

    pub fn is_unvisited_position(&self, pos: &Point) -> bool {
        self.is_legal_position(pos) && self.cell(pos) == Some(Cell::Open)
    }

    pub fn mark_visited(&mut self, pos: &Point) -> Result<(), Error> {
        let cell = self.cell_mut(pos).ok_or(Error::OutOfBounds(*pos))?;
        if *cell == Cell::Wall {
            return Err(Error::VisitWall(*pos));
        }

        *cell = Cell::Visited;
        Ok(())
    }

    /// Every position of the grid, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cells.len()).map(|ind| self.ind_to_pos(ind))
    }

    pub fn wall_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions().filter(|pos| self.cell(pos) == Some(Cell::Wall))
    }

    pub fn visited_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Visited)
            .count()
    }

    fn cell_mut(&mut self, pos: &Point) -> Option<&mut Cell> {
        self.pos_to_ind(pos).and_then(|ind| self.cells.get_mut(ind))
    }

    pub(crate) fn pos_to_ind(&self, pos: &Point) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }

        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    fn ind_to_pos(&self, ind: usize) -> Point {
        Point::new((ind % self.width) as isize, (ind / self.width) as isize)
    }
}

/// Collects rows of a fixed width into a [`Grid`].
pub struct GridBuilder {
    cells: Vec<Cell>,
    width: usize,
    row_n: usize,
}

impl GridBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            cells: Vec::new(),
            width,
            row_n: 0,
        }
    }

    pub fn add_row(&mut self, row: &[Cell]) -> Result<(), Error> {
        if row.len() != self.width {
            return Err(Error::InconsistentRow(self.row_n, self.width, row.len()));
        }

        self.cells.extend_from_slice(row);
        self.row_n += 1;

        Ok(())
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn build(self) -> Grid {
        Grid {
            cells: self.cells,
            width: self.width,
            height: self.row_n,
        }
    }
}
