use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path as FsPath, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod grid;
pub mod pathfinder;
pub mod puzzle;
pub mod render;

pub use grid::{Cell, Grid, GridBuilder};
pub use pathfinder::{move_in_any_direction, solve, solve_in_place, step, Path};
pub use puzzle::{load_grid, parse_parameters, MazePuzzle};
pub use render::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidOperation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Input string must contain only two words separated by a space")]
    InvalidParameterWordCount,
    #[error("Invalid text({0}) for integer.")]
    InvalidIntegerText(String),
    #[error("Maze width must be greater than zero")]
    NonPositiveWidth,
    #[error("Maze height must be greater than zero")]
    NonPositiveHeight,
    #[error("Maze height is incorrect, expect {0} row(s), given {1}.")]
    InconsistentHeight(usize, usize),
    #[error("row {0} is invalid due to length, expect {1} cell(s), given {2}.")]
    InconsistentRow(usize, usize, usize),
    #[error("Invalid text({1}) for cell in row {0}, expect 0(open) or 1(wall).")]
    InvalidCellText(usize, String),
    #[error("Missing {0} line in maze description.")]
    MissingLine(&'static str),
    #[error("Current position {0} is invalid for the current maze")]
    InvalidPosition(Point),
    #[error("Position {0} is outside of the current maze")]
    OutOfBounds(Point),
    #[error("Expect at least one position in path.")]
    EmptyPath,
    #[error("Positions {0} and {1} in path are not one orthogonal step apart.")]
    DisjointPath(Point, Point),
    #[error("Impossible to visit a wall at {0}")]
    VisitWall(Point),
    #[error("Maze of size {0}x{1} is too large.")]
    GridTooLarge(usize, usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VisitWall(_) => ErrorKind::InvalidOperation,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Moves in the order they are tried by the pathfinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }
}

/// A cell coordinate, `x` being the column and `y` the row.
///
/// Components are signed so that positions off the top or left edge of a
/// grid can still be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// `None` if the neighbor's coordinate doesn't fit in `isize`.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::East => self.x.checked_add(1).map(|x| Self::new(x, self.y)),
            Direction::South => self.y.checked_add(1).map(|y| Self::new(self.x, y)),
            Direction::West => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
        }
    }

    pub fn is_adjacent(&self, other: &Point) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (0, 1) | (1, 0)
        )
    }
}

pub fn read_puzzle<P: AsRef<FsPath>>(path: P) -> Result<MazePuzzle> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let lines = reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} from given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    MazePuzzle::from_lines(&lines).with_context(|| {
        format!(
            "Failed to parse maze from given file({}).",
            path.as_ref().display()
        )
    })
}
