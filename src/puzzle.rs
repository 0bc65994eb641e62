use std::str::FromStr;

use log::debug;

use crate::{pathfinder, Cell, Error, Grid, GridBuilder, Path, Point};

/// A maze together with where to enter and where to leave it.
#[derive(Debug, Clone)]
pub struct MazePuzzle {
    grid: Grid,
    start: Point,
    end: Point,
}

impl FromStr for MazePuzzle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(&s.lines().collect::<Vec<_>>())
    }
}

impl MazePuzzle {
    pub fn new(grid: Grid, start: Point, end: Point) -> Self {
        Self { grid, start, end }
    }

    /// Parses the size line, the start line, the end line and then the rows
    /// of the maze. Blank lines after the last row are ignored.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, Error> {
        let line_n = lines
            .iter()
            .rposition(|line| !line.as_ref().trim().is_empty())
            .map_or(0, |ind| ind + 1);
        let lines = &lines[..line_n];

        let size = parse_parameters(lines.first().ok_or(Error::MissingLine("size"))?.as_ref())?;
        let start = parse_parameters(lines.get(1).ok_or(Error::MissingLine("start"))?.as_ref())?;
        let end = parse_parameters(lines.get(2).ok_or(Error::MissingLine("end"))?.as_ref())?;
        let grid = load_grid(&lines[3..], size.x, size.y)?;

        Ok(Self::new(grid, start, end))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> &Point {
        &self.start
    }

    pub fn end(&self) -> &Point {
        &self.end
    }

    pub fn solve(&self) -> Result<Option<Path>, Error> {
        pathfinder::solve(&self.grid, &self.start, &self.end)
    }
}

/// Parses a line of two integers, like `"10 7"`.
pub fn parse_parameters(text: &str) -> Result<Point, Error> {
    let words = text.split_whitespace().collect::<Vec<_>>();
    if words.len() != 2 {
        return Err(Error::InvalidParameterWordCount);
    }

    let parse_word = |word: &str| {
        word.parse::<isize>()
            .map_err(|_| Error::InvalidIntegerText(word.to_string()))
    };

    Ok(Point::new(parse_word(words[0])?, parse_word(words[1])?))
}

pub fn load_grid<S: AsRef<str>>(rows: &[S], width: isize, height: isize) -> Result<Grid, Error> {
    if width < 1 {
        return Err(Error::NonPositiveWidth);
    }
    if height < 1 {
        return Err(Error::NonPositiveHeight);
    }

    let (width, height) = (width as usize, height as usize);
    if rows.len() != height {
        return Err(Error::InconsistentHeight(height, rows.len()));
    }

    let mut builder = GridBuilder::new(width);
    for (row_ind, row) in rows.iter().enumerate() {
        let cells = row
            .as_ref()
            .split_whitespace()
            .map(|text| match text {
                "0" => Ok(Cell::Open),
                "1" => Ok(Cell::Wall),
                other => Err(Error::InvalidCellText(row_ind, other.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        builder.add_row(&cells)?;
    }

    let grid = builder.build();
    debug!(
        "Loaded {}x{} maze with {} wall(s).",
        grid.width(),
        grid.height(),
        grid.wall_positions().count()
    );

    Ok(grid)
}
