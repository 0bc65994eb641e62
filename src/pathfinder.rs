use std::fmt::Display;

use log::{debug, trace};

use crate::{Direction, Error, Grid, Point};

/// Positions from start to end, each one orthogonal step after the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
}

impl TryFrom<Vec<Point>> for Path {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            return Err(Error::EmptyPath);
        }

        if let Some(pair) = points.windows(2).find(|pair| !pair[0].is_adjacent(&pair[1])) {
            return Err(Error::DisjointPath(pair[0], pair[1]));
        }

        Ok(Self { points })
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .points
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        write!(f, "{}", text)
    }
}

impl Path {
    fn from_trail(trail: Vec<Point>) -> Self {
        debug_assert!(!trail.is_empty());
        Self { points: trail }
    }

    pub fn start(&self) -> &Point {
        &self.points[0]
    }

    pub fn end(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn steps_n(&self) -> usize {
        self.points.len() - 1
    }
}

/// The neighbor of `pos` in `dir`, if it can still be entered.
pub fn step(grid: &Grid, pos: &Point, dir: Direction) -> Option<Point> {
    let next_pos = pos.neighbor(dir)?;
    if grid.is_unvisited_position(&next_pos) {
        Some(next_pos)
    } else {
        None
    }
}

/// The first enterable neighbor of `pos`, trying directions in
/// [`Direction::all_dirs`] order.
pub fn move_in_any_direction(grid: &Grid, pos: &Point) -> Result<Option<Point>, Error> {
    if !grid.is_legal_position(pos) {
        return Err(Error::InvalidPosition(*pos));
    }

    Ok(Direction::all_dirs()
        .iter()
        .find_map(|dir| step(grid, pos, *dir)))
}

/// Searches a copy of `grid`, so the caller's grid keeps its open cells.
pub fn solve(grid: &Grid, start: &Point, end: &Point) -> Result<Option<Path>, Error> {
    let mut scratch_grid = grid.clone();
    solve_in_place(&mut scratch_grid, start, end)
}

/// Depth-first search from `start` to `end`, marking every entered cell of
/// `grid` as visited. Cells left on a dead end stay visited.
///
/// Returns `Ok(None)` if `end` can't be reached from `start`.
pub fn solve_in_place(grid: &mut Grid, start: &Point, end: &Point) -> Result<Option<Path>, Error> {
    if start == end {
        return Ok(Some(Path::from_trail(vec![*start])));
    }

    debug!("Searching path from {} to {}.", start, end);
    grid.mark_visited(start)?;
    let mut trail = vec![*start];
    let mut backtrack_n = 0;
    while let Some(cur_pos) = trail.last() {
        match move_in_any_direction(grid, cur_pos)? {
            Some(next_pos) => {
                trace!("Move from {} to {}.", cur_pos, next_pos);
                grid.mark_visited(&next_pos)?;
                trail.push(next_pos);
                if next_pos == *end {
                    trace!("Explored maze:\n{}", grid);
                    debug!(
                        "Found path of {} position(s) after visiting {} cell(s), {} backtrack(s).",
                        trail.len(),
                        grid.visited_count(),
                        backtrack_n
                    );
                    return Ok(Some(Path::from_trail(trail)));
                }
            }
            None => {
                trace!("Dead end at {}, backtrack.", cur_pos);
                trail.pop();
                backtrack_n += 1;
            }
        }
    }

    trace!("Explored maze:\n{}", grid);
    debug!(
        "No path from {} to {} after visiting {} cell(s).",
        start,
        end,
        grid.visited_count()
    );
    Ok(None)
}
