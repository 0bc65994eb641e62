use std::collections::HashSet;

use maze_solver::{Cell, Direction, ErrorKind, Grid, MazePuzzle, Path, Point};

const RING_MAZE: &str = "5 5
1 1
3 3
1 1 1 1 1
1 0 0 0 1
1 0 1 0 1
1 0 0 0 1
1 1 1 1 1
";

const DEAD_END_MAZE: &str = "5 5
1 1
3 2
1 1 1 1 1
1 0 0 1 1
1 0 1 0 1
1 0 0 0 1
1 1 1 1 1
";

fn points(coords: &[(isize, isize)]) -> Vec<Point> {
    coords.iter().map(|(x, y)| Point::new(*x, *y)).collect()
}

fn assert_valid_path(grid: &Grid, path: &Path, start: &Point, end: &Point) {
    assert_eq!(path.start(), start);
    assert_eq!(path.end(), end);
    for pair in path.points().windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]), "{} -> {}", pair[0], pair[1]);
    }
    for pos in path.points() {
        assert!(grid.is_legal_position(pos), "{} is not legal", pos);
    }
    let unique = path.points().iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), path.len());
}

#[test]
fn step_returns_only_unvisited_neighbors() {
    let puzzle = maze_solver::read_puzzle("mazes/small_maze.txt").unwrap();
    let grid = puzzle.grid();
    let pos = Point::new(1, 1);

    assert_eq!(maze_solver::step(grid, &pos, Direction::North), None);
    assert_eq!(
        maze_solver::step(grid, &pos, Direction::East),
        Some(Point::new(2, 1))
    );
    assert_eq!(
        maze_solver::step(grid, &pos, Direction::South),
        Some(Point::new(1, 2))
    );
    assert_eq!(maze_solver::step(grid, &pos, Direction::West), None);

    let mut grid = grid.clone();
    grid.mark_visited(&Point::new(2, 1)).unwrap();
    assert_eq!(maze_solver::step(&grid, &pos, Direction::East), None);
}

#[test]
fn move_prefers_north_east_south_west() {
    let mut grid = Grid::new(3, 3).unwrap();
    let center = Point::new(1, 1);
    let mut moves = Vec::new();
    while let Some(next_pos) = maze_solver::move_in_any_direction(&grid, &center).unwrap() {
        grid.mark_visited(&next_pos).unwrap();
        moves.push(next_pos);
    }

    assert_eq!(moves, points(&[(1, 0), (2, 1), (1, 2), (0, 1)]));
}

#[test]
fn move_from_illegal_position_fails() {
    let puzzle = maze_solver::read_puzzle("mazes/small_maze.txt").unwrap();
    for pos in [Point::new(0, 0), Point::new(-1, 2), Point::new(1, 6)] {
        let err = maze_solver::move_in_any_direction(puzzle.grid(), &pos).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    let err = maze_solver::move_in_any_direction(puzzle.grid(), &Point::new(0, 0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Current position (0, 0) is invalid for the current maze"
    );
}

#[test]
fn trivial_path_leaves_grid_untouched() {
    let puzzle = maze_solver::read_puzzle("mazes/small_maze.txt").unwrap();
    let mut grid = puzzle.grid().clone();
    for pos in [Point::new(1, 1), Point::new(3, 4), Point::new(0, 0)] {
        let path = maze_solver::solve_in_place(&mut grid, &pos, &pos)
            .unwrap()
            .unwrap();
        assert_eq!(path.points(), &[pos]);
        assert_eq!(path.steps_n(), 0);
    }

    assert_eq!(&grid, puzzle.grid());
}

#[test]
fn solve_small_maze() {
    let puzzle = maze_solver::read_puzzle("mazes/small_maze.txt").unwrap();
    let path = puzzle.solve().unwrap().unwrap();

    assert_eq!(
        path.points(),
        points(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (3, 4)])
    );
    assert_eq!(
        path.to_string(),
        "(1, 1) -> (2, 1) -> (3, 1) -> (3, 2) -> (3, 3) -> (3, 4)"
    );
}

#[test]
fn solve_ring_maze() {
    let puzzle = RING_MAZE.parse::<MazePuzzle>().unwrap();
    let path = puzzle.solve().unwrap().unwrap();

    assert_eq!(
        path.points(),
        points(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)])
    );
}

#[test]
fn solve_keeps_caller_grid() {
    let puzzle = RING_MAZE.parse::<MazePuzzle>().unwrap();
    let first = puzzle.solve().unwrap();
    let second = puzzle.solve().unwrap();

    assert_eq!(first, second);
    assert_eq!(puzzle.grid().visited_count(), 0);
}

#[test]
fn solve_backtracks_from_dead_end() {
    let puzzle = DEAD_END_MAZE.parse::<MazePuzzle>().unwrap();
    let mut grid = puzzle.grid().clone();
    let path = maze_solver::solve_in_place(&mut grid, puzzle.start(), puzzle.end())
        .unwrap()
        .unwrap();

    assert_eq!(
        path.points(),
        points(&[(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 2)])
    );
    assert_eq!(grid.cell(&Point::new(2, 1)), Some(Cell::Visited));
    assert_eq!(grid.visited_count(), 7);
    assert_eq!(grid.wall_positions().count(), 18);
}

#[test]
fn solve_walled_maze_has_no_solution() {
    let puzzle = maze_solver::read_puzzle("mazes/walled_maze.txt").unwrap();
    let mut grid = puzzle.grid().clone();
    let result = maze_solver::solve_in_place(&mut grid, puzzle.start(), puzzle.end()).unwrap();

    assert_eq!(result, None);
    assert_eq!(grid.cell(&Point::new(1, 3)), Some(Cell::Visited));
    assert_eq!(grid.cell(&Point::new(3, 3)), Some(Cell::Open));
}

#[test]
fn solve_unreachable_end_has_no_solution() {
    let puzzle = maze_solver::read_puzzle("mazes/tiny_maze.txt").unwrap();
    let start = Point::new(1, 1);
    for end in [Point::new(0, 0), Point::new(7, 7), Point::new(-1, 1)] {
        assert_eq!(maze_solver::solve(puzzle.grid(), &start, &end).unwrap(), None);
    }
}

#[test]
fn solve_from_wall_fails() {
    let puzzle = maze_solver::read_puzzle("mazes/tiny_maze.txt").unwrap();
    let err = maze_solver::solve(puzzle.grid(), &Point::new(2, 1), &Point::new(3, 3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);

    let err = maze_solver::solve(puzzle.grid(), &Point::new(9, 1), &Point::new(3, 3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn solved_paths_are_orthogonal_and_never_repeat() {
    for maze_path in [
        "mazes/tiny_maze.txt",
        "mazes/small_maze.txt",
        "mazes/large_maze.txt",
    ] {
        let puzzle = maze_solver::read_puzzle(maze_path).unwrap();
        let grid = puzzle.grid();
        let open_positions = grid
            .positions()
            .filter(|pos| grid.is_unvisited_position(pos))
            .collect::<Vec<_>>();
        for end in open_positions.iter() {
            let path = maze_solver::solve(grid, puzzle.start(), end).unwrap().unwrap();
            assert_valid_path(grid, &path, puzzle.start(), end);
        }
    }
}

#[test]
fn solve_large_maze() {
    let puzzle = maze_solver::read_puzzle("mazes/large_maze.txt").unwrap();
    let path = puzzle.solve().unwrap().unwrap();

    assert_eq!(path.len(), 37);
    assert_eq!(
        &path.points()[..6],
        points(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (4, 3)])
    );
    assert_valid_path(puzzle.grid(), &path, puzzle.start(), puzzle.end());
}

#[test]
fn path_from_points_is_validated() {
    let path = Path::try_from(points(&[(1, 1), (1, 2), (2, 2)])).unwrap();
    assert_eq!(path.steps_n(), 2);

    let err = Path::try_from(Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = Path::try_from(points(&[(1, 1), (2, 2)])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Positions (1, 1) and (2, 2) in path are not one orthogonal step apart."
    );
}

#[test]
fn step_from_extreme_coordinates_returns_none() {
    let grid = Grid::new(3, 3).unwrap();
    let cases = [
        (Point::new(isize::MIN, 0), Direction::West),
        (Point::new(0, isize::MIN), Direction::North),
        (Point::new(isize::MAX, 0), Direction::East),
        (Point::new(0, isize::MAX), Direction::South),
    ];

    for (pos, dir) in cases {
        assert_eq!(maze_solver::step(&grid, &pos, dir), None, "{} {:?}", pos, dir);
    }
    assert_eq!(Point::new(isize::MIN, 0).neighbor(Direction::West), None);
    assert_eq!(
        Point::new(isize::MIN, 0).neighbor(Direction::East),
        Some(Point::new(isize::MIN + 1, 0))
    );
    assert!(!Point::new(isize::MIN, 0).is_adjacent(&Point::new(isize::MAX, 0)));
}
