use crate::{Cell, Grid, Path, Point};

/// Draws `grid` with `path` on top of it: `#` for walls, `S` and `E` for the
/// ends of the path, `X` for the rest of it and a space anywhere else.
///
/// When the path is a single position it is drawn as `S`.
pub fn render(grid: &Grid, path: &Path) -> String {
    let mut marks = grid
        .positions()
        .map(|pos| match grid.cell(&pos) {
            Some(Cell::Wall) => Some('#'),
            _ => None,
        })
        .collect::<Vec<_>>();

    let mut put_mark = |pos: &Point, mark: char, overwrite: bool| {
        if let Some(cur_mark) = grid.pos_to_ind(pos).and_then(|ind| marks.get_mut(ind)) {
            if overwrite || cur_mark.is_none() {
                *cur_mark = Some(mark);
            }
        }
    };
    put_mark(path.end(), 'E', true);
    put_mark(path.start(), 'S', true);
    for pos in path.points() {
        put_mark(pos, 'X', false);
    }

    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for row in marks.chunks(grid.width().max(1)) {
        text.extend(row.iter().map(|mark| mark.unwrap_or(' ')));
        text.push('\n');
    }

    text
}
