use thiserror::Error;

use crate::{pos, Pos, Universe};

const MARGIN: i32 = 10;
const ALIVE: char = '#';
const DEAD: char = '.';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot render a universe with no living cells")]
    EmptyUniverse,
}

/// Renders the living cells as a text grid covering their bounding box
/// padded by a fixed margin, one line per row, with a trailing newline.
pub fn render(universe: &Universe) -> Result<String, RenderError> {
    let (min, max) = bounds(universe).ok_or(RenderError::EmptyUniverse)?;

    let mut rows = String::new();
    for y in (min.y - MARGIN)..=(max.y + MARGIN) {
        for x in (min.x - MARGIN)..=(max.x + MARGIN) {
            rows.push(if universe.is_alive(pos!(x, y)) {
                ALIVE
            } else {
                DEAD
            });
        }
        rows.push('\n');
    }
    Ok(rows)
}

/// Bounding box of the living cells, as its lowest and highest corners.
fn bounds(universe: &Universe) -> Option<(Pos, Pos)> {
    let mut cells = universe.cells().iter();
    let first = *cells.next()?;
    let corners = cells.fold((first, first), |(min, max), cell| {
        (
            pos!(min.x.min(cell.x), min.y.min(cell.y)),
            pos!(max.x.max(cell.x), max.y.max(cell.y)),
        )
    });
    Some(corners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_padded_bounding_box() {
        let universe = Universe::from_cells([pos!(0, 0), pos!(2, 1)]);
        let text = render(&universe).unwrap();
        assert!(text.ends_with('\n'));

        let margin = MARGIN as usize;
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 2 + 2 * margin);
        for row in &rows {
            assert_eq!(row.len(), 3 + 2 * margin);
        }

        assert_eq!(text.matches(ALIVE).count(), 2);
        assert_eq!(rows[margin].as_bytes()[margin], ALIVE as u8);
        assert_eq!(rows[margin + 1].as_bytes()[margin + 2], ALIVE as u8);
    }

    #[test]
    fn renders_negative_coordinates() {
        let universe = Universe::from_cells([pos!(-4, -7)]);
        let text = render(&universe).unwrap();

        let margin = MARGIN as usize;
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 1 + 2 * margin);
        assert_eq!(rows[margin].as_bytes()[margin], ALIVE as u8);
    }

    #[test]
    fn empty_universe_does_not_render() {
        let empty = Universe::default();
        assert_eq!(render(&empty), Err(RenderError::EmptyUniverse));
    }
}
