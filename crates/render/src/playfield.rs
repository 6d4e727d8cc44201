//! Main layer: grid lines and board cells.
//!
//! Pure drawing against a [`Surface`]. The cell buffer is read from the
//! engine's view every call; nothing is cached between frames.

use crate::color::Palette;
use crate::engine::CellView;
use crate::layout::BoardLayout;
use crate::surface::Surface;

/// Stroke every grid line as one path.
///
/// Vertical lines for `i in 0..=width`, then horizontal lines for
/// `j in 0..=height`, each spanning the full board.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, layout: &BoardLayout, palette: &Palette) {
    let full_w = f64::from(layout.canvas_width());
    let full_h = f64::from(layout.canvas_height());

    surface.begin_path();

    for i in 0..=layout.width() {
        let x = f64::from(layout.line_offset(i));
        surface.move_to(x, 0.0);
        surface.line_to(x, full_h);
    }

    for j in 0..=layout.height() {
        let y = f64::from(layout.line_offset(j));
        surface.move_to(0.0, y);
        surface.line_to(full_w, y);
    }

    surface.stroke(palette.grid);
}

/// Fill every cell rectangle with its palette color.
///
/// On the game-over screen only the empty and filler colors are used.
pub fn draw_cells<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &BoardLayout,
    cells: &CellView<'_>,
    palette: &Palette,
    game_over: bool,
) {
    for row in 0..layout.height() {
        for col in 0..layout.width() {
            let cell = cells.get(row, col);
            let color = if game_over {
                palette.cell_game_over(cell)
            } else {
                palette.cell(cell)
            };
            surface.fill_rect(layout.cell_rect(row, col), color);
        }
    }
}

/// Grid first, then cells.
pub fn draw_playfield<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &BoardLayout,
    cells: &CellView<'_>,
    palette: &Palette,
    game_over: bool,
) {
    draw_grid(surface, layout, palette);
    draw_cells(surface, layout, cells, palette, game_over);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawList, DrawOp};
    use crate::surface::Rect;
    use crate::types::Cell;

    fn board(bytes: &[u8]) -> CellView<'_> {
        CellView::borrowed(4, 2, bytes)
    }

    #[test]
    fn grid_lines_follow_pixel_convention() {
        let layout = BoardLayout::new(16, 4, 2);
        let mut list = DrawList::new();
        draw_grid(&mut list, &layout, &Palette::default());

        let segs = list.segments();
        let xs: Vec<f64> = segs.iter().filter(|s| s.is_vertical()).map(|s| s.x0).collect();
        let ys: Vec<f64> = segs.iter().filter(|s| s.is_horizontal()).map(|s| s.y0).collect();
        assert_eq!(xs, vec![1.0, 18.0, 35.0, 52.0, 69.0]);
        assert_eq!(ys, vec![1.0, 18.0, 35.0]);

        // Vertical lines span the full height, horizontal ones the full width.
        assert!(segs
            .iter()
            .filter(|s| s.is_vertical())
            .all(|s| s.y0 == 0.0 && s.y1 == 35.0));
        assert!(segs
            .iter()
            .filter(|s| s.is_horizontal())
            .all(|s| s.x0 == 0.0 && s.x1 == 69.0));

        assert_eq!(list.ops().first(), Some(&DrawOp::BeginPath));
        assert_eq!(list.ops().last(), Some(&DrawOp::Stroke(Palette::GRID)));
    }

    #[test]
    fn cells_use_piece_colors() {
        let layout = BoardLayout::new(16, 4, 2);
        let mut bytes = [0u8; 8];
        bytes[0] = Cell::I.as_u8();
        bytes[7] = Cell::Wall.as_u8();

        let mut list = DrawList::new();
        draw_cells(&mut list, &layout, &board(&bytes), &Palette::default(), false);

        let fills: Vec<(Rect, _)> = list.fills().collect();
        assert_eq!(fills.len(), 8);
        assert_eq!(fills[0], (Rect::new(1.0, 1.0, 16.0, 16.0), Palette::I));
        assert_eq!(fills[7], (Rect::new(52.0, 18.0, 16.0, 16.0), Palette::FILLER));
        assert!(fills[1..7].iter().all(|(_, c)| *c == Palette::EMPTY));
    }

    #[test]
    fn game_over_uses_only_empty_and_filler() {
        let layout = BoardLayout::new(16, 4, 2);
        let bytes = [0u8, 2, 3, 4, 5, 6, 7, 8];

        let mut list = DrawList::new();
        draw_cells(&mut list, &layout, &board(&bytes), &Palette::default(), true);

        let colors: Vec<_> = list.fills().map(|(_, c)| c).collect();
        assert_eq!(colors[0], Palette::EMPTY);
        assert!(colors[1..].iter().all(|c| *c == Palette::FILLER));
    }

    #[test]
    fn playfield_strokes_grid_before_filling() {
        let layout = BoardLayout::new(16, 4, 2);
        let bytes = [0u8; 8];
        let mut list = DrawList::new();
        draw_playfield(&mut list, &layout, &board(&bytes), &Palette::default(), false);

        let stroke_at = list
            .ops()
            .iter()
            .position(|op| matches!(op, DrawOp::Stroke(_)))
            .unwrap();
        let first_fill = list
            .ops()
            .iter()
            .position(|op| matches!(op, DrawOp::FillRect { .. }))
            .unwrap();
        assert!(stroke_at < first_fill);
    }
}
