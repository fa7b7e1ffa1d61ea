use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use rayon::prelude::*;
use std::io::{self, Write};

use super::canvas::Canvas;
use super::color::RgbColor;

const UPPER_HALF: char = '▀';
const LOWER_HALF: char = '▄';

/// A terminal cell covering two vertically stacked pixels.
/// `None` means the terminal's own background shows through.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PreviewCell {
    pub char: char,
    pub fg: Option<RgbColor>,
    pub bg: Option<RgbColor>,
}

impl PreviewCell {
    fn from_pair(top: Option<RgbColor>, bottom: Option<RgbColor>) -> Self {
        match (top, bottom) {
            (Some(_), _) => Self { char: UPPER_HALF, fg: top, bg: bottom },
            (None, Some(_)) => Self { char: LOWER_HALF, fg: bottom, bg: None },
            (None, None) => Self { char: ' ', fg: None, bg: None },
        }
    }
}

/// Half-block grid: canvas width columns, ceil(height / 2) rows.
pub fn build_cells(canvas: &Canvas) -> Vec<PreviewCell> {
    let width = canvas.width() as usize;
    let rows = (canvas.height() as usize + 1) / 2;

    (0..width * rows)
        .into_par_iter()
        .map(|idx| {
            let x = (idx % width) as u32;
            let y_top = (idx / width) as u32 * 2;
            let bottom = if y_top + 1 < canvas.height() {
                canvas.rgb_at(x, y_top + 1)
            } else {
                None
            };
            PreviewCell::from_pair(canvas.rgb_at(x, y_top), bottom)
        })
        .collect()
}

fn to_term(color: RgbColor) -> Color {
    Color::Rgb { r: color.0, g: color.1, b: color.2 }
}

pub fn write_preview<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    let width = canvas.width() as usize;
    let cells = build_cells(canvas);

    for row in cells.chunks(width) {
        let mut current = None;
        for cell in row {
            // Only touch the colors when they change from the previous cell
            if current != Some((cell.fg, cell.bg)) {
                out.queue(ResetColor)?;
                if let Some(fg) = cell.fg {
                    out.queue(SetForegroundColor(to_term(fg)))?;
                }
                if let Some(bg) = cell.bg {
                    out.queue(SetBackgroundColor(to_term(bg)))?;
                }
                current = Some((cell.fg, cell.bg));
            }
            out.queue(Print(cell.char))?;
        }
        out.queue(ResetColor)?;
        out.queue(Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::ColorKey;
    use crate::renderer::pose::Pose;
    use crate::renderer::sprite::render;

    #[test]
    fn test_cell_grid_size() {
        let cells = build_cells(&render(Pose::Jump));
        assert_eq!(cells.len(), 32 * 24);
    }

    #[test]
    fn test_cell_from_pair() {
        let hair = Some(ColorKey::Hair.rgb());
        let skin = Some(ColorKey::Skin.rgb());

        let both = PreviewCell::from_pair(hair, skin);
        assert_eq!(both, PreviewCell { char: '▀', fg: hair, bg: skin });

        let top_only = PreviewCell::from_pair(hair, None);
        assert_eq!(top_only, PreviewCell { char: '▀', fg: hair, bg: None });

        let bottom_only = PreviewCell::from_pair(None, skin);
        assert_eq!(bottom_only, PreviewCell { char: '▄', fg: skin, bg: None });

        assert_eq!(PreviewCell::from_pair(None, None).char, ' ');
    }

    #[test]
    fn test_duck_preview_top_rows_blank() {
        let cells = build_cells(&render(Pose::Duck));
        // Pixel rows 0..32 map to cell rows 0..16
        assert!(cells[..32 * 16].iter().all(|c| c.char == ' '));
        assert!(cells[32 * 16..].iter().any(|c| c.char != ' '));
    }

    #[test]
    fn test_write_preview_emits_one_line_per_cell_row() {
        let mut out = Vec::new();
        write_preview(&mut out, &render(Pose::Run1)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), 24);
        assert!(text.contains('▀'));
        // 24-bit foreground for the hair color
        assert!(text.contains("38;2;58;31;15"));
    }

    #[test]
    fn test_color_codes_only_emitted_on_change() {
        // Blank canvas: each row resets once at its start and once at its end
        let mut out = Vec::new();
        write_preview(&mut out, &Canvas::new(1).unwrap()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[0m").count(), 2 * 12);

        // Shirt runs 16 cells wide on the dead sprite's torso rows
        let mut out = Vec::new();
        write_preview(&mut out, &render(Pose::Dead)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let torso_row = text.lines().nth(10).unwrap();
        assert_eq!(torso_row.matches("38;2;76;125;255").count(), 1);
    }
}
