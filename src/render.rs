use std::path::Path;

use image::{Rgb, RgbImage};
use itertools::Itertools;
use log::info;

use crate::board::{Square, BOARD_SIZE};
use crate::error::Result;

/// Edge length of one board cell in pixels.
pub const CELL_SIZE: u32 = 60;

const LIGHT: Rgb<u8> = Rgb([240, 217, 181]);
const DARK: Rgb<u8> = Rgb([181, 136, 99]);
const HIGHLIGHT: Rgb<u8> = Rgb([46, 89, 167]);
const TRACE: Rgb<u8> = Rgb([250, 250, 210]);

/// Top-left pixel of a square's cell. Rank 1 sits at the bottom of the
/// image, matching the orientation of a printed board.
fn cell_origin(square: Square) -> (u32, u32) {
    let x = square.file() as u32 * CELL_SIZE;
    let y = (BOARD_SIZE as u32 - 1 - square.rank() as u32) * CELL_SIZE;
    (x, y)
}

fn cell_center(square: Square) -> (i32, i32) {
    let (x, y) = cell_origin(square);
    ((x + CELL_SIZE / 2) as i32, (y + CELL_SIZE / 2) as i32)
}

fn fill_cell(img: &mut RgbImage, square: Square, color: Rgb<u8>) {
    let (x0, y0) = cell_origin(square);
    for y in y0..y0 + CELL_SIZE {
        for x in x0..x0 + CELL_SIZE {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draws a straight segment by sampling one point per dominant-axis pixel,
/// thickened to a 3x3 blot per sample.
fn draw_segment(img: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return;
    }
    for i in 0..=steps {
        let x = from.0 + dx * i / steps;
        let y = from.1 + dy * i / steps;
        for oy in -1..=1 {
            for ox in -1..=1 {
                let (px, py) = (x + ox, y + oy);
                if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

/// Renders the checkerboard with the given move sequence overlaid: its
/// squares filled with the highlight color and consecutive squares joined
/// by a line through the cell centers. Purely presentational.
pub fn render_path(path: &[Square]) -> RgbImage {
    let edge = BOARD_SIZE as u32 * CELL_SIZE;
    let mut img = RgbImage::new(edge, edge);
    for file in 0..BOARD_SIZE {
        for rank in 0..BOARD_SIZE {
            let square = Square::new(file, rank).unwrap();
            let color = if (file + rank) % 2 == 0 { DARK } else { LIGHT };
            fill_cell(&mut img, square, color);
        }
    }
    for &square in path {
        fill_cell(&mut img, square, HIGHLIGHT);
    }
    for (a, b) in path.iter().tuple_windows() {
        draw_segment(&mut img, cell_center(*a), cell_center(*b), TRACE);
    }
    img
}

/// Renders the sequence and saves it; the format follows the file
/// extension, PNG being the intended one.
pub fn write_png<P: AsRef<Path>>(path: &[Square], file: P) -> Result<()> {
    let file = file.as_ref();
    render_path(path).save(file)?;
    info!("wrote board image to {}", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn image_covers_the_board() {
        let img = render_path(&[]);
        assert_eq!(img.width(), BOARD_SIZE as u32 * CELL_SIZE);
        assert_eq!(img.height(), BOARD_SIZE as u32 * CELL_SIZE);
    }

    /// A1 is a dark square and sits in the bottom-left cell of the image.
    #[test]
    fn board_orientation_and_parity() {
        let img = render_path(&[]);
        let (x, y) = cell_origin(square("A1"));
        assert_eq!((x, y), (0, 7 * CELL_SIZE));
        assert_eq!(*img.get_pixel(x + 1, y + 1), DARK);
        let (x, y) = cell_origin(square("H8"));
        assert_eq!((x, y), (7 * CELL_SIZE, 0));
        assert_eq!(*img.get_pixel(x + 1, y + 1), DARK);
        let (x, y) = cell_origin(square("B1"));
        assert_eq!(*img.get_pixel(x + 1, y + 1), LIGHT);
    }

    #[test]
    fn path_squares_are_highlighted() {
        let img = render_path(&[square("A1")]);
        let (x, y) = cell_origin(square("A1"));
        assert_eq!(*img.get_pixel(x + 1, y + 1), HIGHLIGHT);
        let (x, y) = cell_origin(square("H8"));
        assert_eq!(*img.get_pixel(x + 1, y + 1), DARK);
    }

    #[test]
    fn consecutive_squares_are_connected() {
        let a1 = square("A1");
        let c2 = square("C2");
        let img = render_path(&[a1, c2]);
        let (cx, cy) = cell_center(a1);
        let (dx, dy) = cell_center(c2);
        let (mx, my) = ((cx + dx) / 2, (cy + dy) / 2);
        assert_eq!(*img.get_pixel(mx as u32, my as u32), TRACE);
    }
}
