use image::Rgb;

use crate::error::RenderError;
use crate::result::RenderResult;

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 128, 0]);
pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
pub const ORANGE: Rgb<u8> = Rgb([255, 165, 0]);
pub const FUCHSIA: Rgb<u8> = Rgb([255, 0, 255]);
pub const GOLD: Rgb<u8> = Rgb([255, 215, 0]);
pub const CYAN: Rgb<u8> = Rgb([0, 255, 255]);
pub const MAGENTA: Rgb<u8> = Rgb([255, 0, 255]);

pub const CLASSIC_PALETTE: [Rgb<u8>; 9] =
    [RED, BLUE, GREEN, YELLOW, ORANGE, FUCHSIA, GOLD, CYAN, MAGENTA];

/// How much every channel loses per Newton step.
pub const DARKENING_PER_ITERATION: i64 = 2;

/// Root colours, picked by root index modulo the palette length.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb<u8>>) -> RenderResult<Self> {
        if colors.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Number of slots, never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Slot of the palette a root index maps to.
    pub fn slot(&self, root_index: usize) -> usize {
        root_index % self.colors.len()
    }

    /// Base colour of the root, darker the more steps the pixel needed.
    pub fn colorize(&self, root_index: usize, iterations: u32) -> Rgb<u8> {
        let base = self.colors[self.slot(root_index)];
        let darkening = i64::from(iterations) * DARKENING_PER_ITERATION;
        Rgb(base
            .0
            .map(|channel| (i64::from(channel) - darkening).clamp(0, 255) as u8))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: CLASSIC_PALETTE.to_vec(),
        }
    }
}
