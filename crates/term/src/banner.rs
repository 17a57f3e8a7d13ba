//! Full-screen text banners for the menu and the win screen.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::renderer::TermSize;

const MENU_BG: Rgb = Rgb::new(30, 30, 40);
const WIN_BG: Rgb = Rgb::new(20, 90, 50);
const TITLE: Rgb = Rgb::new(255, 255, 255);
const HINT: Rgb = Rgb::new(230, 230, 230);

/// Centred lines of text on a solid background, with a hint line below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    bg: Rgb,
    lines: Vec<String>,
    hint: String,
}

impl Banner {
    pub fn new(bg: Rgb, lines: Vec<String>, hint: impl Into<String>) -> Self {
        Self {
            bg,
            lines,
            hint: hint.into(),
        }
    }

    /// Title screen showing which level will be played.
    pub fn menu(level_number: usize, level_count: usize) -> Self {
        Self::new(
            MENU_BG,
            vec![
                "Mini Platformer".to_string(),
                format!("Continue level {level_number} of {level_count}"),
            ],
            "Enter: start   Esc/q: quit",
        )
    }

    pub fn win() -> Self {
        Self::new(
            WIN_BG,
            vec!["All levels cleared!".to_string()],
            "Enter: back to menu   Esc/q: quit",
        )
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render_into(&self, size: TermSize, fb: &mut FrameBuffer) {
        fb.resize(size.width, size.height);
        let bg = CellStyle::new(TITLE, self.bg);
        fb.clear(bg.into_cell(' '));

        // Lines separated by a blank row, then the hint two rows lower.
        let block = u16::try_from(self.lines.len() * 2 + 1).unwrap_or(u16::MAX);
        let mut y = size.height.saturating_sub(block) / 2;
        for line in &self.lines {
            fb.put_str_centered(y, line, bg.bold());
            y = y.saturating_add(2);
        }
        fb.put_str_centered(y.saturating_add(1), &self.hint, CellStyle::new(HINT, self.bg));
    }

    pub fn render(&self, size: TermSize) -> FrameBuffer {
        let mut fb = FrameBuffer::new(size.width, size.height);
        self.render_into(size, &mut fb);
        fb
    }
}
