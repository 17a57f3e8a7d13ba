//! LevelView: projects a running level into a terminal framebuffer.
//!
//! This module is pure (no I/O). One tile maps to `cell_w × cell_h`
//! characters; world rectangles are projected with floor on the near edge and
//! ceil on the far edge, so anything partially inside a character covers it.

use crate::core::LevelRunner;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::renderer::TermSize;
use crate::types::{Point, Rect};

const SKY: Rgb = Rgb::new(92, 148, 252);
const GROUND: Rgb = Rgb::new(160, 82, 45);
const GOAL: Rgb = Rgb::new(255, 215, 0);
const PLAYER: Rgb = Rgb::new(220, 50, 50);
const TEXT: Rgb = Rgb::new(255, 255, 255);
const HUD_BG: Rgb = Rgb::new(20, 20, 30);

pub const SKY_CH: char = ' ';
pub const SOLID_CH: char = '█';
pub const GOAL_CH: char = '★';
pub const BODY_CH: char = '@';

/// Screen-space rectangle in character cells, relative to the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

pub struct LevelView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for LevelView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square with typical 1:2 glyphs.
        Self::new(4, 2)
    }
}

impl LevelView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the camera viewport in characters.
    pub fn area_size(&self, runner: &LevelRunner) -> TermSize {
        let tile = runner.grid().tile_size();
        let vp = runner.viewport();
        TermSize::new(
            clamp_u16(vp.width * i32::from(self.cell_w) / tile),
            clamp_u16(vp.height * i32::from(self.cell_h) / tile),
        )
    }

    /// Render into an existing framebuffer, resizing it to `size`.
    pub fn render_into(&self, runner: &LevelRunner, level_name: &str, size: TermSize, fb: &mut FrameBuffer) {
        fb.resize(size.width, size.height);
        fb.clear(Cell::default());

        let area = self.area_size(runner);
        let area_w = area.width.min(size.width);
        let area_h = area.height.min(size.height);
        let origin_x = (size.width - area_w) / 2;
        let origin_y = (size.height - area_h) / 2;

        let sky = CellStyle::new(TEXT, SKY).into_cell(SKY_CH);
        fb.fill_rect(origin_x, origin_y, area_w, area_h, sky);

        let offset = runner.offset();
        let tile = runner.grid().tile_size();
        let mut draw = |rect: &Rect, cell: Cell, min_one: bool| {
            let mut r = self.project(rect, offset, tile);
            if min_one {
                r.x1 = r.x1.max(r.x0 + 1);
                r.y1 = r.y1.max(r.y0 + 1);
            }
            let x0 = r.x0.max(0);
            let y0 = r.y0.max(0);
            let x1 = r.x1.min(i32::from(area_w));
            let y1 = r.y1.min(i32::from(area_h));
            if x0 >= x1 || y0 >= y1 {
                return;
            }
            fb.fill_rect(
                origin_x + clamp_u16(x0),
                origin_y + clamp_u16(y0),
                clamp_u16(x1 - x0),
                clamp_u16(y1 - y0),
                cell,
            );
        };

        let solid = CellStyle::new(GROUND, SKY).into_cell(SOLID_CH);
        for rect in runner.grid().solids() {
            draw(rect, solid, false);
        }
        let goal = CellStyle::new(GOAL, SKY).bold().into_cell(GOAL_CH);
        for rect in runner.grid().goals() {
            draw(rect, goal, false);
        }
        let body = CellStyle::new(TEXT, PLAYER).bold().into_cell(BODY_CH);
        draw(&runner.body().rect, body, true);

        let pos = runner.body().position();
        let hud = format!("Level: {}  Pos: {},{}", level_name, pos.x, pos.y);
        let hud_style = CellStyle::new(TEXT, HUD_BG);
        fb.fill_rect(origin_x, origin_y, area_w, 1, hud_style.into_cell(' '));
        fb.put_str(origin_x + 1, origin_y, &hud, hud_style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, runner: &LevelRunner, level_name: &str, size: TermSize) -> FrameBuffer {
        let mut fb = FrameBuffer::new(size.width, size.height);
        self.render_into(runner, level_name, size, &mut fb);
        fb
    }

    /// Centred message over whatever is drawn (used while a level is frozen).
    pub fn overlay(&self, fb: &mut FrameBuffer, text: &str) {
        let style = CellStyle::new(TEXT, Rgb::new(0, 0, 0)).bold();
        let padded = format!(" {text} ");
        fb.put_str_centered(fb.height() / 2, &padded, style);
    }

    fn project(&self, rect: &Rect, offset: Point, tile: i32) -> CellRect {
        let cw = i32::from(self.cell_w);
        let ch = i32::from(self.cell_h);
        CellRect {
            x0: floor_div((rect.left() - offset.x) * cw, tile),
            y0: floor_div((rect.top() - offset.y) * ch, tile),
            x1: ceil_div((rect.right() - offset.x) * cw, tile),
            y1: ceil_div((rect.bottom() - offset.y) * ch, tile),
        }
    }
}

fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}

fn clamp_u16(v: i32) -> u16 {
    u16::try_from(v.max(0)).unwrap_or(u16::MAX)
}
