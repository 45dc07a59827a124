//! Raster backend using tiny-skia
//!
//! Lets the overlay be rendered onto a screenshot and saved to disk
//! without a windowing system.

use anyhow::Context;
use image::RgbaImage;
use tiny_skia::{
    ColorU8, FillRule, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::config::OverlayColor;

use super::surface::{RectF, Surface, TextBlock, TextLayouter};

/// Average glyph advance relative to font size
const CHAR_WIDTH_RATIO: f32 = 0.55;
/// Line height relative to font size
const LINE_HEIGHT_RATIO: f32 = 1.3;
/// Height of a greeked word bar relative to font size
const BAR_HEIGHT_RATIO: f32 = 0.6;

/// [`Surface`] backed by a tiny-skia pixmap
pub struct RasterSurface {
    pixmap: Pixmap,
    /// Accumulated offsets, innermost last
    translations: Vec<(f32, f32)>,
}

impl RasterSurface {
    /// Blank canvas filled with `background`
    pub fn new(width: u32, height: u32, background: OverlayColor) -> anyhow::Result<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .with_context(|| format!("Invalid canvas size {}x{}", width, height))?;
        pixmap.fill(background.into());
        Ok(Self {
            pixmap,
            translations: Vec::new(),
        })
    }

    /// Canvas initialized with a copy of `img`
    pub fn from_image(img: &RgbaImage) -> anyhow::Result<Self> {
        let (w, h) = (img.width(), img.height());
        let mut pixmap =
            Pixmap::new(w, h).with_context(|| format!("Invalid image size {}x{}", w, h))?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(Self {
            pixmap,
            translations: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copy the canvas out as straight-alpha RGBA
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }

    fn transform(&self) -> Transform {
        match self.translations.last() {
            Some(&(dx, dy)) => Transform::from_translate(dx, dy),
            None => Transform::identity(),
        }
    }

    fn paint(color: OverlayColor) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = true;
        paint
    }
}

fn to_skia_rect(rect: RectF) -> Option<tiny_skia::Rect> {
    if rect.is_empty() {
        return None;
    }
    tiny_skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
}

/// Build a rounded rectangle path using cubic bezier corners
fn build_round_rect_path(rect: RectF, radius: f32) -> Option<Path> {
    // Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
    const K: f32 = 0.552_284_8;

    let r = radius
        .max(0.0)
        .min(rect.width() * 0.5)
        .min(rect.height() * 0.5);
    let (l, t, rt, b) = (rect.left, rect.top, rect.right, rect.bottom);
    let k = r * K;

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}

impl Surface for RasterSurface {
    fn stroke_rect(&mut self, rect: RectF, color: OverlayColor, stroke_width: f32) {
        if stroke_width.is_nan() || stroke_width <= 0.0 {
            return;
        }
        let Some(rect) = to_skia_rect(rect) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width: stroke_width,
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        let transform = self.transform();
        self.pixmap
            .stroke_path(&path, &Self::paint(color), &stroke, transform, None);
    }

    fn fill_rect(&mut self, rect: RectF, color: OverlayColor) {
        let Some(rect) = to_skia_rect(rect) else {
            return;
        };
        let transform = self.transform();
        self.pixmap
            .fill_rect(rect, &Self::paint(color), transform, None);
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: OverlayColor) {
        if rect.is_empty() {
            return;
        }
        let Some(path) = build_round_rect_path(rect, radius) else {
            return;
        };
        let transform = self.transform();
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            transform,
            None,
        );
    }

    fn push_translation(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.translations.last().copied().unwrap_or((0.0, 0.0));
        self.translations.push((x + dx, y + dy));
    }

    fn pop_translation(&mut self) {
        if self.translations.pop().is_none() {
            log::warn!("Unbalanced pop_translation on raster surface");
        }
    }
}

/// Fixed-advance text layout
///
/// Measures every character with the same advance, wraps greedily at word
/// boundaries and draws each word as a solid bar. Good enough to preview
/// banner placement without a font rasterizer.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceLayouter {
    pub font_size: f32,
    pub color: OverlayColor,
}

impl MonospaceLayouter {
    pub fn new(font_size: f32, color: OverlayColor) -> Self {
        Self { font_size, color }
    }

    fn advance(&self) -> f32 {
        self.font_size * CHAR_WIDTH_RATIO
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT_RATIO
    }
}

/// Wrapped lines produced by [`MonospaceLayouter`]
#[derive(Debug, Clone)]
pub struct MonospaceBlock {
    lines: Vec<String>,
    /// Wrap width the block was laid out against
    layout_width: f32,
    advance: f32,
    line_height: f32,
    bar_height: f32,
    color: OverlayColor,
}

impl MonospaceBlock {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width of the widest wrapped line
    pub fn text_width(&self) -> f32 {
        let widest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        widest as f32 * self.advance
    }
}

impl TextBlock for MonospaceBlock {
    /// The full wrap width, not the widest line
    fn width(&self) -> f32 {
        self.layout_width
    }

    fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let bar_top = (self.line_height - self.bar_height) * 0.5;
        for (row, line) in self.lines.iter().enumerate() {
            let y = row as f32 * self.line_height + bar_top;
            let mut col = 0usize;
            for word in line.split(' ') {
                let len = word.chars().count();
                if len > 0 {
                    surface.fill_rect(
                        RectF::from_xywh(
                            col as f32 * self.advance,
                            y,
                            len as f32 * self.advance,
                            self.bar_height,
                        ),
                        self.color,
                    );
                }
                col += len + 1;
            }
        }
    }
}

impl TextLayouter for MonospaceLayouter {
    type Block = MonospaceBlock;

    fn layout(&self, text: &str, max_width: f32) -> MonospaceBlock {
        let max_chars = (max_width / self.advance()).floor().max(1.0) as usize;
        MonospaceBlock {
            lines: wrap_words(text, max_chars),
            layout_width: max_width.max(0.0),
            advance: self.advance(),
            line_height: self.line_height(),
            bar_height: self.font_size * BAR_HEIGHT_RATIO,
            color: self.color,
        }
    }
}

/// Greedy word wrap to at most `max_chars` characters per line
///
/// Words longer than a line are split across lines.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        // Break words that can never fit on one line
        while chars.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(max_chars);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        if chars.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            chars.len()
        } else {
            current_len + 1 + chars.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars.iter());
        current_len += chars.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
