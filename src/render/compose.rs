//! Overlay composition
//!
//! Draws region boxes, selection highlights and the selected-text banner
//! through the [`Surface`] and [`TextLayouter`] capabilities.

use crate::config::OverlayStyle;
use crate::overlay::OverlayState;

use super::surface::{RectF, Surface, TextBlock, TextLayouter};

/// Draw the full overlay for the current state
pub fn draw_overlay<L: TextLayouter>(
    state: &OverlayState,
    style: &OverlayStyle,
    surface: &mut dyn Surface,
    layouter: &L,
    view_width: f32,
) {
    draw_regions(state, style, surface);
    draw_selected_banner(state, style, surface, layouter, view_width);
}

/// Draw every region outline, with the highlight under selected ones
pub fn draw_regions(state: &OverlayState, style: &OverlayStyle, surface: &mut dyn Surface) {
    for (id, region) in state.ids() {
        let rect = RectF::from(region.bounds);
        // Highlight first so the outline stays visible on top
        if state.is_selected(id) {
            surface.fill_rect(rect, style.highlight_color);
        }
        surface.stroke_rect(rect, style.outline_color, style.outline_width);
    }
}

/// Draw the selected text in a rounded banner at the top-left corner
///
/// Returns the banner bounds, or `None` when nothing is selected.
pub fn draw_selected_banner<L: TextLayouter>(
    state: &OverlayState,
    style: &OverlayStyle,
    surface: &mut dyn Surface,
    layouter: &L,
    view_width: f32,
) -> Option<RectF> {
    let text = state.selected_text();
    if text.is_empty() {
        return None;
    }

    let padding = style.padding;
    let max_width = (view_width - padding * 2.0).max(0.0);
    let block = layouter.layout(&text, max_width);

    let bg_rect = RectF::from_xywh(padding, padding, block.width(), block.height());
    surface.fill_round_rect(bg_rect, style.corner_radius, style.banner_color);

    surface.push_translation(padding, padding);
    block.draw(surface);
    surface.pop_translation();

    Some(bg_rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayColor;
    use crate::domain::{Point, Rect, TextRegion};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Stroke(RectF, OverlayColor),
        Fill(RectF, OverlayColor),
        RoundFill(RectF, f32),
        Push(f32, f32),
        Pop,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn stroke_rect(&mut self, rect: RectF, color: OverlayColor, _stroke_width: f32) {
            self.ops.push(Op::Stroke(rect, color));
        }

        fn fill_rect(&mut self, rect: RectF, color: OverlayColor) {
            self.ops.push(Op::Fill(rect, color));
        }

        fn fill_round_rect(&mut self, rect: RectF, radius: f32, _color: OverlayColor) {
            self.ops.push(Op::RoundFill(rect, radius));
        }

        fn push_translation(&mut self, dx: f32, dy: f32) {
            self.ops.push(Op::Push(dx, dy));
        }

        fn pop_translation(&mut self) {
            self.ops.push(Op::Pop);
        }
    }

    /// Lays text out on one line at 10px per char, spanning the wrap width
    struct FixedLayouter;

    struct FixedBlock {
        width: f32,
        text_width: f32,
    }

    impl TextBlock for FixedBlock {
        fn width(&self) -> f32 {
            self.width
        }

        fn height(&self) -> f32 {
            30.0
        }

        fn draw(&self, surface: &mut dyn Surface) {
            surface.fill_rect(
                RectF::from_xywh(0.0, 0.0, self.text_width, 30.0),
                OverlayColor::WHITE,
            );
        }
    }

    impl TextLayouter for FixedLayouter {
        type Block = FixedBlock;

        fn layout(&self, text: &str, max_width: f32) -> FixedBlock {
            FixedBlock {
                width: max_width,
                text_width: (text.len() as f32 * 10.0).min(max_width),
            }
        }
    }

    fn state() -> OverlayState {
        let mut state = OverlayState::default();
        state.set_regions(vec![
            TextRegion::new("Hello", Rect::new(0, 0, 50, 20)),
            TextRegion::new("World", Rect::new(60, 0, 110, 20)),
        ]);
        state
    }

    #[test]
    fn test_no_selection_draws_outlines_only() {
        let style = OverlayStyle::default();
        let mut surface = Recorder::default();
        draw_overlay(&state(), &style, &mut surface, &FixedLayouter, 400.0);

        assert_eq!(
            surface.ops,
            vec![
                Op::Stroke(RectF::new(0.0, 0.0, 50.0, 20.0), style.outline_color),
                Op::Stroke(RectF::new(60.0, 0.0, 110.0, 20.0), style.outline_color),
            ]
        );
    }

    #[test]
    fn test_highlight_drawn_before_outline() {
        let style = OverlayStyle::default();
        let mut state = state();
        let world = state.hit_test(Point::new(70, 10)).unwrap();
        state.toggle_selection(world);

        let mut surface = Recorder::default();
        draw_regions(&state, &style, &mut surface);

        let world_rect = RectF::new(60.0, 0.0, 110.0, 20.0);
        assert_eq!(
            surface.ops,
            vec![
                Op::Stroke(RectF::new(0.0, 0.0, 50.0, 20.0), style.outline_color),
                Op::Fill(world_rect, style.highlight_color),
                Op::Stroke(world_rect, style.outline_color),
            ]
        );
    }

    #[test]
    fn test_banner_sized_to_block_at_padding() {
        let style = OverlayStyle::default();
        let mut state = state();
        for id in state.ids().map(|(id, _)| id).collect::<Vec<_>>() {
            state.toggle_selection(id);
        }

        let mut surface = Recorder::default();
        let banner =
            draw_selected_banner(&state, &style, &mut surface, &FixedLayouter, 400.0).unwrap();

        // Background spans the 352px wrap width, text only 110px of it
        assert_eq!(banner, RectF::new(24.0, 24.0, 376.0, 54.0));
        assert_eq!(
            surface.ops,
            vec![
                Op::RoundFill(banner, 16.0),
                Op::Push(24.0, 24.0),
                Op::Fill(RectF::new(0.0, 0.0, 110.0, 30.0), OverlayColor::WHITE),
                Op::Pop,
            ]
        );
    }

    #[test]
    fn test_banner_width_limited_by_view() {
        let style = OverlayStyle::default();
        let mut state = state();
        let hello = state.hit_test(Point::new(5, 5)).unwrap();
        state.toggle_selection(hello);

        let mut surface = Recorder::default();
        let banner =
            draw_selected_banner(&state, &style, &mut surface, &FixedLayouter, 68.0).unwrap();
        assert_eq!(banner.width(), 20.0);

        // Narrower than twice the padding clamps to zero instead of going negative
        let banner =
            draw_selected_banner(&state, &style, &mut surface, &FixedLayouter, 10.0).unwrap();
        assert_eq!(banner.width(), 0.0);
    }

    #[test]
    fn test_no_banner_without_selection() {
        let mut surface = Recorder::default();
        let banner = draw_selected_banner(
            &state(),
            &OverlayStyle::default(),
            &mut surface,
            &FixedLayouter,
            400.0,
        );
        assert!(banner.is_none());
        assert!(surface.ops.is_empty());
    }
}
