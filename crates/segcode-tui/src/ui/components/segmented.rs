//! Segmented code input component
//!
//! Renders a [`SegmentedCodeInput`] as a row of bordered single-cell boxes
//! and provides the terminal-side focus handle for each box.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use segcode_core::{FocusHandle, SegmentedCodeInput};

use crate::ui::theme::{apply_patch, Theme};

/// Width of one slot box, borders included
pub const SLOT_WIDTH: u16 = 5;

/// Height of one slot box, borders included
pub const SLOT_HEIGHT: u16 = 3;

/// Gap between slot boxes
pub const SLOT_GAP: u16 = 1;

/// Columns needed to draw `slots` boxes
pub fn required_width(slots: usize) -> u16 {
    let slots = u16::try_from(slots).unwrap_or(u16::MAX);
    slots
        .saturating_mul(SLOT_WIDTH + SLOT_GAP)
        .saturating_sub(SLOT_GAP)
}

/// Slot whose box owns the terminal cursor
///
/// Shared between the per-slot focus handles and the renderer.
#[derive(Debug, Clone, Default)]
pub struct CursorSlot(Rc<Cell<Option<usize>>>);

impl CursorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.0.get()
    }

    /// Focus handle for slot `index`
    pub fn handle(&self, index: usize) -> SlotFocus {
        SlotFocus {
            index,
            cursor: self.clone(),
        }
    }
}

/// Focus handle for one slot box
#[derive(Debug)]
pub struct SlotFocus {
    index: usize,
    cursor: CursorSlot,
}

impl FocusHandle for SlotFocus {
    fn focus(&self) {
        self.cursor.0.set(Some(self.index));
    }
}

/// Ratatui view over a segmented input
pub struct SegmentedCodeView<'a, H> {
    input: &'a SegmentedCodeInput<H>,
    theme: &'a Theme,
}

impl<'a, H: FocusHandle> SegmentedCodeView<'a, H> {
    pub fn new(input: &'a SegmentedCodeInput<H>, theme: &'a Theme) -> Self {
        Self { input, theme }
    }

    /// Area of slot `index` when the view is drawn into `area`
    ///
    /// Boxes are centred in `area` and clipped to it; a box that is clipped
    /// smaller than its full size is not drawn.
    pub fn slot_area(&self, area: Rect, index: usize) -> Option<Rect> {
        let width = required_width(self.input.slot_count());
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(SLOT_HEIGHT) / 2;
        let offset = u16::try_from(index)
            .ok()?
            .checked_mul(SLOT_WIDTH + SLOT_GAP)?;
        let slot = Rect::new(x.checked_add(offset)?, y, SLOT_WIDTH, SLOT_HEIGHT);
        let clipped = slot.intersection(area);
        (clipped == slot).then_some(slot)
    }

    /// Where the terminal cursor goes: inside the box of `slot`
    pub fn cursor_position(&self, area: Rect, slot: Option<usize>) -> Option<Position> {
        if self.input.is_disabled() {
            return None;
        }
        let rect = self.slot_area(area, slot?)?;
        Some(Position::new(rect.x + SLOT_WIDTH / 2, rect.y + 1))
    }

    fn slot_style(&self) -> Style {
        let presentation = &self.input.config().presentation;
        let base = self.theme.class(&presentation.slot_class);
        apply_patch(base, &presentation.slot_style)
    }
}

impl<H: FocusHandle> Widget for SegmentedCodeView<'_, H> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let presentation = &self.input.config().presentation;
        buf.set_style(area, self.theme.class(&presentation.container_class));

        let disabled = self.input.is_disabled();
        let focused = self.input.focused();
        let slot_style = self.slot_style();
        let placeholder = self.input.config().placeholder.as_str();

        for (index, slot) in self.input.code().iter().enumerate() {
            let Some(rect) = self.slot_area(area, index) else {
                continue;
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.slot_border(focused == Some(index), disabled))
                .style(slot_style);
            let inner = block.inner(rect);
            block.render(rect, buf);

            let centre = inner.x + inner.width / 2;
            match slot.value() {
                Some(digit) => {
                    let style = if disabled {
                        slot_style.patch(self.theme.slot_disabled())
                    } else {
                        slot_style
                    };
                    buf.set_string(centre, inner.y, digit.to_string(), style);
                }
                None if !placeholder.is_empty() => {
                    buf.set_string(centre, inner.y, placeholder, self.theme.placeholder());
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use segcode_core::{InputConfig, Presentation, SlotStyle};

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf.content[buf.index_of(x, y)].symbol().to_string())
            .collect()
    }

    fn mounted(config: InputConfig) -> (SegmentedCodeInput<SlotFocus>, CursorSlot) {
        let cursor = CursorSlot::new();
        let n = config.slot_count;
        let mut input = SegmentedCodeInput::new(config).unwrap();
        input.mount((0..n).map(|i| cursor.handle(i)));
        (input, cursor)
    }

    #[test]
    fn test_required_width() {
        assert_eq!(required_width(1), 5);
        assert_eq!(required_width(6), 35);
        assert_eq!(required_width(0), 0);
    }

    #[test]
    fn test_focus_handle_moves_cursor() {
        let (mut input, cursor) = mounted(InputConfig::new(3));
        assert_eq!(cursor.get(), Some(0));
        input.edit(0, "1");
        assert_eq!(cursor.get(), Some(1));
    }

    #[test]
    fn test_renders_digits_and_placeholders() {
        let (mut input, _) = mounted(InputConfig::new(3).with_placeholder("·"));
        input.paste("42");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 17, 3);
        let mut buf = Buffer::empty(area);

        SegmentedCodeView::new(&input, &theme).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "┌───┐ ┌───┐ ┌───┐");
        assert_eq!(row(&buf, 1), "│ 4 │ │ 2 │ │ · │");
        assert_eq!(row(&buf, 2), "└───┘ └───┘ └───┘");
    }

    #[test]
    fn test_presentation_classes_and_inline_style() {
        let mut classes = BTreeMap::new();
        classes.insert(
            "code-row".to_string(),
            SlotStyle {
                bg: Some("blue".to_string()),
                ..SlotStyle::default()
            },
        );
        let theme = Theme::default().with_classes(&classes);
        let presentation = Presentation {
            container_class: "code-row".to_string(),
            slot_style: SlotStyle {
                fg: Some("yellow".to_string()),
                underline: true,
                ..SlotStyle::default()
            },
            ..Presentation::default()
        };
        let (mut input, _) = mounted(InputConfig::new(2).with_presentation(presentation));
        input.paste("7");
        let area = Rect::new(0, 0, 13, 3);
        let mut buf = Buffer::empty(area);

        SegmentedCodeView::new(&input, &theme).render(area, &mut buf);

        let digit = &buf.content[buf.index_of(3, 1)];
        assert_eq!(digit.symbol(), "7");
        assert_eq!(digit.fg, Color::Yellow);
        assert!(digit.modifier.contains(Modifier::UNDERLINED));
        assert!(digit.modifier.contains(Modifier::BOLD));

        let outside = &buf.content[buf.index_of(12, 1)];
        assert_eq!(outside.bg, Color::Blue);
    }

    #[test]
    fn test_focused_slot_uses_focus_border() {
        let (input, _) = mounted(InputConfig::new(2));
        let theme = Theme::default();
        let area = Rect::new(0, 0, 11, 3);
        let mut buf = Buffer::empty(area);

        SegmentedCodeView::new(&input, &theme).render(area, &mut buf);

        let focused = &buf.content[buf.index_of(0, 0)];
        let other = &buf.content[buf.index_of(6, 0)];
        assert_eq!(focused.fg, theme.border_focused);
        assert_eq!(other.fg, theme.border);
    }

    #[test]
    fn test_boxes_are_centred() {
        let (input, _) = mounted(InputConfig::new(2));
        let theme = Theme::default();
        let view = SegmentedCodeView::new(&input, &theme);
        let area = Rect::new(0, 0, 21, 7);

        assert_eq!(view.slot_area(area, 0), Some(Rect::new(5, 2, 5, 3)));
        assert_eq!(view.slot_area(area, 1), Some(Rect::new(11, 2, 5, 3)));
        assert_eq!(
            view.cursor_position(area, Some(1)),
            Some(Position::new(13, 3))
        );
    }

    #[test]
    fn test_clipped_boxes_are_skipped() {
        let (input, _) = mounted(InputConfig::new(4));
        let theme = Theme::default();
        let view = SegmentedCodeView::new(&input, &theme);
        let area = Rect::new(0, 0, 12, 3);

        assert!(view.slot_area(area, 0).is_some());
        assert!(view.slot_area(area, 3).is_none());
    }

    #[test]
    fn test_disabled_has_no_cursor() {
        let (input, _) = mounted(InputConfig::new(2).with_disabled(true));
        let theme = Theme::default();
        let view = SegmentedCodeView::new(&input, &theme);
        assert_eq!(view.cursor_position(Rect::new(0, 0, 20, 3), Some(0)), None);
    }
}
