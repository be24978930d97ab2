//! Reusable tappable UI components.
//!
//! Each component renders itself and registers its tap targets in the same
//! call, so what is drawn and what reacts to taps cannot drift apart.
//!
//! - [`TapButton`]: bordered, centered button; the whole box is tappable.
//! - [`TapList`]: vertical list with per-line tap targets.

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::TapTargets;

// ── TapButton ──────────────────────────────────────────────────

/// A bordered button with centered text.
pub struct TapButton<'a> {
    lines: Vec<Line<'a>>,
    style: Style,
    border_style: Style,
    action_id: u16,
}

impl<'a> TapButton<'a> {
    pub fn new(action_id: u16) -> Self {
        Self {
            lines: Vec::new(),
            style: Style::default(),
            border_style: Style::default(),
            action_id,
        }
    }

    pub fn line(mut self, line: impl Into<Line<'a>>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Render vertically centered inside `area` and register the whole area.
    pub fn render(self, f: &mut Frame, area: Rect, taps: &mut TapTargets) {
        let inner_height = area.height.saturating_sub(2) as usize;
        let pad = inner_height.saturating_sub(self.lines.len()) / 2;
        let mut lines: Vec<Line> = vec![Line::from(""); pad];
        lines.extend(self.lines);

        let widget = Paragraph::new(lines)
            .style(self.style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            );
        f.render_widget(widget, area);
        taps.register(area, self.action_id);
    }
}

// ── TapList ────────────────────────────────────────────────────

/// Lines paired with optional tap actions.
///
/// ```ignore
/// let mut list = TapList::new();
/// list.push(Line::from("Upgrades"));
/// list.push_tappable(Line::from("[1] Typing Skill"), buy_track(TrackId::Practice));
/// list.register_targets(area, &mut taps, 1, 1);
/// f.render_widget(Paragraph::new(list.into_lines()).block(block), area);
/// ```
pub struct TapList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> TapList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line that triggers `action_id` when tapped.
    pub fn push_tappable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len() as u16, action_id));
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register one row per tappable line. Lines are assumed not to wrap.
    ///
    /// `top_offset` / `bottom_offset` are the rows taken by borders.
    pub fn register_targets(
        &self,
        area: Rect,
        taps: &mut TapTargets,
        top_offset: u16,
        bottom_offset: u16,
    ) {
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action_id) in &self.actions {
            let row = area.y + top_offset + line_idx;
            if row < content_end {
                taps.register_row(area, row, action_id);
            }
        }
    }
}
