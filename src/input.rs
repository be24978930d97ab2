//! Input normalisation for the web front-end: keyboard keys and taps on
//! registered screen regions both become an [`InputEvent`].

use ratzilla::ratatui::layout::Rect;

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard (already lower-cased).
    Key(char),
    /// A tap on a registered target, identified by an action ID from
    /// `clicker::actions`.
    Click(u16),
}

/// A tappable region in terminal cell coordinates.
#[derive(Debug, Clone)]
pub struct TapTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Tap targets registered by the last rendered frame, plus the grid size
/// needed to map pixels back to cells.
pub struct TapTargets {
    pub targets: Vec<TapTarget>,
    pub cols: u16,
    pub rows: u16,
}

impl TapTargets {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            cols: 0,
            rows: 0,
        }
    }

    /// Start a new frame of size `cols` × `rows`; drops the old targets.
    pub fn begin_frame(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.targets.clear();
    }

    pub fn register(&mut self, rect: Rect, action_id: u16) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push(TapTarget { rect, action_id });
        }
    }

    /// Register one full-width row of `area`. Rows outside `area` are ignored.
    pub fn register_row(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.register(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Action under cell (`col`, `row`). Later registrations sit on top.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets
            .iter()
            .rev()
            .find(|t| {
                let r = &t.rect;
                col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|t| t.action_id)
    }

    /// Resolve a tap at pixel offset (`x`, `y`) inside a grid of
    /// `width` × `height` pixels.
    pub fn hit_pixel(&self, x: f64, y: f64, width: f64, height: f64) -> Option<u16> {
        let col = pixel_to_cell(x, width, self.cols)?;
        let row = pixel_to_cell(y, height, self.rows)?;
        self.hit_test(col, row)
    }
}

/// Convert a pixel offset along one axis into a cell index.
///
/// Returns `None` when the offset falls outside the grid or the grid is
/// degenerate.
pub fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    if cell >= cells {
        None
    } else {
        Some(cell)
    }
}

/// Narrow screens stack the panels instead of placing them side by side.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}
