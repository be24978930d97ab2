//! Typing Clicker front-end: maps keys and taps onto the economy engine.

pub mod actions;
pub mod render;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use typing_clicker::economy::{EconomyEngine, EconomyError, PassiveTicks, Snapshot, TrackId};

use crate::input::{InputEvent, TapTargets};

/// Purchase hotkey for a track ('1', '2', '3' in display order).
pub fn track_key(track: TrackId) -> char {
    match track {
        TrackId::Practice => '1',
        TrackId::Auto => '2',
        TrackId::Multiplier => '3',
    }
}

pub struct TypingClicker {
    engine: EconomyEngine,
    /// Highest level already reported by [`take_level_up`](Self::take_level_up).
    announced_level: u32,
}

impl TypingClicker {
    pub fn new() -> Self {
        let engine = EconomyEngine::new();
        let announced_level = engine.snapshot().level;
        Self {
            engine,
            announced_level,
        }
    }

    /// Apply one input. Returns true if the event was recognised, even when
    /// the action itself did nothing (e.g. an unaffordable purchase).
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Click(action_id) => self.handle_action(action_id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            'c' | ' ' => {
                self.engine.click();
                true
            }
            'r' => {
                self.engine.reset_currency();
                true
            }
            '1'..='3' => {
                let idx = (key as u8 - b'1') as usize;
                match TrackId::from_index(idx) {
                    Some(track) => {
                        self.engine.purchase(track);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    fn handle_action(&mut self, action_id: u16) -> bool {
        match action_id {
            actions::TYPE_KEY => {
                self.engine.click();
                true
            }
            actions::RESET_CURRENCY => {
                self.engine.reset_currency();
                true
            }
            id => match actions::track_for(id) {
                Some(track) => {
                    self.engine.purchase(track);
                    true
                }
                None => false,
            },
        }
    }

    /// Advance passive income by one frame's elapsed milliseconds.
    pub fn frame(&mut self, dt_ms: i64) -> Result<PassiveTicks, EconomyError> {
        self.engine.advance_time(dt_ms)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// The current snapshot if the level rose since the last call, whether
    /// clicks or passive ticks caused it.
    pub fn take_level_up(&mut self) -> Option<Snapshot> {
        let snap = self.engine.snapshot();
        if snap.level > self.announced_level {
            self.announced_level = snap.level;
            Some(snap)
        } else {
            None
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, taps: &mut TapTargets) {
        render::render(&self.engine.snapshot(), f, area, taps);
    }
}
