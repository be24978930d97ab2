mod clicker;
mod input;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use clicker::TypingClicker;
use input::{InputEvent, TapTargets};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use typing_clicker::time::FrameClock;

/// Resolve a mouse position against the grid container's bounding rect.
fn dom_hit_test(mouse_x: u32, mouse_y: u32, taps: &TapTargets) -> Option<u16> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();
    let hit = taps.hit_pixel(click_x, click_y, rect.width(), rect.height());

    web_sys::console::log_1(
        &format!(
            "tap: x={}, y={}, action={:?}, targets={}",
            mouse_x,
            mouse_y,
            hit,
            taps.targets.len()
        )
        .into(),
    );

    hit
}

/// `performance.now()` in milliseconds, if the browser exposes it.
fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    // Engine `tracing` events go to the browser console; per-second debug
    // events are filtered out.
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );

    let game = Rc::new(RefCell::new(TypingClicker::new()));
    let taps = Rc::new(RefCell::new(TapTargets::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch tap handler
    terminal.on_mouse_event({
        let game = game.clone();
        let taps = taps.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let taps = taps.borrow();
                if taps.cols == 0 || taps.rows == 0 {
                    return;
                }
                dom_hit_test(mouse_event.x, mouse_event.y, &taps)
            };

            if let Some(action_id) = action {
                game.borrow_mut()
                    .handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                game.borrow_mut()
                    .handle_input(&InputEvent::Key(c.to_ascii_lowercase()));
            }
        }
    });

    terminal.draw_web(move |f| {
        let size = f.area();
        let mut game = game.borrow_mut();

        let dt = now_ms().map_or(0, |now| clock.borrow_mut().update(now));
        if let Err(err) = game.frame(dt) {
            web_sys::console::error_1(&err.to_string().into());
        }
        // Covers level-ups from taps and keys since the last frame too.
        if let Some(snap) = game.take_level_up() {
            if let Ok(json) = serde_json::to_string(&snap) {
                web_sys::console::log_1(&format!("level up: {}", json).into());
            }
        }

        let mut taps = taps.borrow_mut();
        taps.begin_frame(size.width, size.height);
        game.render(f, size, &mut taps);
    });

    Ok(())
}
