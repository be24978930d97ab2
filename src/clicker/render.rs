//! Typing Clicker rendering.
//!
//! Every function here reads a [`Snapshot`]; nothing in the front-end touches
//! the engine state directly.

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use typing_clicker::economy::logic::format_number;
use typing_clicker::economy::{Snapshot, TrackId, TrackView};

use super::actions::{buy_track, RESET_CURRENCY, TYPE_KEY};
use super::track_key;
use crate::input::{is_narrow_layout, TapTargets};
use crate::widgets::{TapButton, TapList};

// ── Palette ─────────────────────────────────────────────────────
const TEXT: Color = Color::Rgb(235, 235, 235);
const PANEL: Color = Color::Rgb(58, 92, 130);
const PANEL_BORDER: Color = Color::Rgb(120, 160, 200);
const BUTTON: Color = Color::Rgb(80, 140, 200);
const BUTTON_BORDER: Color = Color::Rgb(180, 210, 240);
const LEVEL_BAR_BG: Color = Color::Rgb(40, 40, 50);
const LEVEL_BAR_FILL: Color = Color::Rgb(90, 170, 120);
const DIM: Color = Color::DarkGray;

const HELP_TEXT: &str = "[C/Space] Type  [1-3] Buy upgrade  [R] Reset currency";

pub fn render(snap: &Snapshot, f: &mut Frame, area: Rect, taps: &mut TapTargets) {
    let help = help_paragraph();
    // Wrapped height including borders; at least one text row.
    let help_height = (help.line_count(area.width) as u16).max(3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(help_height),
        ])
        .split(area);

    render_title(f, chunks[0]);
    if is_narrow_layout(area.width) {
        render_narrow(snap, f, chunks[1], taps);
    } else {
        render_wide(snap, f, chunks[1], taps);
    }
    f.render_widget(help, chunks[2]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Typing Clicker",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    );
    f.render_widget(title, area);
}

fn help_paragraph() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(HELP_TEXT, Style::default().fg(DIM))))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DIM)),
        )
}

/// Left: power, keyboard, level. Right: one box per upgrade track.
fn render_wide(snap: &Snapshot, f: &mut Frame, area: Rect, taps: &mut TapTargets) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(5),
        ])
        .split(columns[0]);

    render_power(snap, f, left[0]);
    render_keyboard(f, left[1], taps);
    render_level_bar(snap, f, left[2]);
    render_level_info(snap, f, left[3], taps);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(columns[1]);

    for (track, slot) in snap.tracks.iter().zip(right.iter()) {
        render_track_box(snap, track, f, *slot, taps);
    }
}

/// Everything stacked; tracks collapse to two lines each.
fn render_narrow(snap: &Snapshot, f: &mut Frame, area: Rect, taps: &mut TapTargets) {
    let tracks_height = snap.tracks.len() as u16 * 2 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(tracks_height),
        ])
        .split(area);

    render_power(snap, f, chunks[0]);
    render_keyboard(f, chunks[1], taps);
    render_level_bar(snap, f, chunks[2]);
    render_level_info(snap, f, chunks[3], taps);
    render_track_list(snap, f, chunks[4], taps);
}

fn render_power(snap: &Snapshot, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format_number(snap.currency),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}/click  {}/sec", snap.power_per_click, snap.power_per_second),
            Style::default().fg(DIM),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER))
            .title(" Typing Power "),
    );
    f.render_widget(widget, area);
}

fn render_keyboard(f: &mut Frame, area: Rect, taps: &mut TapTargets) {
    TapButton::new(TYPE_KEY)
        .line(Span::styled(
            "⌨  TYPE  ⌨",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .line(Span::styled("tap or press C", Style::default().fg(BUTTON_BORDER)))
        .style(Style::default().bg(BUTTON))
        .border_style(Style::default().fg(BUTTON_BORDER))
        .render(f, area, taps);
}

fn render_level_bar(snap: &Snapshot, f: &mut Frame, area: Rect) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        )
        .gauge_style(Style::default().fg(LEVEL_BAR_FILL).bg(LEVEL_BAR_BG))
        .ratio(snap.level_progress)
        .label(progress_label(snap.level_progress));
    f.render_widget(gauge, area);
}

fn render_level_info(snap: &Snapshot, f: &mut Frame, area: Rect, taps: &mut TapTargets) {
    let mut list = TapList::new();
    list.push(Line::from(Span::styled(
        format!("Lv {}", snap.level),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )));
    list.push(Line::from(Span::styled(
        format!("Next: {} XP", format_number(snap.next_level_xp)),
        Style::default().fg(TEXT),
    )));
    list.push_tappable(
        Line::from(Span::styled("[R] Reset currency", Style::default().fg(DIM))),
        RESET_CURRENCY,
    );

    list.register_targets(area, taps, 1, 1);
    let widget = Paragraph::new(list.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    );
    f.render_widget(widget, area);
}

fn render_track_box(
    snap: &Snapshot,
    track: &TrackView,
    f: &mut Frame,
    area: Rect,
    taps: &mut TapTargets,
) {
    let (border, cost_style) = if track.affordable {
        (
            BUTTON_BORDER,
            Style::default()
                .fg(TEXT)
                .bg(BUTTON)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (PANEL_BORDER, Style::default().fg(DIM))
    };

    let lines = vec![
        Line::from(Span::styled(
            effect_line(snap, track.id),
            Style::default().fg(TEXT),
        )),
        Line::from(Span::styled(
            format!("Level {}", track.level),
            Style::default().fg(TEXT),
        )),
        Line::from(Span::styled(
            format!(" [{}] Cost: {} ", track_key(track.id), format_number(track.cost)),
            cost_style,
        )),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(PANEL))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", track.label)),
        );
    f.render_widget(widget, area);
    taps.register(area, buy_track(track.id));
}

fn render_track_list(snap: &Snapshot, f: &mut Frame, area: Rect, taps: &mut TapTargets) {
    let mut list = TapList::new();
    for track in &snap.tracks {
        let style = if track.affordable {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        list.push_tappable(
            Line::from(Span::styled(
                format!(
                    "[{}] {} Lv{}  Cost: {}",
                    track_key(track.id),
                    track.label,
                    track.level,
                    format_number(track.cost)
                ),
                style,
            )),
            buy_track(track.id),
        );
        list.push(Line::from(Span::styled(
            format!("    {}", effect_line(snap, track.id)),
            Style::default().fg(DIM),
        )));
    }

    list.register_targets(area, taps, 1, 1);
    let widget = Paragraph::new(list.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER))
            .title(" Upgrades "),
    );
    f.render_widget(widget, area);
}

/// Current effect of a track, shown under its name.
pub fn effect_line(snap: &Snapshot, track: TrackId) -> String {
    match track {
        TrackId::Practice => format!("+ {} Per Click", format_number(snap.power_per_click)),
        TrackId::Auto => format!("+ {} Per Second", format_number(snap.power_per_second)),
        TrackId::Multiplier => format!("× {:.2} All", snap.multiplier),
    }
}

pub fn progress_label(progress: f64) -> String {
    format!("{:.1}%", progress * 100.0)
}
