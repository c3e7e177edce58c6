//! UI rendering for the Flappy Bird game screen.

use crate::core::config::GameConfig;
use crate::game::types::{Collision, Snapshot};
use crate::ui::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Host-side facts shown next to the play field.
#[derive(Debug, Clone)]
pub struct HudInfo {
    pub elapsed: f64,
    pub seed: u64,
    pub collision: Option<Collision>,
}

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    Bird,
}

/// Maps world coordinates (y up) onto a grid of terminal cells (row 0 at top).
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: f64,
    pub world_height: f64,
}

impl Viewport {
    /// World-space center of a cell.
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        let x = (col as f64 + 0.5) * self.world_width / self.cols as f64;
        let y = self.world_height - (row as f64 + 0.5) * self.world_height / self.rows as f64;
        (x, y)
    }

    /// Cell containing a world point, if it is on screen.
    pub fn cell_of(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if x < 0.0 || x >= self.world_width || y <= 0.0 || y > self.world_height {
            return None;
        }
        let col = (x / self.world_width * self.cols as f64).floor() as u16;
        let row = ((self.world_height - y) / self.world_height * self.rows as f64).floor() as u16;
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }
}

/// Classify one cell of the play field.
pub fn cell_kind(snapshot: &Snapshot, config: &GameConfig, view: &Viewport, col: u16, row: u16) -> Cell {
    if view.cell_of(config.bird_x, snapshot.bird_y) == Some((col, row)) {
        return Cell::Bird;
    }

    let (x, y) = view.cell_center(col, row);
    for pipe in &snapshot.pipes {
        if x >= pipe.x && x < pipe.x + config.pipe_width {
            let (gap_bottom, gap_top) = pipe.gap_band(config.world_height, config.pipe_gap);
            if y < gap_bottom || y > gap_top {
                return Cell::Pipe;
            }
        }
    }
    Cell::Sky
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &Snapshot, config: &GameConfig, hud: &HudInfo) {
    let border = if snapshot.game_over {
        Color::Red
    } else {
        Color::Cyan
    };
    let layout = create_game_layout(frame, area, " Flappy Bird ", border, 24);

    render_play_area(frame, layout.content, snapshot, config);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot, hud);

    if snapshot.game_over {
        let message = hud
            .collision
            .map(|c| format!("You {} after {:.1}s", c.describe(), hud.elapsed))
            .unwrap_or_else(|| format!("Crashed after {:.1}s", hud.elapsed));
        render_game_over_banner(frame, layout.content, Color::Red, "GAME OVER", &message);
    }
}

/// Render the play field with bird and pipes.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot, config: &GameConfig) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let view = Viewport {
        cols: area.width,
        rows: area.height,
        world_width: config.world_width,
        world_height: config.world_height,
    };

    let bird_char = if snapshot.bird_velocity > 100.0 {
        "▲"
    } else if snapshot.bird_velocity < -300.0 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let span = match cell_kind(snapshot, config, &view, col, row) {
                Cell::Bird => Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::Sky => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if snapshot.game_over {
        render_status_bar(frame, area, "Game over", Color::Red, &[("[Esc/q]", "Quit")]);
    } else {
        render_status_bar(
            frame,
            area,
            "Fly through the gaps!",
            Color::Green,
            &[("[Space/Up/Enter]", "Jump"), ("[Esc/q]", "Quit")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot, hud: &HudInfo) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Height: ", label),
            Span::styled(format!("{:.0}", snapshot.bird_y), value),
        ]),
        Line::from(vec![
            Span::styled(" Speed:  ", label),
            Span::styled(format!("{:+.0}", snapshot.bird_velocity), value),
        ]),
        Line::from(vec![
            Span::styled(" Pipes:  ", label),
            Span::styled(format!("{}", snapshot.pipes.len()), value),
        ]),
        Line::from(vec![
            Span::styled(" Time:   ", label),
            Span::styled(format!("{:.1}s", hud.elapsed), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Seed: ", label),
            Span::styled(format!("{}", hud.seed), Style::default().fg(Color::Cyan)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
