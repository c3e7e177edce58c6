pub mod flappy_scene;
pub mod game_common;

use crate::core::config::GameConfig;
use crate::game::types::Snapshot;
use flappy_scene::{render_flappy, HudInfo};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function for the game screen.
pub fn draw_game(frame: &mut Frame, snapshot: &Snapshot, config: &GameConfig, hud: &HudInfo) {
    let size = frame.size();
    render_flappy(frame, size, snapshot, config, hud);
}

/// Draw the smoke-test screen: an empty bordered window.
pub fn draw_smoke_test(frame: &mut Frame) {
    let area = frame.size();
    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let text = Paragraph::new(vec![
        Line::from("Window created."),
        Line::from(format!("{}x{} cells", area.width, area.height)),
    ])
    .alignment(Alignment::Center);
    let y = inner.y + inner.height / 2;
    frame.render_widget(
        text,
        Rect::new(inner.x, y.saturating_sub(1), inner.width, inner.height.min(2)),
    );
}
