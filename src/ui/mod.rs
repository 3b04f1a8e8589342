mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::GamePhase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.game().phase() {
        GamePhase::Playing | GamePhase::Answered => quiz::render(frame, area, app),
        GamePhase::Finished => result::render(frame, area, app.game()),
    }
}
