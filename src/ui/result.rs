use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::game::Game;

pub fn render(frame: &mut Frame, area: Rect, game: &Game) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let summary = match game.total_questions() {
        Some(total) => classic_summary(game.score(), total),
        None => survival_summary(game),
    };

    let widget = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("r play again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn classic_summary(score: usize, total: usize) -> Vec<Line<'static>> {
    let percentage = calculate_percentage(score, total);

    vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER!",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from("Your final score is:".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", score, total),
            Style::default().fg(get_grade_color(percentage)).bold(),
        )),
        Line::from(""),
        Line::from(grade_message(percentage).fg(Color::DarkGray)),
    ]
}

fn survival_summary(game: &Game) -> Vec<Line<'static>> {
    let streak = game.score();
    let reason = match (game.time_left(), game.selected_answer()) {
        (Some(0), None) => "Time ran out!",
        _ => "Wrong answer!",
    };
    let flags = if streak == 1 { "flag" } else { "flags" };

    vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER!",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(reason.fg(Color::Red)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {} in a row", streak, flags),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(correct_answer_line(game)),
    ]
}

fn correct_answer_line(game: &Game) -> Span<'static> {
    let answer = &game.question().correct_answer;
    format!("That flag was {} {}", answer.flag_emoji(), answer.name).fg(Color::DarkGray)
}

fn calculate_percentage(score: usize, total: usize) -> u32 {
    if total > 0 {
        ((score as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    }
}

fn grade_message(percentage: u32) -> &'static str {
    match percentage {
        91.. => "Excellent! You're a flag master!",
        71..=90 => "Great job! You really know your flags.",
        51..=70 => "Not bad! A little more practice and you'll be an expert.",
        _ => "Good effort! Want to try again?",
    }
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        91.. => Color::Green,
        71..=90 => Color::Cyan,
        51..=70 => Color::Yellow,
        _ => Color::Red,
    }
}
