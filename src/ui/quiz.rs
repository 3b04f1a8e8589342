use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::game::Game;
use crate::models::{Country, GamePhase};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let chunks = Layout::vertical([
        Constraint::Length(1), // Scoreboard
        Constraint::Length(1), // Timer
        Constraint::Length(5), // Flag
        Constraint::Min(6),    // Options
        Constraint::Length(6), // Hint or details
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_scoreboard(frame, chunks[0], game);
    if let Some(time_left) = game.time_left() {
        render_timer(frame, chunks[1], time_left, game.time_limit(), game.is_timer_paused());
    }
    render_flag(frame, chunks[2], &game.question().correct_answer);
    render_options(frame, chunks[3], game, app.selected_option());

    match game.phase() {
        GamePhase::Answered if game.last_answer_correct() == Some(true) && game.time_left().is_some() => {
            render_details(frame, chunks[4], game)
        }
        GamePhase::Answered => render_verdict(frame, chunks[4], game),
        _ => render_hint(frame, chunks[4], game),
    }

    render_controls(frame, chunks[5], game);
}

fn render_scoreboard(frame: &mut Frame, area: Rect, game: &Game) {
    let question = match game.total_questions() {
        Some(total) => format!("Question: {} / {}", game.question_number(), total),
        None => format!("Question: {}", game.question_number()),
    };

    let mut spans = vec![
        Span::styled("Score: ", Style::default().fg(Color::Blue).bold()),
        Span::raw(game.score().to_string()),
        Span::raw("   "),
        Span::styled(question, Style::default().fg(Color::Gray)),
    ];
    if let Some(hints) = game.hints_remaining() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("Hints: {}", hints),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_timer(frame: &mut Frame, area: Rect, time_left: u32, total: u32, paused: bool) {
    let ratio = if total > 0 {
        (time_left as f64 / total as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let label = if paused {
        format!("{}s (paused)", time_left)
    } else {
        format!("{}s", time_left)
    };

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(timer_color(ratio)).bg(Color::DarkGray))
        .ratio(ratio)
        .label(label);
    frame.render_widget(widget, area);
}

fn timer_color(ratio: f64) -> Color {
    if ratio < 0.25 {
        Color::Red
    } else if ratio < 0.5 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn render_flag(frame: &mut Frame, area: Rect, country: &Country) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            country.flag_emoji(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Which country's flag is this? ")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, game: &Game, selected: usize) {
    let question = game.question();
    let answered = game.phase() == GamePhase::Answered;

    let lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_cursor = index == selected && !answered;
            let style = option_style(game, option, is_cursor);
            let marker = if is_cursor { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{}. ", index + 1), style),
                Span::styled(option.name.as_str(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn option_style(game: &Game, option: &Country, is_cursor: bool) -> Style {
    if game.phase() == GamePhase::Answered {
        if option.same_as(&game.question().correct_answer) {
            return Style::default().fg(Color::Green).bold();
        }
        if game.selected_answer().is_some_and(|s| s.same_as(option)) {
            return Style::default().fg(Color::Red).bold();
        }
        return Style::default().fg(Color::DarkGray);
    }

    if is_cursor {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_hint(frame: &mut Frame, area: Rect, game: &Game) {
    let Some(hints) = game.hints_remaining() else {
        return;
    };

    let hint = game.hint();
    let text = if hint.loading {
        Line::from("Thinking of a hint...".fg(Color::Yellow))
    } else if let Some(text) = &hint.text {
        Line::from(text.as_str().italic())
    } else if hints == 0 {
        Line::from("No hints left.".fg(Color::DarkGray))
    } else {
        Line::from("Press h for a hint.".fg(Color::DarkGray))
    };

    frame.render_widget(panel(text, " Hint ", Color::Yellow), area);
}

fn render_details(frame: &mut Frame, area: Rect, game: &Game) {
    let country = &game.question().correct_answer;
    let state = game.details();

    let mut lines = vec![Line::from(Span::styled(
        format!("Correct! It's {}", country.name),
        Style::default().fg(Color::Green).bold(),
    ))];
    match &state.details {
        Some(details) => {
            lines.push(Line::from(vec![
                Span::styled("Capital: ", Style::default().fg(Color::DarkGray)),
                Span::raw(details.capital.as_str()),
            ]));
            lines.push(Line::from(format!("\"{}\"", details.fun_fact).italic()));
        }
        None => lines.push(Line::from("Looking up the details...".fg(Color::Yellow))),
    }
    lines.push(Line::from(country.flag_url().fg(Color::DarkGray)));

    frame.render_widget(panel(lines, " Details ", Color::Green), area);
}

fn render_verdict(frame: &mut Frame, area: Rect, game: &Game) {
    let country = &game.question().correct_answer;
    let line = if game.last_answer_correct() == Some(true) {
        Line::from(format!("Correct! It's {}", country.name).fg(Color::Green))
    } else {
        Line::from(format!("Wrong! It was {}", country.name).fg(Color::Red))
    };

    frame.render_widget(panel(line, " Result ", Color::DarkGray), area);
}

fn panel<'a>(content: impl Into<Text<'a>>, title: &'a str, color: Color) -> Paragraph<'a> {
    Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .title(title)
            .padding(Padding::horizontal(1)),
    )
}

fn render_controls(frame: &mut Frame, area: Rect, game: &Game) {
    let text = match (game.phase(), game.hints_remaining()) {
        (GamePhase::Answered, Some(_)) if game.last_answer_correct() == Some(true) => {
            "enter/n next question  ·  q quit"
        }
        (GamePhase::Answered, _) => "q quit",
        (_, Some(_)) => "j/k navigate  ·  1-9/enter answer  ·  h hint  ·  q quit",
        (_, None) => "j/k navigate  ·  1-9/enter answer  ·  q quit",
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
