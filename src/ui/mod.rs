//! Terminal rendering. Everything here draws into a ratatui frame;
//! nothing feeds back into the flight model.

mod scene;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::game::Session;

/// Main UI drawing function, called once per frame.
pub fn draw(frame: &mut Frame, session: &Session) {
    let area = frame.size();

    if area.width < 20 || area.height < 10 {
        render_too_small(frame, area);
        return;
    }

    let layout = create_layout(frame, area);
    scene::render_play_field(frame, layout.content, session);
    render_flight_status(frame, layout.status_bar, session);

    if session.lander().is_down() {
        render_flight_over(frame, layout.content, session);
    }
}

struct ScreenLayout {
    content: Rect,
    status_bar: Rect,
}

/// Clears the screen, draws the outer frame, and carves out the play
/// field and the status bar.
fn create_layout(frame: &mut Frame, area: Rect) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Descent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Play field
            Constraint::Length(2), // Status + controls
        ])
        .split(inner);

    ScreenLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

fn render_flight_status(frame: &mut Frame, area: Rect, session: &Session) {
    let lander = session.lander();

    if lander.landed {
        render_status_bar(
            frame,
            area,
            "Touchdown",
            Color::Green,
            &[("[Enter]", "Restart"), ("[Q]", "Quit")],
        );
    } else if lander.crashed {
        render_status_bar(
            frame,
            area,
            "Crashed",
            Color::Red,
            &[("[Enter]", "Restart"), ("[Q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Descending",
            Color::LightBlue,
            &[
                ("[L/R]", "Rotate"),
                ("[Space/Up]", "Thrust"),
                ("[Q]", "Quit"),
            ],
        );
    }
}

/// Two-line status bar: state on top, key hints below.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    let status_line = Line::from(Span::styled(
        status_text.to_string(),
        Style::default()
            .fg(status_color)
            .add_modifier(Modifier::BOLD),
    ));

    let mut control_spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            control_spans.push(Span::raw("  "));
        }
        control_spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::White),
        ));
        control_spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(vec![status_line, Line::from(control_spans)])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Centered verdict box over the play field. The scene stays visible
/// around it so the wreck (or the parked craft) remains on screen.
fn render_flight_over(frame: &mut Frame, area: Rect, session: &Session) {
    let (title, color) = if session.lander().landed {
        ("LANDED!", Color::Green)
    } else {
        ("YOU'RE DEAD!", Color::Red)
    };

    let modal_width = area.width.min(30);
    let modal_height = area.height.min(5);
    let modal_area = Rect::new(
        area.x + (area.width - modal_width) / 2,
        area.y + (area.height - modal_height) / 2,
        modal_width,
        modal_height,
    );

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press enter to restart",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Terminal too small")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
