//! Play field rendering: starfield, terrain silhouette, lander sprite,
//! thrust flame, and flight instruments. Everything is drawn into a
//! cell buffer first and flushed as batched spans.

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::{LanderAngle, Session, MAX_LANDING_SPEED, MAX_LANDING_TILT_DEG};

/// One cell of the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

pub fn render_play_field(frame: &mut Frame, area: Rect, session: &Session) {
    if area.width < 10 || area.height < 2 {
        return;
    }

    let field = session.field();
    let lander = session.lander();
    let terrain = session.terrain();

    let cols = area.width as usize;
    let rows = area.height as usize;
    let x_scale = cols as f64 / field.width;
    let y_scale = rows as f64 / field.height;

    let mut buffer = vec![vec![Cell::default(); cols]; rows];

    // -- Starfield --
    // Fixed pseudo-random scatter so the sky does not shimmer between
    // frames.
    for (row_idx, row) in buffer.iter_mut().enumerate() {
        for (col_idx, cell) in row.iter_mut().enumerate() {
            let hash = (row_idx * 137 + col_idx * 251 + 97) % 200;
            if hash < 3 {
                cell.ch = '.';
                cell.fg = Color::DarkGray;
            } else if hash == 11 {
                cell.ch = '*';
                cell.fg = Color::Rgb(80, 80, 100);
            }
        }
    }

    // -- Terrain silhouette --
    for col in 0..cols {
        let game_x = (col as f64 + 0.5) / x_scale;
        let surface_row = (terrain.surface_y(game_x) * y_scale).round() as i64;
        if surface_row >= rows as i64 {
            continue;
        }
        for row in surface_row.max(0)..rows as i64 {
            let cell = &mut buffer[row as usize][col];
            if row == surface_row {
                *cell = Cell {
                    ch: '^',
                    fg: Color::Rgb(140, 120, 100),
                    bg: Color::Reset,
                };
            } else {
                let speckle = if (row as usize + col) % 3 == 0 { '.' } else { ' ' };
                *cell = Cell {
                    ch: speckle,
                    fg: Color::Rgb(60, 50, 40),
                    bg: Color::Rgb(30, 25, 20),
                };
            }
        }
    }

    // -- Thrust flame (under the craft so the body overdraws overlap) --
    let lander_col = (lander.x * x_scale).round() as i64;
    let lander_row = (lander.y * y_scale).round() as i64;

    if lander.thruster_on {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let long_flame = (millis / 120).is_multiple_of(2);
        let flame_color = if (millis / 60) % 2 == 0 {
            Color::Yellow
        } else {
            Color::LightRed
        };
        for (ch, (dx, dy)) in flame_sprite(lander.sprite_angle(), long_flame) {
            put(&mut buffer, lander_row + dy, lander_col + dx, ch, flame_color);
        }
    }

    // -- Lander --
    let body_color = if lander.thruster_on {
        Color::Red
    } else {
        Color::Yellow
    };
    for (ch, (dx, dy)) in lander_sprite(lander.sprite_angle()) {
        put(&mut buffer, lander_row + dy, lander_col + dx, ch, body_color);
    }

    // -- Flight instruments, top right --
    let heading = lander.heading();
    let readouts = [
        (format!("ALTITUDE: {:.0}", lander.altitude), Color::White),
        (
            format!("HORIZONTAL SPEED: {:.0}", lander.x_speed),
            speed_color(lander.x_speed),
        ),
        (
            format!("VERTICAL SPEED: {:.0}", lander.y_speed),
            speed_color(lander.y_speed),
        ),
        (format!("ROTATION: {:.0}", heading), tilt_color(heading)),
    ];
    for (row, (text, color)) in readouts.iter().enumerate() {
        let col = cols.saturating_sub(text.chars().count() + 1);
        write_text(&mut buffer, row, col, text, *color);
    }

    // -- Flush: batch runs of identical style into spans --
    for (row_idx, row) in buffer.iter().enumerate() {
        let mut spans = Vec::new();
        let mut current_text = String::new();
        let mut current_fg = row[0].fg;
        let mut current_bg = row[0].bg;

        for cell in row {
            if cell.fg != current_fg || cell.bg != current_bg {
                if !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
            }
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
    }
}

/// Write a character if it falls inside the buffer. Keeps the cell
/// background so sprites sit on whatever they overlap.
fn put(buffer: &mut [Vec<Cell>], row: i64, col: i64, ch: char, fg: Color) {
    if row < 0 || col < 0 {
        return;
    }
    let (row, col) = (row as usize, col as usize);
    if row >= buffer.len() || col >= buffer[row].len() {
        return;
    }
    buffer[row][col].ch = ch;
    buffer[row][col].fg = fg;
}

fn write_text(buffer: &mut [Vec<Cell>], row: usize, col: usize, text: &str, fg: Color) {
    if row >= buffer.len() {
        return;
    }
    let width = buffer[row].len();
    for (i, ch) in text.chars().enumerate() {
        let col = col + i;
        if col >= width {
            break;
        }
        buffer[row][col] = Cell {
            ch,
            fg,
            bg: Color::Reset,
        };
    }
}

/// Character cells for the craft at a given attitude, as offsets from
/// its position.
fn lander_sprite(angle: LanderAngle) -> Vec<(char, (i64, i64))> {
    match angle {
        LanderAngle::Straight => vec![
            ('^', (0, -1)),
            ('|', (0, 0)),
            ('/', (-1, 1)),
            ('\\', (1, 1)),
        ],
        LanderAngle::Left => vec![
            ('/', (-1, -1)),
            ('|', (0, 0)),
            ('/', (-1, 1)),
            ('_', (1, 1)),
        ],
        LanderAngle::Right => vec![
            ('\\', (1, -1)),
            ('|', (0, 0)),
            ('_', (-1, 1)),
            ('\\', (1, 1)),
        ],
        LanderAngle::HardLeft => vec![
            ('<', (-2, 0)),
            ('=', (-1, 0)),
            ('[', (0, 0)),
            (']', (1, 0)),
        ],
        LanderAngle::HardRight => vec![
            ('[', (-1, 0)),
            (']', (0, 0)),
            ('=', (1, 0)),
            ('>', (2, 0)),
        ],
        LanderAngle::Inverted => vec![
            ('/', (-1, -1)),
            ('\\', (1, -1)),
            ('|', (0, 0)),
            ('v', (0, 1)),
        ],
    }
}

/// Exhaust cells, trailing opposite the nose.
fn flame_sprite(angle: LanderAngle, long: bool) -> Vec<(char, (i64, i64))> {
    let mut cells: Vec<(char, (i64, i64))> = match angle {
        LanderAngle::Straight => vec![('*', (0, 2))],
        LanderAngle::Left => vec![('*', (1, 2))],
        LanderAngle::Right => vec![('*', (-1, 2))],
        LanderAngle::HardLeft => vec![('*', (2, 0))],
        LanderAngle::HardRight => vec![('*', (-2, 0))],
        LanderAngle::Inverted => vec![('*', (0, -2))],
    };
    if long {
        let (_, (dx, dy)) = cells[0];
        cells.push(('.', (dx + dx.signum(), dy + dy.signum())));
    }
    cells
}

fn speed_color(speed: f64) -> Color {
    if speed.abs() < MAX_LANDING_SPEED {
        Color::Green
    } else if speed.abs() < MAX_LANDING_SPEED * 2.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn tilt_color(heading: f64) -> Color {
    if heading.abs() < MAX_LANDING_TILT_DEG {
        Color::Green
    } else if heading.abs() < MAX_LANDING_TILT_DEG * 4.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
