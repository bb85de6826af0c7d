//! View layer - pure render functions over the app state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use skycast_core::ConditionIcon;

use super::state::{App, ViewState};

// Palette lifted from the app's dark theme.
const BG: Color = Color::Rgb(15, 23, 42);
const TEXT: Color = Color::Rgb(226, 232, 240);
const ACCENT: Color = Color::Rgb(59, 130, 246);
const ERROR: Color = Color::Rgb(248, 113, 113);
const DIM: Color = Color::Rgb(100, 116, 139);

/// Render the whole UI.
pub fn render(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .title(" Weather App ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .style(Style::default().bg(BG).fg(TEXT));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let chunks = Layout::vertical([
        Constraint::Length(1), // prompt
        Constraint::Length(3), // city input
        Constraint::Length(1), // spacer
        Constraint::Length(1), // temperature / error message
        Constraint::Length(1), // icon
        Constraint::Length(1), // description
        Constraint::Min(0),    // filler
        Constraint::Length(1), // key hints
    ])
    .split(inner);

    render_prompt(frame, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_output(frame, app, chunks[3], chunks[4], chunks[5]);
    render_hints(frame, chunks[7]);
}

fn render_prompt(frame: &mut Frame, area: Rect) {
    let prompt = Paragraph::new("Enter city name:")
        .style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.city_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(input, area);

    // Cursor sits right after the typed text, inside the border.
    let cursor_x = area.x + 1 + app.city_input.chars().count() as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn render_output(frame: &mut Frame, app: &App, temp: Rect, icon: Rect, desc: Rect) {
    match &app.view {
        // All three regions stay blank until the first trigger.
        ViewState::Idle => {}

        ViewState::Reading(reading) => {
            let bucket = ConditionIcon::from_condition_id(reading.condition_id);

            let temperature = Paragraph::new(reading.temperature_label())
                .style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(temperature, temp);

            let pictogram = Paragraph::new(bucket.emoji()).alignment(Alignment::Center);
            frame.render_widget(pictogram, icon);

            let description = Paragraph::new(reading.description_label())
                .style(Style::default().fg(TEXT).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center);
            frame.render_widget(description, desc);
        }

        // The message takes over the temperature region; the icon and
        // description regions stay blank.
        ViewState::Error(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(ERROR))
                .alignment(Alignment::Center);
            frame.render_widget(error, temp);
        }
    }
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new("Enter: get weather   Esc: quit")
        .style(Style::default().fg(DIM))
        .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}
