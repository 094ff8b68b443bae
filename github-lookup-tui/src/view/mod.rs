//! View layer: draws the model.
//!
//! `render_state` is a pure function from state and width to styled text;
//! `render` only places that text in the frame and positions the cursor.

pub mod theme;
mod wrap;

use ratatui::{
    layout::Position,
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use github_lookup_provider::CombinedResult;

use crate::model::{App, AppState};
use theme::Theme;
use wrap::wrap;

/// Width assumed until the terminal reports one.
pub const DEFAULT_WIDTH: u16 = 80;

/// Narrowest wrap width; tiny terminals still get readable paragraphs.
const MIN_WRAP_WIDTH: usize = 20;

const PLACEHOLDER: &str = "GitHub username...";
const PROMPT: &str = "> ";
/// Row of the prompt line in the input screen.
const PROMPT_ROW: u16 = 3;

/// Paint the current state into `frame`.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let text = render_state(&app.state, app.width, &app.theme);
    frame.render_widget(Paragraph::new(text), area);

    if let AppState::Input { buffer } = &app.state {
        let offset = u16::try_from(PROMPT.width() + buffer.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(offset)
            .min(area.right().saturating_sub(1));
        let y = area
            .y
            .saturating_add(PROMPT_ROW)
            .min(area.bottom().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, y));
    }
}

/// Styled text for `state` at terminal width `width`.
pub fn render_state(state: &AppState, width: u16, theme: &Theme) -> Text<'static> {
    let lines = match state {
        AppState::Input { buffer } => input_lines(buffer, theme),
        AppState::Loading { query } => vec![
            Line::default(),
            Line::from(format!("Searching for {query}...")),
        ],
        AppState::Error { message } => vec![
            Line::default(),
            Line::from(Span::styled(message.clone(), theme.error)),
            Line::from(Span::styled("(Enter to try again)", theme.label)),
        ],
        AppState::Result { data } => result_lines(data, wrap_width(width), theme),
    };
    Text::from(lines)
}

fn wrap_width(width: u16) -> usize {
    usize::from(width).saturating_sub(4).max(MIN_WRAP_WIDTH)
}

fn input_lines(buffer: &str, theme: &Theme) -> Vec<Line<'static>> {
    let entry = if buffer.is_empty() {
        Span::styled(PLACEHOLDER, theme.placeholder)
    } else {
        Span::styled(buffer.to_string(), theme.value)
    };

    vec![
        Line::default(),
        Line::from(Span::styled("GITHUB SEARCH", theme.title)),
        Line::default(),
        Line::from(vec![Span::styled(PROMPT, theme.prompt), entry]),
        Line::default(),
        Line::from(Span::styled(
            "(Enter to search, Ctrl+C to quit)",
            theme.label,
        )),
    ]
}

fn field(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.label),
        Span::styled(value, theme.value),
    ])
}

fn result_lines(data: &CombinedResult, wrap_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let profile = &data.profile;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("USER PROFILE", theme.title)),
        Line::default(),
        field("Name", profile.display_name().to_string(), theme),
        field("Github", format!("@{}", profile.login), theme),
    ];

    if let Some(location) = &profile.location {
        lines.push(field("Location", location.clone(), theme));
    }

    lines.push(field(
        "Stats",
        format!(
            "{} Repos, {} Followers",
            profile.public_repos, profile.followers
        ),
        theme,
    ));

    if let Some(bio) = &profile.bio {
        lines.push(Line::from(Span::styled("Bio:", theme.label)));
        lines.extend(
            wrap(bio, wrap_width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, theme.value))),
        );
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("LATEST REPOSITORIES", theme.title)));
    lines.push(Line::default());

    for repo in &data.repositories {
        lines.push(Line::from(Span::styled(
            format!("{} (★ {})", repo.name, repo.stargazers_count),
            theme.repository,
        )));
        let description = repo.description.as_deref().unwrap_or("No description.");
        lines.extend(
            wrap(description, wrap_width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, theme.description))),
        );
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "(Enter to search again, Ctrl+C to quit)",
        theme.label,
    )));
    lines
}
