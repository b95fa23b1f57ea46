//! Rendering for the card's sections.

use chrono::Local;
use myeongham_config::Profile;
use myeongham_core::{BackgroundStyle, Section};
use myeongham_fonts::{art_width, build_title_art};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::motion;

/// Width of a skill bar in cells.
const BAR_WIDTH: usize = 30;

/// Render the navigation bar with the active section highlighted.
pub fn render_nav(frame: &mut Frame, area: Rect, active: Section, color: Color) {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::from(format!("{} ", i + 1)).dark_gray());
        if section == active {
            spans.push(section.title().bold().fg(color));
        } else {
            spans.push(section.title().dark_gray());
        }
    }
    frame.render_widget(Line::from(spans).centered(), area);
}

/// Render the hero view: name art, title, and the typed tagline.
pub fn render_home(frame: &mut Frame, area: Rect, profile: &Profile, color: Color, ms: u64) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7), // Name art
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Job title
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Tagline
        Constraint::Fill(1),
    ])
    .split(area);

    // Fall back to a plain name line when the art does not fit
    if art_width(&profile.display_name) <= area.width as usize {
        let mut art = build_title_art(&profile.display_name);
        motion::glitch_art(&mut art, ms);
        let text: Vec<Line> = art
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(color)))
            .collect();
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[1]);
    } else {
        frame.render_widget(
            Line::from(profile.display_name.as_str().bold().fg(color)).centered(),
            chunks[1],
        );
    }

    frame.render_widget(
        Paragraph::new(profile.title.as_str())
            .style(Style::new().fg(color))
            .alignment(Alignment::Center),
        chunks[3],
    );

    // The tagline types itself out with a block cursor until it finishes
    let visible = motion::typed_chars(&profile.tagline, ms);
    let mut tagline: String = profile.tagline.chars().take(visible).collect();
    if !motion::typing_done(&profile.tagline, ms) {
        tagline.push('█');
    }
    frame.render_widget(
        Paragraph::new(tagline)
            .style(Style::new().dark_gray())
            .alignment(Alignment::Center),
        chunks[5],
    );
}

/// Render the biography and highlight bullets.
pub fn render_about(frame: &mut Frame, area: Rect, profile: &Profile, color: Color) {
    let mut lines = vec![
        Line::from(profile.name.as_str().bold().fg(color)),
        Line::default(),
    ];
    for paragraph in &profile.about {
        lines.push(Line::from(paragraph.as_str()));
    }
    lines.push(Line::default());
    for item in &profile.highlights {
        lines.push(Line::from(vec!["▪ ".fg(color), item.as_str().into()]));
    }
    render_centered_block(frame, area, lines);
}

/// Render the skill bars, filling toward each level after the section opens.
pub fn render_skills(frame: &mut Frame, area: Rect, profile: &Profile, color: Color, ms: u64) {
    let fill = motion::bar_fill(ms);
    let mut lines = Vec::new();
    for skill in &profile.skills {
        let level = skill.percent() as f32 / 100.0;
        let filled = ((BAR_WIDTH as f32 * level * fill).round() as usize).min(BAR_WIDTH);
        let bar = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
        lines.push(Line::from(vec![
            Span::from(format!("{:>18}  ", skill.name)),
            Span::from(bar).fg(color),
            Span::from(format!("  {:>3}%", skill.percent())).dark_gray(),
        ]));
        lines.push(Line::default());
    }
    lines.pop();
    render_centered_block(frame, area, lines);
}

/// Render the project list.
pub fn render_projects(frame: &mut Frame, area: Rect, profile: &Profile, color: Color) {
    let mut lines = Vec::new();
    for project in &profile.projects {
        lines.push(Line::from(project.name.as_str().bold().fg(color)));
        lines.push(Line::from(project.description.as_str()));
        let tags = project
            .tech
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(tags).style(Style::new().dark_gray()));
        lines.push(Line::default());
    }
    lines.pop();
    render_centered_block(frame, area, lines);
}

/// Render the contact rows: email, location, and links.
pub fn render_contact(frame: &mut Frame, area: Rect, profile: &Profile, color: Color) {
    let mut lines = vec![
        contact_row("email", &profile.email, color),
        contact_row("location", &profile.location, color),
    ];
    for link in &profile.links {
        lines.push(contact_row(&link.label, &link.url, color));
    }
    render_centered_block(frame, area, lines);
}

fn contact_row<'a>(label: &str, value: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::from(format!("{label:<10}")).fg(color),
        value.into(),
    ])
}

/// Render the help line and the local-time clock.
pub fn render_footer(frame: &mut Frame, area: Rect, style: BackgroundStyle, color: Color) {
    let clock = Local::now().format("%H:%M · %A, %B %d").to_string();
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(clock.chars().count() as u16 + 1),
    ])
    .split(area);

    let help = Line::from(vec![
        "tab".bold().fg(color),
        " section  ".dark_gray(),
        "b".bold().fg(color),
        Span::from(format!(" {}  ", style.as_str())).dark_gray(),
        "c".bold().fg(color),
        " color  ".dark_gray(),
        "a".bold().fg(color),
        " speed  ".dark_gray(),
        "q".bold().fg(color),
        " quit".dark_gray(),
    ]);
    frame.render_widget(help, chunks[0]);
    frame.render_widget(Line::from(clock).style(Style::new().dark_gray()), chunks[1]);
}

/// Center a block of lines vertically and horizontally within the area.
fn render_centered_block(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16),
        Constraint::Fill(1),
    ])
    .split(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
