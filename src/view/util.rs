use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
};

use crate::config::Theme;
use crate::table::{LaidOutLine, Role};

/// Theme colour for a segment role
pub fn role_style(role: Role, theme: &Theme) -> Style {
    match role {
        Role::Plain => Style::default().fg(theme.text),
        Role::Muted => Style::default().fg(theme.text_muted),
        Role::Border => Style::default().fg(theme.border),
        Role::Header => Style::default()
            .fg(theme.section_header)
            .add_modifier(Modifier::BOLD),
        Role::Indicator => Style::default().fg(theme.indicator),
        Role::Icon => Style::default().fg(theme.icon),
        Role::AddControl => Style::default().fg(theme.add_control),
    }
}

/// Converts a laid out line into styled spans
pub fn to_text_line(line: &LaidOutLine, theme: &Theme) -> TextLine<'static> {
    TextLine::from(
        line.segments
            .iter()
            .map(|segment| {
                Span::styled(
                    segment.text.clone(),
                    role_style(segment.role, theme).patch(segment.style),
                )
            })
            .collect::<Vec<_>>(),
    )
}

pub fn selection_style(bg: Color) -> Style {
    Style::default().bg(bg)
}
