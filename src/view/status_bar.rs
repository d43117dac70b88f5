use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line as TextLine, Span},
    widgets::Paragraph,
};

use crate::{config::Theme, section::SyncPolicy};

const KEY_HINTS: &str = " Tab toggle  + add  ^R refresh  q quit ";

pub fn policy_name(policy: SyncPolicy) -> &'static str {
    match policy {
        SyncPolicy::Always => "always",
        SyncPolicy::OnChange => "on-change",
        SyncPolicy::OnMount => "on-mount",
    }
}

/// Render the status bar at the bottom of the screen
///
/// Layout:
/// - Left: Key hints
/// - Right: Sync policy of the table
pub fn render_status_bar(frame: &mut Frame, area: Rect, policy: SyncPolicy, theme: &Theme) {
    let width = area.width as usize;
    let bar_style = Style::default().fg(theme.text_muted).bg(theme.header_bg);

    let policy_display = format!(" {} ", policy_name(policy));
    let padding_width = width.saturating_sub(KEY_HINTS.len() + policy_display.len());

    let line = TextLine::from(vec![
        Span::styled(KEY_HINTS, bar_style),
        Span::styled(" ".repeat(padding_width), bar_style),
        Span::styled(policy_display, bar_style.fg(theme.section_header)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
