use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let scroll = app.animator.current_scroll();
        let max = app.max_scroll();
        let percent = if max == 0 {
            100
        } else {
            (scroll as u32 * 100 / max as u32) as u16
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} blocks | {}%",
                app.page.title,
                app.page.blocks.len(),
                percent
            )
        };

        let help_hint = " q:quit j/k:scroll m:menu y:copy tab:next ↵:open ";
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg).bg(theme.selection),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.selection)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.dim).bg(theme.selection),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
