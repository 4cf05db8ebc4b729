use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, HitRegion, Target};

pub struct NavPanelWidget;

impl NavPanelWidget {
    /// Render the collapsed-menu overlay. Drawn only while the panel
    /// carries the active class; `area` is the content region below the
    /// navbar.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        if !app.nav_panel_open() || area.width < 4 || area.height < 3 {
            return;
        }
        let theme = app.theme.clone();
        let focused = app.focused();
        let Some(navbar) = app.page.navbar.as_ref() else {
            return;
        };
        if navbar.links.is_empty() {
            return;
        }

        let label_width = navbar
            .links
            .iter()
            .map(|l| l.label.width())
            .max()
            .unwrap_or(0) as u16;
        let width = (label_width + 4).clamp(16, area.width);
        let height = (navbar.links.len() as u16 + 2).min(area.height);
        let panel = Rect::new(area.x + area.width - width, area.y, width, height);

        let items: Vec<ListItem> = navbar
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let style = if focused == Some(Target::NavLink(i)) {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg)
                };
                ListItem::new(Line::from(Span::styled(link.label.clone(), style)))
            })
            .collect();
        let link_count = navbar.links.len();

        let list = List::new(items).block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg)),
        );

        frame.render_widget(Clear, panel);
        frame.render_widget(list, panel);

        let mut regions = Vec::new();
        for i in 0..link_count {
            let y = panel.y + 1 + i as u16;
            if y + 1 < panel.y + panel.height {
                regions.push(HitRegion {
                    rect: Rect::new(panel.x + 1, y, panel.width.saturating_sub(2), 1),
                    target: Target::NavLink(i),
                });
            }
        }
        app.hit_regions.extend(regions);
    }
}
