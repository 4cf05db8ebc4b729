use docpager_core::page::CLASS_ACTIVE;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, HitRegion, Target};
use crate::interact::ScrollMode;

pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        // The scroll-derived treatment is the navbar's background
        let bg = match app.styler.mode() {
            ScrollMode::Top => theme.navbar_bg_top,
            ScrollMode::Scrolled => theme.navbar_bg_scrolled,
        };
        let base = Style::default().bg(bg);

        let Some(navbar) = app.page.navbar.as_ref() else {
            frame.render_widget(Paragraph::new("").style(base), area);
            return;
        };

        let focused = app.focused();
        let mut regions = Vec::new();

        let mut spans = vec![Span::styled(
            format!(" {} ", navbar.brand),
            base.fg(theme.accent).add_modifier(Modifier::BOLD),
        )];
        let mut x = area.x + navbar.brand.width() as u16 + 2;

        for (i, link) in navbar.links.iter().enumerate() {
            spans.push(Span::styled("  ", base));
            x += 2;
            let mut style = base.fg(theme.navbar_fg);
            if focused == Some(Target::NavLink(i)) {
                style = style.fg(theme.accent).add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(link.label.clone(), style));
            let label_width = link.label.width() as u16;
            if x + label_width <= area.x + area.width {
                regions.push(HitRegion {
                    rect: Rect::new(x, area.y, label_width, 1),
                    target: Target::NavLink(i),
                });
            }
            x += label_width;
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);

        if navbar.menu_trigger && area.width >= 4 {
            let trigger_active = navbar.trigger_classes.contains(CLASS_ACTIVE);
            let mut style = base.fg(if trigger_active {
                theme.accent
            } else {
                theme.navbar_fg
            });
            if trigger_active {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focused == Some(Target::MenuTrigger) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let trigger_area = Rect::new(area.x + area.width - 4, area.y, 3, 1);
            frame.render_widget(Paragraph::new(Span::styled(" ☰ ", style)), trigger_area);
            regions.push(HitRegion {
                rect: trigger_area,
                target: Target::MenuTrigger,
            });
        }

        app.hit_regions.extend(regions);
    }
}
