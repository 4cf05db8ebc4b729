use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use docpager_core::{Block, Role};

use crate::app::{App, HitRegion, Target};
use crate::layout::{body_rows, title_rows, wrap_text};
use crate::theme::Theme;

/// Copy control captions for the two feedback states
const COPY_CAPTION: &str = "[⧉ copy]";
const COPIED_CAPTION: &str = "[✓ copied]";

pub struct ContentWidget;

impl ContentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        let scroll = app.animator.current_scroll();
        let focused = app.focused();
        let width = area.width;

        let mut lines: Vec<Line<'static>> =
            Vec::with_capacity(app.layout.total_height() as usize);

        for (index, block) in app.page.blocks.iter().enumerate() {
            let height = app.layout.height(index) as usize;
            let mut block_lines = if block.style.opacity < 0.05 {
                // Hidden blocks keep their rows but paint nothing
                vec![Line::default(); height]
            } else {
                let confirmed = app.copier.is_confirmed(index);
                let mut built =
                    build_block_lines(block, index, width, &theme, focused, confirmed);

                // The offset behaves like a transform: the block shifts
                // inside its own rows without moving its neighbors
                let offset = block.style.offset_rows as usize;
                if offset > 0 {
                    for _ in 0..offset {
                        built.insert(0, Line::default());
                    }
                }
                built
            };

            // The remaining rows up to the block height are its separator
            while block_lines.len() < height {
                block_lines.push(Line::default());
            }
            block_lines.truncate(height);
            lines.extend(block_lines);
        }

        let paragraph = Paragraph::new(Text::from(lines))
            .style(Style::default().bg(theme.bg).fg(theme.fg))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);

        push_hit_regions(app, area, scroll, width);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fade {
    Hidden,
    Faint,
    Dim,
    Full,
}

fn fade_level(opacity: f64) -> Fade {
    if opacity < 0.05 {
        Fade::Hidden
    } else if opacity < 0.45 {
        Fade::Faint
    } else if opacity < 0.9 {
        Fade::Dim
    } else {
        Fade::Full
    }
}

fn apply_fade(color: Color, level: Fade, theme: &Theme) -> Color {
    match level {
        Fade::Hidden => theme.bg,
        Fade::Faint => theme.faint,
        Fade::Dim => theme.dim,
        Fade::Full => color,
    }
}

fn role_marker(role: Role) -> &'static str {
    match role {
        Role::FeatureCard => "◆ ",
        Role::CategoryCard => "▣ ",
        Role::Step => "• ",
        _ => "",
    }
}

fn build_block_lines(
    block: &Block,
    index: usize,
    width: u16,
    theme: &Theme,
    focused: Option<Target>,
    confirmed: bool,
) -> Vec<Line<'static>> {
    let level = fade_level(block.style.opacity);
    let fg = |c: Color| apply_fade(c, level, theme);
    let mut lines = Vec::new();

    if let Some(title) = &block.title {
        let style = match block.role {
            Role::Hero => Style::default()
                .fg(fg(theme.accent))
                .add_modifier(Modifier::BOLD),
            Role::Heading => Style::default()
                .fg(fg(theme.heading))
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(fg(theme.fg))
                .add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(vec![
            Span::styled(role_marker(block.role), Style::default().fg(fg(theme.accent))),
            Span::styled(title.clone(), style),
        ]));
    }

    match block.role {
        Role::Code => {
            let caption = if confirmed { COPIED_CAPTION } else { COPY_CAPTION };
            let caption_color = if confirmed { theme.success } else { theme.dim };
            let mut caption_style = Style::default().fg(fg(caption_color));
            if focused == Some(Target::CopyButton(index)) {
                caption_style = caption_style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled("``` ", Style::default().fg(fg(theme.faint))),
                Span::styled(caption, caption_style),
            ]));

            let code_style = Style::default().fg(fg(theme.code_fg)).bg(theme.code_bg);
            let code_lines: Vec<&str> = block.text.lines().collect();
            if code_lines.is_empty() {
                lines.push(Line::from(Span::styled(String::new(), code_style)));
            } else {
                for code_line in code_lines {
                    lines.push(Line::from(Span::styled(code_line.to_string(), code_style)));
                }
            }
            lines.push(Line::from(Span::styled(
                "```",
                Style::default().fg(fg(theme.faint)),
            )));
        }
        _ => {
            if !block.text.is_empty() {
                let body_color = match block.role {
                    Role::Hero => theme.dim,
                    _ => theme.fg,
                };
                for row in wrap_text(&block.text, width) {
                    lines.push(Line::from(Span::styled(
                        row,
                        Style::default().fg(fg(body_color)),
                    )));
                }
            }
        }
    }

    for (link_index, link) in block.links.iter().enumerate() {
        let mut style = Style::default().fg(fg(theme.link));
        if focused
            == Some(Target::BlockLink {
                block: index,
                link: link_index,
            })
        {
            style = Style::default()
                .fg(fg(theme.accent))
                .add_modifier(Modifier::UNDERLINED);
        }
        lines.push(Line::from(vec![
            Span::styled("→ ", Style::default().fg(fg(theme.faint))),
            Span::styled(link.label.clone(), style),
        ]));
    }

    lines
}

/// Record screen regions for the copy controls and links currently visible
fn push_hit_regions(app: &mut App, area: Rect, scroll: u16, width: u16) {
    let mut regions = Vec::new();

    for (index, block) in app.page.blocks.iter().enumerate() {
        let top = app.layout.top(index);
        let t_rows = title_rows(block);

        if block.role == Role::Code {
            if let Some(y) = screen_row(top + t_rows, scroll, area) {
                let caption_width = ("``` ".width() + COPIED_CAPTION.width()) as u16;
                regions.push(HitRegion {
                    rect: Rect::new(area.x, y, caption_width.min(area.width), 1),
                    target: Target::CopyButton(index),
                });
            }
        }

        let b_rows = body_rows(block, width);
        for (link_index, link) in block.links.iter().enumerate() {
            let row = top + t_rows + b_rows + link_index as u16;
            if let Some(y) = screen_row(row, scroll, area) {
                let w = (link.label.width() as u16 + 2).min(area.width);
                regions.push(HitRegion {
                    rect: Rect::new(area.x, y, w, 1),
                    target: Target::BlockLink {
                        block: index,
                        link: link_index,
                    },
                });
            }
        }
    }

    app.hit_regions.extend(regions);
}

fn screen_row(row: u16, scroll: u16, area: Rect) -> Option<u16> {
    if row < scroll {
        return None;
    }
    let relative = row - scroll;
    if relative >= area.height {
        return None;
    }
    Some(area.y + relative)
}
