//! Vertical layout of page blocks for a given content width.
//!
//! The content widget emits exactly these heights when painting, so the
//! scroll offset, visibility observation, anchor targets, and mouse hit
//! regions all agree on where each block sits.

use docpager_core::{Block, Page, Role};
use unicode_width::UnicodeWidthChar;

/// Computed block positions for one content width
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    tops: Vec<u16>,
    heights: Vec<u16>,
    total_height: u16,
    width: u16,
}

impl PageLayout {
    pub fn compute(page: &Page, width: u16) -> Self {
        let mut tops = Vec::with_capacity(page.blocks.len());
        let mut heights = Vec::with_capacity(page.blocks.len());
        let mut cursor = 0u16;

        for block in &page.blocks {
            let height = block_height(block, width);
            tops.push(cursor);
            heights.push(height);
            cursor = cursor.saturating_add(height);
        }

        Self {
            tops,
            heights,
            total_height: cursor,
            width,
        }
    }

    /// Top row of a block in page coordinates
    pub fn top(&self, index: usize) -> u16 {
        self.tops.get(index).copied().unwrap_or(0)
    }

    pub fn height(&self, index: usize) -> u16 {
        self.heights.get(index).copied().unwrap_or(0)
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Largest valid scroll offset for a viewport height
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }
}

/// Rows a block occupies, including its trailing separator row
pub fn block_height(block: &Block, width: u16) -> u16 {
    title_rows(block) + body_rows(block, width) + block.links.len() as u16 + 1
}

pub fn title_rows(block: &Block) -> u16 {
    if block.title.is_some() {
        1
    } else {
        0
    }
}

/// Rows of a block's body text. Code keeps its exact line structure between
/// two fence rows; other roles wrap at the content width.
pub fn body_rows(block: &Block, width: u16) -> u16 {
    match block.role {
        Role::Code => block.text.lines().count().max(1) as u16 + 2,
        _ => {
            if block.text.is_empty() {
                0
            } else {
                text_height(&block.text, width)
            }
        }
    }
}

/// Wrapped text height at a given width
pub fn text_height(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len().max(1) as u16
}

/// Greedy display-width wrap, one output row per line.
///
/// The painter renders these rows verbatim, so row counts here are the
/// single source of truth for block heights.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            rows.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0usize;
        for ch in line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
        rows.push(current);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpager_core::Page;

    fn page() -> Page {
        Page::from_json(
            r##"{
                "blocks": [
                    {"role": "heading", "title": "Install"},
                    {"role": "paragraph", "text": "One line"},
                    {"role": "code", "text": "line one\nline two"},
                    {"role": "feature-card", "title": "Cards", "text": "Body",
                     "links": [{"label": "More", "href": "#more"}]}
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_block_heights() {
        let page = page();
        let layout = PageLayout::compute(&page, 40);

        // heading: title + separator
        assert_eq!(layout.height(0), 2);
        // paragraph: one text row + separator
        assert_eq!(layout.height(1), 2);
        // code: 2 fences + 2 lines + separator
        assert_eq!(layout.height(2), 5);
        // card: title + body + link + separator
        assert_eq!(layout.height(3), 4);
    }

    #[test]
    fn test_tops_are_cumulative() {
        let page = page();
        let layout = PageLayout::compute(&page, 40);

        assert_eq!(layout.top(0), 0);
        assert_eq!(layout.top(1), 2);
        assert_eq!(layout.top(2), 4);
        assert_eq!(layout.top(3), 9);
        assert_eq!(layout.total_height(), 13);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("short", 40), vec!["short"]);
        assert_eq!(wrap_text("aaaaaaaaaa", 4), vec!["aaaa", "aaaa", "aa"]);
        assert_eq!(wrap_text("a\n\nb", 40), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 40), vec![""]);
    }

    #[test]
    fn test_text_height_matches_wrap() {
        for (text, width) in [("short", 40u16), ("aaaaaaaaaa", 4), ("a\n\nb", 40), ("", 40)] {
            assert_eq!(
                text_height(text, width) as usize,
                wrap_text(text, width).len()
            );
        }
    }

    #[test]
    fn test_max_scroll() {
        let page = page();
        let layout = PageLayout::compute(&page, 40);
        assert_eq!(layout.max_scroll(10), 3);
        assert_eq!(layout.max_scroll(100), 0);
    }
}
