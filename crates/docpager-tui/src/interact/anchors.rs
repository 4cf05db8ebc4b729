//! In-page anchor navigation with smooth scrolling.

use docpager_core::Page;
use tracing::debug;

use crate::layout::PageLayout;
use crate::scroll::ScrollAnimator;

/// Routes fragment hrefs to smooth scrolls of the viewport
#[derive(Debug, Clone, Default)]
pub struct SmoothScrollRouter;

impl SmoothScrollRouter {
    /// Follow an anchor href. The activation is always consumed: a href
    /// whose fragment resolves to a block starts a smooth scroll aligning
    /// that block's top with the viewport's top; an unknown fragment does
    /// nothing. Returns whether a scroll started.
    pub fn follow(
        &self,
        page: &Page,
        layout: &PageLayout,
        animator: &mut ScrollAnimator,
        max_scroll: u16,
        href: &str,
    ) -> bool {
        let Some(fragment) = href.strip_prefix('#') else {
            return false;
        };

        match page.block_index_by_id(fragment) {
            Some(index) => {
                animator.scroll_to(layout.top(index), max_scroll);
                true
            }
            None => {
                debug!("Anchor target not on page: #{}", fragment);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpager_core::ScrollConfig;

    fn page() -> Page {
        Page::from_json(
            r#"{"blocks": [
                {"role": "hero", "title": "Top", "text": "intro"},
                {"id": "section-1", "role": "heading", "title": "Section 1"},
                {"id": "section-2", "role": "heading", "title": "Section 2"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_known_fragment_scrolls_to_block_top() {
        let page = page();
        let layout = PageLayout::compute(&page, 40);
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        let router = SmoothScrollRouter;

        assert!(router.follow(&page, &layout, &mut animator, 100, "#section-1"));
        assert_eq!(animator.current_scroll(), layout.top(1));
    }

    #[test]
    fn test_smooth_follow_targets_block_top() {
        let page = page();
        let layout = PageLayout::compute(&page, 40);
        let mut animator = ScrollAnimator::new(ScrollConfig::default());
        let router = SmoothScrollRouter;

        assert!(router.follow(&page, &layout, &mut animator, 100, "#section-2"));
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), layout.top(2));
    }

    #[test]
    fn test_unknown_fragment_is_a_silent_noop() {
        let page = page();
        let layout = PageLayout::compute(&page, 40);
        let mut animator = ScrollAnimator::new(ScrollConfig::default());
        animator.set_scroll(5);
        let router = SmoothScrollRouter;

        assert!(!router.follow(&page, &layout, &mut animator, 100, "#missing"));
        assert!(!animator.is_animating());
        assert_eq!(animator.current_scroll(), 5);
    }

    #[test]
    fn test_non_fragment_href_is_not_routed() {
        let page = page();
        let layout = PageLayout::compute(&page, 40);
        let mut animator = ScrollAnimator::new(ScrollConfig::default());
        let router = SmoothScrollRouter;

        assert!(!router.follow(&page, &layout, &mut animator, 100, "https://example.com"));
    }
}
