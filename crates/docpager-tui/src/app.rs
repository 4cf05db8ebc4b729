use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use docpager_core::{AppConfig, Page, Role};

use crate::event::CopyResult;
use crate::input::Action;
use crate::interact::{
    ClipboardCopier, MobileNavToggle, RevealAnimator, ScrollStyler, SmoothScrollRouter,
};
use crate::layout::PageLayout;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// An interactive element reachable by the activation cursor or a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    MenuTrigger,
    NavLink(usize),
    BlockLink { block: usize, link: usize },
    CopyButton(usize),
}

/// Screen region of an interactive element, recorded during render
#[derive(Debug, Clone)]
pub struct HitRegion {
    pub rect: Rect,
    pub target: Target,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub page: Page,
    /// Block positions for the current content width
    pub layout: PageLayout,
    /// Viewport scroll offset owner
    pub animator: ScrollAnimator,

    reveal: RevealAnimator,
    pub copier: ClipboardCopier,
    pub styler: ScrollStyler,
    router: SmoothScrollRouter,
    nav_toggle: MobileNavToggle,

    /// Interactive elements in document order
    focusables: Vec<Target>,
    pub focus_index: Option<usize>,
    /// Regions recorded during the last render, for mouse dispatch
    pub hit_regions: Vec<HitRegion>,

    /// Content viewport size, excluding navbar and status rows
    pub content_size: (u16, u16),
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,

    copy_tx: UnboundedSender<CopyResult>,
    copy_rx: Option<UnboundedReceiver<CopyResult>>,
}

impl App {
    pub fn new(mut page: Page, config: AppConfig, theme: Theme) -> Self {
        let reveal = RevealAnimator::new(
            &mut page,
            config.ui.reveal.clone(),
            config.ui.scroll.easing,
        );
        let animator = ScrollAnimator::new(config.ui.scroll.clone());
        let copier = ClipboardCopier::new(config.ui.copy.feedback_ms);
        let styler = ScrollStyler::new(config.ui.navbar.scrolled_threshold);
        let focusables = collect_focusables(&page);
        let (copy_tx, copy_rx) = unbounded_channel();

        Self {
            config,
            theme,
            page,
            layout: PageLayout::default(),
            animator,
            reveal,
            copier,
            styler,
            router: SmoothScrollRouter,
            nav_toggle: MobileNavToggle,
            focusables,
            focus_index: None,
            hit_regions: Vec::new(),
            content_size: (0, 0),
            should_quit: false,
            status_message: None,
            pending_key: None,
            copy_tx,
            copy_rx: Some(copy_rx),
        }
    }

    /// The channel end the event loop drains for clipboard outcomes
    pub fn take_copy_receiver(&mut self) -> Option<UnboundedReceiver<CopyResult>> {
        self.copy_rx.take()
    }

    /// Recompute the layout for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        // One row of navbar, one row of status bar
        let content_height = height.saturating_sub(2);
        self.content_size = (width, content_height);
        self.layout = PageLayout::compute(&self.page, width);

        let max = self.layout.max_scroll(content_height);
        if self.animator.current_scroll() > max {
            self.animator.set_scroll(max);
        }
    }

    pub fn scroll(&self) -> u16 {
        self.animator.current_scroll()
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.content_size.1)
    }

    pub fn nav_panel_open(&self) -> bool {
        self.page
            .navbar
            .as_ref()
            .map(|n| n.panel_open())
            .unwrap_or(false)
    }

    pub fn toggle_nav_panel(&mut self) {
        // Missing navbar or trigger: nothing happens
        self.nav_toggle.toggle(self.page.navbar.as_mut());
    }

    fn close_nav_panel(&mut self) {
        if self.nav_panel_open() {
            self.toggle_nav_panel();
        }
    }

    pub fn focused(&self) -> Option<Target> {
        self.focus_index.and_then(|i| self.focusables.get(i)).copied()
    }

    /// Dispatch a keyboard action
    pub fn handle_action(&mut self, action: Action) {
        // Any key other than a pending 'g' clears the sequence state
        if action != Action::PendingG {
            self.pending_key = None;
        }

        let (_, viewport_h) = self.content_size;
        let max = self.max_scroll();

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.animator.scroll_down(max),
            Action::ScrollUp => self.animator.scroll_up(max),
            Action::ScrollHalfPageDown => self.animator.scroll_half_page_down(viewport_h, max),
            Action::ScrollHalfPageUp => self.animator.scroll_half_page_up(viewport_h, max),
            Action::ScrollPageDown => self.animator.scroll_full_page_down(viewport_h, max),
            Action::ScrollPageUp => self.animator.scroll_full_page_up(viewport_h, max),
            Action::JumpToTop => self.animator.scroll_to(0, max),
            Action::JumpToBottom => self.animator.scroll_to(max, max),
            Action::PendingG => self.pending_key = Some('g'),
            Action::ToggleNavPanel => self.toggle_nav_panel(),
            Action::CloseNavPanel => self.close_nav_panel(),
            Action::NextItem => self.cycle_focus(1),
            Action::PrevItem => self.cycle_focus(-1),
            Action::Activate => {
                if let Some(target) = self.focused() {
                    self.activate(target);
                }
            }
            Action::CopyCode => self.copy_code_shortcut(),
            Action::None => {}
        }
    }

    fn cycle_focus(&mut self, step: i32) {
        if self.focusables.is_empty() {
            return;
        }
        let len = self.focusables.len() as i32;
        let next = match self.focus_index {
            None => {
                if step >= 0 {
                    0
                } else {
                    len - 1
                }
            }
            Some(current) => (current as i32 + step).rem_euclid(len),
        };
        self.focus_index = Some(next as usize);
    }

    /// Activate an interactive element (Enter on the cursor or a click)
    pub fn activate(&mut self, target: Target) {
        self.status_message = None;
        match target {
            Target::MenuTrigger => self.toggle_nav_panel(),
            Target::NavLink(i) => {
                let href = self
                    .page
                    .navbar
                    .as_ref()
                    .and_then(|n| n.links.get(i))
                    .map(|l| l.href.clone());
                if let Some(href) = href {
                    self.follow_href(&href);
                }
            }
            Target::BlockLink { block, link } => {
                let href = self
                    .page
                    .blocks
                    .get(block)
                    .and_then(|b| b.links.get(link))
                    .map(|l| l.href.clone());
                if let Some(href) = href {
                    self.follow_href(&href);
                }
            }
            Target::CopyButton(block) => self.copy_block(block),
        }
    }

    /// Route a href: fragments scroll in-page, anything else opens in the
    /// system browser
    fn follow_href(&mut self, href: &str) {
        if href.starts_with('#') {
            let max = self.max_scroll();
            self.router
                .follow(&self.page, &self.layout, &mut self.animator, max, href);
        } else if let Err(e) = open::that(href) {
            warn!("Failed to open {}: {}", href, e);
            self.status_message = Some(format!("Could not open {href}"));
        }
    }

    /// The exact text a copy of this block captures, taken at call time
    pub fn code_snapshot(&self, block: usize) -> Option<String> {
        self.page
            .blocks
            .get(block)
            .filter(|b| b.role == Role::Code)
            .map(|b| b.text.clone())
    }

    /// Snapshot a code block's text and hand it to the clipboard writer
    fn copy_block(&mut self, block: usize) {
        let Some(snapshot) = self.code_snapshot(block) else {
            return;
        };
        self.copier.copy(block, snapshot, self.copy_tx.clone());
    }

    /// The yank shortcut: the focused copy control, or the first code block
    /// visible in the viewport
    fn copy_code_shortcut(&mut self) {
        if let Some(Target::CopyButton(block)) = self.focused() {
            self.copy_block(block);
            return;
        }
        if let Some(block) = self.first_visible_code_block() {
            self.copy_block(block);
        }
    }

    fn first_visible_code_block(&self) -> Option<usize> {
        let scroll = self.scroll();
        let (_, viewport_h) = self.content_size;
        let view_bottom = scroll.saturating_add(viewport_h);
        self.page.blocks.iter().enumerate().position(|(i, b)| {
            b.role == Role::Code
                && self.layout.top(i) < view_bottom
                && self.layout.top(i) + self.layout.height(i) > scroll
        })
    }

    /// Dispatch mouse input against the regions recorded during render
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .hit_regions
                    .iter()
                    .find(|r| contains(r.rect, mouse.column, mouse.row))
                    .map(|r| r.target);
                if let Some(target) = hit {
                    self.activate(target);
                }
            }
            MouseEventKind::ScrollDown => {
                let max = self.max_scroll();
                self.animator.scroll_by(3, max);
            }
            MouseEventKind::ScrollUp => {
                let max = self.max_scroll();
                self.animator.scroll_by(-3, max);
            }
            _ => {}
        }
    }

    /// Apply a finished clipboard write's outcome
    pub fn on_copy_result(&mut self, result: &CopyResult) {
        self.copier.on_result(result);
    }

    /// Advance animations and timers one frame
    pub fn on_tick(&mut self) {
        let (_, viewport_h) = self.content_size;
        let max = self.max_scroll();
        let offset = self.animator.update(max);

        // Recomputed and reapplied on every tick, changed or not
        self.styler.on_scroll(offset);

        self.reveal.observe(&self.layout, offset, viewport_h);
        self.reveal.tick(&mut self.page);
        self.copier.tick();
    }

    /// Whether the event loop should poll at animation frame rate
    pub fn needs_animation(&self) -> bool {
        self.animator.needs_update() || self.reveal.needs_update()
    }

    /// Clear per-frame render state
    pub fn begin_frame(&mut self) {
        self.hit_regions.clear();
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Interactive elements in document order: menu trigger, nav links, then
/// per-block links and copy controls
fn collect_focusables(page: &Page) -> Vec<Target> {
    let mut targets = Vec::new();

    if let Some(navbar) = &page.navbar {
        if navbar.menu_trigger {
            targets.push(Target::MenuTrigger);
        }
        for i in 0..navbar.links.len() {
            targets.push(Target::NavLink(i));
        }
    }

    for (block_index, block) in page.blocks.iter().enumerate() {
        for link_index in 0..block.links.len() {
            targets.push(Target::BlockLink {
                block: block_index,
                link: link_index,
            });
        }
        if block.role == Role::Code {
            targets.push(Target::CopyButton(block_index));
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpager_core::page::CLASS_ACTIVE;

    fn sample_app() -> App {
        let page = Page::from_json(
            r##"{
                "title": "Docs",
                "navbar": {
                    "brand": "docs",
                    "menu_trigger": true,
                    "links": [
                        {"label": "Install", "href": "#install"},
                        {"label": "Repo", "href": "https://example.com"}
                    ]
                },
                "blocks": [
                    {"role": "hero", "title": "Docs", "text": "Welcome"},
                    {"id": "install", "role": "heading", "title": "Install"},
                    {"role": "code", "text": "cargo install docpager"},
                    {"role": "feature-card", "title": "Fast", "text": "Quick",
                     "links": [{"label": "More", "href": "#install"}]}
                ]
            }"##,
        )
        .unwrap();
        let mut app = App::new(page, AppConfig::default(), Theme::default());
        // 6 content rows against 13 rows of page: the page scrolls
        app.resize(60, 8);
        app
    }

    #[test]
    fn test_focusables_in_document_order() {
        let app = sample_app();
        assert_eq!(
            app.focusables,
            vec![
                Target::MenuTrigger,
                Target::NavLink(0),
                Target::NavLink(1),
                Target::CopyButton(2),
                Target::BlockLink { block: 3, link: 0 },
            ]
        );
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let mut app = sample_app();
        app.handle_action(Action::NextItem);
        assert_eq!(app.focused(), Some(Target::MenuTrigger));
        for _ in 0..5 {
            app.handle_action(Action::NextItem);
        }
        assert_eq!(app.focused(), Some(Target::MenuTrigger));
        app.handle_action(Action::PrevItem);
        assert_eq!(app.focused(), Some(Target::BlockLink { block: 3, link: 0 }));
    }

    #[test]
    fn test_menu_trigger_activation_toggles_panel() {
        let mut app = sample_app();
        assert!(!app.nav_panel_open());
        app.activate(Target::MenuTrigger);
        assert!(app.nav_panel_open());
        let navbar = app.page.navbar.as_ref().unwrap();
        assert!(navbar.trigger_classes.contains(CLASS_ACTIVE));
        app.activate(Target::MenuTrigger);
        assert!(!app.nav_panel_open());
    }

    #[test]
    fn test_anchor_link_activation_scrolls() {
        let mut app = sample_app();
        app.activate(Target::NavLink(0));
        assert_eq!(app.animator.target_scroll(), app.layout.top(1));
    }

    #[test]
    fn test_unknown_anchor_is_silent() {
        let mut app = sample_app();
        app.page.blocks[1].id = Some("renamed".into());
        app.activate(Target::NavLink(0));
        assert!(!app.animator.is_animating());
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn test_copy_targets_only_code_blocks() {
        let mut app = sample_app();
        // Hero is not a code block: nothing is scheduled
        app.copy_block(0);
        assert!(!app.copier.needs_update());
    }

    #[test]
    fn test_code_snapshot_is_exact_text() {
        let mut app = sample_app();
        assert_eq!(
            app.code_snapshot(2).as_deref(),
            Some("cargo install docpager")
        );
        assert_eq!(app.code_snapshot(0), None);

        // Later edits to the block do not affect an earlier snapshot
        let snapshot = app.code_snapshot(2);
        app.page.blocks[2].text.push_str(" --locked");
        assert_eq!(snapshot.as_deref(), Some("cargo install docpager"));
    }

    #[test]
    fn test_first_visible_code_block() {
        let app = sample_app();
        assert_eq!(app.first_visible_code_block(), Some(2));
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut app = sample_app();
        let max = app.max_scroll();
        app.animator.set_scroll(max);
        // A taller terminal shrinks max_scroll toward zero
        app.resize(60, 200);
        assert_eq!(app.scroll(), app.max_scroll());
    }

    #[test]
    fn test_tick_applies_navbar_treatment() {
        use crate::interact::ScrollMode;
        let mut app = sample_app();
        app.on_tick();
        assert_eq!(app.styler.mode(), ScrollMode::Top);

        app.animator.set_scroll(101);
        // Pretend the page is long enough for that offset
        app.content_size = (60, 5);
        app.on_tick();
        // max_scroll clamps the offset; treatment follows whatever the
        // animator reports after the update
        let expected = if app.scroll() > 100 {
            ScrollMode::Scrolled
        } else {
            ScrollMode::Top
        };
        assert_eq!(app.styler.mode(), expected);
    }
}
