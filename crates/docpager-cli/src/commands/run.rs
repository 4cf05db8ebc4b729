use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tokio::sync::mpsc::UnboundedReceiver;

use docpager_core::{AppConfig, Page};
use docpager_tui::{
    app::App,
    event::{AppEvent, CopyResult, EventHandler},
    input::handle_key_event,
    widgets::{ContentWidget, NavPanelWidget, NavbarWidget, StatusBarWidget},
    Theme,
};

pub async fn run(config: AppConfig, page_path: PathBuf) -> Result<()> {
    let page = Page::load(&page_path)
        .with_context(|| format!("failed to load page document {}", page_path.display()))?;
    let title = if page.title.is_empty() {
        "docpager".to_string()
    } else {
        format!("docpager — {}", page.title)
    };

    // Create app state; handler registration happens here, before the
    // first event is read
    let mut app = App::new(page, config.clone(), Theme::default());
    let mut copy_rx = app
        .take_copy_receiver()
        .context("copy channel already taken")?;

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(&title)
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let result = run_loop(&mut terminal, &mut app, &event_handler, &mut copy_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    copy_rx: &mut UnboundedReceiver<CopyResult>,
) -> Result<()> {
    loop {
        // Drain finished clipboard writes first
        while let Ok(result) = copy_rx.try_recv() {
            app.on_copy_result(&result);
        }

        app.on_tick();

        terminal.draw(|frame| {
            app.begin_frame();
            let chunks = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

            NavbarWidget::render(frame, chunks[0], app);
            ContentWidget::render(frame, chunks[1], app);
            // The panel overlays the content when open
            NavPanelWidget::render(frame, chunks[1], app);
            StatusBarWidget::render(frame, chunks[2], app);
        })?;

        if app.should_quit {
            return Ok(());
        }

        match event_handler.next(app.needs_animation())? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.handle_action(action);
            }
            Some(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Some(AppEvent::Resize(width, height)) => app.resize(width, height),
            Some(AppEvent::Tick) | None => {}
        }
    }
}
