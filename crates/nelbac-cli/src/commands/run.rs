use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::{mpsc, Mutex};

use nelbac_core::advisor::{build_provider, AdvisorProvider, AdvisorSession};
use nelbac_core::catalog::Catalog;
use nelbac_core::engine::EngineMode;
use nelbac_core::storage::Database;
use nelbac_core::AppConfig;
use nelbac_tui::{
    app::{App, AppSignal, Page},
    event::{AdvisorOutcome, AppEvent, EventHandler},
    widgets::{
        AboutWidget, AdvisorWidget, CartWidget, NavBarWidget, OrbitWidget, ProductsWidget,
        SlideshowWidget, StatusBarWidget,
    },
    Theme,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let catalog = Catalog::load(config.catalog.path.as_deref())?;

    let db = Database::new(&config).await?;
    let session = Arc::new(Mutex::new(AdvisorSession::open(db).await?));

    // A missing API key downgrades the advisor instead of blocking the
    // rest of the app
    let provider: Option<Arc<dyn AdvisorProvider>> = if config.advisor.enabled {
        match build_provider(&config, &catalog) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!("Advisor unavailable: {}", e);
                None
            }
        }
    } else {
        None
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Nelbac")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), catalog, Theme::default())?;
    {
        let session = session.lock().await;
        app.set_advisor_session(
            session.session_id().to_string(),
            session.messages().to_vec(),
        );
    }

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Channel for async advisor results
    let (advisor_tx, mut advisor_rx) = mpsc::unbounded_channel::<AdvisorOutcome>();

    // Main loop
    loop {
        // Process completed advisor exchanges (non-blocking)
        while let Ok(outcome) = advisor_rx.try_recv() {
            app.on_advisor_outcome(outcome);
        }

        app.on_tick();

        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: nav + content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            NavBarWidget::render(frame, main_layout[0], &app);
            match app.page {
                Page::Home => match app.engine.mode() {
                    EngineMode::Orbit => OrbitWidget::render(frame, main_layout[1], &app),
                    EngineMode::ScrollLinked => {
                        SlideshowWidget::render(frame, main_layout[1], &app)
                    }
                },
                Page::Products => ProductsWidget::render(frame, main_layout[1], &app),
                Page::About => AboutWidget::render(frame, main_layout[1], &app),
                Page::Cart => CartWidget::render(frame, main_layout[1], &app),
            }
            StatusBarWidget::render(frame, main_layout[2], &app);

            if app.advisor.open {
                AdvisorWidget::render(frame, &app);
            }
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    if let Some(signal) = app.handle_key(key) {
                        handle_signal(&mut app, signal, provider.as_ref(), &session, &advisor_tx);
                    }
                }
                AppEvent::Wheel(delta) => app.on_wheel(delta),
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Dispatch async advisor work requested by the key handler.
fn handle_signal(
    app: &mut App,
    signal: AppSignal,
    provider: Option<&Arc<dyn AdvisorProvider>>,
    session: &Arc<Mutex<AdvisorSession>>,
    tx: &mpsc::UnboundedSender<AdvisorOutcome>,
) {
    match signal {
        AppSignal::AskAdvisor(prompt) => {
            let Some(provider) = provider.cloned() else {
                app.on_advisor_outcome(AdvisorOutcome::Failure {
                    error: "no provider configured".to_string(),
                });
                return;
            };
            let session = session.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut session = session.lock().await;
                let outcome = match session.send(provider.as_ref(), &prompt).await {
                    Ok(content) => AdvisorOutcome::Reply { content },
                    Err(e) => AdvisorOutcome::Failure {
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(outcome);
            });
        }
        AppSignal::ClearAdvisor => {
            let session = session.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut session = session.lock().await;
                let outcome = match session.clear().await {
                    Ok(()) => AdvisorOutcome::Cleared,
                    Err(e) => AdvisorOutcome::Failure {
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(outcome);
            });
        }
    }
}
