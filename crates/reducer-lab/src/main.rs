use lab_client::{CatalogClient, HttpCatalogClient};
use lab_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod clock;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod ticker;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use clock::{Clock, MonotonicClock};
use middleware::{
    clock_middleware::ClockMiddleware, fetch_middleware::FetchMiddleware,
    frame_ticker_middleware::FrameTickerMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let log_file = logger::init()?;
    log::info!("Starting reducer-lab, logging to {}", log_file.display());

    let config = AppConfig::load();
    log::debug!("Config: {:?}", config);

    let client: Arc<dyn CatalogClient> = Arc::new(HttpCatalogClient::new(
        &config.catalog_url,
        &config.users_url,
        Duration::from_secs(config.request_timeout_secs),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(MonotonicClock::new());
    let mut store = build_store(&config, client, clock)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::Global(GlobalAction::Start));
    let result = run_app(&mut terminal, &mut store, config.frame_interval());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {:#}", err);
    }

    log::info!("Exiting reducer-lab");
    result
}

/// Build the store with its middleware chain
fn build_store(
    config: &AppConfig,
    client: Arc<dyn CatalogClient>,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Store> {
    let mut store = Store::new(AppState::default().with_currency_suffix(&config.currency_suffix));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new(Arc::clone(&clock))));
    store.add_middleware(Box::new(ClockMiddleware::new(config.clock_interval())));
    store.add_middleware(Box::new(FrameTickerMiddleware::new(
        clock,
        config.frame_interval(),
    )));
    store.add_middleware(Box::new(FetchMiddleware::new(client)?));

    Ok(store)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    frame_interval: Duration,
) -> anyhow::Result<()> {
    loop {
        // Apply what tickers and fetches dispatched since the last frame
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(frame_interval)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
