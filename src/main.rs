use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tracing::{error, info};

use todo_tui::adapters::{open_store, TerminalViewport};
use todo_tui::app::App;
use todo_tui::cli::{parse_args, run_cli_command};
use todo_tui::config::AppConfig;
use todo_tui::logging;
use todo_tui::terminal::{setup_panic_hook, TerminalManager};
use todo_tui::ui;

fn main() -> Result<()> {
    // Informational flags exit here, before the terminal is touched
    let Some(options) = run_cli_command(parse_args(std::env::args())) else {
        return Ok(());
    };
    let config = options.apply(AppConfig::from_env());

    color_eyre::install()?;
    logging::init(&config)?;
    setup_panic_hook();
    info!("Starting todo-tui {}", todo_tui::cli::VERSION);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let store = open_store(&config);
    let viewport = TerminalViewport::new(config.cell_width);
    let mut app = App::new(store);

    let mut manager = TerminalManager::new()?;
    app.start(&viewport).await;

    let result = run_app(manager.terminal(), &mut app, &viewport).await;

    app.shutdown();
    manager.restore()?;

    if let Err(err) = &result {
        error!("Exited with error: {}", err);
    } else {
        info!("Exited cleanly");
    }
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    viewport: &TerminalViewport,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut events = EventStream::new();

    while !app.should_quit {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key).await,
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse).await,
                    Some(Ok(Event::Resize(columns, _rows))) => {
                        viewport.handle_resize(columns);
                        app.needs_redraw = true;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                }
            }

            width = app.controller.next_resize() => {
                if let Some(width) = width {
                    app.on_resize(width);
                }
            }
        }
    }

    Ok(())
}
