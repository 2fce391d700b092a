use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use parlor::{app::App, config, keys, logging, ui};

fn main() -> Result<()> {
    config::initialize_config()?;
    let cfg = config::get_config();
    let _logger = logging::init_logging(&cfg.log_level)?;
    info!("starting parlor");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&cfg);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal before surfacing any error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Synchronous draw/poll loop. Every state change is a direct reaction to
/// one key event; nothing here blocks on anything but the input poll.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    keys::handle_key(key, app);
                }
            }
        }

        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }
    }
}
