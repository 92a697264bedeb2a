//! Interactive terminal UI for scansum.
//!
//! One section on screen at a time: Home, Preview, Loading, Results,
//! Error.  Fully keyboard-driven; backend requests run on the tokio
//! runtime and report back over a channel.

mod app;
mod event;
mod sections;
mod terminal;
mod theme;

pub use sections::results::results_lines;

use std::time::Duration;

use scansum_client::ApiClient;

use app::App;
use event::{AppEvent, EventHandler};
use terminal::TuiSession;

/// Run the interactive TUI until the user quits.
pub async fn run_tui(client: ApiClient, summary_type: &str) -> anyhow::Result<()> {
    let mut session = TuiSession::open()?;

    let mut app = App::new(client, summary_type);
    app.check_health();

    let api_rx = app
        .take_api_rx()
        .ok_or_else(|| anyhow::anyhow!("event channel already taken"))?;
    let mut events = EventHandler::new(Duration::from_millis(100), api_rx);

    loop {
        session.term.draw(|frame| app.render(frame))?;

        match events.next().await? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Api(evt) => app.handle_api_event(evt),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
