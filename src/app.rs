use std::io::{self, stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
};
use log::info;
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    errors::{FoldError, FoldResult},
    keys::{handle_key, handle_mouse},
    logging,
    model::{Model, RunningState, inventory::Inventory},
    msg::{Message, update::update},
    view::view,
};

const EVENT_POLL_TIMEOUT_MILLIS: u64 = 250;

/// Loads the config (from `config_path` when given), then runs the demo
/// table until the user quits.
pub fn run(config_path: Option<&Path>) -> FoldResult<()> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(),
    };
    logging::init(config.log_level())?;
    info!("starting with sync policy {:?}", config.sync_policy);

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(FoldError::from)
        .and_then(|()| run_loop(terminal, &config));
    let disabled = execute!(stdout(), DisableMouseCapture);
    restore_then(result, disabled, ratatui::restore)
}

/// Calls `restore`, then reports the first error of `result` and `cleanup`.
fn restore_then(
    result: FoldResult<()>,
    cleanup: io::Result<()>,
    restore: impl FnOnce(),
) -> FoldResult<()> {
    restore();
    result?;
    cleanup?;
    Ok(())
}

/// Main run loop which polls events (messages), transforms the model,
/// and renders the UI.
fn run_loop(mut terminal: DefaultTerminal, config: &Config) -> FoldResult<()> {
    let mut model = Model::new(Inventory::sample(), config);

    while model.running_state != RunningState::Done {
        // Check if toast has expired and clear it
        if let Some(ref toast) = model.toast {
            if Instant::now() >= toast.expires_at {
                model.toast = None;
            }
        }

        // Keep the viewport in sync with the terminal size for layout and clicks
        let size = terminal.size()?;
        model
            .ui_model
            .resize(ratatui::layout::Rect::new(0, 0, size.width, size.height));

        // Render view
        terminal.draw(|f| view(&model, f))?;

        // Handle event
        let mut current_msg = handle_event(&model)?;

        // Process updates
        while let Some(msg) = current_msg {
            current_msg = update(&mut model, msg);
        }
    }
    info!("quit");
    Ok(())
}

/// Blocks for [`EVENT_POLL_TIMEOUT_MILLIS`] waiting for an input event.
/// If an event occurred during this time, return what [`Message`]
/// it should trigger.
fn handle_event(model: &Model) -> FoldResult<Option<Message>> {
    if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MILLIS))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                return Ok(handle_key(key, model));
            }
            Event::Mouse(mouse) => return Ok(handle_mouse(mouse)),
            _ => {}
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_restore_runs_when_loop_fails() {
        let restored = Cell::new(false);
        let failed = Err(FoldError::from(io::Error::other("draw failed")));

        let result = restore_then(failed, Err(io::Error::other("cleanup")), || {
            restored.set(true)
        });
        assert!(restored.get());
        match result {
            Err(FoldError::IoError(err)) => assert_eq!(err.to_string(), "draw failed"),
            other => panic!("expected the loop error, got {:?}", other),
        }
    }

    #[test]
    fn test_cleanup_error_is_reported_after_restore() {
        let restored = Cell::new(false);
        let result = restore_then(Ok(()), Err(io::Error::other("cleanup")), || {
            restored.set(true)
        });
        assert!(restored.get());
        assert!(result.is_err());
    }

    #[test]
    fn test_restore_then_ok() {
        assert!(restore_then(Ok(()), Ok(()), || {}).is_ok());
    }
}
