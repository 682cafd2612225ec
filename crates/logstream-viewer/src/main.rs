use anyhow::{Context, Result};
use logstream_config::ViewerConfig;
use logstream_core::{
    ControllerOptions, FilterConfig, LogStreamController, ReservedComponents, ScopeName,
    StreamAction, StreamSession, ViewControl,
};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    Terminal,
};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

mod actions;
mod emitters;
mod keymap;
mod line_parser;
mod logger;
mod reducer;
mod source;
mod state;
mod theme;
mod views;

use source::FileLogSource;
use state::ViewerState;
use theme::Theme;

/// Demo emitters started when no file is given
const DEMO_EMITTERS: [&str; 2] = ["emitter-1", "emitter-2"];

/// How long one loop iteration waits for a key press
const INPUT_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting logstream-viewer");

    let config = ViewerConfig::load();
    let reserved = ReservedComponents {
        own_process: config.own_component.clone(),
        separator: config.separator_marker.clone(),
    };
    let file_arg = std::env::args().nth(1).map(PathBuf::from);

    let scope = ScopeName::parse_or_all(&config.component_scope);
    let min_level = config.min_level.clone();
    let options = ControllerOptions {
        capacity: config.capacity,
        follow_tail: config.follow_tail,
        row_height: config.row_height,
        filter: FilterConfig::new(min_level.clone(), reserved.scope(scope)),
    };
    let session = StreamSession::open(LogStreamController::new(options));

    // Sources
    let stop = Arc::new(AtomicBool::new(false));
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    let mut workers: Vec<JoinHandle<()>> = Vec::new();

    let source_label = match &file_arg {
        Some(path) => {
            let source = FileLogSource::new(path.clone(), config.capacity, &reserved.separator);
            workers.push(source::spawn_tail(
                source,
                session.producer(),
                poll_interval,
                stop.clone(),
            ));
            path.display().to_string()
        }
        None => {
            let source = FileLogSource::new(log_file.clone(), config.capacity, &reserved.separator)
                .with_component(&reserved.own_process);
            workers.push(source::spawn_tail(
                source,
                session.producer(),
                poll_interval,
                stop.clone(),
            ));
            for name in DEMO_EMITTERS {
                workers.push(emitters::spawn_emitter(
                    name.to_string(),
                    session.producer(),
                    poll_interval * 7,
                    stop.clone(),
                ));
            }
            format!("{} + demo emitters", log_file.display())
        }
    };

    let mut state = ViewerState::new(config.row_height, config.follow_tail, source_label);
    state.min_level = min_level;
    state.scope = scope;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &session, state, &reserved);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    stop.store(true, Ordering::Relaxed);
    session.close();
    for worker in workers {
        if worker.join().is_err() {
            log::error!("Source thread panicked");
        }
    }

    log::info!("Exiting logstream-viewer");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &StreamSession,
    mut state: ViewerState,
    reserved: &ReservedComponents,
) -> Result<()> {
    let control = session.control();
    let theme = Theme::default();

    while state.running {
        let size = terminal.size()?;
        state.viewport_rows = views::list_height(Rect::new(0, 0, size.width, size.height));
        let before = state.scroll_offset;
        state.clamp_offset();
        if state.scroll_offset != before {
            control.viewport_scrolled(state.scroll_offset, state.generation);
        }

        // Apply everything the consumer produced since the last frame
        for event in session.events().try_iter() {
            let (next, follow_up) = reducer::reduce_event(state, &event);
            state = next;
            dispatch_all(&control, follow_up);
        }

        terminal
            .draw(|frame| views::render(&state, &theme, frame.area(), frame))
            .context("Failed to draw frame")?;

        // Second phase: the new records are laid out, the scroll may follow
        if state.layout_pending {
            state.layout_pending = false;
            control.layout_settled();
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = keymap::map_key(&key) {
                        let (next, follow_up) = reducer::reduce_ui(state, &action, reserved);
                        state = next;
                        dispatch_all(&control, follow_up);
                    }
                }
            }
        }
    }

    Ok(())
}

fn dispatch_all(control: &ViewControl, actions: Vec<StreamAction>) {
    for action in actions {
        control.dispatch(action);
    }
}
