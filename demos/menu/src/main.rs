//! Menu demo: an immediate File menu next to a Selected run button.
//!
//! The File menu executes its items directly; the Run button remembers a
//! selection and executes it from the wide segment. Both close on Escape,
//! on an outside click, and one second after the pointer leaves them.
//!
//! Keys: d = mount/unmount the File menu, q = quit. Mouse to interact.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_dropdown::{
    process_raw_event, spawn_event_poller, Action, Component, EventKind, ImmediateDropdown,
    ImmediateDropdownProps, InteractionState, MenuItem, OutsideClick, OutsideClickGuard, RawEvent,
    SelectedDropdown, SelectedDropdownProps, Store,
};

#[derive(Clone, Debug)]
enum AppAction {
    FileToggle,
    FileClose,
    FileHoverEnter,
    FileHoverLeave,
    FileHoverTimeout,
    RunToggle,
    RunClose,
    RunHoverEnter,
    RunHoverLeave,
    RunHoverTimeout,
    RunExecute(String),
    NewFile,
    OpenFile,
    Quit,
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::FileToggle => "FileToggle",
            AppAction::FileClose => "FileClose",
            AppAction::FileHoverEnter => "FileHoverEnter",
            AppAction::FileHoverLeave => "FileHoverLeave",
            AppAction::FileHoverTimeout => "FileHoverTimeout",
            AppAction::RunToggle => "RunToggle",
            AppAction::RunClose => "RunClose",
            AppAction::RunHoverEnter => "RunHoverEnter",
            AppAction::RunHoverLeave => "RunHoverLeave",
            AppAction::RunHoverTimeout => "RunHoverTimeout",
            AppAction::RunExecute(_) => "RunExecute",
            AppAction::NewFile => "NewFile",
            AppAction::OpenFile => "OpenFile",
            AppAction::Quit => "Quit",
        }
    }
}

struct AppState {
    file_menu: InteractionState<AppAction>,
    run_menu: InteractionState<AppAction>,
    files_created: usize,
    status: String,
}

impl AppState {
    fn new(action_tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self {
            file_menu: InteractionState::new(action_tx.clone(), || AppAction::FileHoverTimeout),
            run_menu: InteractionState::new(action_tx, || AppAction::RunHoverTimeout),
            files_created: 0,
            status: "ready".to_string(),
        }
    }
}

fn reducer(state: &mut AppState, action: AppAction) -> bool {
    match action {
        AppAction::FileToggle => state.file_menu.trigger(),
        AppAction::FileClose => state.file_menu.close(),
        AppAction::FileHoverEnter => state.file_menu.hover_enter(),
        AppAction::FileHoverLeave => state.file_menu.hover_leave(),
        AppAction::FileHoverTimeout => state.file_menu.timeout_close(),
        AppAction::RunToggle => state.run_menu.trigger(),
        AppAction::RunClose => state.run_menu.close(),
        AppAction::RunHoverEnter => state.run_menu.hover_enter(),
        AppAction::RunHoverLeave => state.run_menu.hover_leave(),
        AppAction::RunHoverTimeout => state.run_menu.timeout_close(),
        AppAction::RunExecute(id) => state.status = format!("ran configuration {id}"),
        AppAction::NewFile => {
            state.files_created += 1;
            state.status = format!("created file {}", state.files_created);
        }
        AppAction::OpenFile => state.status = "opened a file".to_string(),
        AppAction::Quit => {} // handled in main loop
    }
    true
}

fn file_props<'a>(items: &'a [MenuItem<'a, AppAction>], is_open: bool) -> ImmediateDropdownProps<'a, AppAction> {
    ImmediateDropdownProps {
        items,
        is_open,
        on_toggle: || AppAction::FileToggle,
        on_close: || AppAction::FileClose,
        on_hover_enter: || AppAction::FileHoverEnter,
        on_hover_leave: || AppAction::FileHoverLeave,
    }
}

fn run_props<'a>(items: &'a [MenuItem<'a, AppAction>], is_open: bool) -> SelectedDropdownProps<'a, AppAction> {
    SelectedDropdownProps {
        items,
        is_open,
        on_execute: AppAction::RunExecute,
        on_toggle: || AppAction::RunToggle,
        on_close: || AppAction::RunClose,
        on_hover_enter: || AppAction::RunHoverEnter,
        on_hover_leave: || AppAction::RunHoverLeave,
    }
}

fn mount_file_menu(
    registry: &OutsideClick<AppAction>,
) -> io::Result<(ImmediateDropdown, OutsideClickGuard<AppAction>)> {
    let widget = ImmediateDropdown::new("File", "file-menu")
        .map_err(io::Error::other)?
        .style(Style::default().fg(Color::Cyan));
    let guard = registry.register(widget.area(), || AppAction::FileClose);
    Ok((widget, guard))
}

#[tokio::main]
async fn main() -> io::Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();

    // Store = state + reducer
    let mut store = Store::new(AppState::new(action_tx.clone()), reducer);

    let file_items = vec![
        MenuItem::new("new", "New file").on_activate(|| AppAction::NewFile),
        MenuItem::new("open", "Open file").on_activate(|| AppAction::OpenFile),
    ];
    let run_items = vec![
        MenuItem::new("debug", "Debug build"),
        MenuItem::new("release", "Release build"),
    ];
    let run_labels = HashMap::from([
        ("debug".to_string(), Line::from("Run: Debug build")),
        ("release".to_string(), Line::from("Run: Release build")),
    ]);

    // A Selected widget without items can never form a selection
    run_props(&run_items, false)
        .validate()
        .map_err(io::Error::other)?;

    let registry = OutsideClick::new(action_tx.clone());
    let mut file = Some(mount_file_menu(&registry)?);
    let mut run = SelectedDropdown::new(run_labels, "run-config", "choose run configuration")
        .map_err(io::Error::other)?
        .style(Style::default().fg(Color::Green));
    let run_guard = registry.register(run.area(), || AppAction::RunClose);

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                let area = frame.area();
                let [body, status_area] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

                if let Some((widget, _)) = file.as_mut() {
                    let file_area = Rect::new(body.x + 2, body.y + 1, 20, body.height.saturating_sub(1));
                    widget.render(
                        frame,
                        file_area,
                        file_props(&file_items, store.state().file_menu.is_open()),
                    );
                }
                let run_area = Rect::new(body.x + 26, body.y + 1, 28, body.height.saturating_sub(1));
                run.render(
                    frame,
                    run_area,
                    run_props(&run_items, store.state().run_menu.is_open()),
                );

                let status = Paragraph::new(format!(
                    " {}  |  listeners: {}  |  d: toggle File menu  q: quit",
                    store.state().status,
                    registry.len(),
                ))
                .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(status, status_area);
            })?;

            // Keep the registered areas in step with the layout just drawn
            if let Some((widget, guard)) = file.as_ref() {
                guard.set_area(widget.area());
            }
            run_guard.set_area(run.area());
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);

                if let EventKind::Key(key) = &event {
                    match key.code {
                        KeyCode::Char('q') => {
                            let _ = action_tx.send(AppAction::Quit);
                        }
                        KeyCode::Char('d') => {
                            // Unmounting drops the widget and its listener guard
                            if file.take().is_some() {
                                let _ = action_tx.send(AppAction::FileClose);
                            } else {
                                file = Some(mount_file_menu(&registry)?);
                            }
                            should_render = true;
                        }
                        _ => {}
                    }
                }

                if let Some((widget, _)) = file.as_mut() {
                    let open = store.state().file_menu.is_open();
                    for action in widget.handle_event(&event, file_props(&file_items, open)) {
                        let _ = action_tx.send(action);
                    }
                }
                let open = store.state().run_menu.is_open();
                for action in run.handle_event(&event, run_props(&run_items, open)) {
                    let _ = action_tx.send(action);
                }
                if let Some((column, row)) = event.as_left_click() {
                    registry.notify(column, row);
                    // A selection click mutates the widget without emitting
                    // an action, so a left press always redraws
                    should_render = true;
                }
                if matches!(event, EventKind::Resize(_, _)) {
                    should_render = true;
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, AppAction::Quit) {
                    break;
                }
                should_render = store.dispatch(action) || should_render;
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}
