//! Application struct and event loop.
//!
//! Owns the terminal, state, and sampler. One source of recurring work
//! (the sampling tick) and one source of user-triggered work (key/mouse
//! events), both executed sequentially on this thread.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    Terminal,
};

use crate::config::Config;
use crate::constants::*;
use crate::monitor::SystemProvider;
use crate::sampler::Sampler;
use crate::ui::{self, AppState, HitTarget, OverlayLayout};

/// Main application struct.
///
/// Owns all runtime resources: terminal lifecycle, state, and the sampler.
pub struct App {
    state: AppState,
    sampler: Sampler<SystemProvider>,
    refresh_interval: Duration,
    last_refresh: Option<Instant>,

    // Local loop state
    /// Frame area from the most recent draw, for mouse hit-testing.
    frame_area: Rect,
    /// Whether the mouse is held down on the slider track.
    slider_drag: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        // Resolve theme: built-in name, then custom theme file.
        let theme = ui::Theme::by_name(&config.theme)
            .or_else(|| ui::Theme::from_toml_file(&custom_theme_path(&config.theme)))
            .unwrap_or_default();

        Self {
            state: AppState::new(config, theme),
            sampler: Sampler::new(SystemProvider::new()),
            refresh_interval: Duration::from_millis(
                config.refresh_interval_ms.max(MIN_REFRESH_MS),
            ),
            last_refresh: None,
            frame_area: Rect::default(),
            slider_drag: false,
        }
    }

    /// Run the main event loop. Returns when the user quits.
    pub fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Initial sample so the card never starts empty.
        self.refresh();

        // Main loop
        loop {
            terminal.draw(|frame| {
                self.frame_area = frame.area();
                ui::render(frame, &self.state);
            })?;

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break; // quit requested
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.tick_refresh();
        }

        // Cleanup
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    // ── Keyboard handling ────────────────────────────────────────

    /// Handle a key event. Returns `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let max_origin = self.current_layout().max_origin(self.frame_area);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('p') | KeyCode::Char(' ') => self.state.toggle_panel(),
            KeyCode::Char(c @ '1'..='5') => {
                self.state.toggle_category(c as usize - '1' as usize);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.state.bump_font_size(1),
            KeyCode::Char('-') => self.state.bump_font_size(-1),
            KeyCode::Char('t') => self.state.cycle_theme(),
            KeyCode::Left => self.state.move_by(-1, 0, max_origin),
            KeyCode::Right => self.state.move_by(1, 0, max_origin),
            KeyCode::Up => self.state.move_by(0, -1, max_origin),
            KeyCode::Down => self.state.move_by(0, 1, max_origin),
            _ => {}
        }
        false
    }

    // ── Mouse handling ───────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        let layout = self.current_layout();

        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.bump_font_size(1),
            MouseEventKind::ScrollDown => self.state.bump_font_size(-1),
            MouseEventKind::Down(MouseButton::Left) => match layout.hit_test(pos) {
                Some(HitTarget::Button) => self.state.toggle_panel(),
                Some(HitTarget::Checkbox(category)) => self.state.toggles.toggle(category),
                Some(HitTarget::Slider(value)) => {
                    self.state.set_font_size(value);
                    self.slider_drag = true;
                }
                Some(HitTarget::Body) => self.state.begin_drag(pos),
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.slider_drag {
                    self.state.set_font_size(layout.slider_value_at(mouse.column));
                } else {
                    self.state.drag_to(pos, layout.max_origin(self.frame_area));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.state.end_drag();
                self.slider_drag = false;
            }
            _ => {}
        }
    }

    // ── Tick-based logic ─────────────────────────────────────────

    /// Re-sample when the refresh interval has elapsed. Sampling runs
    /// inline, so a tick can never overlap the previous one; a sample
    /// taking close to the full period simply delays the next tick.
    fn tick_refresh(&mut self) {
        let due = self.state.tick_count == 0
            || self
                .last_refresh
                .map_or(true, |at| at.elapsed() >= self.refresh_interval);
        if due {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let text = self.sampler.sample(&self.state.toggles);
        self.state.update_text(text);
        self.last_refresh = Some(Instant::now());
    }

    fn current_layout(&self) -> OverlayLayout {
        OverlayLayout::compute(&self.state, self.frame_area)
    }
}
