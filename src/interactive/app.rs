//! TUI application state and logic

use crate::core::Cell;
use crate::hoops::{HoopsGame, StepEvent, Swipe};
use crate::progress::Tracker;
use crate::wordle::{GameState, WordleError, WordleGame};
use crate::wordlists;
use crate::wordsearch::{GeneratorConfig, PuzzleSession, SelectionOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Court dimensions for the TUI basketball game
pub const COURT_WIDTH: f64 = 420.0;
pub const COURT_HEIGHT: f64 = 640.0;

const TICK: Duration = Duration::from_millis(16);
const AIM_MIN_DEGREES: f64 = 20.0;
const AIM_MAX_DEGREES: f64 = 160.0;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    WordSearch,
    Wordle,
    Hoops,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub menu_index: usize,
    pub tracker: Tracker,
    pub search: PuzzleSession,
    pub cursor: Cell,
    pub anchor: Option<Cell>,
    pub wordle: WordleGame,
    pub hoops: HoopsGame,
    /// Launch angle, degrees from the positive x axis; 90 is straight up
    pub aim_degrees: f64,
    /// Launch strength in `0.0..=1.0`
    pub power: f64,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    /// Set up the arcade: one puzzle, one secret, one court
    ///
    /// # Errors
    /// Returns an error when the word-search puzzle cannot be generated.
    pub fn new(tracker: Tracker) -> Result<Self> {
        let mut rng = StdRng::from_os_rng();
        let search = PuzzleSession::generate(
            wordlists::travel_words(),
            &GeneratorConfig::eight_way(),
            &mut rng,
        )?;
        let secret = wordlists::pick_secret(&mut rng);

        Ok(Self {
            screen: Screen::Menu,
            menu_index: 0,
            tracker,
            search,
            cursor: Cell::new(0, 0),
            anchor: None,
            wordle: WordleGame::new(secret)?,
            hoops: HoopsGame::new(COURT_WIDTH, COURT_HEIGHT),
            aim_degrees: 70.0,
            power: 0.6,
            messages: vec![Message {
                text: "Three challenges. Finish them all!".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng,
        })
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn record_completion(&mut self, challenge: &str) {
        self.tracker.mark_complete(challenge);
        if self.tracker.is_all_complete() {
            self.tracker.grant_access();
            self.add_message(
                "🏆 ALL CHALLENGES COMPLETE! Access granted!",
                MessageStyle::Success,
            );
        }
    }

    /// Move the word-search cursor by one cell, staying inside the grid
    pub fn move_cursor(&mut self, dr: i64, dc: i64) {
        let rows = self.search.grid().rows() as i64;
        let cols = self.search.grid().cols() as i64;
        let r = (self.cursor.row as i64 + dr).clamp(0, rows - 1);
        let c = (self.cursor.col as i64 + dc).clamp(0, cols - 1);
        self.cursor = Cell::new(r as usize, c as usize);
    }

    /// Complete the drag from the anchor to the cursor
    pub fn finish_drag(&mut self) {
        let Some(anchor) = self.anchor.take() else {
            return;
        };
        match self.search.match_drag(anchor, self.cursor) {
            SelectionOutcome::WordFound { word, .. } => {
                let label = self
                    .search
                    .words()
                    .display_of(&word)
                    .unwrap_or(&word)
                    .to_string();
                self.add_message(&format!("✅ Found {label}!"), MessageStyle::Success);
            }
            SelectionOutcome::PuzzleComplete { word, .. } => {
                let label = self
                    .search
                    .words()
                    .display_of(&word)
                    .unwrap_or(&word)
                    .to_string();
                self.add_message(
                    &format!("🎉 Found {label} - puzzle complete!"),
                    MessageStyle::Success,
                );
                self.record_completion("wordsearch");
            }
            SelectionOutcome::NoMatch => {
                self.add_message("✗ Not one of the words", MessageStyle::Error);
            }
            SelectionOutcome::Selecting => {}
        }
    }

    /// Regenerate the word-search puzzle
    pub fn new_search(&mut self) {
        match PuzzleSession::generate(
            wordlists::travel_words(),
            &GeneratorConfig::eight_way(),
            &mut self.rng,
        ) {
            Ok(session) => {
                self.search = session;
                self.cursor = Cell::new(0, 0);
                self.anchor = None;
                self.add_message("🔄 New puzzle!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the Wordle row being typed
    pub fn submit_wordle(&mut self) {
        match self.wordle.submit() {
            Ok(_) => match self.wordle.state() {
                GameState::Won => {
                    self.add_message("🎉 Wordle solved!", MessageStyle::Success);
                    self.record_completion("wordle");
                }
                GameState::Lost => {
                    let secret = self.wordle.secret().to_uppercase();
                    self.add_message(
                        &format!("😅 Out of guesses. It was {secret}. Press 'n' to retry."),
                        MessageStyle::Error,
                    );
                }
                GameState::InProgress => {}
            },
            Err(WordleError::NotEnoughLetters) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Start a fresh Wordle game with a new secret
    pub fn new_wordle(&mut self) {
        let secret = wordlists::pick_secret(&mut self.rng);
        if let Ok(game) = WordleGame::new(secret) {
            self.wordle = game;
            self.add_message("🔄 New word!", MessageStyle::Info);
        }
    }

    pub fn adjust_aim(&mut self, degrees: f64) {
        self.aim_degrees = (self.aim_degrees + degrees).clamp(AIM_MIN_DEGREES, AIM_MAX_DEGREES);
    }

    pub fn adjust_power(&mut self, delta: f64) {
        self.power = (self.power + delta).clamp(0.1, 1.0);
    }

    /// Shoot the ball along the current aim
    pub fn shoot(&mut self) {
        let theta = self.aim_degrees.to_radians();
        let dist = 40.0 + self.power * 160.0;
        let swipe = Swipe {
            dx: theta.cos() * dist,
            dy: -theta.sin() * dist,
            duration_ms: 300.0,
        };
        if !self.hoops.launch(swipe) {
            self.add_message("Ball is still in the air", MessageStyle::Info);
        }
    }

    /// Advance the basketball simulation by one frame
    pub fn tick_hoops(&mut self) {
        match self.hoops.step(TICK.as_secs_f64()) {
            StepEvent::ShotMade { makes } => {
                self.add_message(
                    &format!("🏀 Swish! {makes} of {}", crate::hoops::TARGET_MAKES),
                    MessageStyle::Success,
                );
            }
            StepEvent::ChallengeComplete => {
                self.add_message("🎉 Three makes - challenge complete!", MessageStyle::Success);
                self.record_completion("basketball");
            }
            StepEvent::Landed => self.hoops.reset_ball(),
            StepEvent::Idle | StepEvent::Airborne => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // The ball animates between key presses; everything else waits
        let animating = app.screen == Screen::Hoops && app.hoops.ball().in_air;
        if animating {
            if event::poll(TICK)? {
                handle_event(&mut app, event::read()?);
            }
            app.tick_hoops();
        } else {
            handle_event(&mut app, event::read()?);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_event(app: &mut App, event: Event) {
    let Event::Key(key) = event else {
        return;
    };
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Menu => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                app.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.menu_index = app.menu_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.menu_index = (app.menu_index + 1).min(2);
            }
            KeyCode::Enter => {
                app.screen = match app.menu_index {
                    0 => Screen::WordSearch,
                    1 => Screen::Wordle,
                    _ => Screen::Hoops,
                };
            }
            _ => {}
        },
        Screen::WordSearch => match key.code {
            KeyCode::Esc => {
                if app.anchor.take().is_none() {
                    app.screen = Screen::Menu;
                }
            }
            KeyCode::Up => app.move_cursor(-1, 0),
            KeyCode::Down => app.move_cursor(1, 0),
            KeyCode::Left => app.move_cursor(0, -1),
            KeyCode::Right => app.move_cursor(0, 1),
            KeyCode::Char(' ') => {
                app.anchor = Some(app.cursor);
            }
            KeyCode::Enter => app.finish_drag(),
            KeyCode::Char('n') => app.new_search(),
            _ => {}
        },
        Screen::Wordle => match key.code {
            KeyCode::Esc => {
                app.screen = Screen::Menu;
            }
            KeyCode::Enter => app.submit_wordle(),
            KeyCode::Backspace => app.wordle.backspace(),
            KeyCode::Char('n') if app.wordle.state() != GameState::InProgress => {
                app.new_wordle();
            }
            KeyCode::Char(c) => app.wordle.push_letter(c),
            _ => {}
        },
        Screen::Hoops => match key.code {
            KeyCode::Esc => {
                app.screen = Screen::Menu;
            }
            KeyCode::Left => app.adjust_aim(5.0),
            KeyCode::Right => app.adjust_aim(-5.0),
            KeyCode::Up => app.adjust_power(0.05),
            KeyCode::Down => app.adjust_power(-0.05),
            KeyCode::Char(' ') | KeyCode::Enter => app.shoot(),
            _ => {}
        },
    }
}
