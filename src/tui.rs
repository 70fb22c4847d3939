//! Full-screen flashcard review built on Ratatui.
//!
//! # State machine
//! Each card starts face up showing the English side:
//! `ShowingFront` → `ShowingBack` → next card, until `Finished`.
//! `q`/Esc leaves at any point; Left steps back to the previous card.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

use crate::store::WordStore;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const FRONT_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const BACK_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MISS_STYLE: Style = Style::new().fg(Color::Red);
const HINT_STYLE: Style = Style::new().fg(Color::Gray);

/// Review snapshot of one entry; the store itself stays untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Card {
    english: String,
    chinese: String,
    error_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeckState {
    ShowingFront,
    ShowingBack,
    Finished,
}

/// Pure card-walking state machine, kept apart from the terminal so it
/// can be exercised in tests.
#[derive(Debug)]
struct Deck {
    cards: Vec<Card>,
    position: usize,
    state: DeckState,
}

impl Deck {
    fn new(cards: Vec<Card>) -> Self {
        let state = if cards.is_empty() {
            DeckState::Finished
        } else {
            DeckState::ShowingFront
        };
        Self {
            cards,
            position: 0,
            state,
        }
    }

    fn current(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    /// Reveal the back, or move on to the next card.
    fn advance(&mut self) {
        match self.state {
            DeckState::ShowingFront => self.state = DeckState::ShowingBack,
            DeckState::ShowingBack => {
                if self.position + 1 < self.cards.len() {
                    self.position += 1;
                    self.state = DeckState::ShowingFront;
                } else {
                    self.state = DeckState::Finished;
                }
            }
            DeckState::Finished => {}
        }
    }

    /// Step back to the previous card, face up.
    fn retreat(&mut self) {
        if self.state == DeckState::ShowingBack {
            self.state = DeckState::ShowingFront;
        } else if self.position > 0 {
            self.position -= 1;
            self.state = DeckState::ShowingFront;
        }
    }
}

/// Terminal wrapper around [`Deck`]: rendering and key handling.
pub struct FlashcardTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    deck: Deck,
}

/// Run a review over the given store indices, in that order.
pub fn run_flashcards(store: &WordStore, order: &[usize]) -> io::Result<()> {
    let cards = order
        .iter()
        .map(|&index| {
            let entry = store.entry(index);
            Card {
                english: entry.english.clone(),
                chinese: entry.chinese.clone(),
                error_count: entry.error_count,
            }
        })
        .collect();

    let mut tui = FlashcardTui::new(cards)?;
    let result = tui.run();
    let cleanup = tui.cleanup();
    result.and(cleanup)
}

impl FlashcardTui {
    fn new(cards: Vec<Card>) -> io::Result<Self> {
        log::info!("initializing flashcard TUI with {} cards", cards.len());
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            deck: Deck::new(cards),
        })
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            self.draw()?;
            if self.handle_input()? {
                return Ok(());
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let deck = &self.deck;
        self.terminal.draw(|f| Self::render(f, deck))?;
        Ok(())
    }

    /// Process one input event. Returns `true` when the review is over.
    fn handle_input(&mut self) -> io::Result<bool> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => Ok(self.handle_key(key)),
            // Mouse, focus, paste and resize events are irrelevant here.
            _ => Ok(false),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => {
                if self.deck.state == DeckState::Finished {
                    return true;
                }
                self.deck.advance();
                false
            }
            KeyCode::Left | KeyCode::Backspace => {
                self.deck.retreat();
                false
            }
            _ => false,
        }
    }

    fn render(f: &mut Frame, deck: &Deck) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(7),    // Card
                Constraint::Length(3), // Progress
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_card(f, chunks[1], deck);
        Self::render_progress(f, chunks[2], deck);
        Self::render_instructions(f, chunks[3], deck);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("FLASHCARD REVIEW")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_card(f: &mut Frame, area: Rect, deck: &Deck) {
        let mut lines: Vec<Line> = Vec::new();

        match (deck.state, deck.current()) {
            (DeckState::Finished, _) | (_, None) => {
                lines.push(Line::from(Span::styled(
                    "That was the last card.",
                    BACK_STYLE,
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Press any key to leave.",
                    HINT_STYLE,
                )));
            }
            (state, Some(card)) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(card.english.clone(), FRONT_STYLE)));
                if state == DeckState::ShowingBack {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(card.chinese.clone(), BACK_STYLE)));
                    if card.error_count > 0 {
                        lines.push(Line::from(Span::styled(
                            format!("missed {} times before", card.error_count),
                            MISS_STYLE,
                        )));
                    }
                }
            }
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Card"));
        f.render_widget(paragraph, area);
    }

    fn render_progress(f: &mut Frame, area: Rect, deck: &Deck) {
        let text = if deck.cards.is_empty() {
            "No cards".to_string()
        } else if deck.state == DeckState::Finished {
            format!("{0} / {0}", deck.cards.len())
        } else {
            format!("{} / {}", deck.position + 1, deck.cards.len())
        };
        let paragraph = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Progress"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, deck: &Deck) {
        let text = match deck.state {
            DeckState::ShowingFront => "Enter/Space: reveal | Left: back | q: quit",
            DeckState::ShowingBack => "Enter/Space: next card | Left: front | q: quit",
            DeckState::Finished => "Any key: leave",
        };
        let paragraph = Paragraph::new(text)
            .style(HINT_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
