use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// No tickets yet.
    #[default]
    Setup,
    Ready,
    Playing,
    Complete,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// One game of Tambola: the dealt tickets, the caller's pool and the player's marks.
///
/// All mutation goes through the methods below, each of which either completes or leaves the session untouched.
#[derive(Clone, Debug)]
pub struct GameSession<R = SmallRng, A = Silent> {
    config: SessionConfig,
    generator: RandomTicketGenerator,
    phase: Phase,
    tickets: Vec<Ticket>,
    pool: DrawPool,
    marks: MarkState,
    current_number: Option<Number>,
    rng: R,
    announcer: A,
}

impl GameSession {
    /// Quiet session with a reproducible random source.
    pub fn seeded(config: SessionConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed), Silent)
    }
}

impl<R: RandomSource, A: Announcer> GameSession<R, A> {
    pub fn new(config: SessionConfig, rng: R, announcer: A) -> Self {
        Self {
            generator: RandomTicketGenerator::new(config.generation),
            config,
            phase: Phase::Setup,
            tickets: Vec::new(),
            pool: DrawPool::new(),
            marks: MarkState::new(),
            current_number: None,
            rng,
            announcer,
        }
    }

    /// Deals `count` fresh tickets, replacing the current ones and clearing marks.
    ///
    /// Numbers already drawn stay drawn.
    pub fn generate_tickets(&mut self, count: usize) -> Result<&[Ticket]> {
        if count == 0 {
            return Err(GameError::InvalidTicketCount);
        }

        let tickets: Vec<Ticket> = (0..count)
            .map(|_| self.generator.generate(&mut self.rng))
            .collect();
        let degraded = tickets.iter().filter(|ticket| ticket.is_degraded()).count();
        if degraded > 0 {
            log::warn!("{} of {} tickets carry repeated numbers", degraded, count);
        }

        self.tickets = tickets;
        self.marks.reset();
        self.set_phase(Phase::Ready);
        Ok(self.tickets.as_slice())
    }

    /// Deals the configured number of tickets.
    pub fn generate_default_tickets(&mut self) -> Result<&[Ticket]> {
        self.generate_tickets(self.config.ticket_count)
    }

    pub fn draw_next(&mut self) -> Result<DrawOutcome> {
        if self.tickets.is_empty() {
            return Err(GameError::NoTicketsAvailable);
        }
        self.check_not_finished()?;

        match self.pool.draw(&mut self.rng) {
            Ok(number) => {
                self.current_number = Some(number);
                self.set_phase(Phase::Playing);
                self.announcer.announce(&Announcement::Number(number));
                Ok(DrawOutcome::Drawn(number))
            }
            Err(GameError::PoolExhausted) => {
                self.set_phase(Phase::Complete);
                self.announcer.announce(&Announcement::GameComplete);
                Ok(DrawOutcome::Exhausted)
            }
            Err(err) => Err(err),
        }
    }

    pub fn toggle_mark(&mut self, number: Number) -> Result<MarkChange> {
        self.marks.toggle(number)
    }

    /// Restarts calling with the same tickets.
    pub fn start_new_game(&mut self) {
        self.pool = DrawPool::new();
        self.marks.reset();
        self.current_number = None;
        self.set_phase(Phase::Ready);
        self.announcer.announce(&Announcement::NewGame {
            player: self.config.player_name.clone(),
        });
    }

    /// Greets the configured player, returns false when there is nobody to greet.
    pub fn welcome_player(&mut self) -> bool {
        let Some(player) = self.config.player_name.clone() else {
            return false;
        };
        self.announcer.announce(&Announcement::Welcome { player });
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    pub fn marks(&self) -> &MarkState {
        &self.marks
    }

    pub fn current_number(&self) -> Option<Number> {
        self.current_number
    }

    pub fn is_marked(&self, number: Number) -> bool {
        self.marks.is_marked(number)
    }

    pub fn is_drawn(&self, number: Number) -> bool {
        self.pool.is_drawn(number)
    }

    pub fn can_draw(&self) -> bool {
        !self.tickets.is_empty() && !self.phase.is_finished()
    }

    /// Display state of one cell, `None` when the ticket or cell does not exist.
    pub fn cell_state(&self, ticket: usize, cell: Cell) -> Option<CellState> {
        let ticket = self.tickets.get(ticket)?;
        if cell.0 >= ROWS || cell.1 >= COLUMNS {
            return None;
        }

        Some(match ticket.cell(cell) {
            None => CellState::Empty,
            Some(number) if self.is_marked(number) => CellState::Marked(number),
            Some(number) if self.is_drawn(number) => CellState::Called(number),
            Some(number) => CellState::Plain(number),
        })
    }

    pub fn stats(&self) -> Stats {
        Stats::new(
            self.tickets.len(),
            self.pool.drawn_count(),
            self.marks.len(),
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            tickets: self.tickets.clone(),
            drawn: self.pool.drawn().to_vec(),
            marked: self.marks.iter().collect(),
            current_number: self.current_number,
            stats: self.stats(),
        }
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::PoolExhausted)
        } else {
            Ok(())
        }
    }
}
