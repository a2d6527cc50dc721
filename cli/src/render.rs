use tambola_core::{
    Announcer, COLUMNS, CellState, GameSession, Number, POOL_SIZE, Phase, ROWS, RandomSource, Stats,
};

/// Line telling the player what to do next.
pub fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Setup => "Generate your tickets to get started!",
        Phase::Ready => "Ready to play! Draw a number to start!",
        Phase::Playing => "Game in progress! Keep marking your numbers!",
        Phase::Complete => "Game complete! All numbers picked!",
    }
}

fn cell_text(state: CellState) -> String {
    match state {
        CellState::Empty => "    ".to_owned(),
        CellState::Plain(number) => format!(" {number:>2} "),
        CellState::Called(number) => format!("({number:>2})"),
        CellState::Marked(number) => format!("[{number:>2}]"),
    }
}

/// Ticket as a text grid: `[12]` marked, `(12)` called, ` 12 ` untouched.
pub fn ticket<R: RandomSource, A: Announcer>(session: &GameSession<R, A>, index: usize) -> String {
    let border = format!("+{}+\n", "-".repeat(COLUMNS * 4));
    let mut out = format!("Ticket #{}\n{border}", index + 1);
    for row in 0..ROWS {
        out.push('|');
        for col in 0..COLUMNS {
            let state = session
                .cell_state(index, (row, col))
                .unwrap_or(CellState::Empty);
            out.push_str(&cell_text(state));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

/// All 90 numbers, ten per line, drawn ones shown and the rest dotted.
pub fn called_board(drawn: &[Number], current: Option<Number>) -> String {
    let mut out = String::new();
    for number in 1..=POOL_SIZE {
        let text = if Some(number) == current {
            format!("<{number:>2}>")
        } else if drawn.contains(&number) {
            format!(" {number:>2} ")
        } else {
            "  . ".to_owned()
        };
        out.push_str(&text);
        if number % 10 == 0 {
            out.push('\n');
        }
    }
    out
}

pub fn stats(stats: Stats) -> String {
    format!(
        "tickets {} | called {}/{} | marked {} | left {} | {}%",
        stats.tickets, stats.called, POOL_SIZE, stats.marked, stats.left, stats.progress_percent
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tambola_core::{SessionConfig, Silent};

    use super::*;

    #[test]
    fn ticket_grid_shows_every_number() {
        let mut session =
            GameSession::new(SessionConfig::default(), SmallRng::seed_from_u64(1), Silent);
        session.generate_tickets(1).unwrap();
        let drawn = session.draw_next().unwrap().number().unwrap();

        let text = ticket(&session, 0);

        assert!(text.starts_with("Ticket #1\n+"));
        assert_eq!(text.lines().count(), 2 + ROWS + 1);
        for number in session.tickets()[0].numbers() {
            if number == drawn {
                assert!(text.contains(&format!("({number:>2})")));
            } else {
                assert!(text.contains(&format!(" {number:>2} ")));
            }
        }
    }

    #[test]
    fn board_highlights_current_number() {
        let board = called_board(&[5, 17], Some(17));

        assert_eq!(board.lines().count(), 9);
        assert!(board.lines().next().unwrap().contains("  5 "));
        assert!(board.contains("<17>"));
        assert!(!board.contains(" 18 "));
    }

    #[test]
    fn stats_line() {
        assert_eq!(
            stats(Stats::new(6, 9, 1)),
            "tickets 6 | called 9/90 | marked 1 | left 81 | 10%"
        );
    }
}
