use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tambola_core::{DrawOutcome, GameSession, MarkChange, number_to_words};

use crate::command::Input;
use crate::speaker::Speaker;

mod command;
mod render;
mod settings;
mod speaker;

type Session = GameSession<SmallRng, Speaker>;

const CALLS_PER_LINE: usize = 15;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player name for announcements
    #[arg(short, long)]
    player: Option<String>,

    /// Tickets to deal by default
    #[arg(short, long)]
    tickets: Option<usize>,

    /// Give every column at least one number
    #[arg(long)]
    every_column: bool,

    /// Draws per cell before a repeated number is kept
    #[arg(long)]
    max_attempts: Option<u16>,

    /// Don't voice drawn numbers
    #[arg(long)]
    mute: bool,

    /// Print a JSON snapshot of the session on exit
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Interactive game (default)
    Play,
    /// Deal tickets and call every number
    Auto,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = settings::load(
        args.config.as_deref(),
        settings::Overrides {
            player: args.player,
            tickets: args.tickets,
            every_column: args.every_column,
            max_attempts: args.max_attempts,
        },
    )?;
    // voice gets its own stream so it never splits a line of game output
    let speaker = if args.mute {
        Speaker::muted()
    } else {
        Speaker::spawn(io::stderr())
    };
    let mut session = GameSession::new(config, SmallRng::seed_from_u64(seed), speaker);
    session.welcome_player();

    let mut out = io::stdout();
    match args.command.unwrap_or(Command::Play) {
        Command::Play => play(&mut session, io::stdin().lock(), &mut out)?,
        Command::Auto => auto(&mut session, &mut out)?,
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.snapshot())?)?;
    }
    Ok(())
}

fn play(session: &mut Session, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", render::phase_hint(session.phase()))?;
    writeln!(out, "{}", command::HELP)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let flow = match line.parse::<Input>() {
            Ok(input) => handle(session, input, out)?,
            Err(err) => {
                writeln!(out, "{err}")?;
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn handle(session: &mut Session, input: Input, out: &mut impl Write) -> io::Result<Flow> {
    log::trace!("input: {:?}", input);
    match input {
        Input::Tickets(count) => {
            let count = count.unwrap_or(session.config().ticket_count);
            match session.generate_tickets(count) {
                Ok(_) => {
                    show_tickets(session, out)?;
                    writeln!(out, "{}", render::phase_hint(session.phase()))?;
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        Input::Draw => match session.draw_next() {
            Ok(DrawOutcome::Drawn(number)) => {
                let words = number_to_words(number).unwrap_or_default();
                writeln!(
                    out,
                    "Called {number} ({words}), {}/{} drawn",
                    session.pool().drawn_count(),
                    tambola_core::POOL_SIZE
                )?;
            }
            Ok(DrawOutcome::Exhausted) => {
                writeln!(out, "{}", render::phase_hint(session.phase()))?;
            }
            Err(err) => writeln!(out, "{err}")?,
        },
        Input::Mark(number) => match session.toggle_mark(number) {
            Ok(MarkChange::Marked) => {
                writeln!(out, "Marked {number}")?;
                if !session.tickets().iter().any(|ticket| ticket.contains(number)) {
                    writeln!(out, "({number} is not on your tickets)")?;
                }
            }
            Ok(MarkChange::Unmarked) => writeln!(out, "Unmarked {number}")?,
            Err(err) => writeln!(out, "{err}")?,
        },
        Input::NewGame => {
            session.start_new_game();
            writeln!(out, "{}", render::phase_hint(session.phase()))?;
        }
        Input::Status => {
            show_tickets(session, out)?;
            write!(
                out,
                "{}",
                render::called_board(session.pool().drawn(), session.current_number())
            )?;
            writeln!(out, "{}", render::stats(session.stats()))?;
            writeln!(out, "{}", render::phase_hint(session.phase()))?;
        }
        Input::Help => writeln!(out, "{}", command::HELP)?,
        Input::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn auto(session: &mut Session, out: &mut impl Write) -> anyhow::Result<()> {
    session.generate_default_tickets()?;
    show_tickets(session, out)?;

    let mut row = String::new();
    while let DrawOutcome::Drawn(number) = session.draw_next()? {
        row.push_str(&format!("{number:>3}"));
        if session.pool().drawn_count() % CALLS_PER_LINE == 0 {
            writeln!(out, "{row}")?;
            row.clear();
        }
    }
    if !row.is_empty() {
        writeln!(out, "{row}")?;
    }

    show_tickets(session, out)?;
    writeln!(out, "{}", render::stats(session.stats()))?;
    writeln!(out, "{}", render::phase_hint(session.phase()))?;
    Ok(())
}

fn show_tickets(session: &Session, out: &mut impl Write) -> io::Result<()> {
    for index in 0..session.tickets().len() {
        write!(out, "{}", render::ticket(session, index))?;
        let fallbacks = session.tickets()[index].duplicate_fallbacks();
        if fallbacks > 0 {
            writeln!(out, "warning: {fallbacks} cell(s) repeat a number")?;
        }
    }
    Ok(())
}
