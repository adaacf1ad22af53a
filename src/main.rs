use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use structopt::StructOpt;

use std::fs::File;
use std::io::{stdin, stdout, BufWriter, Write};
use std::path::PathBuf;

use connect4_engine::sink::{LineSink, RecordSink, Sink};
use connect4_engine::terminal::Win;
use connect4_engine::{
    best_moves, decode_str, encode, expand_with, is_final, outcome, recommend, GameState, Outcome,
    Player, WIDTH,
};

mod display;

#[derive(StructOpt)]
#[structopt(name = "connect4", about = "Play and analyse games of Connect 4")]
enum Command {
    #[structopt(
        name = "play",
        about = "Play a game in the terminal, starting from the position given with `--moves`. Enter a column between 1 and 7 on your turn, or 'q' to quit."
    )]
    Play {
        /// Starting position as a sequence of column digits
        #[structopt(long, default_value = "")]
        moves: String,
        /// Let the computer play the first player
        #[structopt(long)]
        ai_first: bool,
        /// Let the computer play the second player
        #[structopt(long)]
        ai_second: bool,
        /// Number of moves the computer looks ahead
        #[structopt(short, long, default_value = "4")]
        depth: usize,
    },
    #[structopt(name = "show", about = "Draw the board after a sequence of moves")]
    Show { moves: String },
    #[structopt(
        name = "recommend",
        about = "Rank the moves of the player on turn by looking ahead `--depth` moves"
    )]
    Recommend {
        moves: String,
        #[structopt(short, long, default_value = "4")]
        depth: usize,
    },
    #[structopt(
        name = "generate",
        about = "Write every game reachable within `--depth` moves, one per line or as binary records with `--binary`"
    )]
    Generate {
        #[structopt(long, default_value = "")]
        moves: String,
        #[structopt(short, long, default_value = "1")]
        depth: usize,
        /// Output file, standard output if omitted
        #[structopt(short, long, parse(from_os_str))]
        out: Option<PathBuf>,
        #[structopt(long)]
        binary: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Command::from_args() {
        Command::Play {
            moves,
            ai_first,
            ai_second,
            depth,
        } => play(replay(&moves)?, (ai_first, ai_second), depth),
        Command::Show { moves } => {
            let state = replay(&moves)?;
            display::draw(&state)?;
            report(&state);
            Ok(())
        }
        Command::Recommend { moves, depth } => {
            let state = replay(&moves)?;
            display::draw(&state)?;
            if is_final(&state) {
                println!("The game is over, there are no moves to rank");
                return Ok(());
            }
            for group in best_moves(&state, depth) {
                let columns: Vec<String> = group
                    .moves
                    .iter()
                    .map(|m| (m.cell.column + 1).to_string())
                    .collect();
                println!("Score {:>3}: columns {}", group.score, columns.join(", "));
            }
            Ok(())
        }
        Command::Generate {
            moves,
            depth,
            out,
            binary,
        } => {
            let state = replay(&moves)?;
            let writer: Box<dyn Write> = match &out {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("could not create {}", path.display()))?,
                )),
                None => Box::new(BufWriter::new(stdout())),
            };
            let mut sink: Box<dyn Sink> = if binary {
                Box::new(RecordSink::new(writer))
            } else {
                Box::new(LineSink::new(writer))
            };
            generate(&state, depth, sink.as_mut(), out.is_some())
        }
    }
}

/// Decodes a move sequence, reporting but accepting a sequence cut short
fn replay(moves: &str) -> Result<GameState> {
    let replay = decode_str(moves.trim())?;
    if let Some(rejection) = replay.rejection {
        println!(
            "Ignoring moves from move {}: {}",
            rejection.index + 1,
            rejection.reason
        );
    }
    Ok(replay.state)
}

fn announce(win: &Win, state: &GameState) {
    let at = state.last_move().map(|m| m.cell);
    match at {
        Some(cell) => info!(
            "{} wins! {} at {} [{}].",
            win.player,
            win.direction,
            cell,
            encode(state)
        ),
        None => info!("{} wins! {} [{}].", win.player, win.direction, encode(state)),
    }
}

fn report(state: &GameState) {
    match outcome(state) {
        Outcome::Win(win) => {
            announce(&win, state);
            println!("Player {} wins!", win.player.index() + 1);
        }
        Outcome::Draw => println!("Draw!"),
        Outcome::Ongoing => println!("Player {} to move", state.next_player().index() + 1),
    }
}

fn play(mut state: GameState, ai_players: (bool, bool), depth: usize) -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    while !is_final(&state) {
        display::draw(&state)?;

        let player = state.next_player();
        let ai_controlled = match player {
            Player::One => ai_players.0,
            Player::Two => ai_players.1,
        };

        let column = if ai_controlled {
            println!("AI is thinking...");
            let best = recommend(&state, depth).ok_or_else(|| anyhow!("no legal move left"))?;
            println!("Best move: {}", best.cell.column + 1);
            best.cell.column
        } else {
            print!("Enter column, Player {} > ", player);
            stdout().flush()?;
            let mut input_str = String::new();
            if stdin.read_line(&mut input_str)? == 0 {
                break;
            }
            let input = input_str.trim();
            if input.eq_ignore_ascii_case("q") {
                break;
            }
            match input.parse::<usize>() {
                Ok(column @ 1..=WIDTH) => column - 1,
                Ok(column) => {
                    println!("Column '{}' not allowed!", column);
                    continue;
                }
                Err(_) => {
                    println!("Invalid input '{}'!", input);
                    continue;
                }
            }
        };

        if let Err(err) = state.play(column) {
            warn!("{}", err);
            // try the move again
            continue;
        }
    }

    display::draw(&state)?;
    report(&state);
    println!("Game: {}", encode(&state));
    Ok(())
}

fn generate(state: &GameState, depth: usize, sink: &mut dyn Sink, show_progress: bool) -> Result<()> {
    let progress = if show_progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_spinner().template("{spinner} Generating games: {pos} written ({elapsed})"),
    );

    let count = expand_with(state, depth, |leaf, result| {
        sink.emit(&leaf, &result)?;
        progress.inc(1);
        Ok::<(), anyhow::Error>(())
    })?;
    sink.finish()?;

    progress.finish();
    info!("Wrote {} games from [{}] at depth {}", count, encode(state), depth);
    Ok(())
}
