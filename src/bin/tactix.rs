//! Interactive Tic-Tac-Toe: human (X) against the heuristic engine (O).

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use tactix::{
    Game, MatchTally, MoveSelector, Player, Strategy,
    cli::{
        self, WELCOME, engine_move_line, read_dimension, read_move, read_play_again, summary_line,
        winner_line, your_move_line,
    },
};

#[derive(Parser)]
#[command(name = "tactix")]
#[command(version, about = "Play Tic-Tac-Toe against a heuristic engine", long_about = None)]
struct Cli {
    /// Board dimension used when skipping the interactive prompt
    #[arg(short, long)]
    dimension: Option<usize>,

    /// Engine strategy once no forced win or block exists
    #[arg(short, long, value_enum, default_value_t = Strategy::Heuristic)]
    strategy: Strategy,

    /// RNG seed for the random strategy, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let tally = run(&args, &mut input, &mut output)?;
    writeln!(
        output,
        "{}",
        summary_line(tally.x_wins, tally.o_wins, tally.draws)
    )?;
    Ok(())
}

fn run(args: &Cli, input: &mut impl BufRead, output: &mut impl Write) -> Result<MatchTally> {
    let mut selector = match args.seed {
        Some(seed) => MoveSelector::with_seed(args.strategy, seed),
        None => MoveSelector::new(args.strategy),
    };
    let mut tally = MatchTally::new();

    writeln!(output, "{WELCOME}")?;

    loop {
        let dimension = match args.dimension {
            Some(dimension) if dimension >= cli::MIN_DIMENSION => dimension,
            _ => match read_dimension(input, output)? {
                Some(dimension) => dimension,
                None => return Ok(tally),
            },
        };

        let mut game = Game::new(dimension)?;
        let status = loop {
            writeln!(output, "{}", game.board())?;

            let Some(position) = read_move(game.board(), input, output)? else {
                return Ok(tally);
            };
            let status = game.play(position, Player::X)?;
            writeln!(output, "{}", your_move_line(position))?;
            if status.is_terminal() {
                break status;
            }

            let engine_position = selector.select(game.board(), Player::O)?;
            let status = game.play(engine_position, Player::O)?;
            writeln!(output, "{}", engine_move_line(engine_position))?;
            if status.is_terminal() {
                break status;
            }
        };

        writeln!(output, "{}", game.board())?;
        writeln!(output, "{}", winner_line(status))?;
        tally.record(status);

        match read_play_again(input, output)? {
            Some(true) => continue,
            _ => return Ok(tally),
        }
    }
}
