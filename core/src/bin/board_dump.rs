use std::process::ExitCode;

use clap::Parser;
use sweepfield_core::*;

/// Builds a board and prints its opening position.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: Coord,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: Coord,
    #[arg(long, default_value_t = DEFAULT_MINES)]
    mines: CellCount,
    /// Reproducible mine placement
    #[arg(long)]
    seed: Option<u64>,
    /// Print the snapshot as JSON instead of the cell table
    #[arg(long)]
    json: bool,
    /// Open every cell after the opening position
    #[arg(long)]
    reveal_all: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        env_logger::Builder::new()
            .filter_level(log_level.to_level_filter())
            .init();
    }
    log::debug!("seed: {:?}", args.seed);

    let mut engine = match BoardEngine::new_game(args.width, args.height, args.mines, args.seed) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if args.reveal_all {
        engine.reveal_all(false);
    }

    if args.json {
        match engine.snapshot().to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{engine}");
        println!(
            "state: {:?}, mines left: {}, clusters: {}",
            engine.state(),
            engine.mines_remaining_estimate(),
            engine.clusters().len()
        );
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn verbosity_selects_log_level() {
        let args = Args::try_parse_from(["board_dump", "-vvv", "--seed", "3"]).unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Debug));
        assert_eq!(args.seed, Some(3));

        let args = Args::try_parse_from(["board_dump", "-q"]).unwrap();
        assert_eq!(args.verbose.log_level(), None);

        let args = Args::try_parse_from(["board_dump"]).unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
        assert_eq!((args.width, args.height, args.mines), (20, 10, 15));
    }
}
