#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use missionaries::{
    init_logging, play, MoveSet, Path, Puzzle, TextRenderer, CLASSIC_CANNIBALS,
    CLASSIC_CAPACITY, CLASSIC_MISSIONARIES,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct PuzzleArgs {
    #[arg(long, short, default_value_t = CLASSIC_MISSIONARIES)]
    missionaries: i32,
    #[arg(long, short, default_value_t = CLASSIC_CANNIBALS)]
    cannibals: i32,
    #[arg(long, default_value_t = CLASSIC_CAPACITY, help = "Boat seats; anything other than the classic two generates every load that fits")]
    capacity: u32,
}

#[cfg(feature = "std")]
impl PuzzleArgs {
    fn puzzle(&self) -> anyhow::Result<Puzzle> {
        let moves = if self.capacity == CLASSIC_CAPACITY {
            MoveSet::classic()
        } else {
            MoveSet::for_capacity(self.capacity)?
        };
        Ok(Puzzle::new(self.missionaries, self.cannibals, moves)?)
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Find the shortest crossing sequence and print it.
    Solve {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        #[arg(long, help = "Print the result as a single JSON document")]
        json: bool,
    },
    /// Solve, then replay the crossings as text at a fixed rate.
    Play {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        #[arg(long, default_value_t = 2000)]
        interval_ms: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { puzzle, json } => {
            let puzzle = puzzle.puzzle()?;
            let solution = puzzle.solve();
            if json {
                print_json(&puzzle, solution.as_ref())?;
            } else {
                print_solution(&puzzle, solution.as_ref());
            }
        }
        Commands::Play {
            puzzle,
            interval_ms,
        } => {
            let puzzle = puzzle.puzzle()?;
            let Some(path) = puzzle.solve() else {
                println!("No solution found!");
                return Ok(());
            };
            let mut renderer = TextRenderer::new(std::io::stdout(), &puzzle);
            play(
                &mut renderer,
                &puzzle,
                &path,
                Duration::from_millis(interval_ms.max(1)),
            )
            .await?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_solution(puzzle: &Puzzle, solution: Option<&Path>) {
    let Some(path) = solution else {
        println!("No solution found!");
        return;
    };
    println!(
        "Solved {} missionaries and {} cannibals in {} crossings",
        puzzle.missionaries(),
        puzzle.cannibals(),
        path.len()
    );
    let loads = puzzle.loads(path).unwrap_or_default();
    for (i, (state, load)) in path.iter().zip(loads.iter()).enumerate() {
        println!("{:3}. carry {:<6} -> {}", i + 1, load.to_string(), state);
    }
}

#[cfg(feature = "std")]
fn print_json(puzzle: &Puzzle, solution: Option<&Path>) -> anyhow::Result<()> {
    let result = json!({
        "missionaries": puzzle.missionaries(),
        "cannibals": puzzle.cannibals(),
        "crossings": solution.map(|p| p.len()),
        "path": solution.map(|p| p.iter().map(|s| s.triple()).collect::<Vec<_>>()),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
