#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use splooshkaboom::{
    init_logging, initialize, print_probability_board, request, Evidence, QueryError,
    SquidsGotten,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::io::Read;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Build the board catalog and report its size and total probability.
    Stats,
    /// Compute per-cell squid probabilities from observed shots.
    Query {
        #[arg(long = "hit", value_parser = parse_square, help = "Hit square as X,Y (repeatable)")]
        hits: Vec<(usize, usize)>,
        #[arg(long = "miss", value_parser = parse_square, help = "Miss square as X,Y (repeatable)")]
        misses: Vec<(usize, usize)>,
        #[arg(long, help = "Number of squids fully sunk, if known")]
        squids_gotten: Option<u8>,
        #[arg(long, help = "Print the JSON response instead of a table")]
        json: bool,
    },
    /// Answer a JSON request given as an argument or on stdin.
    Json {
        payload: Option<String>,
    },
}

#[cfg(feature = "std")]
fn parse_square(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in '{}': {}", s, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in '{}': {}", s, e))?;
    Ok((x, y))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats => {
            let catalog = initialize();
            println!("Possible boards: {}", catalog.len());
            println!("Total probability: {}", catalog.total_probability());
        }
        Commands::Query {
            hits,
            misses,
            squids_gotten,
            json,
        } => {
            let catalog = initialize();
            if json {
                let req = request::Request {
                    hits,
                    misses,
                    squids_gotten: SquidsGotten::from(squids_gotten).to_raw(),
                };
                let response = request::handle(catalog, &req)?;
                println!("{}", serde_json::to_string(&response)?);
                return Ok(());
            }

            let mut evidence = Evidence::new();
            for (x, y) in hits {
                evidence.record_hit(x, y)?;
            }
            for (x, y) in misses {
                evidence.record_miss(x, y)?;
            }
            evidence.squids_gotten = squids_gotten.into();

            match catalog.query(&evidence) {
                Ok(dist) => {
                    print_probability_board(&dist, &evidence);
                    println!("Observation probability: {:.6e}", dist.observation_probability());
                }
                Err(QueryError::NoSolution) => {
                    println!("No board is consistent with these observations.");
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
        Commands::Json { payload } => {
            let payload = match payload {
                Some(p) => p,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let catalog = initialize();
            println!("{}", request::handle_json(catalog, &payload)?);
        }
    }
    Ok(())
}
