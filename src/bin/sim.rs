use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;
use splooshkaboom::{init_logging, initialize, Evidence, Mask, QueryError, SquidsGotten, CELL_COUNT};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <reveals>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let reveals: usize = args[2].parse::<usize>()?.min(CELL_COUNT);

    init_logging();
    let catalog = initialize();
    let mut rng = SmallRng::seed_from_u64(seed);

    let hidden = *catalog
        .sample(&mut rng)
        .ok_or_else(|| anyhow::anyhow!("catalog is empty"))?;

    let mut cells: Vec<usize> = (0..CELL_COUNT).collect();
    cells.shuffle(&mut rng);
    let shots = Mask::from_indices(cells.into_iter().take(reveals))
        .map_err(|e| anyhow::anyhow!(e))?;
    let hits = shots & hidden.squids();
    let misses = shots & !hidden.squids();
    let sunk = hidden
        .squid_masks()
        .iter()
        .filter(|m| m.is_subset_of(&hits))
        .count() as u8;

    let evidence = Evidence {
        hits,
        misses,
        squids_gotten: SquidsGotten::Exactly(sunk),
    };

    let result = match catalog.query(&evidence) {
        Ok(dist) => {
            let unrevealed = hidden.squids() & !shots;
            let hidden_mass: f64 = unrevealed
                .iter_indices()
                .map(|i| dist.probabilities()[i])
                .sum();
            json!({
                "is_possible": true,
                "observation_prob": dist.observation_probability(),
                "hidden_mass": hidden_mass,
            })
        }
        Err(QueryError::NoSolution) => json!({ "is_possible": false }),
        Err(e) => return Err(anyhow::anyhow!(e)),
    };

    let output = json!({
        "seed": seed,
        "hidden": hidden.squids().iter_indices().collect::<Vec<_>>(),
        "hits": hits.iter_indices().collect::<Vec<_>>(),
        "misses": misses.iter_indices().collect::<Vec<_>>(),
        "squids_gotten": sunk,
        "result": result,
    });

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
