use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use splooshkaboom::{initialize, Evidence, Mask, SquidsGotten, PROBABILITY_TOLERANCE};

/// Evidence produced by shooting `shots` at a board drawn from the prior.
fn sampled_evidence(seed: u64, shots: &[usize], report_sunk: bool) -> (Mask, Evidence) {
    let catalog = initialize();
    let mut rng = SmallRng::seed_from_u64(seed);
    let hidden = *catalog.sample(&mut rng).unwrap();
    let shots = Mask::from_indices(shots.iter().copied()).unwrap();
    let hits = shots & hidden.squids();
    let sunk = hidden
        .squid_masks()
        .iter()
        .filter(|m| m.is_subset_of(&hits))
        .count() as u8;
    let evidence = Evidence {
        hits,
        misses: shots & !hidden.squids(),
        squids_gotten: if report_sunk {
            SquidsGotten::Exactly(sunk)
        } else {
            SquidsGotten::Unknown
        },
    };
    (hidden.squids(), evidence)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn truthful_evidence_is_always_possible(
        seed in any::<u64>(),
        shots in prop::collection::vec(0usize..64, 0..40),
        report_sunk in any::<bool>(),
    ) {
        let (hidden, evidence) = sampled_evidence(seed, &shots, report_sunk);
        let dist = initialize().query(&evidence).unwrap();

        let segments: f64 = dist.segment_distribution().iter().sum();
        prop_assert!((segments - 1.0).abs() < PROBABILITY_TOLERANCE);
        prop_assert!(dist.observation_probability() > 0.0);
        prop_assert!(dist.observation_probability() <= 1.0 + PROBABILITY_TOLERANCE);
        for (idx, &p) in dist.probabilities().iter().enumerate() {
            prop_assert!((0.0..=1.0 + PROBABILITY_TOLERANCE).contains(&p));
            if evidence.hits.contains(idx) {
                prop_assert_eq!(p, 1.0);
            }
            if evidence.misses.contains(idx) {
                prop_assert_eq!(p, 0.0);
            }
        }
        // The true board survives, so each of its cells keeps some mass.
        for idx in hidden.iter_indices() {
            prop_assert!(dist.probabilities()[idx] > 0.0);
        }
    }

    #[test]
    fn repeated_queries_are_identical(
        seed in any::<u64>(),
        shots in prop::collection::vec(0usize..64, 0..20),
    ) {
        let (_, evidence) = sampled_evidence(seed, &shots, true);
        let catalog = initialize();
        let first = catalog.query(&evidence).unwrap();
        let _ = catalog.query(&Evidence::new()).unwrap();
        let second = catalog.query(&evidence).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sampling_is_reproducible(seed in any::<u64>()) {
        let catalog = initialize();
        let a = *catalog.sample(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let b = *catalog.sample(&mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
