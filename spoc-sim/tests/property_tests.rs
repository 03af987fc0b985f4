use matrix_util::traits::MatOps;
use ndarray::Array2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spoc_sim::membership::{count_pure_rows, synthesize};
use spoc_sim::sampler::sample;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_membership_rows_on_simplex(
        n_nodes in 1usize..60,
        k in 1usize..6,
        pure_frac in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        if k <= n_nodes {
            let pure = (pure_frac * n_nodes as f64).floor() as usize;
            let mut rng = StdRng::seed_from_u64(seed);
            let theta = synthesize(n_nodes, k, pure, None, &mut rng).unwrap();

            prop_assert_eq!(theta.dim(), (n_nodes, k));
            for row in theta.rows() {
                prop_assert!((row.sum() - 1.0).abs() < 1e-9);
                prop_assert!(row.iter().all(|&x| x >= 0.0));
            }
        }
    }

    #[test]
    fn prop_exact_pure_row_count(
        n_nodes in 2usize..60,
        pure_frac in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let k = 2;
        let pure = (pure_frac * n_nodes as f64).floor() as usize;
        let mut rng = StdRng::seed_from_u64(seed);
        // alpha = 5 keeps mixed rows well inside the simplex
        let theta = synthesize(n_nodes, k, pure, Some(&[5.0, 5.0]), &mut rng).unwrap();
        prop_assert_eq!(count_pure_rows(&theta), pure);
    }

    #[test]
    fn prop_reflected_samples_are_symmetric(
        n in 1usize..25,
        p in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let prob = Array2::from_elem((n, n), p);
        let adj = sample(&prob, true, &mut rng).unwrap();
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(adj[(i, j)], adj[(j, i)]);
            }
        }
        prop_assert!(adj.is_symmetric());
    }
}
