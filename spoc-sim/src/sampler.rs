//! Bernoulli sampling of an adjacency matrix from edge probabilities.

use crate::error::{invalid_arg, Result, SimError};
use log::info;
use matrix_util::traits::{MatOps, SampleOps};
use ndarray::Array2;
use rand::Rng;

/// Draw `A(i,j) ~ Bernoulli(P(i,j))` for every entry, diagonal included
///
/// * `prob` - edge probabilities; every entry must lie in `[0, 1]`
/// * `reflect` - overwrite the strictly-lower triangle with the
///   transpose of the strictly-upper one, so that `A` is symmetric while
///   the diagonal keeps its own draw
/// * `rng` - consumed once per entry in row-major order
///
/// Probabilities are not clamped: a NaN or out-of-range entry is a
/// [`SimError::DegenerateInput`].
pub fn sample<R: Rng + ?Sized>(
    prob: &Array2<f64>,
    reflect: bool,
    rng: &mut R,
) -> Result<Array2<f64>> {
    if reflect && prob.nrows() != prob.ncols() {
        invalid_arg!("cannot reflect a non-square {:?} matrix", prob.dim());
    }

    if let Some((i, j, p)) = prob.find_invalid_probability() {
        return Err(SimError::DegenerateInput(format!(
            "edge probability P[{}, {}] = {} is not in [0, 1]",
            i, j, p
        )));
    }

    let mut adj = prob
        .rbernoulli(rng)
        .map_err(|e| SimError::DegenerateInput(e.to_string()))?;

    if reflect {
        adj.reflect_upper_inplace();
    }

    info!(
        "Sampled {:?} adjacency with {} nonzero entries",
        adj.dim(),
        adj.iter().filter(|&&x| x > 0.0).count()
    );
    Ok(adj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reflect_gives_symmetric_adjacency() {
        let mut rng = StdRng::seed_from_u64(11);
        let prob = Array2::from_elem((30, 30), 0.5);
        let adj = sample(&prob, true, &mut rng).unwrap();
        assert!(adj.is_symmetric());
        assert!(adj.iter().all(|&x| x == 0.0 || x == 1.0));
    }

    #[test]
    fn test_without_reflect_triangles_are_independent() {
        let mut rng = StdRng::seed_from_u64(11);
        let prob = Array2::from_elem((40, 40), 0.5);
        let adj = sample(&prob, false, &mut rng).unwrap();
        assert!(!adj.is_symmetric());
    }

    #[test]
    fn test_out_of_range_probability_fails_fast() {
        let mut rng = StdRng::seed_from_u64(11);
        let prob = array![[0.2, 1.2], [1.2, 0.2]];
        assert!(matches!(
            sample(&prob, true, &mut rng),
            Err(SimError::DegenerateInput(_))
        ));
        let prob = array![[-0.1]];
        assert!(matches!(
            sample(&prob, false, &mut rng),
            Err(SimError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_reflect_requires_square() {
        let mut rng = StdRng::seed_from_u64(11);
        let prob = Array2::from_elem((2, 3), 0.5);
        assert!(matches!(
            sample(&prob, true, &mut rng),
            Err(SimError::InvalidArgument(_))
        ));
        assert!(sample(&prob, false, &mut rng).is_ok());
    }
}
