use matrix_util::traits::MatOps;
use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spoc_sim::align::{align_columns, align_rows_and_columns};
use spoc_sim::membership::synthesize;
use spoc_sim::SimError;

#[test]
fn recovers_shuffled_synthetic_membership() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(31);
    let theta = synthesize(80, 4, 8, Some(&[0.5, 0.5, 0.5, 0.5]), &mut rng)?;

    let theta_hat = theta.permute_columns(&[3, 1, 0, 2]);
    let res = align_columns(&theta, &theta_hat)?;

    assert_eq!(res.error, 0.0);
    assert_eq!(res.aligned, theta);
    Ok(())
}

#[test]
fn noisy_estimate_has_small_relative_error() -> anyhow::Result<()> {
    let theta = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.5, 0.5, 0.0]];
    let noisy = array![[0.0, 0.9, 0.1], [0.1, 0.0, 0.9], [0.9, 0.1, 0.0], [0.0, 0.5, 0.5]];

    let res = align_columns(&theta, &noisy)?;
    assert_eq!(res.permutation, vec![1, 2, 0]);

    let expected = (&theta - &noisy.permute_columns(&[1, 2, 0])).frobenius_norm()
        / theta.frobenius_norm();
    assert!((res.error - expected).abs() < 1e-12);
    assert!(res.error < 0.2);
    Ok(())
}

#[test]
fn interaction_alignment_is_absolute() -> anyhow::Result<()> {
    let b = array![[0.3, 0.0], [0.0, 0.7]];
    let b_hat = array![[0.8, 0.0], [0.0, 0.3]];

    let res = align_rows_and_columns(&b, &b_hat)?;
    assert_eq!(res.permutation, vec![1, 0]);
    assert_eq!(res.aligned, array![[0.3, 0.0], [0.0, 0.8]]);
    assert!((res.error - 0.1).abs() < 1e-12);
    Ok(())
}

#[test]
fn mismatched_shapes_are_rejected() {
    let a = ndarray::Array2::<f64>::zeros((5, 3));
    let b = ndarray::Array2::<f64>::zeros((5, 2));
    assert!(matches!(
        align_columns(&a, &b),
        Err(SimError::InvalidArgument(_))
    ));
    let c = ndarray::Array2::<f64>::zeros((3, 3));
    let d = ndarray::Array2::<f64>::zeros((2, 2));
    assert!(matches!(
        align_rows_and_columns(&c, &d),
        Err(SimError::InvalidArgument(_))
    ));
}
