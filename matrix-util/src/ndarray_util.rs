pub use ndarray::prelude::*;
pub use rand::Rng;

use crate::traits::*;
use num_traits::{Float, FromPrimitive};
use rand_distr::{Bernoulli, Distribution};

impl<T> MatOps for ndarray::Array2<T>
where
    T: Float + FromPrimitive,
{
    type Mat = Self;
    type Scalar = T;

    fn sum_to_one_rows(&self) -> Self::Mat {
        let mut xx = self.clone();
        xx.sum_to_one_rows_inplace();
        xx
    }

    fn sum_to_one_rows_inplace(&mut self) {
        for mut x_i in self.rows_mut() {
            let denom = x_i.sum();
            if denom != T::zero() {
                x_i.mapv_inplace(|x| x / denom);
            }
        }
    }

    fn frobenius_norm(&self) -> Self::Scalar {
        self.iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    fn permute_columns(&self, perm: &[usize]) -> Self::Mat {
        self.select(Axis(1), perm)
    }

    fn permute_rows_columns(&self, perm: &[usize]) -> Self::Mat {
        self.select(Axis(1), perm).select(Axis(0), perm)
    }

    fn reflect_upper_inplace(&mut self) {
        let nn = self.nrows().min(self.ncols());
        for i in 1..nn {
            for j in 0..i {
                self[(i, j)] = self[(j, i)];
            }
        }
    }

    fn is_symmetric(&self) -> bool {
        if self.nrows() != self.ncols() {
            return false;
        }
        self.indexed_iter()
            .all(|((i, j), &x)| i <= j || x == self[(j, i)])
    }
}

impl<T> SampleOps for ndarray::Array2<T>
where
    T: Float + FromPrimitive,
{
    type Mat = Self;
    type Scalar = T;

    fn runif<R: Rng + ?Sized>(dd: usize, nn: usize, rng: &mut R) -> Self::Mat {
        Array2::from_shape_simple_fn((dd, nn), || {
            let x: f64 = rng.random();
            T::from_f64(x).unwrap_or_else(T::nan)
        })
    }

    fn rbernoulli<R: Rng + ?Sized>(&self, rng: &mut R) -> anyhow::Result<Self::Mat> {
        if let Some((i, j, p)) = self.find_invalid_probability() {
            anyhow::bail!(
                "invalid Bernoulli probability {} at ({}, {})",
                p.to_f64().unwrap_or(f64::NAN),
                i,
                j
            );
        }

        let mut ret = Array2::<T>::zeros(self.dim());
        for (y, &p) in ret.iter_mut().zip(self.iter()) {
            let p = p.to_f64().unwrap_or(f64::NAN);
            if Bernoulli::new(p)?.sample(rng) {
                *y = T::one();
            }
        }
        Ok(ret)
    }

    fn find_invalid_probability(&self) -> Option<(usize, usize, Self::Scalar)> {
        self.indexed_iter()
            .find(|&(_, &p)| p.is_nan() || p < T::zero() || p > T::one())
            .map(|((i, j), &p)| (i, j, p))
    }
}
