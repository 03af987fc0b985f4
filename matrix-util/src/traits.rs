use rand::Rng;

/// Normalize, measure, and rearrange dense matrices
pub trait MatOps {
    type Mat;
    type Scalar;

    /// Divide each row by its sum so that every row lies on the
    /// probability simplex. Rows summing to zero are left untouched.
    fn sum_to_one_rows(&self) -> Self::Mat;

    fn sum_to_one_rows_inplace(&mut self);

    /// Square root of the sum of squared entries
    fn frobenius_norm(&self) -> Self::Scalar;

    /// `self[:, perm]`
    fn permute_columns(&self, perm: &[usize]) -> Self::Mat;

    /// `self[perm, :][:, perm]`, i.e., `Q' * self * Q` for the
    /// permutation matrix `Q` of `perm`
    fn permute_rows_columns(&self, perm: &[usize]) -> Self::Mat;

    /// Copy the strictly-upper triangle onto the strictly-lower
    /// triangle, `self[i, j] = self[j, i]` for all `i > j`. The
    /// diagonal is kept as is.
    fn reflect_upper_inplace(&mut self);

    /// Check `self[i, j] == self[j, i]` for all entries
    fn is_symmetric(&self) -> bool;
}

/// Operations to sample random matrices with a caller-owned random
/// number generator, so that a seeded generator reproduces every draw
pub trait SampleOps {
    type Mat;
    type Scalar;

    /// Sample a matrix from a uniform distribution `U(0,1)`
    fn runif<R: Rng + ?Sized>(dd: usize, nn: usize, rng: &mut R) -> Self::Mat;

    /// Sample a 0/1 matrix with `Y(i,j) ~ Bernoulli(self(i,j))`,
    /// visiting entries in row-major order. Fails if any entry is not
    /// a valid probability.
    fn rbernoulli<R: Rng + ?Sized>(&self, rng: &mut R) -> anyhow::Result<Self::Mat>;

    /// First `(row, column, value)` that is NaN or outside `[0, 1]`
    fn find_invalid_probability(&self) -> Option<(usize, usize, Self::Scalar)>;
}

/// Read and write matrices from and to files
pub trait IoOps {
    type Scalar;
    type Mat;

    fn read_file_delim(
        file: &str,
        delim: &str,
        skip: Option<usize>,
    ) -> anyhow::Result<Self::Mat>;

    fn from_tsv(tsv_file: &str, skip: Option<usize>) -> anyhow::Result<Self::Mat> {
        Self::read_file_delim(tsv_file, "\t", skip)
    }

    fn write_file_delim(&self, file: &str, delim: &str) -> anyhow::Result<()>;

    fn to_tsv(&self, tsv_file: &str) -> anyhow::Result<()> {
        self.write_file_delim(tsv_file, "\t")
    }
}
