//! Dense matrix helpers shared by the simulation crates: row
//! normalisation, Frobenius distances, permutation search, seeded
//! sampling, and plain/gzipped TSV I/O over `ndarray::Array2`.

pub mod common_io;
pub mod ndarray_io;
pub mod ndarray_util;
pub mod permutation;
pub mod traits;
pub mod utils;
