use crate::common_io::{read_lines_of_words_delim, write_lines};
use crate::traits::IoOps;
use ndarray::prelude::*;
use rayon::prelude::*;
use std::fmt::{Debug, Display};
use std::str::FromStr;

impl<T> IoOps for Array2<T>
where
    T: FromStr + Send + Sync + Display + Clone,
    <T as FromStr>::Err: Debug,
{
    type Scalar = T;
    type Mat = Self;

    fn read_file_delim(
        file: &str,
        delim: &str,
        skip: Option<usize>,
    ) -> anyhow::Result<Self::Mat> {
        let lines_of_words = read_lines_of_words_delim(file, delim, skip.unwrap_or(0))?;

        if lines_of_words.is_empty() {
            anyhow::bail!("No data in file: {}", file);
        }

        let nrows = lines_of_words.len();
        let ncols = lines_of_words[0].len();

        let rows = lines_of_words
            .par_iter()
            .enumerate()
            .map(|(i, words)| {
                if words.len() != ncols {
                    anyhow::bail!("line {} has {} columns, expected {}", i, words.len(), ncols);
                }
                words
                    .iter()
                    .map(|w| {
                        w.parse::<T>()
                            .map_err(|e| anyhow::anyhow!("failed to parse {:?}: {:?}", w, e))
                    })
                    .collect::<anyhow::Result<Vec<T>>>()
            })
            .collect::<anyhow::Result<Vec<Vec<T>>>>()?;

        let data = rows.into_iter().flatten().collect::<Vec<_>>();
        log::debug!("read {} x {} matrix from {}", nrows, ncols, file);
        Ok(Array2::from_shape_vec((nrows, ncols), data)?)
    }

    fn write_file_delim(&self, file: &str, delim: &str) -> anyhow::Result<()> {
        let lines: Vec<Box<str>> = (0..self.nrows())
            .into_par_iter()
            .map(|i| {
                self.row(i)
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<String>>()
                    .join(delim)
                    .into_boxed_str()
            })
            .collect();
        write_lines(&lines, file)
    }
}
