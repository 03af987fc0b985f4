use rand::rngs::StdRng;
use rand::SeedableRng;

/// Options recognized by every randomized generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimConfig {
    /// Seed for the pseudo-random generator; `None` draws from OS entropy
    pub random_state: Option<u64>,
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            random_state: Some(seed),
        }
    }

    /// A fresh generator. Every draw of one call should come from the
    /// same generator so that a seed reproduces the whole call.
    pub fn rng(&self) -> StdRng {
        match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
