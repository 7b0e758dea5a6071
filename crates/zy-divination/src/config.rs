//! Configuration for a diviner session.

/// Configuration for a diviner.
#[derive(Debug, Clone)]
pub struct DivinerConfig {
    /// RNG seed for reproducible casts.
    pub seed: u64,
}

impl Default for DivinerConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl DivinerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(DivinerConfig::default().seed, 42);
    }

    #[test]
    fn builder_method() {
        assert_eq!(DivinerConfig::default().with_seed(123).seed, 123);
    }
}
