//! Seedable pseudo-random number generator (xorshift64) and the
//! `RandomSource` seam the burst engine draws its randomness through.

/// Source of uniform randomness for particle speeds, sizes and colors.
///
/// The engine never touches a global generator; hosts hand one in so
/// tests can substitute a deterministic sequence.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be at least 1.
    fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill the f64 mantissa exactly.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Always returns the same value.
    pub struct Constant(pub f64);

    impl RandomSource for Constant {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    /// Replays a fixed sequence, wrapping around at the end.
    pub struct Sequence {
        values: Vec<f64>,
        cursor: usize,
    }

    impl Sequence {
        pub fn new(values: &[f64]) -> Self {
            Self { values: values.to_vec(), cursor: 0 }
        }
    }

    impl RandomSource for Sequence {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        }
    }
}
