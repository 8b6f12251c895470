//! common routines to be included by benches

use bigdigits::{Digit, Integer, IntegerWriter, NativeRadix, RadixType};


/// Random digit vectors with the given number of digits
pub fn random_digit_vecs(count: usize, ndigits: usize, seed: u64) -> Vec<Vec<Digit>> {
    let mut rng = oorandom::Rand32::new(seed);
    let radix = NativeRadix::RADIX as u32;

    (0..count)
        .map(|_| {
            (0..ndigits)
                .map(|_| (rng.rand_u32() % radix) as Digit)
                .collect()
        })
        .collect()
}

/// Random integers with the given number of digits
pub fn random_integers(count: usize, ndigits: usize, seed: u64) -> Vec<Integer> {
    random_digit_vecs(count, ndigits, seed)
        .iter()
        .map(|digits| IntegerWriter::from_digits(false, digits).unwrap())
        .collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a [T],
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new_with_seed(v: &'a [T], seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
