use core::fmt;

use num::traits::{AsPrimitive, One, WrappingAdd, WrappingMul, WrappingSub, Zero};

use super::word::Word;
use super::Error;

/// Fixed parameter set for one Mersenne Twister word width
///
/// Based on the reference implementations by Matsumoto and Nishimura:
///
/// http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/emt.html
pub trait Params {
    type Word: Word;

    /// Backing storage for the state vector, `[Self::Word; N]`
    type State: AsRef<[Self::Word]> + AsMut<[Self::Word]> + Clone + PartialEq;

    /// Zeroed state vector, the value of a never-seeded generator
    const EMPTY: Self::State;

    /// Degree of recurrence
    const N: usize;
    /// Middle word offset used by the twist
    const M: usize;

    /// Coefficients of the rational normal form twist matrix
    const MATRIX_A: Self::Word;
    /// Most significant w-r bits
    const UPPER_MASK: Self::Word;
    /// Least significant r bits
    const LOWER_MASK: Self::Word;

    /// Multiplier of the scalar seeding recurrence
    const INIT_MULT: Self::Word;
    /// Multiplier of the key-mixing pass of array seeding
    const KEY_MULT: Self::Word;
    /// Multiplier of the final pass of array seeding
    const FINAL_MULT: Self::Word;

    /// Seed used when a value is read before any seeding
    const DEFAULT_SEED: Self::Word;
    /// Scalar seed array seeding starts from
    const ARRAY_SEED: Self::Word;

    // tempering shifts and masks
    const TEMPER_U: usize;
    const TEMPER_D: Self::Word;
    const TEMPER_S: usize;
    const TEMPER_B: Self::Word;
    const TEMPER_T: usize;
    const TEMPER_C: Self::Word;
    const TEMPER_L: usize;

    /// Bits dropped from a raw word before conversion to [0,1] and [0,1)
    const REAL_SHIFT: usize;
    /// Bits dropped from a raw word before conversion to (0,1)
    const OPEN_SHIFT: usize;
}

/// Mersenne Twister generator over the parameter set `P`
///
/// The generator is a plain value: it owns its state vector, and every
/// seeding and output call mutates it in place.
pub struct Twister<P: Params> {
    words: P::State,
    cursor: usize,
    initialized: bool,
}

impl<P: Params> Twister<P> {
    /// Create a generator that has not been seeded
    ///
    /// The first output call seeds it with `P::DEFAULT_SEED`.
    pub fn unseeded() -> Self {
        Self {
            words: P::EMPTY,
            cursor: P::N,
            initialized: false,
        }
    }

    /// Create a generator seeded from a single word
    pub fn new(seed: P::Word) -> Self {
        let mut rng = Self::unseeded();
        rng.seed_scalar(seed);
        rng
    }

    /// Create a generator seeded from a key array
    ///
    /// errors: returns Error on an empty key
    pub fn from_keys(keys: &[P::Word]) -> Result<Self, Error> {
        let mut rng = Self::unseeded();
        rng.seed_array(keys)?;
        Ok(rng)
    }

    /// Fill the state vector from a single seed word
    pub fn seed_scalar(&mut self, seed: P::Word) {
        let mt = self.words.as_mut();
        mt[0] = seed;

        for i in 1..P::N {
            // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
            mt[i] = P::INIT_MULT
                .wrapping_mul(&mt[i - 1].fold())
                .wrapping_add(&P::Word::from_index(i));
        }

        self.cursor = P::N;
        self.initialized = true;
    }

    /// Fill the state vector from an array of key words
    ///
    /// Keys of any non-zero length are accepted, all of them take part in the state.
    ///
    /// errors: returns Error on an empty key, leaving the state untouched
    pub fn seed_array(&mut self, keys: &[P::Word]) -> Result<(), Error> {
        if keys.is_empty() {
            return Err(Error::EmptyKey);
        }

        self.seed_scalar(P::ARRAY_SEED);

        let n = P::N;
        let mt = self.words.as_mut();
        let mut i = 1;
        let mut j = 0;

        for _ in 0..core::cmp::max(n, keys.len()) {
            // non linear
            mt[i] = (mt[i] ^ mt[i - 1].fold().wrapping_mul(&P::KEY_MULT))
                .wrapping_add(&keys[j])
                .wrapping_add(&P::Word::from_index(j));

            i += 1;
            j += 1;

            if i >= n {
                mt[0] = mt[n - 1];
                i = 1;
            }
            if j >= keys.len() {
                j = 0;
            }
        }

        for _ in 1..n {
            // non linear
            mt[i] = (mt[i] ^ mt[i - 1].fold().wrapping_mul(&P::FINAL_MULT))
                .wrapping_sub(&P::Word::from_index(i));

            i += 1;

            if i >= n {
                mt[0] = mt[n - 1];
                i = 1;
            }
        }

        // MSB is 1, the state vector can never be all zeros
        mt[0] = P::Word::msb();

        self.cursor = n;
        self.initialized = true;

        Ok(())
    }

    /// Uniform word on [0, 2^w - 1]
    pub fn next_raw(&mut self) -> P::Word {
        if self.cursor >= P::N {
            self.twist();
        }

        let x = self.words.as_ref()[self.cursor];
        self.cursor += 1;

        temper::<P>(x)
    }

    /// Uniform real on the closed interval [0, 1]
    pub fn next_real_closed01(&mut self) -> f64 {
        let bits = P::Word::BITS - P::REAL_SHIFT;
        let x: f64 = (self.next_raw() >> P::REAL_SHIFT).as_();

        x * (1.0 / (u64::MAX >> (64 - bits)) as f64)
    }

    /// Uniform real on the half-open interval [0, 1)
    pub fn next_real_halfopen01(&mut self) -> f64 {
        let bits = P::Word::BITS - P::REAL_SHIFT;
        let x: f64 = (self.next_raw() >> P::REAL_SHIFT).as_();

        x * exp2_neg(bits)
    }

    /// Uniform real on the open interval (0, 1)
    pub fn next_real_open01(&mut self) -> f64 {
        let bits = P::Word::BITS - P::OPEN_SHIFT;
        let x: f64 = (self.next_raw() >> P::OPEN_SHIFT).as_();

        (x + 0.5) * exp2_neg(bits)
    }

    /// Current state vector
    pub fn words(&self) -> &[P::Word] {
        self.words.as_ref()
    }

    /// Number of words consumed from the current batch
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether any seeding has run, explicitly or lazily
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // Regenerate all N words of the state vector
    //
    // The index arithmetic is mod N, split into three ranges so no modulo is needed.
    fn twist(&mut self) {
        if !self.initialized {
            // read before any seeding, fall back to the default seed
            self.seed_scalar(P::DEFAULT_SEED);
        }

        let (n, m) = (P::N, P::M);
        let mt = self.words.as_mut();

        for i in 0..n - m {
            mt[i] = mt[i + m] ^ twist_word::<P>(mt[i], mt[i + 1]);
        }
        for i in n - m..n - 1 {
            mt[i] = mt[i + m - n] ^ twist_word::<P>(mt[i], mt[i + 1]);
        }
        mt[n - 1] = mt[m - 1] ^ twist_word::<P>(mt[n - 1], mt[0]);

        self.cursor = 0;
    }
}

// Combine the upper bits of `upper` with the lower bits of `lower`, and multiply by the twist matrix
#[inline]
fn twist_word<P: Params>(upper: P::Word, lower: P::Word) -> P::Word {
    let x = (upper & P::UPPER_MASK) | (lower & P::LOWER_MASK);
    let mag = if x & P::Word::one() == P::Word::one() {
        P::MATRIX_A
    } else {
        P::Word::zero()
    };

    (x >> 1) ^ mag
}

/// Apply the output tempering transform to a raw state word
pub fn temper<P: Params>(x: P::Word) -> P::Word {
    let mut z = x ^ ((x >> P::TEMPER_U) & P::TEMPER_D);

    z = z ^ ((z << P::TEMPER_S) & P::TEMPER_B);
    z = z ^ ((z << P::TEMPER_T) & P::TEMPER_C);

    z ^ (z >> P::TEMPER_L)
}

// 2^-bits, exact for every bits <= 64
#[inline]
fn exp2_neg(bits: usize) -> f64 {
    1.0 / ((1_u64 << (bits - 1)) as f64 * 2.0)
}

impl<P: Params> Default for Twister<P> {
    fn default() -> Self {
        Self::unseeded()
    }
}

impl<P: Params> Clone for Twister<P> {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            cursor: self.cursor,
            initialized: self.initialized,
        }
    }
}

impl<P: Params> PartialEq for Twister<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
            && self.initialized == other.initialized
            && self.words == other.words
    }
}

impl<P: Params> fmt::Debug for Twister<P> {
    // the state vector is hundreds of words, leave it out
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Twister")
            .field("bits", &P::Word::BITS)
            .field("cursor", &self.cursor)
            .field("initialized", &self.initialized)
            .finish()
    }
}
