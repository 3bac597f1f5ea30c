use super::twister::{Params, Twister};

/// Parameters of the 32-bit Mersenne Twister MT19937
///
/// https://en.wikipedia.org/wiki/Mersenne_Twister
pub const N: usize = 624;
pub const M: usize = 397;

pub const A: u32 = 0x9908_b0df;

pub const U: usize = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: usize = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: usize = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: usize = 18;

pub const F: u32 = 1_812_433_253;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

/// 32-bit parameter set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mt32;

impl Params for Mt32 {
    type Word = u32;
    type State = [u32; N];

    const EMPTY: [u32; N] = [0; N];

    const N: usize = N;
    const M: usize = M;

    const MATRIX_A: u32 = A;
    const UPPER_MASK: u32 = UPPER_MASK;
    const LOWER_MASK: u32 = LOWER_MASK;

    const INIT_MULT: u32 = F;
    const KEY_MULT: u32 = 1_664_525;
    const FINAL_MULT: u32 = 1_566_083_941;

    const DEFAULT_SEED: u32 = 5489;
    const ARRAY_SEED: u32 = 19_650_218;

    const TEMPER_U: usize = U;
    const TEMPER_D: u32 = D;
    const TEMPER_S: usize = S;
    const TEMPER_B: u32 = B;
    const TEMPER_T: usize = T;
    const TEMPER_C: u32 = C;
    const TEMPER_L: usize = L;

    // 32-bit reals use the whole word
    const REAL_SHIFT: usize = 0;
    const OPEN_SHIFT: usize = 0;
}

/// MT19937 PRNG (32-bit)
pub type Mt19937 = Twister<Mt32>;

impl Twister<Mt32> {
    /// Uniform integer on [0, 2^31 - 1]
    pub fn next_signed(&mut self) -> i32 {
        (self.next_raw() >> 1) as i32
    }

    /// Uniform real on [0, 1) with 53-bit resolution, consuming two words
    pub fn next_res53(&mut self) -> f64 {
        let a = (self.next_raw() >> 5) as f64;
        let b = (self.next_raw() >> 6) as f64;

        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }
}
