use super::twister::{Params, Twister};

/// Parameters of the 64-bit Mersenne Twister MT19937-64
///
/// T. Nishimura, "Tables of 64-bit Mersenne Twisters",
/// ACM Transactions on Modeling and Computer Simulation 10 (2000) 348-357
pub const N: usize = 312;
pub const M: usize = 156;

const R: u64 = 31;

pub const A: u64 = 0xb502_6f5a_a966_19e9;

const U: usize = 29;
const D: u64 = 0x5555_5555_5555_5555;

const S: usize = 17;
const B: u64 = 0x71d6_7fff_eda6_0000;

const T: usize = 37;
const C: u64 = 0xfff7_eee0_0000_0000;

const L: usize = 43;

const F: u64 = 6_364_136_223_846_793_005;

pub const LOWER_MASK: u64 = (1 << R) - 1;
pub const UPPER_MASK: u64 = !LOWER_MASK;

/// 64-bit parameter set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mt64;

impl Params for Mt64 {
    type Word = u64;
    type State = [u64; N];

    const EMPTY: [u64; N] = [0; N];

    const N: usize = N;
    const M: usize = M;

    const MATRIX_A: u64 = A;
    const UPPER_MASK: u64 = UPPER_MASK;
    const LOWER_MASK: u64 = LOWER_MASK;

    const INIT_MULT: u64 = F;
    const KEY_MULT: u64 = 3_935_559_000_370_003_845;
    const FINAL_MULT: u64 = 2_862_933_555_777_941_757;

    const DEFAULT_SEED: u64 = 5489;
    const ARRAY_SEED: u64 = 19_650_218;

    const TEMPER_U: usize = U;
    const TEMPER_D: u64 = D;
    const TEMPER_S: usize = S;
    const TEMPER_B: u64 = B;
    const TEMPER_T: usize = T;
    const TEMPER_C: u64 = C;
    const TEMPER_L: usize = L;

    // 53 bits for [0,1] and [0,1), 52 bits for (0,1)
    const REAL_SHIFT: usize = 11;
    const OPEN_SHIFT: usize = 12;
}

/// MT19937-64 PRNG
pub type Mt19937 = Twister<Mt64>;

impl Twister<Mt64> {
    /// Uniform integer on [0, 2^63 - 1]
    pub fn next_signed(&mut self) -> i64 {
        (self.next_raw() >> 1) as i64
    }
}
