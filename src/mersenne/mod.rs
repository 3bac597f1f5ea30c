// Mersenne Twister MT19937 in its 32-bit and 64-bit word widths
//
// Both widths are one generic generator, `twister::Twister`, instantiated
// with the parameter sets in `mt19937` and `mt19937_64`.
pub mod mt19937;
pub mod mt19937_64;
pub mod twister;
pub mod word;

mod rng;

pub use twister::{temper, Params, Twister};
pub use word::Word;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Array seeding needs at least one key word
    EmptyKey,
}
