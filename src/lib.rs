#![no_std]

pub mod mersenne;

pub use mersenne::{mt19937, mt19937_64, Error};
