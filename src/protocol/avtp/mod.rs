//! Audio Video Transport Protocol (IEEE 1722) header codecs.

pub mod bits;
pub mod common;
pub mod crf;

#[cfg(test)]
mod tests;

pub use common::{AvtpCommonPdu, AvtpSubtype};
