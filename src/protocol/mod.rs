//! Protocol module

pub mod avtp;
