mod bits;
mod common;
