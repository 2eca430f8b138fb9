//! Terminal presentation for the senk binary.

pub mod print;
