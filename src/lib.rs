//! Running statistics over a stream of integers typed at a console.
//!
//! [`statistics::Statistics`] keeps count, sum, product, extremes and average;
//! [`prompt::Prompt`] drives it from a token stream until a stop word.

pub mod prompt;
pub mod statistics;
