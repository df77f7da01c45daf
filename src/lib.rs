//! EPUB chapter scaffolding with Traditional Chinese chapter numbering.
//!
//! The [`numeral`] module is the converter; [`chapters`] and [`toc`] are the
//! file writers built on top of it.

pub mod chapters;
pub mod numeral;
pub mod prompt;
pub mod toc;
