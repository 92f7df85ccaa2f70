//! Dice definitions, input validation, and win-probability math.

mod catalog;
mod probability;

pub use catalog::{DiceCatalog, Die, DieStatus, ValidationError, ValidationReport, FACES};
