//! Die parsing and the validated catalog for one session.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of faces on every die in the game
pub const FACES: usize = 6;

/// Selection state of one die. Flips to `Selected` exactly once, when a
/// player takes the die out of the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DieStatus {
    Available,
    Selected,
}

/// A six-faced die. Duplicate, negative, and zero face values are all
/// allowed; the face order is the order given on the command line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: [i64; FACES],
    status: DieStatus,
}

impl Die {
    /// Create an available die from its face values
    pub fn new(faces: [i64; FACES]) -> Self {
        Self {
            faces,
            status: DieStatus::Available,
        }
    }

    /// All face values, in declaration order
    pub fn faces(&self) -> &[i64; FACES] {
        &self.faces
    }

    /// The face value at `index`
    pub fn face(&self, index: usize) -> i64 {
        self.faces[index]
    }

    /// Current selection state
    pub fn status(&self) -> DieStatus {
        self.status
    }

    /// Whether this die is still in the pool
    pub fn is_available(&self) -> bool {
        self.status == DieStatus::Available
    }

    fn select(&mut self) {
        debug_assert!(self.is_available(), "die selected twice");
        self.status = DieStatus::Selected;
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", faces.join(","))
    }
}

/// One validation violation, tied to the offending die by 0-based index
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least 3 dice are required, got {found}")]
    TooFewDice { found: usize },

    #[error("die #{die_index} ({spec}) must have exactly 6 faces, got {found}")]
    WrongFaceCount {
        die_index: usize,
        spec: String,
        found: usize,
    },

    #[error("die #{die_index} ({spec}) has non-integer face '{token}' at position {position}")]
    BadFaceToken {
        die_index: usize,
        spec: String,
        token: String,
        position: usize,
    },
}

/// Every violation found across one input set.
///
/// Validation never fails fast: all dice are checked and all violations
/// collected before the catalog is accepted or rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// No violations were collected
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected violations, in input order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// The full validated dice set for one session.
///
/// Immutable after construction except for per-die `status` transitions,
/// which happen exactly once per player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceCatalog {
    dice: Vec<Die>,
}

impl DiceCatalog {
    /// Parse and validate a full set of die specifications.
    ///
    /// Each spec is a comma-separated list of exactly six canonical base-10
    /// integer literals, e.g. `2,2,4,4,9,9`. Rejects the whole set when
    /// fewer than 3 specs are given or any die is invalid, returning every
    /// collected violation.
    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::default();

        if specs.len() < 3 {
            report.push(ValidationError::TooFewDice { found: specs.len() });
        }

        let mut dice = Vec::with_capacity(specs.len());
        for (die_index, spec) in specs.iter().enumerate() {
            let spec = spec.as_ref();
            let tokens: Vec<&str> = spec.split(',').collect();

            if tokens.len() != FACES {
                report.push(ValidationError::WrongFaceCount {
                    die_index,
                    spec: spec.to_string(),
                    found: tokens.len(),
                });
            }

            let mut faces = Vec::with_capacity(FACES);
            for (position, token) in tokens.iter().enumerate() {
                match parse_face(token) {
                    Some(value) => faces.push(value),
                    None => report.push(ValidationError::BadFaceToken {
                        die_index,
                        spec: spec.to_string(),
                        token: token.to_string(),
                        position,
                    }),
                }
            }

            if let Ok(faces) = <[i64; FACES]>::try_from(faces) {
                dice.push(Die::new(faces));
            }
        }

        if report.is_empty() {
            Ok(Self { dice })
        } else {
            Err(report)
        }
    }

    /// Number of dice in the catalog
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the catalog is empty (a validated catalog never is)
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The die at `index`
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    /// All dice, in input order
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Indices of dice still in the pool
    pub fn available_indices(&self) -> Vec<usize> {
        self.dice
            .iter()
            .enumerate()
            .filter(|(_, die)| die.is_available())
            .map(|(index, _)| index)
            .collect()
    }

    /// Take the die at `index` out of the pool
    pub fn select(&mut self, index: usize) {
        self.dice[index].select();
    }
}

/// Parse one face token as a canonical base-10 integer literal.
///
/// Round-tripping through `to_string` rejects leading zeros, a leading
/// `+`, whitespace, fractions, and empty tokens.
fn parse_face(token: &str) -> Option<i64> {
    let value = token.parse::<i64>().ok()?;
    (value.to_string() == token).then_some(value)
}
