pub mod outcome;

pub use outcome::Outcome;

use itertools::Itertools;

/// Keep the roll result type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// At least one die was thrown
    Numeric,
    /// A signed integer added to the total without throwing
    Modifier,
}

/// Keep the evaluated outcome of one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Result {
    label: String,
    kind: Kind,
    rolls: Vec<i64>,
    modifier: i64,
}

impl Result {
    /// New with thrown dice, `bonus` already folded into every roll
    pub fn new_numeric(label: &str, rolls: Vec<i64>, bonus: i64) -> Self {
        Result {
            label: label.to_owned(),
            kind: Kind::Numeric,
            rolls,
            modifier: bonus,
        }
    }

    /// New with a plain signed value
    pub fn new_modifier(label: &str, value: i64) -> Self {
        Result {
            label: label.to_owned(),
            kind: Kind::Modifier,
            rolls: Vec::new(),
            modifier: value,
        }
    }

    pub fn get_label(&self) -> &str {
        &self.label
    }

    pub fn get_kind(&self) -> Kind {
        self.kind
    }

    /// Every die in throw order, empty for a modifier
    pub fn get_rolls(&self) -> &[i64] {
        &self.rolls
    }

    pub fn get_modifier(&self) -> i64 {
        self.modifier
    }

    /// Contribution to the query total, `None` on overflow
    pub fn get_total(&self) -> Option<i64> {
        match self.kind {
            Kind::Numeric => self
                .rolls
                .iter()
                .try_fold(0i64, |acc, roll| acc.checked_add(*roll)),
            Kind::Modifier => Some(self.modifier),
        }
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Kind::Numeric => write!(f, "{}: {}", self.label, self.rolls.iter().format(" ")),
            Kind::Modifier => write!(f, "{:+}", self.modifier),
        }
    }
}

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}
