pub mod limits;

pub use limits::Limits;

/// A group of identical dice, every throw shifted by `bonus`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    pub count: u64,
    pub sides: u64,
    pub bonus: i64,
}

impl Dice {
    /// Lowest and highest value a single die can record, `None` on overflow
    pub fn range(&self) -> Option<(i64, i64)> {
        let sides = i64::try_from(self.sides).ok()?;
        Some((1i64.checked_add(self.bonus)?, sides.checked_add(self.bonus)?))
    }
}

/// What a token asks for once classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Dice(Dice),
    Offset(i64),
}

/// One whitespace-delimited token of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    label: String,
    term: Term,
}

impl Request {
    pub(crate) fn new(label: &str, term: Term) -> Self {
        Request {
            label: label.to_owned(),
            term,
        }
    }

    /// The token as the user typed it
    pub fn get_label(&self) -> &str {
        &self.label
    }

    pub fn get_term(&self) -> &Term {
        &self.term
    }
}
