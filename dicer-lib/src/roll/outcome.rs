use crate::error::Error;
use crate::roll;
use itertools::Itertools;
use std::ops::Deref;

const BREAKDOWN_SEPARATOR: &str = "\n- ";

/// Keep every token result of a query, in query order, with their sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    results: Vec<roll::Result>,
    total: i64,
}

impl Outcome {
    pub fn new(results: Vec<roll::Result>) -> crate::error::Result<Self> {
        let total = results
            .iter()
            .try_fold(0i64, |acc, result| {
                result.get_total().and_then(|total| acc.checked_add(total))
            })
            .ok_or_else(|| Error::Limit("The total is too large to add up.".to_owned()))?;
        Ok(Outcome { results, total })
    }

    pub fn get_total(&self) -> i64 {
        self.total
    }

    /// Number of individual dice thrown over the whole query
    pub fn dice_count(&self) -> usize {
        self.results.iter().map(|r| r.get_rolls().len()).sum()
    }

    /// A lone die says nothing the total does not already say
    pub fn has_breakdown(&self) -> bool {
        self.dice_count() > 1
    }

    /// Stringify as `**total**` followed by the breakdown when there is one
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl Deref for Outcome {
    type Target = Vec<roll::Result>;

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "**{}**", self.total)?;
        if self.has_breakdown() {
            write!(
                f,
                "{}{}",
                BREAKDOWN_SEPARATOR,
                self.results.iter().format(BREAKDOWN_SEPARATOR)
            )?;
        }
        Ok(())
    }
}
