use crate::dice::Request;
use crate::dice::Term;
use crate::error::Error;
use crate::error::Result;
use crate::roll;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Evaluate one classified token against `source`
    pub(crate) fn eval<S: roll::Source>(request: &Request, source: &mut S) -> Result<roll::Result> {
        let label = request.get_label();
        match *request.get_term() {
            Term::Offset(value) => Ok(roll::Result::new_modifier(label, value)),
            Term::Dice(dice) => {
                let rolls = Self::roll(dice.count, dice.sides, source)
                    .into_iter()
                    .map(|value| {
                        i64::try_from(value)
                            .ok()
                            .and_then(|value| value.checked_add(dice.bonus))
                    })
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| Error::overflow(label))?;
                Ok(roll::Result::new_numeric(label, rolls, dice.bonus))
            }
        }
    }

    pub(crate) fn roll<S: roll::Source>(amount: u64, sides: u64, source: &mut S) -> Vec<u64> {
        (0..amount).map(|_| source.throw(sides)).collect()
    }
}
