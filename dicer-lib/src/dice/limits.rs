use super::Dice;
use crate::error::Error;
use crate::error::Result;

/// Default ceiling on the dice thrown by a single token
pub const MAX_DICE_AMOUNT: u64 = 5000;
/// Default ceiling on the sides of a die
pub const MAX_DICE_SIDES: u64 = 5000;

/// Ceilings applied to every token before anything is thrown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_dice: u64,
    pub max_sides: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_dice: MAX_DICE_AMOUNT,
            max_sides: MAX_DICE_SIDES,
        }
    }
}

impl Limits {
    pub(crate) fn check(&self, token: &str, dice: &Dice) -> Result<()> {
        if dice.count > self.max_dice {
            return Err(Error::Limit(format!(
                "`{token}` exceeds the maximum of {} dice.",
                self.max_dice
            )));
        }
        if dice.sides > self.max_sides {
            return Err(Error::Limit(format!(
                "`{token}` exceeds the maximum of {} sides.",
                self.max_sides
            )));
        }
        Ok(())
    }
}
