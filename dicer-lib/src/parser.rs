use crate::dice::Dice;
use crate::dice::Limits;
use crate::dice::Request;
use crate::dice::Term;
use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "dicer.pest"]
pub(crate) struct Parser;

impl Parser {
    /// Classify a single token, rejecting zero dice, zero sides and anything over `limits`
    pub(crate) fn classify(token: &str, limits: &Limits) -> Result<Request> {
        let pair = Self::parse(Rule::request, token)
            .map_err(|_| Error::invalid(token))?
            .next()
            .and_then(|request| request.into_inner().next())
            .ok_or_else(|| Error::invalid(token))?;
        let term = match pair.as_rule() {
            Rule::offset => {
                Term::Offset(Self::extract_signed(pair).ok_or_else(|| Error::invalid(token))?)
            }
            Rule::dice => Term::Dice(Self::extract_dice(pair).ok_or_else(|| Error::invalid(token))?),
            Rule::integer => Term::Dice(Dice {
                count: 1,
                sides: pair.as_str().parse().map_err(|_| Error::invalid(token))?,
                bonus: 0,
            }),
            _ => unreachable!("{:?}", pair),
        };
        if let Term::Dice(dice) = &term {
            if dice.count == 0 || dice.sides == 0 {
                return Err(Error::invalid(token));
            }
            limits.check(token, dice)?;
            if dice.range().is_none() {
                return Err(Error::overflow(token));
            }
        }
        Ok(Request::new(token, term))
    }

    fn extract_dice(dice: Pair<Rule>) -> Option<Dice> {
        let mut count = 1;
        let mut sides = 0;
        let mut bonus = 0;
        for inner in dice.into_inner() {
            match inner.as_rule() {
                Rule::count => count = inner.as_str().parse().ok()?,
                Rule::sides => sides = inner.as_str().parse().ok()?,
                Rule::bonus => bonus = Self::extract_signed(inner)?,
                _ => (),
            }
        }
        Some(Dice {
            count,
            sides,
            bonus,
        })
    }

    /// Read a `sign ~ number` pair as a signed integer, sign included so `i64::MIN` fits
    fn extract_signed(pair: Pair<Rule>) -> Option<i64> {
        pair.as_str().parse::<i64>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(token: &str) -> Result<Term> {
        Parser::classify(token, &Limits::default()).map(|request| *request.get_term())
    }

    fn dice(count: u64, sides: u64, bonus: i64) -> Result<Term> {
        Ok(Term::Dice(Dice {
            count,
            sides,
            bonus,
        }))
    }

    #[test]
    fn plain_integer_is_one_die() {
        assert_eq!(classify("20"), dice(1, 20, 0));
        assert_eq!(classify("100"), dice(1, 100, 0));
    }

    #[test]
    fn dice_either_case() {
        assert_eq!(classify("5D6"), dice(5, 6, 0));
        assert_eq!(classify("5d6"), dice(5, 6, 0));
        assert_eq!(classify("13D20"), dice(13, 20, 0));
    }

    #[test]
    fn dice_count_defaults_to_one() {
        assert_eq!(classify("D8"), dice(1, 8, 0));
        assert_eq!(classify("d8"), dice(1, 8, 0));
    }

    #[test]
    fn dice_with_attached_bonus() {
        assert_eq!(classify("5D6+3"), dice(5, 6, 3));
        assert_eq!(classify("2d10-1"), dice(2, 10, -1));
        assert_eq!(classify("d4+0"), dice(1, 4, 0));
    }

    #[test]
    fn signed_integer_is_offset() {
        assert_eq!(classify("+3"), Ok(Term::Offset(3)));
        assert_eq!(classify("-5"), Ok(Term::Offset(-5)));
        assert_eq!(classify("+0"), Ok(Term::Offset(0)));
    }

    #[test]
    fn label_is_kept_verbatim() {
        let request = Parser::classify("3D6+1", &Limits::default()).unwrap();
        assert_eq!("3D6+1", request.get_label());
    }

    #[test]
    fn malformed_tokens_are_invalid() {
        for token in [
            "abc", "d", "5d", "5D", "+", "-", "5d6+", "5x6", "1.5", "-5d6", "5d6+3+2", "5dd6",
            "d6d6", "++3", "5d6 ", "sum",
        ] {
            assert_eq!(
                classify(token),
                Err(Error::Invalid(token.to_owned())),
                "token `{token}`"
            );
        }
    }

    #[test]
    fn zero_dice_or_sides_are_invalid() {
        for token in ["0", "0d6", "d0", "0D0", "3d0+1", "00"] {
            assert_eq!(classify(token), Err(Error::Invalid(token.to_owned())));
        }
    }

    #[test]
    fn numbers_beyond_integer_range_are_invalid() {
        let huge = "99999999999999999999999";
        assert_eq!(classify(huge), Err(Error::invalid(huge)));
        let huge_offset = "+99999999999999999999999";
        assert_eq!(classify(huge_offset), Err(Error::invalid(huge_offset)));
    }

    #[test]
    fn offsets_span_the_whole_integer_range() {
        assert_eq!(classify("-9223372036854775808"), Ok(Term::Offset(i64::MIN)));
        assert_eq!(classify("+9223372036854775807"), Ok(Term::Offset(i64::MAX)));
        let past_max = "+9223372036854775808";
        assert_eq!(classify(past_max), Err(Error::invalid(past_max)));
        let past_min = "-9223372036854775809";
        assert_eq!(classify(past_min), Err(Error::invalid(past_min)));
        assert_eq!(classify("d6-9223372036854775808"), dice(1, 6, i64::MIN));
    }

    #[test]
    fn limits_are_enforced() {
        assert!(matches!(classify("5001d6"), Err(Error::Limit(_))));
        assert!(matches!(classify("d5001"), Err(Error::Limit(_))));
        assert!(matches!(classify("5001"), Err(Error::Limit(_))));
        assert_eq!(classify("5000d5000"), dice(5000, 5000, 0));

        let tight = Limits {
            max_dice: 10,
            max_sides: 12,
        };
        assert!(Parser::classify("10d12", &tight).is_ok());
        assert_eq!(
            Parser::classify("11d6", &tight),
            Err(Error::Limit(
                "`11d6` exceeds the maximum of 10 dice.".to_owned()
            ))
        );
        assert_eq!(
            Parser::classify("d20", &tight),
            Err(Error::Limit(
                "`d20` exceeds the maximum of 12 sides.".to_owned()
            ))
        );
    }

    #[test]
    fn bonus_overflow_is_a_limit() {
        let token = "d6+9223372036854775807";
        assert_eq!(classify(token), Err(Error::overflow(token)));
    }
}
