use crate::dice::Limits;
use crate::dice::Request;
use crate::error::Error;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser::Parser;
use crate::roll;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Rolled when the query is blank
const DEFAULT_QUERY: &str = "100";
/// Keyword of a retired notation, skipped wherever it appears
const LEGACY_SUM: &str = "sum";

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides.max(1))
    }
}

static GENERATOR: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(StdRng::seed_from_u64(time_seed())));

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Lock the process-wide generator, seeded from the clock on first use
pub fn generator() -> MutexGuard<'static, StdRng> {
    GENERATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Represent a validated query ready to be rolled
#[derive(Clone, Debug)]
pub struct Roller {
    query: String,
    requests: Vec<Request>,
}

impl Roller {
    /// Validate every token of `input` under the default limits
    pub fn new(input: &str) -> Result<Self> {
        Self::with_limits(input, &Limits::default())
    }

    /// Validate every token of `input`, nothing is thrown yet
    pub fn with_limits(input: &str, limits: &Limits) -> Result<Self> {
        let query = match input.trim() {
            "" => DEFAULT_QUERY,
            query => query,
        };
        if query == LEGACY_SUM {
            return Err(Error::Empty);
        }
        let requests = query
            .split_whitespace()
            .filter(|token| *token != LEGACY_SUM)
            .map(|token| Parser::classify(token, limits))
            .collect::<Result<Vec<_>>>()?;
        if requests.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Roller {
            query: query.to_owned(),
            requests,
        })
    }

    /// Roll using the process-wide generator
    pub fn roll(&self) -> Result<roll::Outcome> {
        self.roll_with(&mut *generator())
    }

    /// Roll using the provided Rng
    pub fn roll_with<R: Rng>(&self, generator: &mut R) -> Result<roll::Outcome> {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Roll using the provided source
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Outcome> {
        let results = self
            .requests
            .iter()
            .map(|request| Evaluator::eval(request, source))
            .collect::<Result<Vec<_>>>()?;
        roll::Outcome::new(results)
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Return the effective query, `100` when the input was blank
    pub fn as_str(&self) -> &str {
        &self.query
    }
}

/// Validate and roll `query` in one go
pub fn evaluate(query: &str) -> Result<roll::Outcome> {
    Roller::new(query)?.roll()
}
