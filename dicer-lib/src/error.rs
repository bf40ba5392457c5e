/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Nothing left to roll once blanks and the legacy `sum` keyword are gone
    Empty,
    /// A token matching no roll request form, kept verbatim
    Invalid(String),
    /// A configured ceiling was exceeded or the arithmetic overflowed
    Limit(String),
}

impl Error {
    pub(crate) fn invalid(token: &str) -> Self {
        Self::Invalid(token.to_owned())
    }

    pub(crate) fn overflow(token: &str) -> Self {
        Self::Limit(format!("`{token}` produces values too large to add up."))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(
                f,
                "No roll request arguments found (such as '20', '4d6', etc.)."
            ),
            Self::Invalid(token) => write!(f, "`{token}` is not a valid roll request."),
            Self::Limit(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
