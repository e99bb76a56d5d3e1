use crate::syntax::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    /// The lexer could not produce even a first token.
    EmptyInput,
    /// Invalid character, or a malformed numeric literal such as `1.`.
    LexicalError,
    /// No expression can start with this token.
    UnexpectedToken(TokenKind),
    /// Unbalanced grouping.
    MissingClosingParenthesis,
    /// A complete expression was parsed but input remained.
    TrailingTokens,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty input."),
            Self::LexicalError => write!(f, "Invalid character or malformed number."),
            Self::UnexpectedToken(kind) => write!(f, "Unexpected token: {kind:?}."),
            Self::MissingClosingParenthesis => write!(f, "Expected `)`."),
            Self::TrailingTokens => write!(f, "Excess tokens after expression."),
        }
    }
}

impl std::error::Error for ErrorKind {}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
