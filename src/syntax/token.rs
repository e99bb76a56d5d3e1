#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Number,
    Plus,
    Minus,
    Asterisk,
    Power,
    Slash,
    LParen,
    RParen,
    EndOfInput,
}

/// A classified lexical unit together with the exact source substring it was
/// scanned from. The lexeme is empty only for `EndOfInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str) -> Self {
        Self { kind, lexeme }
    }
}

impl Default for Token<'_> {
    fn default() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryOperator {
    Plus,
    Minus,
}

impl UnaryOperator {
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOperator {
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
    Right,
}

pub(crate) type Precedence = u8;

/// Binding strength of a prefix operator. Tighter than any infix operator so
/// that `-2 * 3` parses as `(-2) * 3`.
pub(crate) const UNARY_PRECEDENCE: Precedence = 40;

impl BinaryOperator {
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => 10,
            Self::Mul | Self::Div => 20,
            Self::Pow => 30,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => Assoc::Left,
            Self::Pow => Assoc::Right,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        }
    }
}

impl TokenKind {
    /// The binary operator this token continues an expression with, if any.
    pub fn as_binary_op(self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Plus),
            Self::Minus => Some(BinaryOperator::Minus),
            Self::Asterisk => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            Self::Power => Some(BinaryOperator::Pow),
            _ => None,
        }
    }
}
