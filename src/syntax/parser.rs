use crate::error::{ErrorKind, PResult};

use super::{
    lexer::Lexer,
    token::{Assoc, Precedence, Token, TokenKind, UnaryOperator, UNARY_PRECEDENCE},
    Expression,
};

/// Pratt parser with one token of lookahead beyond the current one. Dispatch
/// is keyed on the current token's kind: a prefix rule starts an expression,
/// an infix rule extends one with the accumulated tree as its left operand.
pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    next: Token<'src>,
}

/// Parses a single complete expression. Fails if the source holds no
/// expression, is lexically malformed, or continues past a valid expression.
pub(crate) fn parse(lexer: Lexer<'_>) -> PResult<Expression> {
    let mut parser = Parser::new(lexer)?;
    let expression = parser.parse_expression(0)?;
    if !parser.is_at_end() {
        return Err(ErrorKind::TrailingTokens);
    }
    Ok(expression)
}

impl<'src> Parser<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> PResult<Self> {
        let current = lexer.next().ok_or(ErrorKind::EmptyInput)?;
        let next = lexer.next().ok_or(ErrorKind::LexicalError)?;
        Ok(Self {
            lexer,
            current,
            next,
        })
    }

    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::EndOfInput
    }

    fn advance(&mut self) -> PResult<()> {
        self.current = self.next;
        self.next = self.lexer.next().ok_or(ErrorKind::LexicalError)?;
        Ok(())
    }

    fn parse_expression(&mut self, min_prec: Precedence) -> PResult<Expression> {
        let mut lhs = self.parse_prefix()?;

        // This could still only be the first operand of a binary operator.
        loop {
            let op = match self.current.kind.as_binary_op() {
                Some(op) if op.precedence() > min_prec => op,
                _ => return Ok(lhs),
            };
            self.advance()?;

            let rhs_min_prec = match op.assoc() {
                Assoc::Left => op.precedence(),
                // One step below its own level, so a chained operator of the
                // same precedence is absorbed into the right operand.
                Assoc::Right => op.precedence() - 1,
            };
            let rhs = self.parse_expression(rhs_min_prec)?;

            lhs = Expression::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            };
        }
    }

    fn parse_prefix(&mut self) -> PResult<Expression> {
        match self.current.kind {
            TokenKind::Number => self.parse_number(),
            TokenKind::Plus => self.parse_unary(UnaryOperator::Plus),
            TokenKind::Minus => self.parse_unary(UnaryOperator::Minus),
            TokenKind::LParen => self.parse_grouping(),
            other => Err(ErrorKind::UnexpectedToken(other)),
        }
    }

    fn parse_number(&mut self) -> PResult<Expression> {
        let value = self
            .current
            .lexeme
            .parse::<f64>()
            .expect("Failed to parse number. (This should never happen)");
        self.advance()?;
        Ok(Expression::Number(value))
    }

    fn parse_unary(&mut self, op: UnaryOperator) -> PResult<Expression> {
        self.advance()?;
        let operand = self.parse_expression(UNARY_PRECEDENCE)?;
        Ok(Expression::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_grouping(&mut self) -> PResult<Expression> {
        self.advance()?;
        let inner = self.parse_expression(0)?;
        if self.current.kind != TokenKind::RParen {
            return Err(ErrorKind::MissingClosingParenthesis);
        }
        self.advance()?;
        Ok(inner)
    }
}

#[cfg(test)]
mod test {
    use super::{parse, ErrorKind, Expression, Lexer, TokenKind};
    use crate::syntax::token::{BinaryOperator, UnaryOperator};

    fn parse_str(src: &str) -> Result<Expression, ErrorKind> {
        parse(Lexer::new(src))
    }

    #[test]
    fn parse_binary_expr() {
        use BinaryOperator::*;
        use Expression::*;

        let expr = parse_str("-5 + 4 * 7").unwrap();
        let expected = Binary {
            lhs: Box::new(Unary {
                op: UnaryOperator::Minus,
                operand: Box::new(Number(5.0)),
            }),
            op: Plus,
            rhs: Box::new(Binary {
                lhs: Box::new(Number(4.0)),
                op: Mul,
                rhs: Box::new(Number(7.0)),
            }),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_grouped_expr() {
        use BinaryOperator::*;
        use Expression::*;

        let expr = parse_str("(-5 + 4) * 7").unwrap();
        let expected = Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Unary {
                    op: UnaryOperator::Minus,
                    operand: Box::new(Number(5.0)),
                }),
                op: Plus,
                rhs: Box::new(Number(4.0)),
            }),
            op: Mul,
            rhs: Box::new(Number(7.0)),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn power_is_right_associative() {
        use BinaryOperator::Pow;
        use Expression::*;

        let expr = parse_str("2**2**3").unwrap();
        let expected = Binary {
            lhs: Box::new(Number(2.0)),
            op: Pow,
            rhs: Box::new(Binary {
                lhs: Box::new(Number(2.0)),
                op: Pow,
                rhs: Box::new(Number(3.0)),
            }),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn minus_is_left_associative() {
        use BinaryOperator::Minus;
        use Expression::*;

        let expr = parse_str("6 - 2 - 5").unwrap();
        let expected = Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Number(6.0)),
                op: Minus,
                rhs: Box::new(Number(2.0)),
            }),
            op: Minus,
            rhs: Box::new(Number(5.0)),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(parse_str(""), Err(ErrorKind::UnexpectedToken(TokenKind::EndOfInput)));
    }

    #[test]
    fn malformed_number_fails() {
        assert_eq!(parse_str("1."), Err(ErrorKind::EmptyInput));
    }

    #[test]
    fn invalid_character_fails() {
        assert_eq!(parse_str("1 $"), Err(ErrorKind::LexicalError));
        assert_eq!(parse_str("1 + $"), Err(ErrorKind::LexicalError));
    }

    #[test]
    fn missing_operand_fails() {
        assert_eq!(parse_str("2 +"), Err(ErrorKind::UnexpectedToken(TokenKind::EndOfInput)));
        assert_eq!(parse_str(")"), Err(ErrorKind::UnexpectedToken(TokenKind::RParen)));
        assert_eq!(parse_str("* 2"), Err(ErrorKind::UnexpectedToken(TokenKind::Asterisk)));
    }

    #[test]
    fn unbalanced_group_fails() {
        assert_eq!(parse_str("(2 + 3"), Err(ErrorKind::MissingClosingParenthesis));
        assert_eq!(parse_str("("), Err(ErrorKind::UnexpectedToken(TokenKind::EndOfInput)));
    }

    #[test]
    fn trailing_tokens_fail() {
        assert_eq!(parse_str("2 3"), Err(ErrorKind::TrailingTokens));
        assert_eq!(parse_str("(2 + 3) 4"), Err(ErrorKind::TrailingTokens));
    }

    #[test]
    fn evaluates_reference_cases() {
        let cases = &[
            ("3.14", 3.14),
            ("+3.14", 3.14),
            ("+++0", 0.0),
            ("+++3.14", 3.14),
            ("-3.14", -3.14),
            ("---0", 0.0),
            ("---3.14", -3.14),
            ("1 + 2", 3.0),
            ("1.5 + 2.5", 4.0),
            ("1 + 2 + 3", 6.0),
            ("5 - 2", 3.0),
            ("5 - 7", -2.0),
            ("6 - 2 - 5", -1.0),
            ("2 * 3", 6.0),
            ("2 * 3 * 4", 24.0),
            ("28 / 2", 14.0),
            ("200 / 4 / 5", 10.0),
            ("2**8", 256.0),
            ("2**2**3", 256.0),
            ("(2 + 3) * 4", 20.0),
            ("4 * (2 + 3)", 20.0),
            ("3 + 5 - 3 * 2 + 9", 11.0),
            ("7 - 4**-2 + 8", 14.9375),
            ("2**(2 + 3 + 3)", 256.0),
            ("(1 + 3)**2", 16.0),
            ("(-(1 + 3))**2", 16.0),
            ("(-(1 + 3))**3", -64.0),
        ];

        for &(src, expected) in cases {
            let result = parse_str(src).unwrap().evaluate();
            assert!(
                (result - expected).abs() <= f64::EPSILON,
                "{src}: expected {expected}, got {result}"
            );
        }
    }
}
