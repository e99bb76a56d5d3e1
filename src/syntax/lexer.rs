use super::token::{Token, TokenKind};

/// Scans an expression source on demand. `next` hands out one token per call;
/// once the end of the source is reached it keeps returning `EndOfInput`.
/// `None` signals a lexical failure, never exhaustion.
pub(crate) struct Lexer<'src> {
    src: &'src str,
    index: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self { src, index: 0 }
    }

    pub fn next(&mut self) -> Option<Token<'src>> {
        self.discard_whitespace();
        if self.is_at_end() {
            return Some(Token::default());
        }

        match self.current() {
            b'+' => Some(self.single_char_token(TokenKind::Plus)),
            b'-' => Some(self.single_char_token(TokenKind::Minus)),
            b'/' => Some(self.single_char_token(TokenKind::Slash)),
            b'(' => Some(self.single_char_token(TokenKind::LParen)),
            b')' => Some(self.single_char_token(TokenKind::RParen)),
            b'*' => {
                self.advance();
                if self.match_byte(b'*') {
                    return Some(self.token_from_range(self.index - 2, TokenKind::Power));
                }
                Some(self.token_from_range(self.index - 1, TokenKind::Asterisk))
            }
            c if c.is_ascii_digit() => self.number(),
            _ => None,
        }
    }

    fn discard_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t' | b'\n' | b'\r') {
            self.advance();
        }
    }

    fn current(&self) -> u8 {
        *self.src.as_bytes().get(self.index).unwrap_or(&0)
    }

    fn is_at_end(&self) -> bool {
        self.index >= self.src.len()
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.index += 1;
        }
    }

    fn match_byte(&mut self, c: u8) -> bool {
        if self.current() != c {
            return false;
        }
        self.advance();
        true
    }

    fn number(&mut self) -> Option<Token<'src>> {
        let start = self.index;
        self.advance();
        while self.current().is_ascii_digit() {
            self.advance();
        }
        if self.match_byte(b'.') {
            // A dot must be followed by at least one digit.
            if !self.current().is_ascii_digit() {
                return None;
            }
            while self.current().is_ascii_digit() {
                self.advance();
            }
        }
        Some(self.token_from_range(start, TokenKind::Number))
    }

    fn single_char_token(&mut self, kind: TokenKind) -> Token<'src> {
        self.advance();
        self.token_from_range(self.index - 1, kind)
    }

    fn token_from_range(&self, start: usize, kind: TokenKind) -> Token<'src> {
        Token::new(kind, &self.src[start..self.index])
    }
}
