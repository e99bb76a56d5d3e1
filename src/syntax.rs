mod expr;
mod lexer;
mod parser;
pub(crate) mod token;

pub(crate) use expr::Expression;
pub(crate) use lexer::Lexer;
pub(crate) use parser::parse;
pub(crate) use token::TokenKind;
