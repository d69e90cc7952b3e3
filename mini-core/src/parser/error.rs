use crate::{lexer::prelude::{LexicalError, Token}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    UnexpectedToken {
        token: Token,
    },
    MissingClosingParen,
    ExpectedThen {
        found: Option<Token>,
    },
    UnexpectedEof,
    InvalidNumber {
        literal: String,
    },
    LexError { error: LexicalError },
    TooDeeplyNested {
        limit: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    /// Malformed input, as opposed to input that simply stopped too early.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self.error,
            ParseErrorType::UnexpectedToken { .. }
                | ParseErrorType::MissingClosingParen
                | ParseErrorType::ExpectedThen { .. }
                | ParseErrorType::InvalidNumber { .. }
        )
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedToken { token } => {
                ("Unexpected token", vec![format!(
                    "Found {}, expected a number, an identifier or `(`",
                    describe(token)
                )])
            },
            ParseErrorType::MissingClosingParen => ("Expected closing parenthesis", vec![]),
            ParseErrorType::ExpectedThen { found } => {
                let messages = match found {
                    Some(token) => vec![format!("Found {}", describe(token))],
                    None => vec![]
                };

                ("Expected `then`", messages)
            },
            ParseErrorType::UnexpectedEof => ("Unexpected end of input", vec![]),
            ParseErrorType::InvalidNumber { literal } => {
                ("Invalid number", vec![format!("`{literal}` is not a number")])
            },
            ParseErrorType::LexError { error } => error.details(),
            ParseErrorType::TooDeeplyNested { limit } => {
                ("Statement is nested too deeply", vec![format!(
                    "Operator chains, parentheses and `if` branches may nest at most {limit} levels"
                )])
            }
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Int(_) => "a Number".to_string(),
        _ if token.is_reserved_word() => format!("the keyword `{}`", token.as_literal()),
        Token::Ident(_) => "an Identifier".to_string(),
        _ => format!("`{}`", token.as_literal())
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
