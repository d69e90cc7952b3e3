use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    // [a-zA-Z_][a-zA-Z0-9_]*, keywords included
    Ident(String),
    // [0-9]+, kept as written
    Int(String),

    Arrow, // =>
    Minus, // -
    Plus, // +
    Asterisk, // *
    Slash, // /
    Equal, // =
    GreaterThan, // >
    LessThan, // <
    LParen, // (
    RParen, // )
}

pub const KEYWORD_IF: &str = "if";
pub const KEYWORD_THEN: &str = "then";
pub const KEYWORD_ELSE: &str = "else";

impl Token {
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Ident(ident) if ident == keyword)
    }

    pub fn is_reserved_word(&self) -> bool {
        match self {
            Token::Ident(ident) => matches!(
                ident.as_str(),
                KEYWORD_IF | KEYWORD_THEN | KEYWORD_ELSE
            ),
            _ => false
        }
    }

    pub fn is_operator(&self) -> bool {
        match self {
            Token::Plus
            | Token::Minus
            | Token::Asterisk
            | Token::Slash
            | Token::GreaterThan
            | Token::LessThan
            | Token::Equal => true,
            _ => false,
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Int(value) => value.clone(),

            Token::Arrow => "=>".to_string(),
            Token::Minus => "-".to_string(),
            Token::Plus => "+".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Equal => "=".to_string(),
            Token::GreaterThan => ">".to_string(),
            Token::LessThan => "<".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}
