use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use std::fmt::Display;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

/// What to do with a character that starts no token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
	/// Drop it silently and carry on.
	#[default]
	Lenient,
	/// Report it as a `LexicalError`.
	Strict,
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
	mode: LexMode,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T, mode: LexMode) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,
			mode,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

	/// Scans the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<LexResult> {
		loop {
			let ch = self.ch?;

			let spanned = match ch {
				'=' if self.next_ch == Some('>') => self.eat_two_chars(Token::Arrow),
				'=' => self.eat_one_char(Token::Equal),
				'-' => self.eat_one_char(Token::Minus),
				'+' => self.eat_one_char(Token::Plus),
				'*' => self.eat_one_char(Token::Asterisk),
				'/' => self.eat_one_char(Token::Slash),
				'>' => self.eat_one_char(Token::GreaterThan),
				'<' => self.eat_one_char(Token::LessThan),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'a'..='z' | 'A'..='Z' | '_' => self.lex_ident(),
				'0'..='9' => self.lex_number(),
				c if c.is_whitespace() => {
					let _ = self.next_char();
					continue;
				},
				c => {
					let start = self.position;
					let _ = self.next_char();
					let location = SrcSpan::from(start, self.position);

					match self.mode {
						LexMode::Lenient => {
							tracing::trace!(tok = ?c, %location, "skipping unrecognized character");
							continue;
						},
						LexMode::Strict => return Some(Err(LexicalError {
							error: LexicalErrorType::UnrecognizedToken { tok: c },
							location,
						})),
					}
				}
			};

			return Some(Ok(spanned));
		}
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;
		let next = self.input.next();

		self.position = self.next_position;
		self.ch = self.next_ch;

		self.next_position = match next {
			Some((pos, _)) => pos,
			None => self.position + self.ch.map_or(0, |c| c.len_utf8() as u32),
		};
		self.next_ch = next.map(|(_, c)| c);

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn eat_two_chars(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch {
			if !(ch.is_ascii_alphanumeric() || ch == '_') {
				break;
			}

			ident.push(ch);
			self.next_char();
		}

        (start_pos, Token::Ident(ident), self.position)
	}

	fn lex_number(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut value = String::new();

		while let Some(ch) = self.ch {
			if !ch.is_ascii_digit() {
				break;
			}

			value.push(ch);
			self.next_char();
		}

		(start_pos, Token::Int(value), self.position)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_token()
	}
}

pub fn source_chars(src: &str) -> impl Iterator<Item = (u32, char)> + '_ {
	src.char_indices().map(|(i, c)| (i as u32, c))
}

/// Flat token sequence of `src`. Unrecognized characters are dropped.
pub fn tokenize(src: &str) -> Vec<Token> {
	Lexer::new(source_chars(src), LexMode::Lenient)
		.filter_map(|res| res.ok())
		.map(|(_, token, _)| token)
		.collect()
}

pub fn tokenize_spanned(src: &str, mode: LexMode) -> Result<Vec<Spanned>, LexicalError> {
	Lexer::new(source_chars(src), mode).collect()
}
