use crate::{
    lexer::prelude::{tokenize_spanned, LexMode, Spanned, Token, KEYWORD_ELSE, KEYWORD_IF, KEYWORD_THEN},
    utils::prelude::SrcSpan
};
use super::error::{parse_error, ParseError, ParseErrorType};
use super::ast::{Assignment, BinaryOp, Identifier, IfStatement, Node, Number, Parsed};

/// Binding power of the binary operators; `=` in expression position is equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Equals,
    Sum,
    Product,
}

impl Precedence {
    pub fn of(token: &Token) -> Option<Self> {
        match token {
            Token::Equal => Some(Self::Equals),
            Token::Plus | Token::Minus |
            Token::GreaterThan | Token::LessThan => Some(Self::Sum),
            Token::Asterisk | Token::Slash => Some(Self::Product),
            _ => None,
        }
    }
}

/// Deepest nesting of statements, operator chains and parentheses a single
/// statement may reach. Evaluating and dropping the tree recurse just as deep.
pub const MAX_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Spanned>,
    position: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Tokens without source positions; every node gets an empty span.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Self::new(tokens.iter().map(|token| (0, token.clone(), 0)).collect())
    }

    /// Parses exactly one statement. Whatever follows it is reported in
    /// `Parsed::trailing` and otherwise ignored.
    #[tracing::instrument(level = "trace", skip_all, fields(tokens = self.tokens.len()))]
    pub fn parse(&mut self) -> Result<Parsed, ParseError> {
        let node = self.parse_statement()?;

        let trailing = match (self.tokens.get(self.position), self.tokens.last()) {
            (Some((start, _, _)), Some((_, _, end))) => Some(SrcSpan::from(*start, *end)),
            _ => None
        };

        tracing::trace!(%node, ?trailing, "parsed statement");

        Ok(Parsed { node, trailing })
    }

    fn peek(&self, offset: usize) -> Option<&Spanned> {
        self.tokens.get(self.position + offset)
    }

    fn step(&mut self) {
        self.position += 1;
    }

    fn current(&self) -> Result<Spanned, ParseError> {
        match self.peek(0) {
            Some(token) => Ok(token.clone()),
            None => parse_error(ParseErrorType::UnexpectedEof, self.end_span())
        }
    }

    fn end_span(&self) -> SrcSpan {
        match self.tokens.last() {
            Some((_, _, end)) => SrcSpan::from(*end, *end),
            None => SrcSpan::default()
        }
    }

    fn span_at(&self, offset: usize) -> SrcSpan {
        match self.peek(offset) {
            Some((start, _, end)) => SrcSpan::from(*start, *end),
            None => self.end_span()
        }
    }

    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= MAX_DEPTH {
            return parse_error(ParseErrorType::TooDeeplyNested { limit: MAX_DEPTH }, self.span_at(0));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    // statement -> <identifier> = <expression>
    //            | if <expression> then <statement> [else <statement>]
    //            | <expression>
    pub fn parse_statement(&mut self) -> Result<Node, ParseError> {
        self.nested(Self::parse_statement_inner)
    }

    fn parse_statement_inner(&mut self) -> Result<Node, ParseError> {
        let (_, token, _) = self.current()?;

        match token {
            Token::Ident(_) if matches!(self.peek(1), Some((_, Token::Equal, _))) => {
                self.parse_assignment()
            },
            token if token.is_keyword(KEYWORD_IF) => self.parse_conditional(),
            _ => self.parse_expression()
        }
    }

    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let (start, name, end) = match self.current()? {
            (start, Token::Ident(name), end) => (start, name, end),
            (start, token, end) => return parse_error(
                ParseErrorType::UnexpectedToken { token },
                SrcSpan { start, end }
            )
        };
        self.step();
        // `=`
        self.step();

        let value = self.parse_expression()?;
        let location = SrcSpan::from(start, end).merge(value.location());

        Ok(Node::Assignment(Assignment {
            identifier: Identifier::from((start, name, end)),
            value: Box::new(value),
            location
        }))
    }

    fn parse_conditional(&mut self) -> Result<Node, ParseError> {
        let (start, _, end) = self.current()?;
        self.step();

        let condition = self.parse_expression()?;

        match self.peek(0) {
            Some((_, token, _)) if token.is_keyword(KEYWORD_THEN) => self.step(),
            found => return parse_error(
                ParseErrorType::ExpectedThen { found: found.map(|(_, token, _)| token.clone()) },
                self.span_at(0)
            )
        }

        let then_branch = self.parse_statement()?;
        let mut location = SrcSpan::from(start, end).merge(then_branch.location());

        let else_branch = match self.peek(0) {
            Some((_, token, _)) if token.is_keyword(KEYWORD_ELSE) => {
                self.step();

                let else_branch = self.parse_statement()?;
                location = location.merge(else_branch.location());

                Some(Box::new(else_branch))
            },
            _ => None
        };

        Ok(Node::If(IfStatement {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch,
            location
        }))
    }

    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(Precedence::Equals)
    }

    // The right operand is parsed at the operator's own precedence, so chains
    // of equal precedence group to the right: `a - b - c` is `a - (b - c)`.
    fn parse_binary(&mut self, precedence: Precedence) -> Result<Node, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some((_, token, _)) = self.peek(0) {
            let op_precedence = match Precedence::of(token) {
                Some(op_precedence) if op_precedence >= precedence => op_precedence,
                _ => break
            };
            let operator = token.clone();
            self.step();

            let right = self.nested(|parser| parser.parse_binary(op_precedence))?;
            let location = left.location().merge(right.location());

            left = Node::BinaryOp(BinaryOp {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                location
            });
        }

        Ok(left)
    }

    // primary -> <number> | <identifier> | "(" <expression> ")"
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let (start, token, end) = self.current()?;
        let location = SrcSpan { start, end };

        match token {
            Token::Int(literal) => {
                self.step();

                match literal.parse::<f64>() {
                    Ok(value) => Ok(Node::Number(Number { value, location })),
                    Err(_) => parse_error(ParseErrorType::InvalidNumber { literal }, location)
                }
            },
            Token::Ident(name) => {
                self.step();

                Ok(Node::Variable(Identifier { value: name, location }))
            },
            Token::LParen => {
                self.step();

                let expression = self.nested(Self::parse_expression)?;

                match self.peek(0) {
                    Some((_, Token::RParen, _)) => {
                        self.step();
                        Ok(expression)
                    },
                    _ => parse_error(ParseErrorType::MissingClosingParen, self.span_at(0))
                }
            },
            token => parse_error(ParseErrorType::UnexpectedToken { token }, location)
        }
    }
}

/// Parses the first statement of a plain token sequence.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::from_tokens(tokens)
        .parse()
        .map(|parsed| parsed.node)
}

/// Lexes and parses one statement of source text.
pub fn parse_statement(src: &str, mode: LexMode) -> Result<Parsed, ParseError> {
    let tokens = tokenize_spanned(src, mode).map_err(|error| ParseError {
        span: error.location,
        error: ParseErrorType::LexError { error },
    })?;

    Parser::new(tokens).parse()
}
