use pretty_assertions::assert_eq;

use crate::{
    lexer::prelude::{tokenize, LexMode, LexicalErrorType, Token},
    parser::prelude::{parse, parse_statement, Node, ParseError, ParseErrorType, Postfix, MAX_DEPTH},
    utils::prelude::SrcSpan
};

fn render(src: &str) -> Result<String, ParseError> {
    Ok(parse(&tokenize(src))?.to_string())
}

fn error(src: &str) -> ParseError {
    match parse(&tokenize(src)) {
        Ok(node) => panic!("`{src}` parsed as `{node}`"),
        Err(err) => err,
    }
}

#[test]
fn test_primaries() -> Result<(), ParseError> {
    assert_eq!(parse(&tokenize("42"))?, Node::number(42.0));
    assert_eq!(parse(&tokenize("answer"))?, Node::variable("answer"));
    assert_eq!(parse(&tokenize("((7))"))?, Node::number(7.0));

    Ok(())
}

#[test]
fn test_chains_group_to_the_right() -> Result<(), ParseError> {
    assert_eq!(render("2 - 3 - 4")?, "(2 - (3 - 4))");
    assert_eq!(render("8 / 4 / 2")?, "(8 / (4 / 2))");
    assert_eq!(render("1 + 2 + 3 + 4")?, "(1 + (2 + (3 + 4)))");
    assert_eq!(render("1 = 2 = 3")?, "(1 = (2 = 3))");

    Ok(())
}

#[test]
fn test_precedence() -> Result<(), ParseError> {
    assert_eq!(render("2 * 3 + 4")?, "((2 * 3) + 4)");
    assert_eq!(render("2 + 3 * 4")?, "(2 + (3 * 4))");
    assert_eq!(render("(2 + 3) * 4")?, "((2 + 3) * 4)");
    assert_eq!(render("1 + 2 > 2")?, "(1 + (2 > 2))");
    assert_eq!(render("a > b = c < d")?, "((a > b) = (c < d))");

    Ok(())
}

#[test]
fn test_assignment() -> Result<(), ParseError> {
    assert_eq!(
        parse(&tokenize("x = 10 / 5"))?,
        Node::assignment("x", Node::binary(Node::number(10.0), Token::Slash, Node::number(5.0)))
    );
    assert_eq!(render("if = 3")?, "if = 3");

    Ok(())
}

#[test]
fn test_equality_outside_statement_start() -> Result<(), ParseError> {
    assert_eq!(render("1 = 1")?, "(1 = 1)");
    assert_eq!(render("x + 1 = 3")?, "((x + 1) = 3)");
    assert_eq!(render("y = (x = 3)")?, "y = (x = 3)");

    Ok(())
}

#[test]
fn test_lone_identifier_is_an_expression() -> Result<(), ParseError> {
    assert_eq!(parse(&tokenize("x"))?, Node::variable("x"));

    Ok(())
}

#[test]
fn test_conditionals() -> Result<(), ParseError> {
    assert_eq!(
        parse(&tokenize("if 1 > 0 then 5 else 10"))?,
        Node::conditional(
            Node::binary(Node::number(1.0), Token::GreaterThan, Node::number(0.0)),
            Node::number(5.0),
            Some(Node::number(10.0))
        )
    );
    assert_eq!(render("if 0 > 1 then 5")?, "if (0 > 1) then 5");
    assert_eq!(render("if 1 > 0 then x = 5")?, "if (1 > 0) then x = 5");
    assert_eq!(
        render("if a then if b then 1 else 2")?,
        "if a then if b then 1 else 2"
    );
    assert_eq!(
        parse(&tokenize("if a then if b then 1 else 2"))?,
        Node::conditional(
            Node::variable("a"),
            Node::conditional(Node::variable("b"), Node::number(1.0), Some(Node::number(2.0))),
            None
        )
    );

    Ok(())
}

#[test]
fn test_trailing_tokens_are_discarded() -> Result<(), ParseError> {
    assert_eq!(render("1 2 3")?, "1");
    assert_eq!(render("(1) )")?, "1");
    assert_eq!(render("1 => 2")?, "1");

    let parsed = parse_statement("x = 1 2 3", LexMode::Lenient)?;

    assert_eq!(parsed.node.to_string(), "x = 1");
    assert_eq!(parsed.trailing, Some(SrcSpan { start: 6, end: 9 }));
    assert_eq!(parse_statement("x = 1", LexMode::Lenient)?.trailing, None);

    Ok(())
}

#[test]
fn test_missing_closing_paren() {
    let err = error("(2 + 3 * 4");
    assert_eq!(err.error, ParseErrorType::MissingClosingParen);
    assert!(err.is_syntax_error());

    let err = error("(2 + 3 4)");
    assert_eq!(err.error, ParseErrorType::MissingClosingParen);
}

#[test]
fn test_missing_then() {
    assert_eq!(
        error("if 1 > 0 5").error,
        ParseErrorType::ExpectedThen { found: Some(Token::Int("5".into())) }
    );
    assert_eq!(error("if 1 > 0").error, ParseErrorType::ExpectedThen { found: None });
    assert!(error("if 1 else 2").is_syntax_error());
}

#[test]
fn test_unexpected_token() {
    assert_eq!(error(")").error, ParseErrorType::UnexpectedToken { token: Token::RParen });
    assert_eq!(error("* 2").error, ParseErrorType::UnexpectedToken { token: Token::Asterisk });
    assert_eq!(error("=> 2").error, ParseErrorType::UnexpectedToken { token: Token::Arrow });
    assert_eq!(error("1 + + 2").error, ParseErrorType::UnexpectedToken { token: Token::Plus });
}

#[test]
fn test_unexpected_end_of_input() {
    for src in ["", "1 +", "x =", "if", "if 1 then", "if 1 then 2 else", "("] {
        let err = error(src);

        assert_eq!(err.error, ParseErrorType::UnexpectedEof, "input `{src}`");
        assert!(!err.is_syntax_error());
    }
}

#[test]
fn test_spans() -> Result<(), ParseError> {
    let parsed = parse_statement("total = 1 + 22", LexMode::Lenient)?;

    assert_eq!(parsed.node.location(), SrcSpan { start: 0, end: 14 });

    let err = parse_statement("if 1 > 0 5", LexMode::Lenient).unwrap_err();
    assert_eq!(err.span, SrcSpan { start: 9, end: 10 });

    let err = parse_statement("1 +", LexMode::Lenient).unwrap_err();
    assert_eq!(err.span, SrcSpan { start: 3, end: 3 });

    Ok(())
}

#[test]
fn test_lex_errors_surface_in_strict_mode() -> Result<(), ParseError> {
    let err = parse_statement("x = 1 ; 2", LexMode::Strict).unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::LexError { error } if error.error == LexicalErrorType::UnrecognizedToken { tok: ';' }
    ));
    assert_eq!(err.span, SrcSpan { start: 6, end: 7 });

    assert_eq!(parse_statement("x = 1 ; 2", LexMode::Lenient)?.node.to_string(), "x = 1");

    Ok(())
}

#[test]
fn test_postfix() -> Result<(), ParseError> {
    let node = parse(&tokenize("x = (2 + 3) * 4"))?;
    assert_eq!(node.postfix(), "x 2 3 + 4 * =");

    let node = parse(&tokenize("if a < 1 then 1 else 0"))?;
    assert_eq!(node.postfix(), "a 1 < 1 0 if-else");

    Ok(())
}

#[test]
fn test_nesting_limit() -> Result<(), ParseError> {
    let chain = vec!["1"; 100_000].join(" + ");
    let err = parse_statement(&chain, LexMode::Lenient).unwrap_err();
    assert_eq!(err.error, ParseErrorType::TooDeeplyNested { limit: MAX_DEPTH });
    assert!(!err.is_syntax_error());

    let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let err = parse_statement(&parens, LexMode::Lenient).unwrap_err();
    assert_eq!(err.error, ParseErrorType::TooDeeplyNested { limit: MAX_DEPTH });

    let branches = format!("{}1", "if 1 then ".repeat(100_000));
    let err = parse_statement(&branches, LexMode::Lenient).unwrap_err();
    assert_eq!(err.error, ParseErrorType::TooDeeplyNested { limit: MAX_DEPTH });

    let chain = vec!["1"; MAX_DEPTH - 1].join(" + ");
    assert!(matches!(parse_statement(&chain, LexMode::Lenient)?.node, Node::BinaryOp(_)));

    Ok(())
}
