use crate::{
    environment::prelude::{Environment, Value, FALSE, TRUE},
    lexer::prelude::{tokenize, Token},
    parser::prelude::{parse, Node},
    utils::prelude::{Error, SrcSpan}
};

use super::{eval, error::{RuntimeError, RuntimeErrorType}, Evaluator};

fn run(src: &str, env: &mut Environment) -> Result<Value, Error> {
    let node = parse(&tokenize(src)).map_err(|error| Error::parse("<test>", src, error))?;

    eval(&node, env).map_err(|error| Error::runtime("<test>", src, error))
}

fn number(value: f64) -> Value {
    Value::Number { value }
}

fn runtime_error(src: &str, env: &mut Environment) -> RuntimeErrorType {
    let node = parse(&tokenize(src)).expect("test source parses");

    match eval(&node, env) {
        Ok(value) => panic!("`{src}` evaluated to `{value}`"),
        Err(RuntimeError { error, .. }) => error,
    }
}

#[test]
fn test_arithmetic() -> Result<(), Error> {
    let mut env = Environment::new();

    assert_eq!(run("1 + 2 * 3", &mut env)?, number(7.0));
    assert_eq!(run("(2 + 3) * 4", &mut env)?, number(20.0));
    assert_eq!(run("7 / 2", &mut env)?, number(3.5));
    assert_eq!(run("2 - 3 - 4", &mut env)?, number(3.0));
    assert_eq!(run("16 / 4 / 2", &mut env)?, number(8.0));
    assert_eq!(run("((((1))))", &mut env)?, number(1.0));

    Ok(())
}

#[test]
fn test_comparisons() -> Result<(), Error> {
    let mut env = Environment::new();

    assert_eq!(run("1 > 0", &mut env)?, TRUE);
    assert_eq!(run("1 < 0", &mut env)?, FALSE);
    assert_eq!(run("2 = 2", &mut env)?, TRUE);
    assert_eq!(run("(1 + 1) = 3", &mut env)?, FALSE);

    Ok(())
}

#[test]
fn test_booleans_flow_into_arithmetic() -> Result<(), Error> {
    let mut env = Environment::new();

    assert_eq!(run("1 + 2 > 2", &mut env)?, number(1.0));
    assert_eq!(run("(1 > 0) + (2 > 1)", &mut env)?, number(2.0));
    assert_eq!(run("(1 > 0) = 1", &mut env)?, TRUE);

    Ok(())
}

#[test]
fn test_assignment_updates_environment() -> Result<(), Error> {
    let mut env = Environment::new();

    assert_eq!(run("x = 10 / 5", &mut env)?, number(2.0));
    assert_eq!(eval(&Node::variable("x"), &mut env), Ok(number(2.0)));

    assert_eq!(run("x = x * 3", &mut env)?, number(6.0));
    assert_eq!(run("flag = x > 5", &mut env)?, TRUE);
    assert_eq!(env.get("x"), Some(&number(6.0)));
    assert_eq!(env.get("flag"), Some(&TRUE));

    Ok(())
}

#[test]
fn test_conditionals() -> Result<(), Error> {
    let mut env = Environment::new();

    assert_eq!(run("if 1 > 0 then 5 else 10", &mut env)?, number(5.0));
    assert_eq!(run("if 0 > 1 then 5 else 10", &mut env)?, number(10.0));
    assert_eq!(run("if 0 > 1 then 5", &mut env)?, Value::Nothing);
    assert_ne!(run("if 0 > 1 then 5", &mut env)?, number(0.0));
    assert_ne!(run("if 0 > 1 then 5", &mut env)?, FALSE);

    assert_eq!(run("if 3 then 1 else 2", &mut env)?, number(1.0));
    assert_eq!(run("if 0 then 1 else 2", &mut env)?, number(2.0));
    assert_eq!(run("if 1 then if 0 then 1 else 2", &mut env)?, number(2.0));

    Ok(())
}

#[test]
fn test_assignment_inside_branch() -> Result<(), Error> {
    let mut env = Environment::new();

    assert_eq!(run("if 1 > 0 then x = 5", &mut env)?, number(5.0));
    assert_eq!(run("x", &mut env)?, number(5.0));

    assert_eq!(run("if x < 0 then y = 1 else y = 2", &mut env)?, number(2.0));
    assert_eq!(env.get("y"), Some(&number(2.0)));

    Ok(())
}

#[test]
fn test_untaken_branch_does_not_assign() -> Result<(), Error> {
    let mut env = Environment::new();

    assert_eq!(run("if 0 then x = 5", &mut env)?, Value::Nothing);
    assert!(env.is_empty());

    Ok(())
}

#[test]
fn test_division_by_zero() {
    let mut env = Environment::new();

    assert_eq!(runtime_error("5 / 0", &mut env), RuntimeErrorType::DivisionByZero);
    assert_eq!(runtime_error("5 / (2 - 2)", &mut env), RuntimeErrorType::DivisionByZero);
    assert_eq!(runtime_error("5 / (1 > 2)", &mut env), RuntimeErrorType::DivisionByZero);
}

#[test]
fn test_undefined_variable() {
    let mut env = Environment::new();

    assert_eq!(
        eval(&Node::variable("y"), &mut env),
        Err(RuntimeError {
            error: RuntimeErrorType::UndefinedVariable { name: "y".into() },
            location: SrcSpan::default()
        })
    );
    assert_eq!(
        runtime_error("1 + y", &mut env),
        RuntimeErrorType::UndefinedVariable { name: "y".into() }
    );
}

#[test]
fn test_failed_assignment_leaves_binding_untouched() -> Result<(), Error> {
    let mut env = Environment::new();

    run("x = 1", &mut env)?;

    assert_eq!(runtime_error("x = 1 / 0", &mut env), RuntimeErrorType::DivisionByZero);
    assert_eq!(env.get("x"), Some(&number(1.0)));

    Ok(())
}

#[test]
fn test_unknown_operator() {
    let mut env = Environment::new();
    let node = Node::binary(Node::number(1.0), Token::Arrow, Node::number(2.0));

    assert_eq!(
        eval(&node, &mut env).map_err(|err| err.error),
        Err(RuntimeErrorType::UnknownOperator { operator: Token::Arrow })
    );
}

#[test]
fn test_unknown_node_details() {
    let node = Node::conditional(Node::number(1.0), Node::number(2.0), None);
    let err = RuntimeError {
        error: RuntimeErrorType::UnknownNode { kind: node.kind() },
        location: node.location(),
    };

    assert_eq!(
        err.details(),
        ("Unknown node", vec!["Cannot evaluate `IfStatement`".to_string()])
    );
}

#[test]
fn test_operands_are_evaluated_left_to_right() {
    let mut env = Environment::new();
    let node = Node::binary(Node::variable("a"), Token::Plus, Node::variable("b"));

    assert_eq!(
        eval(&node, &mut env).map_err(|err| err.error),
        Err(RuntimeErrorType::UndefinedVariable { name: "a".into() })
    );
}

#[test]
fn test_nothing_is_not_an_operand() {
    let mut env = Environment::new();
    let nothing = Node::conditional(Node::number(0.0), Node::number(1.0), None);
    let node = Node::binary(nothing, Token::Plus, Node::number(1.0));

    assert_eq!(
        eval(&node, &mut env).map_err(|err| err.error),
        Err(RuntimeErrorType::InvalidOperand {
            operator: Token::Plus,
            operand: crate::environment::prelude::ValueType::Nothing
        })
    );
}

#[test]
fn test_reevaluation_is_stable() -> Result<(), Error> {
    let mut env = Environment::new();
    run("a = 3", &mut env)?;
    run("b = 4", &mut env)?;

    let node = parse(&tokenize("if a < b then (a * a + b * b) / 5 else 0"))
        .map_err(|error| Error::parse("<test>", "", error))?;

    let snapshot = env.clone();
    let first = eval(&node, &mut env);
    let second = eval(&node, &mut env);

    assert_eq!(first, second);
    assert_eq!(first, Ok(number(5.0)));
    assert_eq!(env, snapshot);

    Ok(())
}

#[test]
fn test_evaluator_borrows_environment() -> Result<(), Error> {
    let mut env = Environment::new();

    {
        let mut evaluator = Evaluator::new(&mut env);
        let node = parse(&tokenize("n = 41 + 1")).map_err(|error| Error::parse("<test>", "", error))?;

        evaluator.evaluate(&node).map_err(|error| Error::runtime("<test>", "", error))?;
    }

    assert_eq!(env.get("n"), Some(&number(42.0)));

    Ok(())
}
