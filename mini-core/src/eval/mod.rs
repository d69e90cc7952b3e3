pub mod error;

pub mod prelude {
    pub use super::{
        error::*,
        Evaluator,
        eval
    };
}

#[cfg(test)]
mod tests;

use crate::{
    environment::prelude::{Environment, Value},
    lexer::prelude::Token,
    parser::prelude::{Assignment, BinaryOp, IfStatement, Node},
    utils::prelude::SrcSpan
};
use error::{runtime_error, RuntimeError, RuntimeErrorType};

/// Tree-walking evaluator. Assignments write straight into the borrowed
/// environment, so later statements see them.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    pub fn evaluate(&mut self, node: &Node) -> Result<Value, RuntimeError> {
        match node {
            Node::Number(number) => Ok(Value::Number { value: number.value }),
            Node::Variable(ident) => match self.env.get(&ident.value) {
                Some(value) => Ok(*value),
                None => runtime_error(
                    RuntimeErrorType::UndefinedVariable { name: ident.value.clone() },
                    ident.location
                )
            },
            Node::Assignment(assignment) => self.eval_assignment(assignment),
            Node::BinaryOp(binary) => self.eval_binary(binary),
            Node::If(conditional) => self.eval_conditional(conditional),
        }
    }

    fn eval_assignment(&mut self, assignment: &Assignment) -> Result<Value, RuntimeError> {
        let value = self.evaluate(&assignment.value)?;

        tracing::debug!(name = %assignment.identifier, %value, "assign");
        self.env.set(assignment.identifier.value.clone(), value);

        Ok(value)
    }

    fn eval_binary(&mut self, binary: &BinaryOp) -> Result<Value, RuntimeError> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        if !binary.operator.is_operator() {
            return runtime_error(
                RuntimeErrorType::UnknownOperator { operator: binary.operator.clone() },
                binary.location
            );
        }

        let left_value = operand(binary, left, binary.left.location())?;
        let right_value = operand(binary, right, binary.right.location())?;

        let value = match binary.operator {
            Token::Plus => Value::from(left_value + right_value),
            Token::Minus => Value::from(left_value - right_value),
            Token::Asterisk => Value::from(left_value * right_value),
            Token::Slash => {
                if right_value == 0.0 {
                    return runtime_error(RuntimeErrorType::DivisionByZero, binary.right.location());
                }

                Value::from(left_value / right_value)
            },
            Token::GreaterThan => Value::from(left_value > right_value),
            Token::LessThan => Value::from(left_value < right_value),
            Token::Equal => Value::from(left_value == right_value),
            _ => return runtime_error(
                RuntimeErrorType::UnknownOperator { operator: binary.operator.clone() },
                binary.location
            )
        };

        Ok(value)
    }

    fn eval_conditional(&mut self, conditional: &IfStatement) -> Result<Value, RuntimeError> {
        let condition = self.evaluate(&conditional.condition)?;

        if condition.is_truthy() {
            self.evaluate(&conditional.then_branch)
        } else {
            match &conditional.else_branch {
                Some(else_branch) => self.evaluate(else_branch),
                None => Ok(Value::Nothing)
            }
        }
    }
}

fn operand(binary: &BinaryOp, value: Value, location: SrcSpan) -> Result<f64, RuntimeError> {
    match value.as_number() {
        Some(number) => Ok(number),
        None => runtime_error(
            RuntimeErrorType::InvalidOperand {
                operator: binary.operator.clone(),
                operand: value._type()
            },
            location
        )
    }
}

/// Evaluates `node` against `env`, updating it in place.
pub fn eval(node: &Node, env: &mut Environment) -> Result<Value, RuntimeError> {
    Evaluator::new(env).evaluate(node)
}
