use crate::{environment::prelude::ValueType, lexer::prelude::Token, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    /// A variable was read before any assignment to it.
    UndefinedVariable {
        name: String,
    },
    /// The right operand of `/` evaluated to exactly zero.
    DivisionByZero,
    /// A `BinaryOp` carries a token outside `+ - * / > < =`.
    UnknownOperator {
        operator: Token,
    },
    /// Reserved for node kinds the evaluator has no rule for.
    UnknownNode {
        kind: &'static str,
    },
    /// An operator was applied to a value without a numeric view.
    InvalidOperand {
        operator: Token,
        operand: ValueType,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan,
}

impl RuntimeError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            RuntimeErrorType::UndefinedVariable { name } => {
                ("Undefined variable", vec![format!("Variable `{name}` is not defined")])
            },
            RuntimeErrorType::DivisionByZero => ("Division by zero", vec![]),
            RuntimeErrorType::UnknownOperator { operator } => {
                ("Unknown operator", vec![format!("`{}` is not a binary operator", operator.as_literal())])
            },
            RuntimeErrorType::UnknownNode { kind } => {
                ("Unknown node", vec![format!("Cannot evaluate `{kind}`")])
            },
            RuntimeErrorType::InvalidOperand { operator, operand } => {
                ("Invalid operand", vec![format!(
                    "Cannot apply `{}` to `{operand:?}`",
                    operator.as_literal()
                )])
            }
        }
    }
}

pub fn runtime_error<T>(error: RuntimeErrorType, location: SrcSpan) -> Result<T, RuntimeError> {
    Err(RuntimeError { error, location })
}
