use std::fmt::Display;

use crate::{lexer::prelude::Token, utils::prelude::SrcSpan};

/// Reverse polish rendering, used by the read-parse-print loop.
pub trait Postfix {
    fn postfix(&self) -> String;
}

/// One parsed statement. `trailing` covers the tokens the grammar left unconsumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub node: Node,
    pub trailing: Option<SrcSpan>,
}

// statement  -> <assignment> | <if_statement> | <expression>
// expression -> <number> | <variable> | <binary_op> | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(Number),
    Variable(Identifier),
    Assignment(Assignment),
    BinaryOp(BinaryOp),
    If(IfStatement),
}

impl Node {
    pub fn number(value: f64) -> Self {
        Self::Number(Number { value, location: SrcSpan::default() })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Identifier { value: name.into(), location: SrcSpan::default() })
    }

    pub fn assignment(name: impl Into<String>, value: Node) -> Self {
        Self::Assignment(Assignment {
            identifier: Identifier { value: name.into(), location: SrcSpan::default() },
            value: Box::new(value),
            location: SrcSpan::default(),
        })
    }

    pub fn binary(left: Node, operator: Token, right: Node) -> Self {
        Self::BinaryOp(BinaryOp {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location: SrcSpan::default(),
        })
    }

    pub fn conditional(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        Self::If(IfStatement {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            location: SrcSpan::default(),
        })
    }

    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Number(number) => number.location,
            Self::Variable(ident) => ident.location,
            Self::Assignment(assignment) => assignment.location,
            Self::BinaryOp(binary) => binary.location,
            Self::If(conditional) => conditional.location,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Variable(_) => "Variable",
            Self::Assignment(_) => "Assignment",
            Self::BinaryOp(_) => "BinaryOp",
            Self::If(_) => "IfStatement",
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Variable(ident) => write!(f, "{ident}"),
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::BinaryOp(binary) => write!(f, "{binary}"),
            Self::If(conditional) => write!(f, "{conditional}"),
        }
    }
}

impl Postfix for Node {
    fn postfix(&self) -> String {
        match self {
            Self::Number(number) => format!("{number}"),
            Self::Variable(ident) => format!("{ident}"),
            Self::Assignment(assignment) => assignment.postfix(),
            Self::BinaryOp(binary) => binary.postfix(),
            Self::If(conditional) => conditional.postfix(),
        }
    }
}

// number -> {/ <digit> /}
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: f64,
    pub location: SrcSpan
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// identifier -> (<letter> | _) { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

// assignment -> <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: Identifier,
    pub value: Box<Node>,
    pub location: SrcSpan
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.identifier, self.value)
    }
}

impl Postfix for Assignment {
    fn postfix(&self) -> String {
        format!("{} {} =", self.identifier, self.value.postfix())
    }
}

// binary_op -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Box<Node>,
    pub operator: Token,
    pub right: Box<Node>,
    pub location: SrcSpan
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.as_literal(), self.right)
    }
}

impl Postfix for BinaryOp {
    fn postfix(&self) -> String {
        format!("{} {} {}", self.left.postfix(), self.right.postfix(), self.operator.as_literal())
    }
}

// if_statement -> if <expression> then <statement> [else <statement>]
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Box<Node>,
    pub then_branch: Box<Node>,
    pub else_branch: Option<Box<Node>>,
    pub location: SrcSpan
}

impl Display for IfStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} then {}", self.condition, self.then_branch)?;

        match &self.else_branch {
            Some(else_branch) => write!(f, " else {else_branch}"),
            None => Ok(())
        }
    }
}

impl Postfix for IfStatement {
    fn postfix(&self) -> String {
        match &self.else_branch {
            Some(else_branch) => format!(
                "{} {} {} if-else",
                self.condition.postfix(),
                self.then_branch.postfix(),
                else_branch.postfix()
            ),
            None => format!("{} {} if", self.condition.postfix(), self.then_branch.postfix())
        }
    }
}
