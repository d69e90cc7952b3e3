use std::fmt::Display;

pub const TRUE: Value = Value::Boolean { value: true };
pub const FALSE: Value = Value::Boolean { value: false };

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number {
        value: f64,
    },
    Boolean {
        value: bool
    },
    /// Result of an `if` without `else` whose condition was false.
    Nothing,
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number { value } => write!(f, "{value:?}"),
            Value::Boolean { value } => write!(f, "{value}"),
            Value::Nothing => write!(f, "nothing")
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number { value }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean { value }
    }
}

impl Value {
    pub fn _type(&self) -> ValueType {
        match self {
            Self::Number { .. } => ValueType::Number,
            Self::Boolean { .. } => ValueType::Boolean,
            Self::Nothing => ValueType::Nothing
        }
    }

    /// Numeric view of the value: booleans count as `1` and `0`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { value } => Some(*value),
            Self::Boolean { value } => Some(if *value { 1.0 } else { 0.0 }),
            Self::Nothing => None
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number { value } => *value != 0.0,
            Self::Boolean { value } => *value,
            Self::Nothing => false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Number,
    Boolean,
    Nothing
}
