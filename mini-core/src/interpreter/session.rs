use std::{path::PathBuf, rc::Rc};

use crate::{
    environment::prelude::{Environment, Value},
    eval::prelude::{Evaluator, RuntimeError},
    lexer::prelude::LexMode,
    parser::prelude::{parse_statement, ParseError},
    utils::prelude::{Error, NullWarningEmitterIO, Warning, WarningEmitter, WarningEmitterIO}
};

pub const REPL_PATH: &str = "<repl>";

/// A persistent interpreter: one environment threaded through every
/// statement it is given, in order.
pub struct Session {
    env: Environment,
    mode: LexMode,
    path: PathBuf,
    warnings: WarningEmitter,
}

impl Session {
    pub fn new(warnings: Rc<dyn WarningEmitterIO>) -> Self {
        Self {
            env: Environment::new(),
            mode: LexMode::default(),
            path: PathBuf::from(REPL_PATH),
            warnings: WarningEmitter::new(warnings),
        }
    }

    pub fn with_mode(mut self, mode: LexMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn clear(&mut self) {
        self.env.clear();
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.count()
    }

    /// Evaluates one statement. A failed statement leaves the environment as it was.
    pub fn eval_line(&mut self, src: &str) -> Result<Value, Error> {
        self.eval_statement(src, src, 0)
    }

    /// Evaluates `src` one line at a time, handing each value to `emit`.
    /// Stops at the first failing statement; returns how many were evaluated.
    pub fn run_source(&mut self, src: &str, mut emit: impl FnMut(Value)) -> Result<usize, Error> {
        let mut offset = 0;
        let mut evaluated = 0;

        for raw_line in src.split_inclusive('\n') {
            let line = raw_line.trim_end_matches(|c: char| c == '\n' || c == '\r');

            if !line.trim().is_empty() {
                let value = self.eval_statement(src, line, offset as u32)?;
                evaluated += 1;
                emit(value);
            }

            offset += raw_line.len();
        }

        Ok(evaluated)
    }

    // `line` starts at byte `offset` of `src`; diagnostics point into `src`.
    #[tracing::instrument(level = "trace", skip(self, src))]
    fn eval_statement(&mut self, src: &str, line: &str, offset: u32) -> Result<Value, Error> {
        let parsed = parse_statement(line, self.mode).map_err(|error| ParseError {
            span: error.span.shift(offset),
            ..error
        }).map_err(|error| Error::parse(self.path.clone(), src, error))?;

        if let Some(location) = parsed.trailing {
            self.warnings.emit(Warning::TrailingTokens {
                path: self.path.clone(),
                src: src.to_string(),
                location: location.shift(offset),
            });
        }

        let snapshot = self.env.clone();
        let result = Evaluator::new(&mut self.env).evaluate(&parsed.node);

        match result {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::debug!(?error, "statement failed, restoring environment");
                self.env = snapshot;

                Err(Error::runtime(self.path.clone(), src, RuntimeError {
                    location: error.location.shift(offset),
                    ..error
                }))
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Rc::new(NullWarningEmitterIO))
    }
}
