use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::RuntimeError,
    parser::prelude::{ParseError, ParseErrorType},
};
use super::diagnostic::{Diagnostic, Label, Level, Location};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse statement: {}", .error.details().0)]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("evaluation failed: {}", .error.details().0)]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
    #[error("IO operation failed: {err}")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn parse(path: impl Into<PathBuf>, src: impl Into<String>, error: ParseError) -> Self {
        Error::Parse { path: path.into(), src: src.into(), error }
    }

    pub fn runtime(path: impl Into<PathBuf>, src: impl Into<String>, error: RuntimeError) -> Self {
        Error::Runtime { path: path.into(), src: src.into(), error }
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        self.to_diagnostic().write(buf);
        writeln!(buf).expect("write new line diagnostic");
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();

                let title = match error.error {
                    ParseErrorType::LexError { .. } => "Lexical error",
                    ParseErrorType::UnexpectedEof => "Incomplete statement",
                    ParseErrorType::TooDeeplyNested { .. } => "Nesting limit exceeded",
                    _ => "Syntax error"
                };

                Diagnostic {
                    title: title.into(),
                    text: extra.join("\n"),
                    hint: None,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.span,
                        },
                    }),
                }
            },
            Error::Runtime { path, src, error } => {
                let (label, extra) = error.details();

                Diagnostic {
                    title: "Runtime error".into(),
                    text: extra.join("\n"),
                    hint: None,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.location,
                        },
                    }),
                }
            },
            Error::StdIo { err } => {
                Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    hint: None,
                    level: Level::Error,
                    location: None,
                }
            }
        }
    }
}
