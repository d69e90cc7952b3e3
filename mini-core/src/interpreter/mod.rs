pub mod session;

pub mod prelude {
    pub use super::{
        session::*,
        run_file
    };
}


use std::path::PathBuf;

use crate::{environment::prelude::Value, utils::prelude::Error};
use session::Session;

/// Runs a source file through `session`, one statement per line.
pub fn run_file(
    session: &mut Session,
    path: PathBuf,
    emit: impl FnMut(Value),
) -> Result<usize, Error> {
    let src = match std::fs::read_to_string(&path) {
        Ok(src) => src,
        Err(err) => return Err(Error::StdIo { err: err.kind() })
    };

    tracing::debug!(path = %path.display(), bytes = src.len(), "running file");

    session.set_path(path);
    session.run_source(&src, emit)
}
