mod cli;
mod repl;
mod rlpl;
mod rppl;


use std::{path::PathBuf, rc::Rc};

use clap::{Parser, Subcommand};
use cli::{print_finished, print_running};
use mini_core::{
    interpreter::prelude::{run_file, Session},
    lexer::prelude::LexMode,
    utils::prelude::{Warning, WarningEmitterIO}
};

#[derive(Parser)]
#[command(version, about = "Interpreter for a small expression language")]
struct Args {
    /// Report characters outside the language instead of skipping them
    #[arg(long, global = true, default_value_t = false)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Runs Read Eval Print Loop (default)
    Repl,
    /// Evaluates a source file, one statement per line
    Run {
        /// Path of source file
        path: PathBuf,
        /// Do not print statement values
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl {
        /// Print the tree in reverse polish notation
        #[arg(long, default_value_t = false)]
        postfix: bool,
    },
}

fn main() {
    cli::init_tracing();
    cli::install_interrupt_handler();

    let args = Args::parse();
    let mode = if args.strict { LexMode::Strict } else { LexMode::Lenient };
    let warning_emitter = Rc::new(ConsoleWarningEmitter);

    let result = match args.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::start(Session::new(warning_emitter).with_mode(mode)),
        Command::Run { path, quiet } => {
            let mut session = Session::new(warning_emitter).with_mode(mode);

            print_running(&path.to_string_lossy());
            let start = std::time::Instant::now();

            match run_file(&mut session, path, |value| if !quiet { println!("{value}") }) {
                Ok(statements) => {
                    print_finished(std::time::Instant::now() - start, statements);
                    Ok(())
                },
                Err(err) => {
                    let buf_writer = cli::stderr_buffer_writer();
                    let mut buf = buf_writer.buffer();

                    err.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing error to stderr");

                    std::process::exit(1);
                }
            }
        },
        Command::Rlpl => rlpl::start(mode),
        Command::Rppl { postfix } => rppl::start(mode, postfix),
    };

    if let Err(err) = result {
        tracing::error!(%err, "terminal I/O failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        let buffer_writer = crate::cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}
