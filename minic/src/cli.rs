use std::{
    io::{BufRead, IsTerminal, Write},
    time::Duration,
};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

pub const PROMPT: &str = ">> ";

pub(crate) fn print_running(text: &str) {
    print_colourful_prefix("Running", Color::Green, text)
}

pub(crate) fn print_finished(duration: Duration, statements: usize) {
    print_colourful_prefix(
        "Finished",
        Color::Green,
        &format!("{statements} statement(s) in {}", seconds(duration))
    )
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

pub fn print_colourful_prefix(prefix: &str, color: Color, text: &str) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();
    buffer
        .set_color(
            ColorSpec::new()
                .set_intense(true)
                .set_bold(true)
                .set_fg(Some(color)),
        )
        .expect("print_colourful_prefix");
    write!(buffer, "{prefix: >11}").expect("print_colourful_prefix");
    buffer
        .set_color(&ColorSpec::new())
        .expect("print_colourful_prefix");
    writeln!(buffer, " {text}").expect("print_colourful_prefix");
    buffer_writer.print(&buffer).expect("print_colourful_prefix");
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

fn colour_forced() -> bool {
    if let Ok(force) = std::env::var("FORCE_COLOR") {
        !force.is_empty()
    } else {
        false
    }
}

fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prompts and reads one line without its line ending. `None` at end of input.
pub fn read_input(stdin: &std::io::Stdin) -> std::io::Result<Option<String>> {
    let mut input = String::new();

    print!("{}", PROMPT);
    std::io::stdout().flush()?;

    if stdin.lock().read_line(&mut input)? == 0 {
        println!();
        return Ok(None);
    }

    if let Some('\n') = input.chars().next_back() {
        input.pop();
    }
    if let Some('\r') = input.chars().next_back() {
        input.pop();
    }

    Ok(Some(input))
}

/// What a loop should do with one line read from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input<'a> {
    Blank,
    Exit,
    Line(&'a str),
}

pub(crate) fn classify(input: &str) -> Input<'_> {
    match input.trim() {
        "" => Input::Blank,
        ".exit" => Input::Exit,
        _ => Input::Line(input),
    }
}

/// Logs go to stderr, and only when `RUST_LOG` asks for them.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
            .with(filter)
            .init();
    }
}

pub fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!();
        std::process::exit(130);
    });

    if let Err(err) = installed {
        tracing::warn!(%err, "could not install interrupt handler");
    }
}
