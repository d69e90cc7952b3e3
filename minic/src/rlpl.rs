use mini_core::lexer::prelude::{source_chars, LexMode, Lexer};

use crate::cli::{classify, read_input, Input};

pub fn start(mode: LexMode) -> std::io::Result<()> {
	let stdin = std::io::stdin();

	while let Some(input) = read_input(&stdin)? {
		match classify(&input) {
			Input::Blank => {},
			Input::Exit => return Ok(()),
			Input::Line(line) => {
				for res in Lexer::new(source_chars(line), mode) {
					match res {
						Ok((start, token, end)) => println!("{start}..{end}\t{token:?}"),
						Err(err) => {
							let (message, messages) = err.details();
							println!("[at {}] Lexical Error: {}", err.location.start, message);
							if !messages.is_empty() {
								println!("{}", messages.join("\n"));
							}
							break;
						}
					}
				}
			}
		}
	}

	Ok(())
}
