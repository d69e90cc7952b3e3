use mini_core::{lexer::prelude::LexMode, parser::prelude::{parse_statement, Postfix}};

use crate::cli::{classify, read_input, Input};

pub fn start(mode: LexMode, postfix: bool) -> std::io::Result<()> {
	let stdin = std::io::stdin();

	while let Some(input) = read_input(&stdin)? {
		match classify(&input) {
			Input::Blank => {},
			Input::Exit => return Ok(()),
			Input::Line(line) => match parse_statement(line, mode) {
				Ok(parsed) => {
					if postfix {
						println!("{}", parsed.node.postfix());
					} else {
						println!("{}", parsed.node);
					}

					if let Some(trailing) = parsed.trailing {
						println!("(ignored tokens at {trailing})");
					}
				},
				Err(err) => {
					let (message, messages) = err.details();

					println!("Parse error: {}.\n\t{}", message, messages.join(";\n\t"))
				}
			}
		}
	}

	Ok(())
}
