use mini_core::interpreter::prelude::Session;

use crate::cli::{classify, read_input, stderr_buffer_writer, Input};

pub fn start(mut session: Session) -> std::io::Result<()> {
	let stdin = std::io::stdin();

	while let Some(input) = read_input(&stdin)? {
		match classify(&input) {
			Input::Blank => {},
			Input::Exit => return Ok(()),
			Input::Line(line) => match line.trim() {
				".env" => {
					for (name, value) in session.environment().bindings() {
						println!("{name} = {value}");
					}
				},
				".clear" => session.clear(),
				_ => match session.eval_line(line) {
					Ok(value) => println!("{value}"),
					Err(err) => {
						let buf_writer = stderr_buffer_writer();
						let mut buf = buf_writer.buffer();

						err.pretty(&mut buf);
						buf_writer.print(&buf)?;
					}
				}
			}
		}

	}

	Ok(())
}
