mod cli;
mod constants;
mod render;
mod scanner;
mod text;
mod ui;

use crate::cli::{Cli, Mode};
use crate::constants::{EXIT_IO_ERROR, EXIT_OK, PROGRAM_NAME, PS1_SETUP_STRING, VERSION};
use crate::render::RenderStyle;
use anyhow::{Context, Result};
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse_args();

    match run(&cli.mode()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(EXIT_IO_ERROR);
        }
    }
}

/// returns the exit code for the process
fn run(mode: &Mode) -> Result<i32> {
    let mut stdout = io::stdout().lock();

    let code = match *mode {
        Mode::Version => {
            writeln!(stdout, "{PROGRAM_NAME} v.{VERSION}").context("failed to write version")?;
            EXIT_OK
        }
        Mode::Bashrc => {
            stdout
                .write_all(PS1_SETUP_STRING.as_bytes())
                .context("failed to write PS1 definition")?;
            EXIT_OK
        }
        Mode::Prompt { plain } => {
            let record = scanner::scan(io::stdin().lock())?;
            // outside a repository the prompt gets nothing from us
            if record.fatal {
                return Ok(record.result_code());
            }

            let fragment = render::render(&record, &RenderStyle::new(plain));
            stdout
                .write_all(fragment.as_bytes())
                .context("failed to write prompt fragment")?;
            record.result_code()
        }
    };

    stdout.flush().context("failed to flush stdout")?;
    Ok(code)
}
