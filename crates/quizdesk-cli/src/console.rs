//! Line-oriented console used by every interactive flow.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompts on `output`, reads trimmed lines from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Print a prompt and read the reply. `None` means end of input.
    pub fn ask(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Read one line with surrounding whitespace removed.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
