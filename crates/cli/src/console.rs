//! Terminal seam: the session talks to a `Console`, never to stdio directly.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// ANSI "erase display" + "cursor home".
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

pub trait Console {
    /// Wipes the visible screen.
    fn clear(&mut self) -> io::Result<()>;

    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line without its line terminator.
    ///
    /// `Ok(None)` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// `Console` over any reader/writer pair.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
    clear_enabled: bool,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin/stdout.
    pub fn stdio(clear_enabled: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear_enabled)
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W, clear_enabled: bool) -> Self {
        Self {
            input,
            output,
            clear_enabled,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_enabled {
            self.output.write_all(CLEAR_SEQUENCE.as_bytes())?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
