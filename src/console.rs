//! Line-oriented console used for every prompt and message.
//!
//! The core never touches stdin/stdout directly. Builders, the director and
//! the menu all talk to a [`Console`], which makes every interactive flow
//! drivable from tests with a [`ScriptedConsole`].

use crate::error::{ConsoleError, ConsoleResult};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Interactive input/output collaborator.
pub trait Console {
    /// Show `prompt` and read one line of input, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` when no more input is available.
    fn ask(&mut self, prompt: &str) -> ConsoleResult<String>;

    /// Show a message line to the user.
    fn say(&mut self, message: &str);
}

/// Console over any buffered reader and writer.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            tracing::warn!(error = %e, "Failed to write console message");
        }
    }
}

/// Console fed from a fixed script of input lines.
///
/// Prompts and messages are recorded separately so tests can assert on what
/// the user would have been told.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Messages shown so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Input lines not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Forget recorded prompts and messages.
    pub fn clear_output(&mut self) {
        self.prompts.clear();
        self.messages.clear();
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(ConsoleError::Closed)
    }

    fn say(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
