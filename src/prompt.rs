use crate::statistics::Statistics;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

const INVALID_INPUT: &str = "You did not enter an integer, try again.";

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("failed to read or write console: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before \"{0}\" was entered")]
    UnexpectedEof(String),
}

/// What to do when input runs out before the sentinel is seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EofPolicy {
    #[default]
    Quit,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    EndOfInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub reason: StopReason,
    pub invalid_tokens: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Token {
    Value(i64),
    Quit,
    Invalid(String),
}

impl Token {
    pub fn classify(raw: &str, sentinel: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            Token::Value(value)
        } else if raw == sentinel {
            Token::Quit
        } else {
            Token::Invalid(raw.to_string())
        }
    }
}

/// Whitespace-delimited tokens, read one line at a time as they are needed.
///
/// Bytes that are not valid UTF-8 are decoded lossily, so such a token comes
/// out as text that is neither an integer nor the sentinel. A line is buffered
/// whole before it is split, which bounds memory by the longest line fed in.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        while self.pending.is_empty() {
            line.clear();
            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => return None,
                Ok(_) => self.pending.extend(
                    String::from_utf8_lossy(&line)
                        .split_whitespace()
                        .map(str::to_string),
                ),
                Err(err) => return Some(Err(err)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}

#[derive(Clone, Debug)]
pub struct PromptOptions {
    pub sentinel: String,
    pub show_prompt: bool,
    pub eof: EofPolicy,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            sentinel: "quit".to_string(),
            show_prompt: true,
            eof: EofPolicy::default(),
        }
    }
}

pub struct Prompt {
    options: PromptOptions,
}

impl Prompt {
    pub fn new(options: PromptOptions) -> Self {
        Self { options }
    }

    /// Feed integers from `input` into `stats` until the sentinel or end of input.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
        stats: &mut Statistics,
    ) -> Result<Outcome, PromptError> {
        let sentinel = self.options.sentinel.as_str();
        let mut tokens = Tokens::new(input);
        let mut invalid_tokens = 0;

        loop {
            if self.options.show_prompt {
                write!(output, "Enter an integer (\"{}\" to quit): ", sentinel)?;
                output.flush()?;
            }

            let raw = match tokens.next() {
                Some(raw) => raw?,
                None => break,
            };

            match Token::classify(&raw, sentinel) {
                Token::Value(value) => {
                    log::debug!("accepted value={}", value);
                    let was_overflowed = stats.overflowed();
                    stats.add(value);
                    if stats.overflowed() && !was_overflowed {
                        log::warn!(
                            "sum or product wrapped around after {} values",
                            stats.count()
                        );
                    }
                }
                Token::Quit => {
                    log::info!("stopped on \"{}\" after {} values", sentinel, stats.count());
                    return Ok(Outcome {
                        reason: StopReason::Quit,
                        invalid_tokens,
                    });
                }
                Token::Invalid(raw) => {
                    log::debug!("rejected token={:?}", raw);
                    invalid_tokens += 1;
                    writeln!(output, "{}", INVALID_INPUT)?;
                }
            }
        }

        // Leave the dangling prompt on its own line.
        if self.options.show_prompt {
            writeln!(output)?;
        }

        match self.options.eof {
            EofPolicy::Quit => {
                log::info!("input ended after {} values", stats.count());
                Ok(Outcome {
                    reason: StopReason::EndOfInput,
                    invalid_tokens,
                })
            }
            EofPolicy::Error => Err(PromptError::UnexpectedEof(sentinel.to_string())),
        }
    }
}
