use anyhow::Context;
use clap::Parser;
use running_stats::prompt::{EofPolicy, Prompt, PromptOptions};
use running_stats::statistics::Statistics;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "running-stats")]
#[command(about = "Read integers until the stop word, then report their statistics")]
struct Args {
    /// Word that ends input
    #[arg(long, default_value = "quit", value_parser = parse_sentinel)]
    sentinel: String,

    /// Do not print the prompt before each read
    #[arg(long)]
    no_prompt: bool,

    /// Fail if input ends before the stop word is entered
    #[arg(long)]
    strict_eof: bool,
}

// Input is split on whitespace, so a sentinel containing any could never match.
fn parse_sentinel(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("stop word must not be empty".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(format!("stop word {:?} must not contain whitespace", value));
    }
    Ok(value.to_string())
}

impl Args {
    fn prompt_options(&self) -> PromptOptions {
        PromptOptions {
            sentinel: self.sentinel.clone(),
            show_prompt: !self.no_prompt,
            eof: if self.strict_eof {
                EofPolicy::Error
            } else {
                EofPolicy::Quit
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("WARN"));

    let args = Args::parse();

    let mut stats = Statistics::new();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let outcome = Prompt::new(args.prompt_options())
        .run(stdin, &mut stdout, &mut stats)
        .context("Failed to read integers")?;
    log::debug!("Loop finished: {:?}", outcome);

    write!(stdout, "{}", stats.summary()).context("Failed to write summary")?;
    stdout.flush().context("Failed to write summary")?;

    Ok(())
}
