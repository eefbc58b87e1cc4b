//! palindrome CLI - print the longest palindromic substring of each input

use std::io::{self, BufRead, Write};

use clap::Parser;
use palindrome::{Options, longest_palindrome_span_with_options};

/// Input used when no text is given on the command line.
const SAMPLE: &str = "banana";

#[derive(clap::Parser, Debug)]
#[command(name = "palindrome", version, about)]
struct Cli {
    #[arg(
        help = "Texts to search. `-` reads standard input, one text per line. \
               Defaults to a fixed sample.",
        name = "TEXT"
    )]
    texts: Vec<String>,

    #[arg(help = "Treat ASCII letters as equal regardless of case.", long)]
    ignore_ascii_case: bool,

    #[arg(
        help = "Also print the byte offset and byte length of each result.",
        long
    )]
    span: bool,

    #[arg(help = "Enable verbose output.", long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            ignore_ascii_case: self.ignore_ascii_case,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logger(&cli);

    let options = cli.options();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.texts.is_empty() {
        log::debug!("no input given, using sample {SAMPLE:?}");
        report(&mut out, SAMPLE, &options, cli.span)?;
        return Ok(());
    }

    for text in &cli.texts {
        if text == "-" {
            for line in io::stdin().lock().lines() {
                report(&mut out, &line?, &options, cli.span)?;
            }
        } else {
            report(&mut out, text, &options, cli.span)?;
        }
    }
    Ok(())
}

fn report(out: &mut impl Write, text: &str, options: &Options, with_span: bool) -> io::Result<()> {
    let span = longest_palindrome_span_with_options(text, options);
    let found = span.slice_str(text);
    if with_span {
        writeln!(out, "{found}\t{}\t{}", span.start, span.len())
    } else {
        writeln!(out, "{found}")
    }
}

fn setup_logger(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    log::trace!("logger initialised at default level `{default_level}`");
}
