// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! CLI tool for running sliding-window queries

use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use rustyline::DefaultEditor;
use slidewin::{
    find_substring, has_near_duplicate_with, min_subarray_window, min_window, Bucketed,
    DetectionStrategy, OrderedWindow,
};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        std::process::exit(1);
    }};

    ($msg:literal) => {{
        eprintln!($msg);
        std::process::exit(1);
    }};
}

use tracing::{debug, info, trace, warn};

pub fn init_tracing(quiet: bool, verbose: u8) -> LevelFilter {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (for library code that uses log::*)
    if tracing_log::LogTracer::init().is_err() {
        die!("INTERNAL ERROR: setting log tracer failed");
    }

    let registry = Registry::default();

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("SLIDE_LOG")
        .from_env_lossy()
        .add_directive(
            "rustyline=warn"
                .parse()
                .unwrap_or_else(|_| LevelFilter::WARN.into()),
        );

    let subscriber = registry.with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: setting default tracing::subscriber failed");
    }

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing_panic::panic_hook(info);
        prev_hook(info); // daisy-chain to old panic hook
    }));

    level_filter
}

/// CLI tool for running sliding-window queries
#[derive(Parser, Debug)]
#[command(name = "slide")]
#[command(about = "CLI tool for running sliding-window queries")]
struct ToolArgs {
    /// Suppress all output except for errors. This overrides the -v flag.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Turn on verbose output. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Command to run
    #[command(subcommand)]
    command: CliCommand,
}

/// Near-duplicate detection strategy
#[derive(ValueEnum, Copy, Clone, Debug, Default)]
enum StrategyArg {
    /// Value buckets of width `value_bound + 1`
    #[default]
    Bucket,

    /// Ordered multiset of the last `index_bound` values
    Ordered,
}

impl StrategyArg {
    fn strategy(self) -> &'static dyn DetectionStrategy {
        match self {
            Self::Bucket => &Bucketed,
            Self::Ordered => &OrderedWindow,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum ToolCommand {
    /// Length of the shortest run whose sum reaches a threshold
    MinLen {
        /// Minimum sum
        threshold: u64,

        /// Non-negative elements
        elements: Vec<u64>,
    },
    /// Whether two elements are close in both position and value
    NearDup {
        /// Detection strategy
        #[arg(short, long, value_enum, default_value_t)]
        strategy: StrategyArg,

        /// Maximum index distance
        index_bound: usize,

        /// Maximum value distance
        #[arg(allow_negative_numbers = true)]
        value_bound: i64,

        /// Elements
        #[arg(allow_negative_numbers = true)]
        elements: Vec<i64>,
    },
    /// Start positions (in chars) of all concatenations of the given words
    Concat {
        /// String to search in
        source: String,

        /// Equally long words
        words: Vec<String>,
    },
    /// Shortest substring containing all characters of a target
    Cover {
        /// String to search in
        source: String,

        /// Required characters
        target: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum CliCommand {
    #[command(flatten)]
    ToolCmd(ToolCommand),

    /// Read commands line by line (interactive if stdin is a terminal)
    Shell,
}

// Internal shell commands, include all external tool commands
#[derive(Parser, Debug)]
#[command(name = "")]
#[command(no_binary_name = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "
{version}

Available Commands:

{subcommands}

Use `help COMMAND` or `COMMAND --help` for more details.

")]
struct ShellArgs {
    #[command(subcommand)]
    command: ShellCommand,
}

// Shell commands (including ones not available from CLI)
#[derive(Subcommand, Debug, Clone)]
enum ShellCommand {
    #[command(flatten)]
    ToolCmd(ToolCommand),

    /// Exit the current shell
    #[command(visible_alias = "quit")]
    Exit,
}

/// Result of executing a command
enum CommandResult {
    Continue,
    Exit,
}

fn format_indices(indices: &[usize]) -> String {
    let joined = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{joined}]")
}

fn handle_min_len(threshold: u64, elements: &[u64]) {
    match min_subarray_window(threshold, elements) {
        Some(window) => {
            debug!("shortest run: {}..{}", window.start, window.end());
            println!("{}", window.len);
        }
        None => println!("0"),
    }
}

fn handle_near_dup(strategy: StrategyArg, index_bound: usize, value_bound: i64, elements: &[i64]) {
    let strategy = strategy.strategy();
    debug!("using {}", strategy.get_name());

    if value_bound < 0 {
        warn!("value bound {value_bound} is negative, no pair can match");
    }

    let found = has_near_duplicate_with(strategy, elements, index_bound, value_bound);
    println!("{found}");
}

fn handle_concat(source: &str, words: &[String]) {
    if let Err(e) = slidewin::WordList::try_new(words) {
        warn!("{e}");
    }

    println!("{}", format_indices(&find_substring(source, words)));
}

fn handle_cover(source: &str, target: &str) {
    println!("{:?}", min_window(source, target));
}

/// Execute a parsed command
fn execute_command(cmd: ToolCommand) -> CommandResult {
    match cmd {
        ToolCommand::MinLen {
            threshold,
            elements,
        } => handle_min_len(threshold, &elements),
        ToolCommand::NearDup {
            strategy,
            index_bound,
            value_bound,
            elements,
        } => handle_near_dup(strategy, index_bound, value_bound, &elements),
        ToolCommand::Concat { source, words } => handle_concat(&source, &words),
        ToolCommand::Cover { source, target } => handle_cover(&source, &target),
    }
    CommandResult::Continue
}

/// Execute a shell-only command
fn execute_shell_command(cmd: ShellCommand) -> CommandResult {
    match cmd {
        ShellCommand::ToolCmd(tool_cmd) => execute_command(tool_cmd),
        ShellCommand::Exit => CommandResult::Exit,
    }
}

/// Parse and run a shell command line
fn run_shell_command(line: &str) -> CommandResult {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return CommandResult::Continue;
    }

    let tokens = match shlex::split(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return CommandResult::Continue,
        None => {
            eprintln!("error: unclosed quote");
            return CommandResult::Continue;
        }
    };

    match ShellArgs::try_parse_from(&tokens) {
        Ok(args) => execute_shell_command(args.command),
        Err(e) => {
            // Print clap's error message
            eprintln!("{e}");
            CommandResult::Continue
        }
    }
}

fn run_shell() {
    if io::stdin().is_terminal() {
        run_shell_interactive();
    } else {
        run_shell_non_interactive();
    }
}

fn run_shell_interactive() {
    println!("Welcome to the sliding-window shell");
    println!("Type 'help' for available commands, 'exit' to quit.\n");

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error initializing line editor: {e}");
            return;
        }
    };

    loop {
        match rl.readline("slide> ") {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(&line) {
                    trace!("could not add history entry: {e}");
                }
                if let CommandResult::Exit = run_shell_command(&line) {
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ignore Ctrl+C, just show a new prompt
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }
    }
}

fn run_shell_non_interactive() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if stdout.flush().is_err() {
            die!("can't flush stdout");
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                // EOF
                break;
            }
            Ok(_) => {
                if let CommandResult::Exit = run_shell_command(&line) {
                    break;
                }
            }
            Err(e) => {
                die!("Error reading input: {}", e);
            }
        }
    }
}

fn main() {
    let args = ToolArgs::parse();
    let level_filter = init_tracing(args.quiet, args.verbose);

    let cmd = ToolArgs::command();

    info!(
        "starting {} ({} {}), log level: {level_filter}",
        cmd.get_name(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    match args.command {
        CliCommand::ToolCmd(cmd) => {
            execute_command(cmd);
        }
        CliCommand::Shell => run_shell(),
    }
}
