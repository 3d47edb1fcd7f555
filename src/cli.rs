use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use mathdrill::drills::{DRILLS, Drill, explanation};
use mathdrill::{AnswerOutcome, Operation, PracticeSession, ProblemConfig, SessionState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ABORT_WORDS: [&str; 3] = ["q", "quit", "abort"];

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Mathdrill - Practice mental arithmetic in the terminal
#[derive(Parser, Debug)]
#[command(name = "mathdrill")]
#[command(about = "Practice randomly generated arithmetic problems constrained by digit counts")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Practice problems built from digit counts or fixed operands
    Practice(PracticeArgs),
    /// Practice one of the named drills
    Drill {
        /// Drill id, as listed by `drills`
        id: String,

        /// Seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the available drills
    Drills,
}

#[derive(Args, Debug)]
pub struct PracticeArgs {
    /// Operation: + - * / (or add, sub, mul, div)
    #[arg(short, long, allow_hyphen_values = true)]
    pub op: Operation,

    /// Digits in the first operand (1-8)
    #[arg(short = 'a', long, default_value_t = 1)]
    pub a_digits: u32,

    /// Digits in the second operand (1-8)
    #[arg(short = 'b', long, default_value_t = 1)]
    pub b_digits: u32,

    /// Pin the first operand to this value
    #[arg(long)]
    pub a_fixed: Option<i64>,

    /// Pin the second operand to this value
    #[arg(long)]
    pub b_fixed: Option<i64>,

    /// Number of problems in the session (1-1000)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Seed for reproducible problems
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PracticeArgs {
    pub fn to_config(&self) -> ProblemConfig {
        let mut config =
            ProblemConfig::new(self.op, self.a_digits, self.b_digits, self.count).clamped();
        if let Some(value) = self.a_fixed {
            config = config.with_fixed_a(value);
        }
        if let Some(value) = self.b_fixed {
            config = config.with_fixed_b(value);
        }
        config
    }
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed { total: usize },
    Aborted,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Present problems until the session finishes, the learner aborts, or
/// input runs out.
pub fn run_session<R: Rng, I: BufRead, W: Write>(
    session: &mut PracticeSession<R>,
    input: &mut I,
    output: &mut W,
) -> Result<SessionEnd> {
    loop {
        let SessionState::InProgress { index, total } = session.state() else {
            return Ok(SessionEnd::Aborted);
        };
        let problem = session.current_problem()?.clone();
        write!(output, "[{}/{}]  {} = ", index + 1, total, problem)?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        let answer = line.trim();
        if read == 0 || ABORT_WORDS.contains(&answer.to_ascii_lowercase().as_str()) {
            session.abort();
            writeln!(output, "\nSession aborted.")?;
            return Ok(SessionEnd::Aborted);
        }

        match session.submit(&line)? {
            AnswerOutcome::Correct { .. } => writeln!(output, "Correct!")?,
            AnswerOutcome::Incorrect => writeln!(output, "Not quite, try again.")?,
            AnswerOutcome::Finished { total } => {
                writeln!(output, "Correct! All {} problems done.", total)?;
                return Ok(SessionEnd::Completed { total });
            }
        }
    }
}

/// The drill to run for `id` and the tip to show first. Unknown ids run the
/// fallback drill but get the "no explanation" text rather than its tip.
pub fn drill_intro(id: &str) -> (&'static Drill, &'static str) {
    let drill = Drill::lookup(id);
    if drill.id != id {
        warn!("Unknown drill '{}', practising '{}' instead", id, drill.id);
    }
    (drill, explanation(id))
}

fn practice(config: ProblemConfig, seed: Option<u64>) -> Result<()> {
    let mut session =
        PracticeSession::start(config, make_rng(seed)).context("Configuration rejected")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match run_session(&mut session, &mut input, &mut output)? {
        SessionEnd::Completed { total } => info!("Finished {} problems", total),
        SessionEnd::Aborted => info!("Session aborted"),
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    match args.command {
        Command::Practice(practice_args) => practice(practice_args.to_config(), practice_args.seed),
        Command::Drill { id, seed } => {
            let (drill, tip) = drill_intro(&id);
            println!("{}", tip);
            practice(drill.config(), seed)
        }
        Command::Drills => {
            for drill in &DRILLS {
                println!("{:<16} {}", drill.id, drill.explanation);
            }
            Ok(())
        }
    }
}
