use log::{debug, info};
use rand::Rng;

use crate::feasibility::FeasibilityChecker;
use crate::generator::{ConfigError, OperandPair, Problem, ProblemConfig, ProblemGenerator};
use crate::session::errors::SessionError;
use crate::session::state::{AnswerOutcome, SessionState};
use crate::utils::parse_answer;

/// A practice session: the configuration, progress through it, the problem
/// currently shown and the operand pair of the last solved problem.
///
/// The generator itself keeps no state; everything it needs is carried
/// here and handed to it on each call.
pub struct PracticeSession<R: Rng> {
    config: Option<ProblemConfig>,
    index: usize,
    current: Option<Problem>,
    previous: Option<OperandPair>,
    checker: FeasibilityChecker,
    generator: ProblemGenerator,
    rng: R,
}

impl<R: Rng> PracticeSession<R> {
    /// An idle session waiting for a configuration
    pub fn new(rng: R) -> Self {
        Self {
            config: None,
            index: 0,
            current: None,
            previous: None,
            checker: FeasibilityChecker::new(),
            generator: ProblemGenerator::new(),
            rng,
        }
    }

    /// Create a session and immediately start it with `config`.
    ///
    /// # Errors
    ///
    /// Returns the rejection if the configuration is invalid or infeasible.
    pub fn start(config: ProblemConfig, rng: R) -> Result<Self, ConfigError> {
        let mut session = Self::new(rng);
        session.configure(config)?;
        Ok(session)
    }

    /// Establish a new configuration, discarding any progress.
    ///
    /// # Errors
    ///
    /// Returns the rejection if the configuration is invalid or infeasible;
    /// the session is left in the configuring state.
    pub fn configure(&mut self, config: ProblemConfig) -> Result<(), ConfigError> {
        self.reset();
        self.checker.check_config(&config, &mut self.rng)?;

        info!(
            "Starting session: {} problems of {}",
            config.count, config.operation
        );
        self.config = Some(config);
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        match &self.config {
            Some(config) => SessionState::InProgress {
                index: self.index,
                total: config.count,
            },
            None => SessionState::Configuring,
        }
    }

    pub fn config(&self) -> Option<&ProblemConfig> {
        self.config.as_ref()
    }

    pub fn previous_pair(&self) -> Option<OperandPair> {
        self.previous
    }

    /// The problem being worked on, generated on first request.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` while configuring.
    pub fn current_problem(&mut self) -> Result<&Problem, SessionError> {
        let config = self.config.as_ref().ok_or(SessionError::NotInProgress)?;
        let problem = match self.current.take() {
            Some(problem) => problem,
            None => self.generator.generate(config, self.previous, &mut self.rng),
        };
        Ok(self.current.insert(problem))
    }

    /// Check a raw answer against the current problem. Anything that does
    /// not parse as an integer counts as wrong.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` while configuring.
    pub fn submit(&mut self, raw_answer: &str) -> Result<AnswerOutcome, SessionError> {
        let answer = parse_answer(raw_answer);
        let (pair, correct) = {
            let problem = self.current_problem()?;
            (
                problem.pair(),
                answer.is_some_and(|value| problem.check_answer(value)),
            )
        };

        if !correct {
            debug!("Incorrect answer {:?} for {:?}", raw_answer, pair);
            return Ok(AnswerOutcome::Incorrect);
        }

        let total = self.config.as_ref().map_or(0, |config| config.count);
        self.previous = Some(pair);
        self.current = None;
        self.index += 1;

        if self.index >= total {
            info!("Session complete after {} problems", total);
            self.reset();
            return Ok(AnswerOutcome::Finished { total });
        }

        Ok(AnswerOutcome::Correct {
            completed: self.index,
            total,
        })
    }

    /// Abandon the session and return to configuring
    pub fn abort(&mut self) {
        if self.config.is_some() {
            info!("Session aborted at problem {}", self.index + 1);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.config = None;
        self.index = 0;
        self.current = None;
        self.previous = None;
    }
}
