/// Where a practice session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No accepted configuration; waiting for one
    Configuring,
    /// Working through problem `index` (zero-based) of `total`
    InProgress { index: usize, total: usize },
}

/// What happened to a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer; `completed` problems of `total` are done
    Correct { completed: usize, total: usize },
    /// Wrong or unparseable answer; the same problem stays current
    Incorrect,
    /// Right answer to the last problem; the session is back to configuring
    Finished { total: usize },
}
