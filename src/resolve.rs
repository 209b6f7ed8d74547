//! Fallback chain evaluation
//!
//! Optional configuration fields (icons, URL regex, suggestion text) are
//! resolved through ordered candidate chains. A candidate that is
//! unspecified is skipped; a candidate that is specified but invalid fails
//! the whole chain immediately, naming the candidate. An exhausted chain
//! fails with an actionable message listing how a value can be supplied.

pub mod icon;

use crate::error::ResolutionError;

/// Outcome of evaluating a single candidate.
pub type CandidateResult<T> = Result<Option<T>, String>;

/// Ordered chain of candidate value providers for one field.
pub struct Chain<'a, T> {
    target: &'static str,
    help: Option<String>,
    candidates: Vec<(&'static str, Box<dyn FnOnce() -> CandidateResult<T> + 'a>)>,
}

impl<'a, T> Chain<'a, T> {
    /// Start a chain for the named field.
    #[must_use]
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            help: None,
            candidates: Vec::new(),
        }
    }

    /// Append a candidate provider.
    ///
    /// The provider returns `Ok(Some(value))` when it resolves,
    /// `Ok(None)` when the candidate is unspecified, and `Err(reason)`
    /// when the candidate was specified but is unusable.
    #[must_use]
    pub fn candidate(
        mut self,
        name: &'static str,
        provider: impl FnOnce() -> CandidateResult<T> + 'a,
    ) -> Self {
        self.candidates.push((name, Box::new(provider)));
        self
    }

    /// Set the actionable message shown when every candidate is
    /// unspecified. Defaults to the list of candidate names.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Evaluate candidates in order and return the first resolved value.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::InvalidCandidate`] when a specified
    /// candidate fails, or [`ResolutionError::Exhausted`] when no
    /// candidate is specified at all.
    pub fn resolve(self) -> Result<T, ResolutionError> {
        let mut names = Vec::with_capacity(self.candidates.len());

        for (name, provider) in self.candidates {
            names.push(name);
            match provider() {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => {}
                Err(reason) => {
                    return Err(ResolutionError::InvalidCandidate {
                        target: self.target,
                        candidate: name,
                        reason,
                    });
                }
            }
        }

        let help = self
            .help
            .unwrap_or_else(|| format!("tried: {}", names.join(", ")));
        Err(ResolutionError::Exhausted {
            target: self.target,
            help,
        })
    }
}
