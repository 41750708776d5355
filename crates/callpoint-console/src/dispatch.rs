/*
[INPUT]:  Typed operator lines and the loaded command catalog.
[OUTPUT]: Dispatch decisions and suspended resolutions keyed by token.
[POS]:    State layer - tiered dispatch policy and resolution suspension.
[UPDATE]: When the dispatch tiers or the suspension protocol change.
*/

use std::collections::HashMap;
use std::fmt;

use callpoint_adapter::CommandDef;
use uuid::Uuid;

use crate::catalog::CommandCatalog;
use crate::line::{ParsedLine, parse_line};

/// Built-in that skips catalog validation entirely and submits as typed.
const PASSTHROUGH_COMMAND: &str = "clear";

/// Opaque handle for one suspended dispatch awaiting parameter collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionToken(Uuid);

impl ResolutionToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ResolutionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A dispatch held open until the operator finishes or cancels collection.
#[derive(Debug, Clone)]
pub struct PendingResolution {
    /// The matched command definition, parameter schema included.
    pub command: CommandDef,
    /// The full line as originally typed, for prefilling the collector.
    pub typed_line: String,
}

/// Decision for one typed line.
#[derive(Debug, Clone)]
pub enum Dispatch {
    /// Submit now with the given command token and parameter payload.
    Submit { command: String, params: String },
    /// Suspended; collection continues through `complete` or `cancel`.
    AwaitResolution { token: ResolutionToken },
    /// Token does not match any loaded command; nothing to submit.
    UnknownCommand { command: String },
}

/// Submission arguments produced by a finished resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSubmit {
    pub command: String,
    pub params: String,
    pub files: Option<String>,
}

/// Errors emitted by the resolver state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    UnknownToken { token: ResolutionToken },
}

impl fmt::Display for ResolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverError::UnknownToken { token } => {
                write!(f, "unknown resolution token: {token}")
            }
        }
    }
}

impl std::error::Error for ResolverError {}

/// Decides whether a typed line can be satisfied directly or needs
/// interactive resolution, and holds the suspended resolutions.
#[derive(Debug, Default)]
pub struct ParameterResolver {
    pending: HashMap<ResolutionToken, PendingResolution>,
}

impl ParameterResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the tiered dispatch policy to a raw operator line.
    ///
    /// Tiers, in order: the `clear` escape hatch, catalog lookup, zero
    /// declared parameters, File parameter or empty remainder (both force
    /// interactive resolution), otherwise submit the typed remainder as-is.
    pub fn dispatch(&mut self, catalog: &CommandCatalog, raw_line: &str) -> Dispatch {
        let ParsedLine { command, params } = parse_line(raw_line);

        if command == PASSTHROUGH_COMMAND {
            return Dispatch::Submit { command, params };
        }

        let Some(definition) = catalog.lookup(&command) else {
            return Dispatch::UnknownCommand { command };
        };

        if definition.parameters.is_empty() {
            // No declared parameters; send whatever the operator typed along.
            return Dispatch::Submit { command, params };
        }

        let has_file_param = definition
            .parameters
            .iter()
            .any(|param| param.parameter_type.is_file());

        if has_file_param || params.is_empty() {
            let token = self.suspend(definition.clone(), raw_line.to_string());
            return Dispatch::AwaitResolution { token };
        }

        Dispatch::Submit { command, params }
    }

    fn suspend(&mut self, command: CommandDef, typed_line: String) -> ResolutionToken {
        let token = ResolutionToken::new();
        self.pending.insert(
            token,
            PendingResolution {
                command,
                typed_line,
            },
        );
        token
    }

    /// The suspended resolution behind a token, if it is still open.
    pub fn pending(&self, token: ResolutionToken) -> Option<&PendingResolution> {
        self.pending.get(&token)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Finish a suspended dispatch with operator-collected values.
    ///
    /// The collector may adjust the command token, so it is passed back
    /// explicitly rather than taken from the pending entry.
    pub fn complete(
        &mut self,
        token: ResolutionToken,
        command: String,
        params: String,
        files: Option<String>,
    ) -> Result<ResolvedSubmit, ResolverError> {
        self.pending
            .remove(&token)
            .ok_or(ResolverError::UnknownToken { token })?;

        Ok(ResolvedSubmit {
            command,
            params,
            files,
        })
    }

    /// Abandon a suspended dispatch; no task is submitted, nothing is reported.
    pub fn cancel(&mut self, token: ResolutionToken) -> bool {
        self.pending.remove(&token).is_some()
    }
}
