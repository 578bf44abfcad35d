//! Configuration for the command engine.

/// What the engine does when a command cannot be executed because its input
/// is unusable (empty line, missing parameter, unparsable number).
///
/// Business-rule failures (duplicates, missing entities, unknown names) are
/// always reported per command and never stop a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure as that command's result line and keep going.
    #[default]
    Isolate,
    /// Stop the batch; the only output is the failure message. Commands
    /// already executed keep their effect on the store.
    Abort,
}

/// Configuration for the command engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// How unusable input is handled.
    pub failure_policy: FailurePolicy,
}

impl EngineConfig {
    /// Creates the default configuration (isolate failures).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that stops the batch on the first unusable
    /// command.
    #[must_use]
    pub fn aborting() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
        }
    }

    /// Builder method to set the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
