// Facade for the API module; delegates to submodules under src/api/

use crate::adapters::{Executor, FsProbe, StdFsProbe};
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;
use crate::types::{ApplyReport, Plan, PlanInput, Script};

mod apply;
mod builder;
pub mod errors;
mod plan;

pub use builder::ApiBuilder;
pub use plan::to_yaml;

pub struct Linkyard<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    probe: Box<dyn FsProbe>,
}

impl<E: FactsEmitter, A: AuditSink> Linkyard<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            probe: Box::new(StdFsProbe),
        }
    }

    /// Replace the filesystem probe used for planning decisions.
    #[must_use]
    pub fn with_probe(mut self, probe: Box<dyn FsProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Build the link plan for `input`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::DestinationNotFound` when the destination root is not an
    /// existing directory. Collisions never fail; they are encoded in the plan.
    pub fn plan(&self, input: PlanInput) -> Result<Plan, errors::ApiError> {
        plan::build(self, input)
    }

    /// Lower `plan` into the script an executor would receive.
    #[must_use]
    pub fn script_for(&self, plan: &Plan) -> Script {
        crate::types::script::lower(plan, apply::artifact_name(&self.policy.artifact_prefix))
    }

    /// Hand `plan` to `executor` and report the outcome.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ExecutorFailure` with the captured error text when the
    /// executor exits non-zero.
    pub fn apply(
        &self,
        plan: &Plan,
        executor: &dyn Executor,
    ) -> Result<ApplyReport, errors::ApiError> {
        apply::run(self, plan, executor)
    }

    /// Plan and apply in one call.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`plan`](Self::plan) and [`apply`](Self::apply).
    pub fn create_symlinks(
        &self,
        input: PlanInput,
        executor: &dyn Executor,
    ) -> Result<ApplyReport, errors::ApiError> {
        let plan = self.plan(input)?;
        self.apply(&plan, executor)
    }
}
