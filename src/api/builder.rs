use crate::adapters::FsProbe;
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;

/// Builder for constructing a `Linkyard` with ergonomic chaining.
pub struct ApiBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    probe: Option<Box<dyn FsProbe>>,
}

impl<E: FactsEmitter, A: AuditSink> ApiBuilder<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            probe: None,
        }
    }

    #[must_use]
    pub fn probe(mut self, probe: Box<dyn FsProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn build(self) -> super::Linkyard<E, A> {
        let api = super::Linkyard::new(self.facts, self.audit, self.policy);
        match self.probe {
            Some(p) => api.with_probe(p),
            None => api,
        }
    }
}
