//! Apply stage: lowers a plan into a script and hands it to an executor.
//!
//! Side-effects:
//! - Emits `apply.attempt` before the executor runs and `apply.result` after.
//! - A non-zero executor status becomes `ApiError::ExecutorFailure`; whatever the
//!   executor already did stays done.

use std::time::Instant;

use log::Level;
use serde_json::json;
use time::OffsetDateTime;

use crate::adapters::Executor;
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{ts_for_stage, AuditSink, FactsEmitter, StageLogger};
use crate::types::ids::plan_id;
use crate::types::script::lower;
use crate::types::{ApplyReport, LinkAction, Plan};

use super::errors::{exit_code_for, id_str, ApiError, ErrorId};

/// Unique artifact base name: `<prefix>_<unix-nanos>`.
pub(crate) fn artifact_name(prefix: &str) -> String {
    format!(
        "{prefix}_{}",
        OffsetDateTime::now_utc().unix_timestamp_nanos()
    )
}

pub(super) fn run<E: FactsEmitter, A: AuditSink>(
    api: &super::Linkyard<E, A>,
    plan: &Plan,
    executor: &dyn Executor,
) -> Result<ApplyReport, ApiError> {
    let t0 = Instant::now();
    let pid = plan_id(plan);
    let tctx = AuditCtx::new(
        &api.facts as &dyn FactsEmitter,
        pid.to_string(),
        ts_for_stage(true),
        AuditMode::default(),
    );
    let slog = StageLogger::new(&tctx);

    let script = lower(plan, artifact_name(&api.policy.artifact_prefix));
    let created = plan.count(LinkAction::Create);
    let replaced = plan.count(LinkAction::ReplaceThenCreate);
    let skipped = plan.count(LinkAction::Skip);

    api.audit.log(Level::Info, "apply: starting");
    slog.apply_attempt()
        .merge(&json!({
            "artifact_name": script.name,
            "retain": script.retain,
            "steps": script.steps.len(),
            "links": script.link_count(),
            "skipped": skipped,
        }))
        .emit_success();

    let outcome = executor.run(&script);
    let duration_ms = u64::try_from(t0.elapsed().as_millis()).unwrap_or(u64::MAX);
    let artifact = outcome
        .artifact
        .as_ref()
        .map(|p| p.display().to_string());

    if !outcome.is_success() {
        let id = ErrorId::E_EXECUTOR;
        slog.apply_result()
            .merge(&json!({
                "exit_status": outcome.exit_status,
                "stderr": outcome.stderr,
                "artifact": artifact,
                "duration_ms": duration_ms,
                "error_id": id_str(id),
                "exit_code": exit_code_for(id),
            }))
            .emit_failure();
        api.audit.log(
            Level::Error,
            &format!("apply: executor exited with status {}", outcome.exit_status),
        );
        return Err(ApiError::ExecutorFailure {
            status: outcome.exit_status,
            stderr: outcome.stderr,
        });
    }

    slog.apply_result()
        .merge(&json!({
            "exit_status": outcome.exit_status,
            "created": created,
            "replaced": replaced,
            "skipped": skipped,
            "artifact": artifact,
            "duration_ms": duration_ms,
        }))
        .emit_success();
    api.audit.log(Level::Info, "apply: finished");

    Ok(ApplyReport {
        plan_uuid: Some(pid),
        steps: script.steps.len(),
        created,
        replaced,
        skipped,
        exit_status: outcome.exit_status,
        stderr: outcome.stderr,
        artifact: outcome.artifact,
        duration_ms,
    })
}
