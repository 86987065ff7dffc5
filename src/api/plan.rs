//! Link-plan construction.
//!
//! Destinations form the outer loop and sources the inner loop; both keep their
//! input order. The only reads are probe calls and the only failure is a missing
//! destination root. Collisions become `Skip` or `ReplaceThenCreate` operations.

use log::Level;
use serde_json::json;

use crate::adapters::FsProbe;
use crate::fs::paths::{join, join_segments, last_segment, link_target, normalize_root};
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{AuditSink, FactsEmitter, StageLogger, TS_ZERO};
use crate::types::ids::{action_id, plan_id};
use crate::types::{
    DestinationDirectory, LinkAction, LinkOperation, LinkSpec, NodeKind, Options,
    OperationGroup, PathStyle, Plan, PlanInput,
};

use super::errors::ApiError;

/// Resolve the directories that receive links, in declared order, without
/// deduplication.
pub(crate) fn destination_directories(
    root: &str,
    replicate: bool,
    subfolders: &[Vec<String>],
    style: PathStyle,
) -> Vec<DestinationDirectory> {
    if !replicate {
        return vec![DestinationDirectory::new(root)];
    }
    subfolders
        .iter()
        .map(|segs| DestinationDirectory::new(join(root, &join_segments(segs.as_slice(), style), style)))
        .collect()
}

fn capture_source(source: &str, probe: &dyn FsProbe, style: PathStyle) -> LinkSpec {
    let source = normalize_root(source, style);
    LinkSpec {
        is_dir: probe.is_dir(&source),
        source_kind: probe.kind(&source),
        source,
    }
}

fn plan_operation(
    dir: &DestinationDirectory,
    spec: &LinkSpec,
    options: Options,
    probe: &dyn FsProbe,
    style: PathStyle,
) -> LinkOperation {
    let target = link_target(dir.as_str(), &spec.source, options.use_relative_path, style);
    let name = last_segment(&spec.source, style).to_string();
    let link_path = join(dir.as_str(), &name, style);
    let existing_kind = probe.kind(&link_path);
    let action = match (existing_kind.exists(), options.overwrite_existing) {
        (false, _) => LinkAction::Create,
        (true, false) => LinkAction::Skip,
        (true, true) => LinkAction::ReplaceThenCreate,
    };
    LinkOperation {
        name,
        target,
        link_path,
        source: spec.source.clone(),
        is_dir: spec.is_dir,
        action,
        existing_kind,
    }
}

/// Build a plan from input and emit per-operation plan facts.
pub(super) fn build<E: FactsEmitter, A: AuditSink>(
    api: &super::Linkyard<E, A>,
    input: PlanInput,
) -> Result<Plan, ApiError> {
    let style = api.policy.path_style;
    let probe: &dyn FsProbe = api.probe.as_ref();

    let root = normalize_root(&input.destination, style);
    if !probe.is_dir(&root) {
        api.audit.log(
            Level::Error,
            &format!("plan: destination {} does not exist", input.destination),
        );
        return Err(ApiError::DestinationNotFound(input.destination));
    }

    let directories = destination_directories(
        &root,
        input.options.replicate_to_fixed_subfolders,
        &api.policy.replica_subfolders,
        style,
    );
    let sources: Vec<LinkSpec> = input
        .sources
        .iter()
        .map(|s| capture_source(s, probe, style))
        .collect();

    let groups: Vec<OperationGroup> = directories
        .iter()
        .map(|dir| OperationGroup {
            directory: dir.clone(),
            operations: sources
                .iter()
                .map(|spec| plan_operation(dir, spec, input.options, probe, style))
                .collect(),
        })
        .collect();

    let plan = Plan {
        style,
        options: input.options,
        sources,
        directories,
        groups,
    };
    emit_plan_facts(api, &plan);
    Ok(plan)
}

fn emit_plan_facts<E: FactsEmitter, A: AuditSink>(api: &super::Linkyard<E, A>, plan: &Plan) {
    let pid = plan_id(plan);
    let tctx = AuditCtx::new(
        &api.facts as &dyn FactsEmitter,
        pid.to_string(),
        TS_ZERO.to_string(),
        AuditMode {
            dry_run: true,
            redact: true,
        },
    );
    let slog = StageLogger::new(&tctx);

    for spec in plan.sources.iter().filter(|s| s.source_kind == NodeKind::Missing) {
        api.audit.log(
            Level::Warn,
            &format!("plan: source {} does not exist; link creation will fail", spec.source),
        );
        slog.plan()
            .path(spec.source.clone())
            .field("source_kind", json!(spec.source_kind.as_str()))
            .emit_warn();
    }

    for (idx, op) in plan.operations().enumerate() {
        slog.plan()
            .action(action_id(&pid, op, idx).to_string())
            .path(op.link_path.clone())
            .merge(&json!({
                "link_action": op.action.as_str(),
                "target": op.target,
                "is_dir": op.is_dir,
                "existing_kind": op.existing_kind.as_str(),
            }))
            .emit_success();
    }

    api.audit.log(
        Level::Info,
        &format!(
            "plan: {} directories, {} create, {} replace, {} skip",
            plan.directories.len(),
            plan.count(LinkAction::Create),
            plan.count(LinkAction::ReplaceThenCreate),
            plan.count(LinkAction::Skip),
        ),
    );
}

/// Render a plan as a YAML sequence of operation rows, for artifacts and
/// golden comparisons.
#[must_use]
pub fn to_yaml(plan: &Plan) -> String {
    use serde_yaml::Value as Y;
    let mut items: Vec<Y> = Vec::new();
    for group in &plan.groups {
        for op in &group.operations {
            let mut map = serde_yaml::Mapping::new();
            let mut put = |k: &str, v: Y| {
                map.insert(Y::String(k.to_string()), v);
            };
            put("directory", Y::String(group.directory.path.clone()));
            put("name", Y::String(op.name.clone()));
            put("action", Y::String(op.action.as_str().to_string()));
            put("target", Y::String(op.target.clone()));
            put("is_dir", Y::Bool(op.is_dir));
            put("existing_kind", Y::String(op.existing_kind.as_str().to_string()));
            items.push(Y::Mapping(map));
        }
    }
    serde_yaml::to_string(&Y::Sequence(items)).unwrap_or_else(|_| "[]\n".to_string())
}
