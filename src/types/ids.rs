//! Deterministic UUIDv5 identifiers for plans and link operations.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that
//! `plan_id` and `action_id` are reproducible across runs for the same
//! ordered operation sequence.
use std::fmt::Write;
use uuid::Uuid;

use super::plan::{LinkOperation, Plan};
use crate::constants::NS_TAG;

fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Stable, human-readable serialization used as UUIDv5 input.
fn serialize_operation(op: &LinkOperation) -> String {
    format!(
        "{}:{}->{}{}",
        op.action.as_str(),
        op.link_path,
        op.target,
        if op.is_dir { "/d" } else { "" }
    )
}

/// Compute a deterministic UUIDv5 for a plan by serializing directories and
/// operations in order.
#[must_use]
pub fn plan_id(plan: &Plan) -> Uuid {
    let mut s = String::new();
    for d in &plan.directories {
        let _ = writeln!(s, "D:{}", d.as_str());
    }
    for op in plan.operations() {
        s.push_str(&serialize_operation(op));
        s.push('\n');
    }
    Uuid::new_v5(&namespace(), s.as_bytes())
}

/// Compute a deterministic UUIDv5 for an operation as a function of the plan ID,
/// its serialized form and its position in the plan.
#[must_use]
pub fn action_id(plan_id: &Uuid, op: &LinkOperation, idx: usize) -> Uuid {
    let mut s = serialize_operation(op);
    let _ = write!(s, "#{idx}");
    Uuid::new_v5(plan_id, s.as_bytes())
}
