//! Shared crate-wide constants for linkyard.
//!
//! Centralizes magic values and default labels used across modules.

/// Sub-paths used by replicate mode, as segment lists so they can be joined with
/// either separator style. Order is significant: it is the order replica
/// directories appear in a plan.
pub const AGENT_SKILL_SUBFOLDERS: &[&[&str]] = &[
    &[".agent", "skills"],
    &[".agents", "skills"],
    &[".claude", "skills"],
];

/// Prefix for executor artifact names: `<prefix>_<unix-nanos>.<ext>`.
pub const DEFAULT_ARTIFACT_PREFIX: &str = "linkyard";

/// UUIDv5 namespace tag for deterministic plan/action IDs.
pub const NS_TAG: &str = "https://linkyard.invalid/plan";

/// Exit status reported when an executor cannot even start its interpreter.
pub const EXIT_LAUNCH_FAILED: i32 = -1;

/// Exit status reported when the interpreter was killed by a signal.
pub const EXIT_TERMINATED: i32 = -2;
