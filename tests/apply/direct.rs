//! End-to-end runs against a temporary tree with the in-process executor.

use std::fs;
use std::path::Path;

use linkyard::adapters::DirectExecutor;
use linkyard::policy::Policy;
use linkyard::types::{plan_id, Options, PlanInput};
use linkyard::Linkyard;

use crate::common::{with_temp_root, TestAudit, TestEmitter};

fn s(p: &Path) -> String {
    p.display().to_string()
}

/// `skills/a/` (directory), `skills/b.md` (file) and an empty `proj/`.
fn layout(root: &Path) {
    fs::create_dir_all(root.join("skills/a")).unwrap();
    fs::write(root.join("skills/a/SKILL.md"), b"# a").unwrap();
    fs::write(root.join("skills/b.md"), b"# b").unwrap();
    fs::create_dir_all(root.join("proj")).unwrap();
}

fn api(root: &Path, facts: TestEmitter) -> Linkyard<TestEmitter, TestAudit> {
    Linkyard::new(
        facts,
        TestAudit::default(),
        Policy::default().with_artifact_dir(root),
    )
}

fn request(root: &Path, options: Options) -> PlanInput {
    PlanInput::new(
        vec![s(&root.join("skills/a")), s(&root.join("skills/b.md"))],
        s(&root.join("proj")),
    )
    .with_options(options)
}

#[test]
fn creates_relative_links_that_resolve() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    let api = api(root, TestEmitter::default());

    let report = api
        .create_symlinks(request(root, Options::default()), &DirectExecutor::new(root))
        .unwrap();

    assert_eq!(report.created, 2);
    assert_eq!(report.exit_status, 0);
    assert!(report.artifact.is_none());
    let a = root.join("proj/a");
    assert!(fs::symlink_metadata(&a).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&a).unwrap(), Path::new("../skills/a"));
    assert_eq!(fs::read_to_string(a.join("SKILL.md")).unwrap(), "# a");
    assert_eq!(
        fs::read_to_string(root.join("proj/b.md")).unwrap(),
        "# b"
    );
}

#[test]
fn absolute_links_store_the_source_path() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    let api = api(root, TestEmitter::default());
    let options = Options {
        use_relative_path: false,
        ..Options::default()
    };

    api.create_symlinks(request(root, options), &DirectExecutor::new(root))
        .unwrap();

    assert_eq!(
        fs::read_link(root.join("proj/a")).unwrap(),
        root.join("skills/a")
    );
}

#[test]
fn replicate_creates_missing_subfolders() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    let api = api(root, TestEmitter::default());
    let options = Options {
        replicate_to_fixed_subfolders: true,
        ..Options::default()
    };

    let report = api
        .create_symlinks(request(root, options), &DirectExecutor::new(root))
        .unwrap();

    assert_eq!(report.created, 6);
    for sub in [".agent/skills", ".agents/skills", ".claude/skills"] {
        let link = root.join("proj").join(sub).join("a");
        assert_eq!(
            fs::read_link(&link).unwrap(),
            Path::new("../../../skills/a"),
            "{sub}"
        );
        assert!(link.join("SKILL.md").is_file(), "{sub}");
    }
}

#[test]
fn overwrite_replaces_directories_files_and_dangling_links() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    fs::create_dir_all(root.join("proj/a/nested")).unwrap();
    fs::write(root.join("proj/a/nested/old.txt"), b"old").unwrap();
    fs::write(root.join("proj/b.md"), b"old").unwrap();
    fs::create_dir_all(root.join("skills/c")).unwrap();
    std::os::unix::fs::symlink("nowhere", root.join("proj/c")).unwrap();
    let api = api(root, TestEmitter::default());
    let mut input = request(root, Options {
        overwrite_existing: true,
        ..Options::default()
    });
    input.sources.push(s(&root.join("skills/c")));

    let report = api.create_symlinks(input, &DirectExecutor::new(root)).unwrap();

    assert_eq!(report.replaced, 3);
    assert_eq!(report.created, 0);
    assert_eq!(fs::read_link(root.join("proj/a")).unwrap(), Path::new("../skills/a"));
    assert_eq!(fs::read_link(root.join("proj/b.md")).unwrap(), Path::new("../skills/b.md"));
    assert_eq!(fs::read_link(root.join("proj/c")).unwrap(), Path::new("../skills/c"));
    // replacing a link never touches the tree it pointed into
    assert!(root.join("skills/a/SKILL.md").is_file());
}

#[test]
fn skip_leaves_occupied_names_untouched() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    fs::write(root.join("proj/a"), b"keep").unwrap();
    let api = api(root, TestEmitter::default());

    let report = api
        .create_symlinks(request(root, Options::default()), &DirectExecutor::new(root))
        .unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.created, 1);
    assert_eq!(fs::read_to_string(root.join("proj/a")).unwrap(), "keep");
    assert!(fs::symlink_metadata(root.join("proj/b.md"))
        .unwrap()
        .file_type()
        .is_symlink());
}

#[test]
fn retained_log_is_reported_as_artifact() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    let api = api(root, TestEmitter::default());
    let options = Options {
        retain_operation_log: true,
        ..Options::default()
    };

    let report = api
        .create_symlinks(request(root, options), &DirectExecutor::new(root))
        .unwrap();

    let log = report.artifact.expect("retained log");
    assert!(log.starts_with(root));
    assert_eq!(log.extension().and_then(|e| e.to_str()), Some("log"));
    let text = fs::read_to_string(&log).unwrap();
    assert_eq!(text.lines().count(), report.steps);
    assert!(text.contains(r#""op":"symlink""#), "{text}");
}

#[test]
fn apply_emits_attempt_and_result_facts() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    let facts = TestEmitter::default();
    let api = api(root, facts.clone());

    let plan = api.plan(request(root, Options::default())).unwrap();
    let report = api.apply(&plan, &DirectExecutor::new(root)).unwrap();

    let pid = plan_id(&plan);
    assert_eq!(report.plan_uuid, Some(pid));

    let attempts = facts.fields_of("apply.attempt", "success");
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0]["links"], 2);
    assert_eq!(attempts[0]["steps"], report.steps);
    assert_eq!(attempts[0]["plan_id"], pid.to_string().as_str());
    assert_eq!(attempts[0]["dry_run"], false);

    let results = facts.fields_of("apply.result", "success");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["created"], 2);
    assert_eq!(results[0]["exit_status"], 0);
    assert!(facts.fields_of("apply.result", "failure").is_empty());
}

#[test]
fn symlinked_destination_receives_links() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    fs::create_dir_all(root.join("real")).unwrap();
    std::os::unix::fs::symlink("real", root.join("dest")).unwrap();
    let api = api(root, TestEmitter::default());
    let input = PlanInput::new(vec![s(&root.join("skills/a"))], s(&root.join("dest")));

    let plan = api.plan(input).unwrap();
    let report = api.apply(&plan, &DirectExecutor::new(root)).unwrap();

    assert_eq!(report.created, 1);
    let link = root.join("real/a");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), Path::new("../skills/a"));
    assert!(root.join("dest/a/SKILL.md").is_file());
}

#[test]
fn symlinked_replica_leaf_receives_links() {
    let td = with_temp_root();
    let root = td.path();
    layout(root);
    fs::create_dir_all(root.join("shared/skills")).unwrap();
    fs::create_dir_all(root.join("proj/.claude")).unwrap();
    std::os::unix::fs::symlink("../../shared/skills", root.join("proj/.claude/skills")).unwrap();
    let api = api(root, TestEmitter::default());
    let options = Options {
        replicate_to_fixed_subfolders: true,
        ..Options::default()
    };

    let report = api
        .create_symlinks(request(root, options), &DirectExecutor::new(root))
        .unwrap();

    assert_eq!(report.created, 6);
    let link = root.join("shared/skills/a");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), Path::new("../../../skills/a"));
    // the leaf itself stays a symlink
    assert!(fs::symlink_metadata(root.join("proj/.claude/skills"))
        .unwrap()
        .file_type()
        .is_symlink());
}
