//! Plan construction for the three canonical request shapes: same drive,
//! different drive, and replication into the agent skill folders.

use linkyard::policy::Policy;
use linkyard::types::{LinkAction, NodeKind, Options, PathStyle, PlanInput};
use linkyard::Linkyard;

use crate::common::{MemProbe, TestAudit, TestEmitter};

fn windows_api(probe: MemProbe) -> Linkyard<TestEmitter, TestAudit> {
    Linkyard::new(
        TestEmitter::default(),
        TestAudit::default(),
        Policy::default().with_path_style(PathStyle::Windows),
    )
    .with_probe(Box::new(probe))
}

#[test]
fn same_drive_directory_source_gets_relative_target() {
    let api = windows_api(MemProbe::default().dir(r"C:\tools\skill-a").dir(r"C:\dest"));
    let input = PlanInput::new(vec![r"C:\tools\skill-a".into()], r"C:\dest\");

    let plan = api.plan(input).unwrap();

    assert_eq!(plan.directories.len(), 1);
    assert_eq!(plan.directories[0].as_str(), r"C:\dest");
    let ops: Vec<_> = plan.operations().collect();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].name, "skill-a");
    assert_eq!(ops[0].target, r"..\tools\skill-a");
    assert_eq!(ops[0].link_path, r"C:\dest\skill-a");
    assert!(ops[0].is_dir);
    assert_eq!(ops[0].action, LinkAction::Create);
    assert_eq!(ops[0].existing_kind, NodeKind::Missing);
}

#[test]
fn different_drive_keeps_absolute_target() {
    let api = windows_api(MemProbe::default().dir(r"C:\tools\skill-a").dir(r"D:\dest"));
    let input = PlanInput::new(vec![r"C:\tools\skill-a".into()], r"D:\dest");

    let plan = api.plan(input).unwrap();

    let op = plan.operations().next().unwrap();
    assert_eq!(op.target, r"C:\tools\skill-a");
    assert_eq!(op.link_path, r"D:\dest\skill-a");
}

#[test]
fn absolute_targets_when_relative_links_disabled() {
    let api = windows_api(MemProbe::default().file(r"C:\tools\run.exe").dir(r"C:\dest"));
    let input = PlanInput::new(vec![r"C:\tools\run.exe".into()], r"C:\dest").with_options(
        Options {
            use_relative_path: false,
            ..Options::default()
        },
    );

    let plan = api.plan(input).unwrap();

    let op = plan.operations().next().unwrap();
    assert_eq!(op.target, r"C:\tools\run.exe");
    assert!(!op.is_dir);
}

#[test]
fn replicate_fans_out_into_skill_folders() {
    let api = windows_api(MemProbe::default().dir(r"C:\tools\skill-a").dir(r"C:\proj"));
    let input = PlanInput::new(vec![r"C:\tools\skill-a".into()], r"C:\proj").with_options(
        Options {
            replicate_to_fixed_subfolders: true,
            ..Options::default()
        },
    );

    let plan = api.plan(input).unwrap();

    let dirs: Vec<&str> = plan.directories.iter().map(|d| d.as_str()).collect();
    assert_eq!(
        dirs,
        vec![
            r"C:\proj\.agent\skills",
            r"C:\proj\.agents\skills",
            r"C:\proj\.claude\skills",
        ]
    );
    assert_eq!(plan.groups.len(), 3);
    for group in &plan.groups {
        assert_eq!(group.operations.len(), 1);
        let op = &group.operations[0];
        assert_eq!(op.action, LinkAction::Create);
        assert_eq!(op.target, r"..\..\..\tools\skill-a");
        assert_eq!(
            op.link_path,
            format!(r"{}\skill-a", group.directory.as_str())
        );
    }
}

#[test]
fn destinations_outer_sources_inner() {
    let api = windows_api(
        MemProbe::default()
            .dir(r"C:\proj")
            .dir(r"C:\s\one")
            .file(r"C:\s\two.md"),
    );
    let input = PlanInput::new(vec![r"C:\s\one".into(), r"C:\s\two.md".into()], r"C:\proj")
        .with_options(Options {
            replicate_to_fixed_subfolders: true,
            ..Options::default()
        });

    let plan = api.plan(input).unwrap();

    let order: Vec<&str> = plan.operations().map(|op| op.link_path.as_str()).collect();
    assert_eq!(
        order,
        vec![
            r"C:\proj\.agent\skills\one",
            r"C:\proj\.agent\skills\two.md",
            r"C:\proj\.agents\skills\one",
            r"C:\proj\.agents\skills\two.md",
            r"C:\proj\.claude\skills\one",
            r"C:\proj\.claude\skills\two.md",
        ]
    );
}

#[test]
fn custom_replica_list_keeps_duplicates() {
    let api = Linkyard::new(
        TestEmitter::default(),
        TestAudit::default(),
        Policy::default()
            .with_path_style(PathStyle::Posix)
            .with_replica_subfolders(["links", "links"]),
    )
    .with_probe(Box::new(MemProbe::default().dir("/srv").dir("/opt/tool")));
    let input = PlanInput::new(vec!["/opt/tool".into()], "/srv").with_options(Options {
        replicate_to_fixed_subfolders: true,
        ..Options::default()
    });

    let plan = api.plan(input).unwrap();

    assert_eq!(plan.directories.len(), 2);
    assert_eq!(plan.directories[0], plan.directories[1]);
    assert_eq!(plan.operations().count(), 2);
    assert!(plan
        .operations()
        .all(|op| op.target == "../../opt/tool" && op.link_path == "/srv/links/tool"));
}

#[test]
fn posix_root_destination() {
    let api = Linkyard::new(
        TestEmitter::default(),
        TestAudit::default(),
        Policy::default().with_path_style(PathStyle::Posix),
    )
    .with_probe(Box::new(MemProbe::default().dir("/").dir("/opt/skill")));

    let plan = api
        .plan(PlanInput::new(vec!["/opt/skill/".into()], "/"))
        .unwrap();

    assert_eq!(plan.directories[0].as_str(), "/");
    let op = plan.operations().next().unwrap();
    assert_eq!(op.name, "skill");
    assert_eq!(op.target, "opt/skill");
    assert_eq!(op.link_path, "/skill");
}

#[test]
fn empty_source_list_yields_directories_only() {
    let api = windows_api(MemProbe::default().dir(r"C:\dest"));

    let plan = api.plan(PlanInput::new(vec![], r"C:\dest")).unwrap();

    assert_eq!(plan.directories.len(), 1);
    assert_eq!(plan.operations().count(), 0);
    let script = api.script_for(&plan);
    assert_eq!(script.link_count(), 0);
}
