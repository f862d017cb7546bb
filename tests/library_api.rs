mod common;

use buildpin::{ResolveOptions, TaskOutcome, Version};
use common::TestContext;
use std::fs;

#[test]
fn layout_at_relocates_every_module() {
    let ctx = TestContext::new();
    ctx.write_pinned_project();

    let layout = buildpin::layout_at(ctx.project_dir()).expect("layout failed");

    assert_eq!(layout.root_output_dir(), ctx.output_root());
    for module in &layout.modules {
        assert!(module.is_relocated());
        assert_eq!(module.output_dir(), ctx.output_root().join(module.name().as_str()));
    }
}

#[test]
fn resolve_at_pins_transitive_requests() {
    let ctx = TestContext::new();
    ctx.write_pinned_project();

    let report = buildpin::resolve_at(ctx.project_dir(), ResolveOptions::default())
        .expect("resolve failed");

    let forced = Version::parse("1.12.0").unwrap();
    for module in &report.modules {
        for dep in module.dependencies.iter().filter(|d| d.coordinate.group() == "androidx.core") {
            assert_eq!(dep.selected, forced);
        }
    }
    assert!(report.warnings.is_empty());
}

#[test]
fn forcing_an_unused_coordinate_is_a_no_op() {
    let ctx = TestContext::new();
    ctx.write_pinned_project();
    ctx.publish("com.example:logging:2.0.0", &[]);
    let content = fs::read_to_string(ctx.project_dir().join("buildpin.toml")).unwrap();
    ctx.write_project(&format!(
        "{content}\n[[modules]]\nname = \"logging\"\ndependencies = [\"com.example:logging:2.0.0\"]\n"
    ));

    let report = buildpin::resolve_at(
        ctx.project_dir(),
        ResolveOptions { module: Some("logging".to_string()) },
    )
    .expect("resolve failed");

    let deps = &report.modules[0].dependencies;
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].coordinate.to_string(), "com.example:logging");
    assert!(!deps[0].forced);
}

#[test]
fn clean_at_is_idempotent() {
    let ctx = TestContext::new();
    ctx.write_pinned_project();
    fs::create_dir_all(ctx.output_root().join("app/intermediates")).unwrap();
    fs::write(ctx.output_root().join("app/intermediates/classes.dex"), "dex").unwrap();

    let first = buildpin::clean_at(ctx.project_dir()).expect("first clean failed");
    let second = buildpin::clean_at(ctx.project_dir()).expect("second clean failed");

    assert_eq!(first, TaskOutcome::Cleaned { path: ctx.output_root(), removed: true });
    assert_eq!(second, TaskOutcome::Cleaned { path: ctx.output_root(), removed: false });
    assert!(!ctx.output_root().exists());
}

#[test]
fn list_tasks_at_registers_only_clean() {
    let ctx = TestContext::new();
    ctx.write_pinned_project();

    let tasks = buildpin::list_tasks_at(ctx.project_dir()).expect("list failed");

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "clean");
}
