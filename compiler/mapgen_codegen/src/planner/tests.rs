use super::*;
use pretty_assertions::assert_eq;

/// Render ops as short strings: `+a.b` for a declaration, `x -> y` for an
/// assignment.
fn describe(ops: &[Op<'_>]) -> Vec<String> {
    ops.iter()
        .map(|op| match op {
            Op::Declare(path) => format!("+{path}"),
            Op::Assign { source, target } => format!("{source} -> {target}"),
        })
        .collect()
}

fn mappings(pairs: &[(&str, &str)]) -> Vec<Mapping> {
    pairs
        .iter()
        .map(|(source, target)| Mapping::new(*source, *target))
        .collect()
}

#[test]
fn empty_list_plans_nothing() {
    assert!(plan(&[]).is_empty());
}

#[test]
fn shared_container_declared_once() {
    let list = mappings(&[
        ("root.user.name", "root.profile.fullName"),
        ("root.user.age", "root.profile.age"),
    ]);
    assert_eq!(
        describe(&plan(&list)),
        vec![
            "+profile",
            "user.name -> profile.fullName",
            "user.age -> profile.age",
        ]
    );
}

#[test]
fn single_segment_target_needs_no_declaration() {
    let list = mappings(&[("root.items.0.id", "root.firstItemId")]);
    let ops = plan(&list);
    assert_eq!(describe(&ops), vec!["items.0.id -> firstItemId"]);

    let Op::Assign { source, .. } = &ops[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(
        source.steps(),
        &[
            mapgen_ir::Step::Field("items"),
            mapgen_ir::Step::Index("0"),
            mapgen_ir::Step::Field("id"),
        ]
    );
}

#[test]
fn ancestors_declared_root_to_leaf() {
    let list = mappings(&[("root.v", "root.a.b.c.d")]);
    assert_eq!(
        describe(&plan(&list)),
        vec!["+a", "+a.b", "+a.b.c", "v -> a.b.c.d"]
    );
}

#[test]
fn later_mapping_declares_only_new_ancestors() {
    let list = mappings(&[
        ("root.x", "root.a.b.c"),
        ("root.y", "root.a.d.e"),
        ("root.z", "root.a.b.f"),
    ]);
    assert_eq!(
        describe(&plan(&list)),
        vec![
            "+a",
            "+a.b",
            "x -> a.b.c",
            "+a.d",
            "y -> a.d.e",
            "z -> a.b.f",
        ]
    );
}

#[test]
fn reordering_moves_shared_declaration() {
    let list = mappings(&[("root.n", "root.top"), ("root.x", "root.p.q")]);
    assert_eq!(
        describe(&plan(&list)),
        vec!["n -> top", "+p", "x -> p.q"]
    );

    let reversed = mappings(&[("root.x", "root.p.q"), ("root.n", "root.top")]);
    assert_eq!(
        describe(&plan(&reversed)),
        vec!["+p", "x -> p.q", "n -> top"]
    );
}

#[test]
fn indexed_ancestors_are_declared() {
    let list = mappings(&[("root.a", "root.list.0.name")]);
    assert_eq!(
        describe(&plan(&list)),
        vec!["+list", "+list.0", "a -> list.0.name"]
    );
}

#[test]
fn root_marker_does_not_split_containers() {
    // With and without the marker the container key is the same.
    let list = mappings(&[("root.a", "root.p.x"), ("b", "p.y")]);
    assert_eq!(
        describe(&plan(&list)),
        vec!["+p", "a -> p.x", "b -> p.y"]
    );
}

#[test]
fn malformed_paths_pass_through() {
    let list = mappings(&[("root.a..b", "root.x..y")]);
    assert_eq!(
        describe(&plan(&list)),
        vec!["+x", "+x.", "a..b -> x..y"]
    );
}

#[test]
fn is_declare_distinguishes_ops() {
    let list = mappings(&[("root.a", "root.p.x")]);
    let ops = plan(&list);
    assert!(ops[0].is_declare());
    assert!(!ops[1].is_declare());
}
