//! Tree command integration tests

mod common;

use predicates::prelude::*;

fn blog_workspace() -> common::TestWorkspace {
    let workspace = common::TestWorkspace::new();
    workspace.write_doc("index.mdx", "Home", "");
    workspace.write_doc("zeta.mdx", "Zeta", "");
    workspace.write_doc("alpha.mdx", "Alpha", "");
    workspace.write_doc("guides/index.mdx", "Guides", "");
    workspace.write_doc("guides/setup.md", "Setup", "");
    workspace
}

#[test]
fn test_tree_default_order() {
    let workspace = blog_workspace();

    common::docsource_cmd_for_workspace(&workspace.path)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Docs\n"))
        .stdout(predicate::str::contains(
            "  Home  /blogs\n  Alpha  /blogs/alpha\n  Guides/  /blogs/guides\n    Setup  /blogs/guides/setup\n  Zeta  /blogs/zeta\n",
        ));
}

#[test]
fn test_tree_follows_meta_pages() {
    let workspace = blog_workspace();
    workspace.write_meta(
        "meta.json",
        r#"{"title": "Blog", "pages": ["zeta", "---Reading---", "...", "[GitHub](https://github.com)"]}"#,
    );

    common::docsource_cmd_for_workspace(&workspace.path)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Blog\n"))
        .stdout(predicate::str::contains(
            "  Zeta  /blogs/zeta\n  --- Reading ---\n  Home  /blogs\n  Alpha  /blogs/alpha\n",
        ))
        .stdout(predicate::str::contains("GitHub  https://github.com (external)"));
}

#[test]
fn test_tree_yaml_meta_names_folder() {
    let workspace = blog_workspace();
    workspace.write_meta("guides/meta.yaml", "title: Handbook\n");

    common::docsource_cmd_for_workspace(&workspace.path)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("  Handbook/  /blogs/guides\n"));
}

#[test]
fn test_tree_json() {
    let workspace = blog_workspace();

    let output = common::docsource_cmd_for_workspace(&workspace.path)
        .args(["tree", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["name"], "Docs");
    let children = tree["children"].as_array().unwrap();
    assert_eq!(children[0]["type"], "page");
    assert_eq!(children[0]["url"], "/blogs");
    assert_eq!(children[2]["type"], "folder");
    assert_eq!(children[2]["index"]["url"], "/blogs/guides");
    assert_eq!(children[2]["children"][0]["name"], "Setup");
}

#[test]
fn test_tree_invalid_meta_fails() {
    let workspace = blog_workspace();
    workspace.write_meta("meta.json", "{ not json");

    common::docsource_cmd_for_workspace(&workspace.path)
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid meta file"));
}
