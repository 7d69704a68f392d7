//! Show command integration tests

mod common;

use predicates::prelude::*;

fn blog_workspace() -> common::TestWorkspace {
    let workspace = common::TestWorkspace::new();
    workspace.write_doc("index.mdx", "Home", "Welcome\n");
    workspace.write_file(
        "content/blogs/guides/setup.md",
        "---\ntitle: Setup\ndescription: Get going\n---\n\n## Install\n\n### From source\n\n```sh\n## not a heading\n```\n",
    );
    workspace
}

#[test]
fn test_show_by_slugs() {
    let workspace = blog_workspace();

    common::docsource_cmd_for_workspace(&workspace.path)
        .args(["show", "guides", "setup"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Setup\n  Get going\n"))
        .stdout(predicate::str::contains("URL: /blogs/guides/setup"))
        .stdout(predicate::str::contains("Path: guides/setup.md"))
        .stdout(predicate::str::contains("    Install #install\n"))
        .stdout(predicate::str::contains("      From source #from-source\n"))
        .stdout(predicate::str::contains("not a heading").not());
}

#[test]
fn test_show_without_slugs_is_index() {
    let workspace = blog_workspace();

    common::docsource_cmd_for_workspace(&workspace.path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Home\n"))
        .stdout(predicate::str::contains("URL: /blogs\n"));
}

#[test]
fn test_show_by_href_with_fragment() {
    let workspace = blog_workspace();

    common::docsource_cmd_for_workspace(&workspace.path)
        .args(["show", "--href", "/blogs/guides/setup#install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: guides/setup.md"))
        .stdout(predicate::str::contains("Anchor: #install"));
}

#[test]
fn test_show_by_href_trailing_slash() {
    let workspace = blog_workspace();

    common::docsource_cmd_for_workspace(&workspace.path)
        .args(["show", "--href", "/blogs/guides/setup/"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Setup\n"));
}

#[test]
fn test_show_missing_slugs() {
    let workspace = blog_workspace();

    common::docsource_cmd_for_workspace(&workspace.path)
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page not found: [missing]"));
}

#[test]
fn test_show_missing_href() {
    let workspace = blog_workspace();

    common::docsource_cmd_for_workspace(&workspace.path)
        .args(["show", "--href", "/docs/guides/setup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page not found: /docs/guides/setup"));
}

#[test]
fn test_show_json_omits_body() {
    let workspace = blog_workspace();

    let output = common::docsource_cmd_for_workspace(&workspace.path)
        .args(["show", "guides", "setup", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["url"], "/blogs/guides/setup");
    assert_eq!(page["data"]["description"], "Get going");
    assert!(page.get("body").is_none());
    assert_eq!(page["toc"].as_array().unwrap().len(), 2);
}
