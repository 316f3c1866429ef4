use std::fs;
use std::path::Path;
use vaultsync::config::SyncConfig;
use vaultsync::sync;

const NOTE: &str = "---\n\
description: \"Intro post\"\n\
date created: Friday, August 9 2024, 1:06:22 pm\n\
---\n\
\n\
Hello #world and see [[Second Post|the next one]].\n";

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup() -> (tempfile::TempDir, SyncConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = SyncConfig::new(dir.path().join("vault"), dir.path().join("content"));
    (dir, config)
}

#[test]
fn test_converts_notes_into_mirrored_tree() {
    let (_dir, config) = setup();
    let config = config.with_categories(["blog"]);
    write(&config.obsidian_vault_path.join("blog/First Post.md"), NOTE);

    let report = sync::run(&config).unwrap();

    let target = config.astro_content_path.join("blog/First Post.md");
    assert_eq!(report.written, vec![target.clone()]);
    let out = fs::read_to_string(target).unwrap();
    assert_eq!(
        out,
        "---\n\
title: First Post\n\
description: Intro post\n\
date: 2024-08-09\n\
tags: [\"world\"]\n\
---\n\
\n\
Hello  and see [Second Post](./Second Post)."
    );
}

#[test]
fn test_missing_category_is_skipped() {
    let (_dir, config) = setup();
    let config = config.with_categories(["missing", "videos"]);
    write(
        &config.obsidian_vault_path.join("videos/Clip.md"),
        "---\nid: abc123\n---\nwatch",
    );

    let report = sync::run(&config).unwrap();

    assert_eq!(report.missing_categories, vec!["missing"]);
    assert!(!config.astro_content_path.join("missing").exists());
    let out = fs::read_to_string(config.astro_content_path.join("videos/Clip.md")).unwrap();
    assert!(out.contains("videoId: abc123\n"));
    assert!(out.contains("tags: [\"videos\"]\n"));
}

#[test]
fn test_notes_without_front_matter_are_not_written() {
    let (_dir, config) = setup();
    let config = config.with_categories(["blog"]);
    let source = config.obsidian_vault_path.join("blog/Plain.md");
    write(&source, "# Plain note\n\nno front matter");

    let report = sync::run(&config).unwrap();

    assert_eq!(report.skipped, vec![source]);
    assert!(report.written.is_empty());
    assert!(!config.astro_content_path.join("blog/Plain.md").exists());
}

#[test]
fn test_excluded_and_foreign_files_are_ignored() {
    let (_dir, config) = setup();
    let config = config.with_categories(["blog"]).with_excludes(["Template"]);
    write(&config.obsidian_vault_path.join("blog/Post Template.md"), NOTE);
    write(&config.obsidian_vault_path.join("blog/diagram.png"), NOTE);
    write(&config.obsidian_vault_path.join("blog/Real.md"), NOTE);

    let report = sync::run(&config).unwrap();

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.excluded.len(), 1);
    let blog = config.astro_content_path.join("blog");
    assert!(blog.join("Real.md").exists());
    assert!(!blog.join("Post Template.md").exists());
    assert!(!blog.join("diagram.png").exists());
}

#[test]
fn test_nested_folders_are_not_descended() {
    let (_dir, config) = setup();
    let config = config.with_categories(["blog"]);
    write(&config.obsidian_vault_path.join("blog/sub/Deep.md"), NOTE);

    let report = sync::run(&config).unwrap();

    assert!(report.written.is_empty());
    assert!(!config.astro_content_path.join("blog/sub").exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let (_dir, config) = setup();
    let config = config.with_categories(["blog"]);
    write(&config.obsidian_vault_path.join("blog/Post.md"), NOTE);
    let target = config.astro_content_path.join("blog/Post.md");
    write(&target, "stale");

    sync::run(&config).unwrap();

    assert!(fs::read_to_string(target).unwrap().starts_with("---\ntitle: Post\n"));
}

#[test]
fn test_category_tag_from_settings() {
    let (_dir, mut config) = setup();
    config.tag_category = true;
    let config = config.with_categories(["notes"]);
    write(
        &config.obsidian_vault_path.join("notes/A.md"),
        "---\ntags: x\n---\nbody",
    );

    sync::run(&config).unwrap();

    let out = fs::read_to_string(config.astro_content_path.join("notes/A.md")).unwrap();
    assert!(out.contains("tags: [\"x\",\"notes\"]\n"));
}

#[test]
fn test_non_utf8_note_does_not_stop_later_categories() {
    let (_dir, config) = setup();
    let config = config.with_categories(["blog", "videos"]);
    let latin = config.obsidian_vault_path.join("blog/Latin.md");
    fs::create_dir_all(latin.parent().unwrap()).unwrap();
    fs::write(&latin, b"---\ndescription: caf\xe9\n---\nbody").unwrap();
    write(
        &config.obsidian_vault_path.join("videos/Clip.md"),
        "---\nid: abc123\n---\nwatch",
    );

    let report = sync::run(&config).unwrap();

    assert_eq!(report.written.len(), 2);
    let out = fs::read_to_string(config.astro_content_path.join("blog/Latin.md")).unwrap();
    assert!(out.contains("description: caf\u{FFFD}\n"));
    assert!(config.astro_content_path.join("videos/Clip.md").exists());
}
