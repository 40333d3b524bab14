//! Checks that every icon class and static asset the views reference is
//! actually shipped with the site.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

fn root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn read(rel: &str) -> String {
    fs::read_to_string(root().join(rel)).unwrap_or_else(|e| panic!("reading {rel}: {e}"))
}

fn view_sources() -> Vec<(PathBuf, String)> {
    let mut files = vec![root().join("src/app.rs")];
    for entry in fs::read_dir(root().join("src/app")).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
        .into_iter()
        .map(|path| {
            let text = fs::read_to_string(&path).unwrap();
            (path, text)
        })
        .collect()
}

/// Every `{prefix}name` token in `text`.
fn class_tokens(text: &str, prefix: &str) -> BTreeSet<String> {
    text.match_indices(prefix)
        .filter(|(at, _)| {
            // skip matches inside a longer identifier
            text[..*at]
                .chars()
                .next_back()
                .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        })
        .map(|(at, _)| {
            text[at..]
                .chars()
                .take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
                .collect::<String>()
        })
        .filter(|token| token.len() > prefix.len())
        .collect()
}

fn quoted_after<'a>(text: &'a str, marker: &str) -> &'a str {
    let start = text.find(marker).unwrap_or_else(|| panic!("missing {marker}")) + marker.len();
    let rest = &text[start..];
    let open = rest.find('"').unwrap() + 1;
    let len = rest[open..].find('"').unwrap();
    &rest[open..open + len]
}

#[test]
fn extra_icons_are_defined_in_stylesheet() {
    let css = read("input.css");
    let mut used = BTreeSet::new();
    for (_, text) in view_sources() {
        used.extend(class_tokens(&text, "extra-"));
    }
    assert!(used.contains("extra-menu"));
    assert!(used.contains("extra-close"));
    assert!(used.contains("extra-chevron-down"));

    let missing: Vec<_> = used
        .iter()
        .filter(|class| !css.contains(&format!(".{class} {{")))
        .collect();
    assert!(missing.is_empty(), "icon classes without styles: {missing:?}");
}

#[test]
fn extra_icons_have_a_mask_image() {
    let css = read("input.css");
    for token in class_tokens(&css, "extra-") {
        let rule = quoted_after(&css, &format!(".{token} {{"));
        assert!(rule.starts_with("data:image/svg+xml,"), "{token}: {rule}");
        assert!(rule.ends_with("%3C/svg%3E"), "{token}: {rule}");
    }
}

#[test]
fn devicon_stylesheet_is_linked_when_used() {
    let used = view_sources()
        .iter()
        .any(|(_, text)| !class_tokens(text, "devicon-").is_empty());
    assert!(used);
    let shell = read("src/app.rs");
    assert!(shell.contains("devicon.min.css"));
}

#[test]
fn referenced_assets_are_shipped() {
    let content = read("src/app/content.rs");
    let shell = read("src/app.rs");
    let assets = [
        quoted_after(&content, "AVATAR_SRC: &str ="),
        quoted_after(&shell, "type=\"image/svg+xml\" href="),
    ];
    for asset in assets {
        let path = root().join("public").join(asset.trim_start_matches('/'));
        assert!(path.is_file(), "{} is not in public/", asset);
    }
}
