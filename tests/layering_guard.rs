//! Layering guardrails to keep the metadata model free of the parser stack.
//!
//! `beanprobe_core` is shared by the proc-macros, the scanner and the runtime introspector, so it must stay a
//! plain-data crate. This test scans its `Cargo.toml` and fails if `syn`, `quote` or `proc-macro2` appear in
//! `[dependencies]`.

const PARSER_CRATES: &[&str] = &["syn", "quote", "proc-macro2"];

fn dependency_names(manifest: &str) -> Vec<&str> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim());
        }
    }
    names
}

#[test]
fn core_does_not_depend_on_parser_crates() {
    let manifest = include_str!("../crates/beanprobe_core/Cargo.toml");
    for name in dependency_names(manifest) {
        assert!(
            !PARSER_CRATES.contains(&name),
            "`{name}` must not appear in beanprobe_core's [dependencies]; parse in beanprobe_syntax instead"
        );
    }
}

#[test]
fn runtime_crate_does_not_depend_on_syn_directly() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        !dependency_names(manifest).contains(&"syn"),
        "the root crate reaches syn only through beanprobe_syntax and beanprobe_derive"
    );
}
