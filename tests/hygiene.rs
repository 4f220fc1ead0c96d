//! Source checks for page code that must never crash, leak or lose errors.
//!
//! Each rule caps how often a pattern may appear in non-test sources under
//! `src/`. Most caps are zero; lowering one is always welcome, raising one
//! needs a reason in the review.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

/// Calls that take the whole wasm module down with them.
const CRASHES: [Rule; 4] = [
    Rule { pattern: ".unwrap()", max: 0, hint: "propagate with ? or log and continue" },
    Rule { pattern: ".expect(", max: 0, hint: "propagate with ? or log and continue" },
    Rule { pattern: "panic!(", max: 0, hint: "return an FxError instead" },
    Rule { pattern: "unreachable!(", max: 0, hint: "make the state unrepresentable" },
];

const STUBS: [Rule; 2] = [
    Rule { pattern: "todo!(", max: 0, hint: "finish the behaviour before merging" },
    Rule { pattern: "unimplemented!(", max: 0, hint: "finish the behaviour before merging" },
];

/// Ways of dropping an error without looking at it.
const DISCARDS: [Rule; 2] = [
    Rule { pattern: "let _ =", max: 0, hint: "report or log the error" },
    Rule { pattern: ".ok()", max: 0, hint: "report or log the error" },
];

/// Timer closures handed to the browser for the page lifetime.
const FORGET: Rule = Rule { pattern: ".forget()", max: 6, hint: "own the closure or register it on a ListenerSet" };

const DEAD_CODE: Rule = Rule { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the unused item" };

fn sources(root: &Path) -> Vec<(PathBuf, String)> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).expect("readable source dir").flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs")
                && !path.to_string_lossy().ends_with("_test.rs")
            {
                let text = fs::read_to_string(&path).expect("readable source file");
                found.push((path, text));
            }
        }
    }
    found.sort();
    found
}

/// Lines matching `pattern`, as `path:line` locations.
fn occurrences(files: &[(PathBuf, String)], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|(path, text)| {
            text.lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(n, _)| format!("{}:{}", path.display(), n + 1))
        })
        .collect()
}

fn enforce(rules: &[Rule]) {
    let files = sources(Path::new("src"));
    for rule in rules {
        let hits = occurrences(&files, rule.pattern);
        assert!(
            hits.len() <= rule.max,
            "`{}` appears {} times (cap {}); {}.\n  {}",
            rule.pattern,
            hits.len(),
            rule.max,
            rule.hint,
            hits.join("\n  ")
        );
    }
}

#[test]
fn no_crashing_calls() {
    enforce(&CRASHES);
}

#[test]
fn no_stubs() {
    enforce(&STUBS);
}

#[test]
fn no_discarded_errors() {
    enforce(&DISCARDS);
}

#[test]
fn forgotten_timers_stay_capped() {
    enforce(&[FORGET]);
}

#[test]
fn no_dead_code_allowances() {
    enforce(&[DEAD_CODE]);
}

#[test]
fn web_sys_only_under_dom() {
    let outside: Vec<_> = sources(Path::new("src"))
        .into_iter()
        .filter(|(path, _)| !path.starts_with("src/dom"))
        .collect();
    let hits = occurrences(&outside, "use web_sys");
    assert!(hits.is_empty(), "page logic must build without a browser:\n  {}", hits.join("\n  "));
}
