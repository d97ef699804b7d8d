#![cfg(test)]
use greeter_common::config::{Config, DEFAULT_ROSTER};
use greeter_core::greeting::{DEFAULT_NAME, greet};
use greeter_core::session;

/// Runs the session into a buffer and splits it back into lines.
fn run(cfg: &Config) -> (usize, Vec<String>) {
    let mut out: Vec<u8> = Vec::new();
    let written = session::greet_roster(cfg, &mut out).expect("in-memory sink never fails");
    let text = String::from_utf8(out).expect("greetings are utf-8");
    (written, text.lines().map(str::to_string).collect())
}

#[test]
fn default_run_prints_four_lines_in_order() {
    let (written, lines) = run(&Config::default());

    assert_eq!(written, 4);
    assert_eq!(
        lines,
        vec!["Hello, World!", "Hello, Alice!", "Hello, Bob!", "Hello, Charlie!"]
    );
}

#[test]
fn each_line_matches_greet() {
    let cfg = Config::default();
    let (_, lines) = run(&cfg);

    assert_eq!(lines[0], greet(None));
    for (line, name) in lines[1..].iter().zip(DEFAULT_ROSTER) {
        assert_eq!(*line, greet(Some(name)));
    }
}

#[test]
fn default_name_is_not_on_the_roster() {
    assert_eq!(DEFAULT_NAME, "World");
    assert!(!DEFAULT_ROSTER.contains(&DEFAULT_NAME));
}

#[test]
fn repeated_runs_are_identical() {
    let cfg = Config::with_roster(["Dora", "", "Eve"]);
    let first = run(&cfg);
    let second = run(&cfg);

    assert_eq!(first, second);
    assert_eq!(
        first.1,
        vec!["Hello, World!", "Hello, Dora!", "Hello, !", "Hello, Eve!"]
    );
}
