//! Exit codes: 0 on success, 2 for every failure, errors on stderr only.

fn run_code(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = holdem_cli::run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_unknown_command_returns_two() {
    let (code, out, err) = run_code(&["holdem", "play"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: holdem <command> [options]"));
    assert!(err.contains("  showdown"));
}

#[test]
fn test_missing_command_returns_two() {
    let (code, _, err) = run_code(&["holdem"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn test_players_out_of_range_returns_two() {
    for players in ["1", "11"] {
        let (code, out, _) = run_code(&["holdem", "deal", "--players", players]);
        assert_eq!(code, 2, "players {} should be rejected", players);
        assert!(out.is_empty());
    }
}

#[test]
fn test_unknown_strategy_returns_two() {
    let (code, _, _) = run_code(&[
        "holdem", "eval", "--hole", "As Ks", "--board", "Qs Js Ts 2c 3d", "--strategy", "fast",
    ]);
    assert_eq!(code, 2);
}

#[test]
fn test_invalid_card_returns_two() {
    let (code, out, err) = run_code(&[
        "holdem", "eval", "--hole", "As Xx", "--board", "Qs Js Ts 2c 3d",
    ]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: "));
    assert!(err.contains("Xx"));
}

#[test]
fn test_duplicate_card_returns_two() {
    let (code, _, err) = run_code(&[
        "holdem", "eval", "--hole", "As Ks", "--board", "As Js Ts 2c 3d",
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("Malformed hand"));
}

#[test]
fn test_showdown_needs_a_hole() {
    let (code, _, _) = run_code(&["holdem", "showdown", "--board", "Qs Js Ts 2c 3d"]);
    assert_eq!(code, 2);
}

#[test]
fn test_zero_fixture_count_returns_two() {
    let (code, _, _) = run_code(&["holdem", "fixtures", "--count", "0"]);
    assert_eq!(code, 2);
}

#[test]
fn test_verify_missing_file_returns_two() {
    let (code, _, err) = run_code(&["holdem", "verify", "--input", "/nonexistent/fx.jsonl"]);
    assert_eq!(code, 2);
    assert!(err.contains("I/O error"));
}
