use crate::cli::run;

#[test]
fn solves_scenario_a() {
    let output = run(&[
        "--fractions",
        "-c", "1 0 1 0 0 4",
        "-c", "0 2 0 1 0 12",
        "-c", "3 2 0 0 1 18",
        "-o", "-3 -5 0 0 0 0",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("objective value: -36"));
}

#[test]
fn error_is_reported_once() {
    let output = run(&["-c", "1 1 x", "-o", "1 0 0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("`x` is not a number").count(), 1);
    assert!(output.stdout.is_empty());
}
