use std::process::{Command, Stdio};

/// Spawns the calculator binary and feeds `input` to its stdin, returning
/// everything it printed.
fn run(input: &str) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_safecalc"));
    let mut child = cmd.stdin(Stdio::piped())
                       .stdout(Stdio::piped())
                       .spawn()
                       .unwrap();
    {
        use std::io::Write;
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
        // dropping the handle sends EOF
    }
    let out = child.wait_with_output().unwrap();
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn evaluates_expressions_at_the_prompt() {
    let out = run("2 + 3\nexit\n");
    assert!(out.contains("Result: 5"), "output was:\n{out}");
}

#[test]
fn reports_errors_without_crashing() {
    let out = run("1 / 0\nexit\n");
    assert!(out.contains("Division by zero is not allowed"), "output was:\n{out}");
}

#[test]
fn warns_before_evaluating_oversized_exponents() {
    let out = run("2 ** 101\nexit\n");
    assert!(out.contains("Exponent exceeds the limit of 100"), "output was:\n{out}");
}

#[test]
fn special_functions_bypass_the_evaluator() {
    let out = run("factorial\n5\ntable\n3\nexit\n");
    assert!(out.contains("Factorial of 5: 120"), "output was:\n{out}");
    assert!(out.contains("3 X 7 = 21"), "output was:\n{out}");
}

#[test]
fn one_shot_expression_flag() {
    let out = Command::new(env!("CARGO_BIN_EXE_safecalc")).args(["--expression", "7 * 6"])
                                                          .output()
                                                          .unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Result: 42"), "output was:\n{stdout}");
}
