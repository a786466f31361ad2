use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("katexify-{}-{}", name, std::process::id()));
    let _ = fs::create_dir_all(&dir);
    dir
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_katexify"))
        .args(args)
        .env("KATEXIFY_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn katexify");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait katexify")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_renders_stdin() {
    let output = run_with_stdin(&[], "Area \\(\\pi r^2\\)\n```\ncode");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Area $\\pi r^2$\n```\ncode\n```\n");
}

#[test]
fn test_renders_file_to_file() {
    let dir = temp_dir("file");
    let input = dir.join("answer.md");
    let out = dir.join("answer.out.md");
    fs::write(&input, "\\alpha + \\beta = \\gamma").expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_katexify"))
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .output()
        .expect("run katexify");

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&out).expect("read output"),
        "$$\\alpha + \\beta = \\gamma$$"
    );
}

#[test]
fn test_report_is_json() {
    let output = run_with_stdin(&["--report"], "<think>x</think>$$\ny");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["content"], "$$\ny$$");
    assert_eq!(report["documentMode"], false);
    assert_eq!(report["repairs"][0], "math-block");
}

#[test]
fn test_check_flags_unbalanced_input() {
    let balanced = run_with_stdin(&["--check"], "$$x$$\n```\n```");
    assert!(balanced.status.success());

    let unbalanced = run_with_stdin(&["--check"], "```\nopen");
    assert!(!unbalanced.status.success());
}

#[test]
fn test_stream_replay_matches_one_shot() {
    let input = "数学 \\(x\\)\n\n$$\n\\frac{a}{b}\n$$\n\n```py\nprint(1)\n```";
    let streamed = run_with_stdin(&["--stream", "2"], input);
    let whole = run_with_stdin(&[], input);
    assert!(streamed.status.success());
    assert_eq!(stdout(&streamed), stdout(&whole));
}

#[test]
fn test_stream_rejects_zero_chunk_size() {
    let output = run_with_stdin(&["--stream", "0"], "x");
    assert!(!output.status.success());
}

#[test]
fn test_option_flags() {
    let output = run_with_stdin(&["--no-wrap", "--no-line-breaks"], "a\n\\alpha + \\beta");
    assert_eq!(stdout(&output), "a\n\\alpha + \\beta\n");

    let output = run_with_stdin(&["--repair-inline"], "cost $x");
    assert_eq!(stdout(&output), "cost $x$\n");
}

#[test]
fn test_request_body() {
    let output = Command::new(env!("CARGO_BIN_EXE_katexify"))
        .args(["request", "1+1=?", "--template", "custom", "--custom-prompt", "be terse"])
        .output()
        .expect("run katexify");
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json body");
    assert_eq!(body["model"], "deepseek/deepseek-v3.2-exp");
    assert_eq!(body["stream"], true);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "be terse");
    assert_eq!(body["messages"][1]["content"], "1+1=?");
}

#[test]
fn test_catalog_lists_models() {
    let output = Command::new(env!("CARGO_BIN_EXE_katexify"))
        .arg("catalog")
        .output()
        .expect("run katexify");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("moonshotai/kimi-k2-thinking"));
    assert!(text.contains("silly"));
}
