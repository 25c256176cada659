use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn taskboard_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_taskboard"));
    cmd.env_remove("COLORFGBG");
    cmd
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    taskboard_cmd()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap()
}

fn init(dir: &TempDir) {
    let output = run(dir, &["init"]);
    assert!(output.status.success());
}

/// Pull the id out of "Created task <id> - <title>"
fn created_id(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split_whitespace()
        .nth(2)
        .expect("id in output")
        .to_string()
}

#[test]
fn test_init_creates_taskboard_directory() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    assert!(tmp.path().join(".taskboard").exists());
    assert!(tmp.path().join(".taskboard/board.loro").exists());
    assert!(tmp.path().join(".taskboard/config.yaml").exists());
}

#[test]
fn test_init_twice_fails() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(&tmp, &["init"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Already initialized"));
}

#[test]
fn test_command_without_init_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &["board"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not in a taskboard project"));
}

#[test]
fn test_fresh_board_shows_seed_categories() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(&tmp, &["categories", "--json"]);
    assert!(output.status.success());
    let categories: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(categories, vec!["업무", "부업", "결혼", "개인", "살림", "가족"]);
}

#[test]
fn test_full_task_workflow() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(
        &tmp,
        &["task", "new", "--category", "업무", "--title", "보고서 작성", "--status", "접수"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created task"));
    let id = created_id(&output);

    // Board shows it under 업무
    let output = run(&tmp, &["board", "--json"]);
    assert!(output.status.success());
    let board: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let work = board
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["category"] == "업무")
        .unwrap();
    assert_eq!(work["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(work["tasks"][0]["title"], "보고서 작성");

    // Grid has one row
    let output = run(&tmp, &["grid", "--json"]);
    let grid: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(grid.as_array().unwrap().len(), 1);
    assert_eq!(grid[0]["title"], "보고서 작성");

    // Edit keeps the id and position
    let output = run(&tmp, &["task", "edit", &id, "--status", "완료", "--dday", "D-1"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Updated task"));

    let output = run(&tmp, &["task", "get", &id, "--json"]);
    let task: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(task["status"], "완료");
    assert_eq!(task["dDay"], "D-1");

    // Delete
    let output = run(&tmp, &["task", "delete", &id, "--force"]);
    assert!(output.status.success());

    let output = run(&tmp, &["grid", "--json"]);
    let grid: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(grid.as_array().unwrap().is_empty());
}

#[test]
fn test_blank_title_is_not_saved() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(&tmp, &["task", "new", "--title", "   "]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Task not saved"));

    let output = run(&tmp, &["grid", "--json"]);
    let grid: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(grid.as_array().unwrap().is_empty());
}

#[test]
fn test_unknown_category_is_rejected() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(&tmp, &["task", "new", "--category", "여행", "--title", "제주"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown category"));
}

#[test]
fn test_task_content_from_stdin() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let mut child = taskboard_cmd()
        .current_dir(tmp.path())
        .args(["task", "new", "--title", "회의록", "--stdin", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all("안건 1\n안건 2".as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let task: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(task["content"], "안건 1\n안건 2");
    assert_eq!(task["category"], "업무");
}

#[test]
fn test_memo_workflow() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(&tmp, &["memo", "add", "--title", "장보기", "--json"]);
    assert!(output.status.success());
    let memo: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = memo["id"].as_i64().unwrap().to_string();
    assert_eq!(memo["expanded"], true);

    let output = run(&tmp, &["memo", "toggle", &id]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("collapsed"));

    let output = run(&tmp, &["memo", "list", "--json"]);
    let memos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let memos = memos.as_array().unwrap();
    assert_eq!(memos.len(), 2);
    assert_eq!(memos[0]["title"], "업무 메모");
    assert_eq!(memos[1]["title"], "장보기");
    assert_eq!(memos[1]["expanded"], false);

    let output = run(&tmp, &["memo", "delete", &id]);
    assert!(output.status.success());
    let output = run(&tmp, &["memo", "delete", &id]);
    assert!(!output.status.success());
}

#[test]
fn test_theme_toggle_persists() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(&tmp, &["theme"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "light");

    let output = run(&tmp, &["theme", "toggle"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "dark");

    let output = run(&tmp, &["theme"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "dark");
}

#[test]
fn test_todo_workflow() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = run(&tmp, &["todo", "add", "우유", "사기"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let id = stdout.split_whitespace().nth(1).unwrap().to_string();
    assert!(stdout.contains("우유 사기"));

    run(&tmp, &["todo", "add", "빨래"]);
    let output = run(&tmp, &["todo", "toggle", &id]);
    assert!(output.status.success());

    let output = run(&tmp, &["todo", "clear"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Removed 1"));

    let output = run(&tmp, &["todo", "list", "--json"]);
    let todos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["text"], "빨래");
}

#[test]
fn test_sqlite_backend_workflow() {
    let tmp = TempDir::new().unwrap();
    let output = run(&tmp, &["init", "--backend", "sqlite"]);
    assert!(output.status.success());
    assert!(tmp.path().join(".taskboard/board.db").exists());

    let output = run(&tmp, &["task", "new", "--title", "SQLite 확인", "--category", "개인"]);
    assert!(output.status.success());

    let output = run(&tmp, &["grid"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SQLite 확인"));
    assert!(stdout.contains("카테고리"));
}

#[test]
fn test_snapshot_writes_markdown() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    run(&tmp, &["task", "new", "--title", "스냅샷 대상"]);

    let output = run(&tmp, &["snapshot"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 on board, 1 in grid, 1 memo(s), 0 to-do item(s)"));

    let dir = tmp.path().join(".taskboard/snapshot");
    let board = std::fs::read_to_string(dir.join("board.md")).unwrap();
    assert!(board.contains("스냅샷 대상"));
    for name in ["grid.md", "memos.md", "todos.md"] {
        let text = std::fs::read_to_string(dir.join(name)).unwrap();
        assert!(text.starts_with("---\n"));
    }
}

#[test]
fn test_snapshot_into_project_root_keeps_data() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    run(&tmp, &["task", "new", "--title", "지켜야 할 일"]);
    std::fs::write(tmp.path().join("notes.txt"), "user file").unwrap();

    let output = run(&tmp, &["snapshot", "--dir", "."]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".taskboard"));

    assert!(tmp.path().join(".taskboard/board.loro").exists());
    assert!(tmp.path().join(".taskboard/config.yaml").exists());
    assert!(tmp.path().join("notes.txt").exists());

    let output = run(&tmp, &["grid", "--json"]);
    assert!(output.status.success());
    let grid: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(grid[0]["title"], "지켜야 할 일");
}

#[test]
fn test_snapshot_into_user_directory_keeps_other_files() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    let out = tmp.path().join("docs");
    std::fs::create_dir(&out).unwrap();
    std::fs::write(out.join("README.md"), "keep me").unwrap();

    let output = run(&tmp, &["snapshot", "--dir", "docs"]);
    assert!(output.status.success());

    assert_eq!(std::fs::read_to_string(out.join("README.md")).unwrap(), "keep me");
    assert!(out.join("board.md").exists());
}

#[test]
fn test_show_grid_view() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    run(&tmp, &["task", "new", "--title", "표 보기"]);

    let output = run(&tmp, &["show", "--view", "grid"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[grid | light]"));
    assert!(stdout.contains("표 보기"));
}
