use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch database shared by every command of one test.
struct TestDb {
    _temp_dir: TempDir,
    path: String,
}

impl TestDb {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let path = temp_dir
            .path()
            .join("cli_test.db")
            .to_str()
            .expect("Temp path should be UTF-8")
            .to_string();
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// A `td` command with plain output against this database.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("td").expect("Failed to find td binary");
        cmd.args(["--no-color", "--database-file", &self.path]);
        cmd
    }

    /// Runs a successful command and returns the ID it reports.
    fn create(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).assert().success().get_output().stdout.clone();
        let output = String::from_utf8(output).expect("Invalid UTF-8");
        extract_id_from_output(&output)
    }
}

fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.split("with ID: ").nth(1))
        .map(|id| id.trim().to_string())
        .expect("Output should report an ID")
}

#[test]
fn test_cli_lists_no_projects_by_default() {
    let db = TestDb::new();

    db.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_cli_create_and_list_projects() {
    let db = TestDb::new();

    db.cmd()
        .args(["project", "create", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project with ID: 1"))
        .stdout(predicate::str::contains("## Groceries (ID: 1)"));

    db.cmd().args(["p", "create", "Chores"]).assert().success();

    db.cmd()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Groceries (ID: 1)"))
        .stdout(predicate::str::contains("## Chores (ID: 2)"))
        .stdout(predicate::str::contains("- **Position**: 1"));
}

#[test]
fn test_cli_duplicate_project_fails() {
    let db = TestDb::new();
    db.create(&["project", "create", "Home"]);

    db.cmd()
        .args(["project", "create", "Home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_task_tree() {
    let db = TestDb::new();
    let project_id = db.create(&["project", "create", "Trip"]);
    let task_id = db.create(&["task", "add", &project_id, "Pack bags"]);

    db.cmd()
        .args(["task", "detail", &task_id, "Socks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created detail with ID:"));

    db.cmd()
        .args(["task", "list", &project_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] Pack bags"))
        .stdout(predicate::str::contains("  - [ ] Socks"));

    db.cmd()
        .args(["project", "show", &project_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Trip"))
        .stdout(predicate::str::contains("- [ ] Pack bags"));
}

#[test]
fn test_cli_complete_and_uncomplete() {
    let db = TestDb::new();
    let project_id = db.create(&["project", "create", "Work"]);
    let task_id = db.create(&["t", "a", &project_id, "Report"]);

    db.cmd()
        .args(["task", "complete", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] Report"));

    db.cmd()
        .args(["task", "complete", &task_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already completed"));

    db.cmd()
        .args(["task", "uncomplete", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] Report"));
}

#[test]
fn test_cli_swap_requires_neighbours() {
    let db = TestDb::new();
    let project_id = db.create(&["project", "create", "Errands"]);
    let first = db.create(&["task", "add", &project_id, "first"]);
    let second = db.create(&["task", "add", &project_id, "second"]);
    let third = db.create(&["task", "add", &project_id, "third"]);

    db.cmd()
        .args(["task", "swap", &first, &third])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not adjacent"));

    db.cmd()
        .args(["task", "swap", &first, &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swapped tasks"));
}

#[test]
fn test_cli_move_top_level_task_without_target_fails() {
    let db = TestDb::new();
    let project_id = db.create(&["project", "create", "P1"]);
    let task_id = db.create(&["task", "add", &project_id, "T1"]);

    db.cmd()
        .args(["task", "move", &task_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task does not have a parent task to clear"));
}

#[test]
fn test_cli_move_under_parent() {
    let db = TestDb::new();
    let project_id = db.create(&["project", "create", "P1"]);
    let parent = db.create(&["task", "add", &project_id, "Parent"]);
    let child = db.create(&["task", "add", &project_id, "Child"]);

    db.cmd()
        .args(["task", "move", &child, "--parent", &parent])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Moved under task {parent}")));

    db.cmd()
        .args(["task", "show", &parent])
        .assert()
        .success()
        .stdout(predicate::str::contains("  - [ ] Child"));
}

#[test]
fn test_cli_remove_project_with_tasks_fails() {
    let db = TestDb::new();
    let project_id = db.create(&["project", "create", "Busy"]);
    let task_id = db.create(&["task", "add", &project_id, "Something"]);

    db.cmd()
        .args(["project", "remove", &project_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be removed"));

    db.cmd()
        .args(["task", "remove", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed task 'Something'"));

    db.cmd()
        .args(["project", "rm", &project_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed project 'Busy'"));
}

#[test]
fn test_cli_json_output() {
    let db = TestDb::new();
    db.create(&["project", "create", "Json"]);

    let output = db
        .cmd()
        .args(["--json", "project", "find", "Json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let project: serde_json::Value = serde_json::from_slice(&output).expect("Output should be JSON");
    assert_eq!(project["name"], "Json");
    assert_eq!(project["position"], 0);
}

#[test]
fn test_cli_zero_id_rejected() {
    let db = TestDb::new();

    db.cmd()
        .args(["task", "show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than zero"));
}
