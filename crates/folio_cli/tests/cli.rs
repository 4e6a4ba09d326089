use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE: &str = r##"
viewport_width = 480.0

[[elements]]
tag = "button"
classes = ["nav-toggle"]

[[elements]]
tag = "ul"
id = "nav-list"

[[elements.children]]
tag = "a"
attrs = { href = "#projects" }
text = "Projects"

[[elements]]
tag = "section"
id = "projects"
classes = ["section"]
offset_top = 900.0

[[elements.children]]
tag = "article"
classes = ["project-card"]
children = [
    { tag = "h3", classes = ["project-title"], text = "Alpha" },
    { tag = "p", classes = ["project-desc"], text = "A1" },
    { tag = "button", classes = ["project-cta"], text = "Details" },
]

[[elements]]
tag = "form"
id = "contact-form"
children = [
    { tag = "input", attrs = { name = "name" } },
    { tag = "input", attrs = { name = "email" } },
    { tag = "textarea", attrs = { name = "message" } },
    { tag = "button", attrs = { type = "submit" }, text = "Send message" },
]

[[elements]]
tag = "p"
id = "form-status"

[[elements]]
tag = "div"
id = "project-modal"

[[elements.children]]
tag = "div"
classes = ["modal-panel"]
children = [
    { tag = "button", classes = ["modal-close"] },
    { tag = "h2", id = "modal-title" },
    { tag = "div", id = "modal-body" },
]
"##;

const SCRIPT: &str = r##"
[[steps]]
action = "click"
target = ".nav-toggle"

[[steps]]
action = "click"
target = "a"

[[steps]]
action = "click"
target = ".project-cta"

[[steps]]
action = "input"
target = "[name=name]"
value = "Ada"

[[steps]]
action = "input"
target = "[name=email]"
value = "ada@example.com"

[[steps]]
action = "input"
target = "[name=message]"
value = "Hello"

[[steps]]
action = "submit"
form = "#contact-form"

[[steps]]
action = "advance"
ms = 900

[[steps]]
action = "key"
key = "Tab"
"##;

struct Fixtures {
    _tmp: TempDir,
    page: PathBuf,
    script: PathBuf,
    dir: PathBuf,
}

impl Fixtures {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        let page = dir.join("page.toml");
        let script = dir.join("script.toml");
        fs::write(&page, PAGE).expect("write page fixture");
        fs::write(&script, SCRIPT).expect("write script");
        Self {
            _tmp: tmp,
            page,
            script,
            dir,
        }
    }

    fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, text).expect("write fixture");
        path
    }
}

fn folio() -> Command {
    cargo_bin_cmd!("folio")
}

fn run_json(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn test_replay_json_reaches_final_state() {
    let fx = Fixtures::new();
    let value = run_json(folio().arg("replay").arg(&fx.page).arg(&fx.script).arg("--json"));

    let steps = value["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 9);
    assert_eq!(steps[1]["default_prevented"], true);
    assert_eq!(steps[7]["timers_fired"], 1);

    let snapshot = &value["snapshot"];
    assert_eq!(snapshot["nav"], "collapsed");
    assert_eq!(snapshot["modal"]["open"], true);
    assert_eq!(snapshot["modal"]["title"], "Alpha");
    assert_eq!(snapshot["form"]["phase"], "done");
    assert_eq!(snapshot["form"]["message"], "Message sent — thank you!");
    assert_eq!(snapshot["keyboard_mode"], "tabbing");
    assert_eq!(snapshot["elapsed_ms"], 900);
    assert_eq!(snapshot["animations"]["engine_available"], true);
}

#[test]
fn test_replay_text_output() {
    let fx = Fixtures::new();
    let out = folio()
        .arg("replay")
        .arg(&fx.page)
        .arg(&fx.script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("navigation: collapsed"));
    assert!(text.contains("modal: open (Alpha)"));
    assert!(text.contains("form: done (Message sent — thank you!)"));
    assert!(text.contains("keyboard: tabbing"));
}

#[test]
fn test_config_changes_delay() {
    let fx = Fixtures::new();
    let config = fx.write("folio.toml", "submit_delay_ms = 2000\n");
    let value = run_json(
        folio()
            .arg("replay")
            .arg(&fx.page)
            .arg(&fx.script)
            .arg("--config")
            .arg(&config)
            .arg("--json"),
    );
    assert_eq!(value["snapshot"]["form"]["phase"], "sending");
    assert_eq!(value["snapshot"]["pending_timers"], 1);
}

#[test]
fn test_check_reports_components() {
    let fx = Fixtures::new();
    let value = run_json(folio().arg("check").arg(&fx.page).arg("--json"));

    assert_eq!(value["navigation"], true);
    assert_eq!(value["contact_form"], true);
    assert_eq!(value["project_modal"], true);
    assert_eq!(value["projects"], 1);
}

#[test]
fn test_check_empty_page() {
    let fx = Fixtures::new();
    let empty = fx.write("empty.toml", "");
    let value = run_json(folio().arg("check").arg(&empty).arg("--json"));

    assert_eq!(value["navigation"], false);
    assert_eq!(value["contact_form"], false);
    assert_eq!(value["project_modal"], false);
    assert_eq!(value["listeners"], serde_json::json!(["scroll-router", "first-tab"]));
}

#[test]
fn test_missing_page_fails() {
    let fx = Fixtures::new();
    folio()
        .arg("check")
        .arg(fx.dir.join("nope.toml"))
        .assert()
        .failure();
}

#[test]
fn test_invalid_script_fails() {
    let fx = Fixtures::new();
    let script = fx.write("bad.toml", "[[steps]]\naction = \"hover\"\n");
    folio()
        .arg("replay")
        .arg(&fx.page)
        .arg(&script)
        .assert()
        .failure();
}

#[test]
fn test_unmatched_selector_fails() {
    let fx = Fixtures::new();
    let script = fx.write(
        "missing.toml",
        "[[steps]]\naction = \"click\"\ntarget = \"#does-not-exist\"\n",
    );
    let out = folio()
        .arg("replay")
        .arg(&fx.page)
        .arg(&script)
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(out).unwrap();
    assert!(stderr.contains("no element matches"));
}
