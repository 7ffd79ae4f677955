use assert_cmd::Command;
use std::path::Path;

/// `urgelog` binary pointed at `home`, isolated from the caller's environment
pub fn urgelog_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("urgelog").unwrap();
    cmd.env_remove("URGELOG_HOME");
    cmd.env_remove("URGELOG_LOG");
    cmd.arg("--home").arg(home);
    cmd
}

#[allow(dead_code)]
/// Id printed in parentheses at the end of an `add`/`edit` line
pub fn id_from_output(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let line = text.lines().next().unwrap_or_default();
    let start = line.rfind('(').expect("id in output") + 1;
    let end = line.rfind(')').expect("id in output");
    line[start..end].to_string()
}
