use assert_cmd::Command;

pub fn minibank_cmd() -> Command {
    let mut cmd = Command::cargo_bin("minibank").unwrap();
    cmd.env_remove("MINIBANK_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
