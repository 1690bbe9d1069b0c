use std::process::Command;

fn git_stdout(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    // `+git.<sha>` plus `.dirty` for uncommitted changes; `nogit` outside a checkout.
    let build = match git_stdout(&["rev-parse", "--short", "HEAD"]) {
        Some(sha) => {
            let dirty = git_stdout(&["status", "--porcelain", "--untracked-files=no"])
                .map(|status| !status.is_empty())
                .unwrap_or(false);
            if dirty {
                format!("{sha}.dirty")
            } else {
                sha
            }
        }
        None => "nogit".to_string(),
    };
    println!("cargo:rustc-env=SP_STATUS_BUILD={build}");
}
