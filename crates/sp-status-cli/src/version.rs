pub const FULL: &str = concat!(env!("CARGO_PKG_VERSION"), "+git.", env!("SP_STATUS_BUILD"));

#[cfg(test)]
mod tests {
    use super::FULL;

    #[test]
    fn version_matches_checkout_head() {
        let head = std::process::Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string());
        match head {
            Some(sha) => assert!(
                FULL.contains(&format!("+git.{sha}")),
                "version string does not include git sha; version={FULL} sha={sha}"
            ),
            None => assert!(FULL.ends_with("+git.nogit"), "version={FULL}"),
        }
    }
}
