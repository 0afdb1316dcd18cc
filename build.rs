//! Embeds the git commit the binary was built from, reported by `robotstxt debug`.

use std::process::Command;

fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_owned())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=ROBOTSTXT_GIT_HASH={hash}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
