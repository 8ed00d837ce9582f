fn main() {
    // Build-time metadata surfaced by the health endpoint
    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        chrono::Utc::now().to_rfc3339()
    );

    let git = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();
    if let Ok(output) = git {
        if output.status.success() {
            println!(
                "cargo:rustc-env=GIT_HASH={}",
                String::from_utf8_lossy(&output.stdout).trim()
            );
        }
    }
}
