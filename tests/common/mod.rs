//! Shared testing utilities for buildpin CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project tree for CLI exercises.
///
/// Layout mirrors a Flutter-style app: the build project lives in
/// `<root>/speech_to_text/android`, so an offset of `../../build` lands in
/// `<root>/speech_to_text/build`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("speech_to_text").join("android");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");
        Self { root, project_dir }
    }

    /// Path to the build project used for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Expected shared build-output root.
    pub fn output_root(&self) -> PathBuf {
        self.root.path().join("speech_to_text").join("build")
    }

    /// Build a command for invoking the compiled `buildpin` binary within the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("buildpin").expect("Failed to locate buildpin binary");
        cmd.current_dir(&self.project_dir);
        cmd
    }

    /// Write `buildpin.toml` with the given content.
    pub fn write_project(&self, content: &str) {
        fs::write(self.project_dir.join("buildpin.toml"), content)
            .expect("Failed to write buildpin.toml");
    }

    /// Publish `group:artifact:version` into the local `google` repository.
    pub fn publish(&self, notation: &str, dependencies: &[&str]) {
        let mut parts = notation.rsplitn(3, ':');
        let version = parts.next().expect("version");
        let artifact = parts.next().expect("artifact");
        let group = parts.next().expect("group");

        let mut dir = self.project_dir.join("repositories/google");
        for segment in group.split('.') {
            dir.push(segment);
        }
        dir.push(artifact);
        dir.push(version);
        fs::create_dir_all(&dir).expect("Failed to create package directory");

        let deps = dependencies.iter().map(|d| format!("\"{}\"", d)).collect::<Vec<_>>().join(", ");
        fs::write(dir.join("package.toml"), format!("dependencies = [{}]\n", deps))
            .expect("Failed to write package.toml");
    }

    /// Standard project: two modules, `app` as evaluation anchor, androidx.core pinned.
    pub fn write_pinned_project(&self) {
        self.write_project(
            r#"
[project]
name = "speech_to_text"
evaluation_anchor = "app"

[output]
relative_offset = "../../build"

[[repositories]]
name = "google"
location = "repositories/google"

[[modules]]
name = "speech_to_text"
dependencies = ["androidx.core:core:1.13.1"]

[[modules]]
name = "app"
dependencies = ["androidx.core:core-ktx:1.13.1"]

[[force]]
coordinate = "androidx.core:core"
version = "1.12.0"

[[force]]
coordinate = "androidx.core:core-ktx"
version = "1.12.0"
"#,
        );
        self.publish("androidx.core:core:1.12.0", &["androidx.annotation:annotation:1.6.0"]);
        self.publish("androidx.core:core:1.13.1", &["androidx.annotation:annotation:1.8.0"]);
        self.publish("androidx.core:core-ktx:1.12.0", &["androidx.core:core:1.12.0"]);
        self.publish("androidx.core:core-ktx:1.13.1", &["androidx.core:core:1.13.1"]);
        self.publish("androidx.annotation:annotation:1.6.0", &[]);
        self.publish("androidx.annotation:annotation:1.8.0", &[]);
    }
}
