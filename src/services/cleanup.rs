//! The `clean` action: deletes the shared build-output root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BuildOutputRoot, normalize_path};
use crate::ports::{Task, TaskOutcome};

pub const CLEAN_TASK: &str = "clean";

/// Deletes the build-output root and everything under it.
#[derive(Debug, Clone)]
pub struct CleanTask {
    output_root: BuildOutputRoot,
    project_dir: PathBuf,
}

impl CleanTask {
    pub fn new(output_root: BuildOutputRoot, project_dir: PathBuf) -> Self {
        Self { output_root, project_dir }
    }
}

impl Task for CleanTask {
    fn name(&self) -> &str {
        CLEAN_TASK
    }

    fn description(&self) -> &str {
        "Delete the shared build output directory"
    }

    fn run(&self) -> Result<TaskOutcome, AppError> {
        delete_output_root(self.output_root.path(), &self.project_dir)
    }
}

/// Recursively delete `root`. An absent root counts as success.
pub fn delete_output_root(root: &Path, project_dir: &Path) -> Result<TaskOutcome, AppError> {
    if normalize_path(project_dir).starts_with(normalize_path(root)) {
        return Err(AppError::config_error(format!(
            "Refusing to delete {}: it contains the project directory",
            root.display()
        )));
    }

    match fs::remove_dir_all(root) {
        Ok(()) => Ok(TaskOutcome::Cleaned { path: root.to_path_buf(), removed: true }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Ok(TaskOutcome::Cleaned { path: root.to_path_buf(), removed: false })
        }
        Err(source) => Err(AppError::Cleanup { path: root.to_path_buf(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    fn task(temp: &TempDir) -> CleanTask {
        let project = temp.path().join("project/android");
        let root =
            BuildOutputRoot::resolve(Some(&project.join("build")), Path::new("../../build")).unwrap();
        CleanTask::new(root, project)
    }

    #[test]
    fn removes_root_and_contents() {
        let temp = TempDir::new().unwrap();
        temp.child("project/build/app/outputs/app.apk").write_str("apk").unwrap();
        temp.child("project/build/plugin/tmp.bin").write_str("bin").unwrap();

        let outcome = task(&temp).run().unwrap();

        temp.child("project/build").assert(predicate::path::missing());
        assert_eq!(
            outcome,
            TaskOutcome::Cleaned { path: temp.path().join("project/build"), removed: true }
        );
    }

    #[test]
    fn absent_root_is_success() {
        let temp = TempDir::new().unwrap();

        let outcome = task(&temp).run().unwrap();

        assert!(matches!(outcome, TaskOutcome::Cleaned { removed: false, .. }));
    }

    #[test]
    fn running_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        temp.child("project/build/app/a.txt").write_str("a").unwrap();
        let task = task(&temp);

        task.run().unwrap();
        let second = task.run().unwrap();

        assert!(matches!(second, TaskOutcome::Cleaned { removed: false, .. }));
    }

    #[test]
    fn refuses_to_delete_the_project_directory() {
        let temp = TempDir::new().unwrap();
        temp.child("project/keep.txt").write_str("keep").unwrap();

        let err = delete_output_root(&temp.path().join("project"), &temp.path().join("project"))
            .unwrap_err();

        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("Refusing")));
        temp.child("project/keep.txt").assert(predicate::path::exists());
    }

    #[cfg(unix)]
    #[test]
    fn root_that_is_a_file_surfaces_io_error() {
        let temp = TempDir::new().unwrap();
        temp.child("out").write_str("not a directory").unwrap();

        let err = delete_output_root(&temp.path().join("out"), &temp.path().join("project"))
            .unwrap_err();

        assert!(matches!(err, AppError::Cleanup { .. }));
    }
}
