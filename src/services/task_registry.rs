use crate::domain::AppError;
use crate::ports::{Task, TaskOutcome};

/// Named on-demand actions. Registration never runs a task.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: Vec<Box<dyn Task>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, task: Box<dyn Task>) -> Result<(), AppError> {
        if self.get(task.name()).is_some() {
            return Err(AppError::config_error(format!(
                "Task '{}' is already registered",
                task.name()
            )));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Task> {
        self.tasks.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// `(name, description)` for every registered task, in registration order.
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.tasks.iter().map(|t| (t.name(), t.description())).collect()
    }

    pub fn invoke(&self, name: &str) -> Result<TaskOutcome, AppError> {
        let task = self.get(name).ok_or_else(|| AppError::TaskNotFound {
            name: name.to_string(),
            available: self.tasks.iter().map(|t| t.name()).collect::<Vec<_>>().join(", "),
        })?;
        task.run()
    }
}
