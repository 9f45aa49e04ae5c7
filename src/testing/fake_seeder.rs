use std::sync::Mutex;

use crate::domain::{AppError, CodeRepository};
use crate::ports::RepositorySeeder;

#[derive(Default)]
pub struct FakeSeeder {
    seeded: Mutex<Vec<CodeRepository>>,
    fail: bool,
}

impl FakeSeeder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn seeded(&self) -> Vec<CodeRepository> {
        self.seeded.lock().unwrap().clone()
    }
}

impl RepositorySeeder for FakeSeeder {
    fn seed_and_publish(&self, repository: &CodeRepository) -> Result<(), AppError> {
        self.seeded.lock().unwrap().push(repository.clone());
        if self.fail {
            return Err(AppError::Process {
                command: "git push".to_string(),
                details: "exit code 128".to_string(),
            });
        }
        Ok(())
    }
}
