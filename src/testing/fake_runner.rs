use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

type Hook = Box<dyn Fn(&Path) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// `program` followed by its first non-option argument, e.g. `git commit`.
    pub fn key(&self) -> String {
        match subcommand(&self.args) {
            Some(sub) => format!("{} {}", self.program, sub),
            None => self.program.clone(),
        }
    }
}

fn subcommand(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-c" {
            iter.next();
            continue;
        }
        if !arg.starts_with('-') {
            return Some(arg);
        }
    }
    None
}

/// Records every invocation. Keys are matched against either the program
/// alone or `"program subcommand"`.
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<Invocation>>,
    failing: Vec<String>,
    hooks: Vec<(String, Hook)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing.push(key.to_string());
        self
    }

    /// Run `hook` with the working directory whenever `key` is invoked,
    /// to emulate the tool's side effects on disk.
    pub fn on<F>(mut self, key: &str, hook: F) -> Self
    where
        F: Fn(&Path) + Send + Sync + 'static,
    {
        self.hooks.push((key.to_string(), Box::new(hook)));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.calls().iter().map(Invocation::key).collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        };
        let key = invocation.key();
        self.calls.lock().unwrap().push(invocation);

        if self.failing.iter().any(|k| *k == key || k == program) {
            return Err(AppError::Process {
                command: key,
                details: "exit code 1, output: simulated failure".to_string(),
            });
        }
        for (k, hook) in &self.hooks {
            if *k == key || k == program {
                hook(cwd);
            }
        }
        Ok(String::new())
    }
}
