//! External process runner backed by `std::process::Command`.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let display = display_command(program, args);
        debug!("running '{}' in {}", display, cwd.display());

        let output = Command::new(program).args(args).current_dir(cwd).output().map_err(|e| {
            AppError::Process { command: display.clone(), details: e.to_string() }
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_string();

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(AppError::Process {
                command: display,
                details: if combined.is_empty() {
                    status
                } else {
                    format!("{}, output: {}", status, combined)
                },
            });
        }

        Ok(combined)
    }
}

/// Render a command line for logs and errors, masking URL passwords.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|arg| redact_userinfo(arg)));
    parts.join(" ")
}

fn redact_userinfo(arg: &str) -> String {
    match url::Url::parse(arg) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => arg.to_string(),
    }
}
