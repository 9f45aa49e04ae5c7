pub mod api;
pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod readiness;
pub mod seeding;
