mod artifact_downloader;
mod clock;
mod process_runner;
mod readiness_probe;
mod registry_api;
mod repository_seeder;
mod source_control_api;

pub use artifact_downloader::ArtifactDownloader;
pub use clock::Clock;
pub use process_runner::ProcessRunner;
pub use readiness_probe::ReadinessProbe;
pub use registry_api::RegistryApi;
pub use repository_seeder::RepositorySeeder;
pub use source_control_api::SourceControlApi;
