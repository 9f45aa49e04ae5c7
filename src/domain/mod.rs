pub mod content_source;
pub mod error;
pub mod readiness;
pub mod registry;
pub mod seeding;
pub mod source_control;
pub mod target;
pub mod validation;

pub use content_source::{BloomreachArchetype, ContentSource, DantaAemArchetype, EpCommerceArchive};
pub use error::AppError;
pub use readiness::{PollTiming, ReadinessCheck, Ready};
pub use registry::{RegistryConfig, RegistryEntry};
pub use seeding::{CommitterIdentity, RemoteCoordinates, WorkdirRetention};
pub use source_control::{
    CodeRepository, CreateRepositoryRequest, InitData, Organization, RepositoryEntry,
    SourceControlConfig,
};
pub use target::{Credentials, ServiceTarget};
