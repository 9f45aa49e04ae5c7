use crate::domain::{AppError, CodeRepository};

/// Port for populating a freshly created repository with its initial content.
pub trait RepositorySeeder {
    /// Produce the repository's content and push it. Only called for
    /// repositories whose content source is not `ContentSource::None`.
    fn seed_and_publish(&self, repository: &CodeRepository) -> Result<(), AppError>;
}
