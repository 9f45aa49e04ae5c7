//! Content-source strategies for seeding a new code repository.

use serde::{Deserialize, Serialize};
use validator::ValidateUrl;

use crate::domain::AppError;
use crate::domain::validation::validate_path_segment;

pub const TAG_EMPTY: &str = "empty";
pub const TAG_CLONE_EXISTING: &str = "danta-aem-demo";
pub const TAG_DANTA_AEM_ARCHETYPE: &str = "danta-aem-archetype";
pub const TAG_EP_COMMERCE: &str = "ep-commerce";
pub const TAG_BLOOMREACH_ARCHETYPE: &str = "bloomreach-archetype";

pub const DANTA_ARCHETYPE_GROUP: &str = "io.tikaltechnologies.danta";
pub const DANTA_ARCHETYPE_ARTIFACT: &str = "danta-aem-archetype";
pub const BLOOMREACH_ARCHETYPE_VERSION: &str = "12.2.0";

/// How a freshly created code repository gets its first commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Server-side auto-init with a default README.
    None,
    /// Copy of the reference demo repository, history stripped.
    CloneExisting,
    /// Project generated from the Danta AEM archetype.
    DantaAemArchetype(DantaAemArchetype),
    /// Downloaded EP Commerce source archive, patched in place.
    EpCommerce(EpCommerceArchive),
    /// Project generated from the Bloomreach (Hippo) archetype.
    BloomreachArchetype(BloomreachArchetype),
}

impl ContentSource {
    /// Resolve a `content_setup_type` tag and its strategy parameters.
    ///
    /// A strategy that needs parameters fails when its nested object is absent
    /// or incomplete.
    pub fn from_tag(
        tag: &str,
        danta: Option<&DantaAemArchetype>,
        ep: Option<&EpCommerceArchive>,
        bloomreach: Option<&BloomreachArchetype>,
    ) -> Result<Self, AppError> {
        match tag {
            "" | TAG_EMPTY => Ok(ContentSource::None),
            TAG_CLONE_EXISTING => Ok(ContentSource::CloneExisting),
            TAG_DANTA_AEM_ARCHETYPE => {
                let params = require(danta, "danta_aem_archetype", tag)?;
                params.validate()?;
                Ok(ContentSource::DantaAemArchetype(params.clone()))
            }
            TAG_EP_COMMERCE => {
                let params = require(ep, "ep_commerce", tag)?;
                params.validate()?;
                Ok(ContentSource::EpCommerce(params.clone()))
            }
            TAG_BLOOMREACH_ARCHETYPE => {
                let params = require(bloomreach, "bloomreach_archetype", tag)?;
                params.validate()?;
                Ok(ContentSource::BloomreachArchetype(params.clone()))
            }
            other => Err(AppError::validation(format!(
                "'{}' is not a valid content_setup_type (expected one of: empty, {}, {}, {}, {})",
                other,
                TAG_CLONE_EXISTING,
                TAG_DANTA_AEM_ARCHETYPE,
                TAG_EP_COMMERCE,
                TAG_BLOOMREACH_ARCHETYPE
            ))),
        }
    }

    /// Whether the server should create the initial commit itself.
    pub fn auto_init(&self) -> bool {
        matches!(self, ContentSource::None)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ContentSource::None => TAG_EMPTY,
            ContentSource::CloneExisting => TAG_CLONE_EXISTING,
            ContentSource::DantaAemArchetype(_) => TAG_DANTA_AEM_ARCHETYPE,
            ContentSource::EpCommerce(_) => TAG_EP_COMMERCE,
            ContentSource::BloomreachArchetype(_) => TAG_BLOOMREACH_ARCHETYPE,
        }
    }
}

fn require<'a, T>(params: Option<&'a T>, field: &str, tag: &str) -> Result<&'a T, AppError> {
    params.ok_or_else(|| {
        AppError::validation(format!("content_setup_type '{}' requires a '{}' object", tag, field))
    })
}

fn require_field(value: &str, field: &str, section: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{}.{} is required", section, field)));
    }
    Ok(())
}

fn require_segment(value: &str, field: &str, section: &str) -> Result<(), AppError> {
    require_field(value, field, section)?;
    if !validate_path_segment(value) {
        return Err(AppError::validation(format!(
            "{}.{} '{}' must be a single directory name",
            section, field, value
        )));
    }
    Ok(())
}

/// Danta AEM archetype coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DantaAemArchetype {
    pub archetype_group: String,
    pub archetype_artifact: String,
    pub archetype_version: String,
    pub group_id: String,
    pub artifact_id: String,
    /// Also the name of the directory the archetype generates.
    pub app_name: String,
    pub package: String,
    pub aem_server: String,
    pub nexus_url: String,
}

impl DantaAemArchetype {
    const SECTION: &'static str = "danta_aem_archetype";

    pub fn validate(&self) -> Result<(), AppError> {
        require_field(&self.archetype_version, "archetype_version", Self::SECTION)?;
        require_field(&self.group_id, "group_id", Self::SECTION)?;
        require_field(&self.artifact_id, "artifact_id", Self::SECTION)?;
        require_segment(&self.app_name, "app_name", Self::SECTION)?;
        require_field(&self.package, "package", Self::SECTION)?;
        Ok(())
    }

    pub fn archetype_group_or_default(&self) -> &str {
        non_empty_or(&self.archetype_group, DANTA_ARCHETYPE_GROUP)
    }

    pub fn archetype_artifact_or_default(&self) -> &str {
        non_empty_or(&self.archetype_artifact, DANTA_ARCHETYPE_ARTIFACT)
    }
}

/// EP Commerce source archive and the values patched into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpCommerceArchive {
    pub source_code_url: String,
    /// Injected in place of `PROJECT_REPOSITORY_GROUP_URL` in the Maven settings.
    pub maven_rep_url: String,
    pub platform_version: String,
    pub extension_version: String,
}

impl EpCommerceArchive {
    const SECTION: &'static str = "ep_commerce";

    pub fn validate(&self) -> Result<(), AppError> {
        require_field(&self.source_code_url, "source_code_url", Self::SECTION)?;
        if !self.source_code_url.validate_url() {
            return Err(AppError::validation(format!(
                "{}.source_code_url '{}' is not a valid URL",
                Self::SECTION,
                self.source_code_url
            )));
        }
        require_field(&self.maven_rep_url, "maven_rep_url", Self::SECTION)?;
        require_field(&self.platform_version, "platform_version", Self::SECTION)?;
        require_field(&self.extension_version, "extension_version", Self::SECTION)?;
        Ok(())
    }
}

/// Bloomreach (Hippo CMS) archetype coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomreachArchetype {
    pub archetype_version: String,
    pub group_id: String,
    /// Also the name of the directory the archetype generates.
    pub artifact_id: String,
    pub version: String,
    pub package: String,
    pub project_name: String,
}

impl BloomreachArchetype {
    const SECTION: &'static str = "bloomreach_archetype";

    pub fn validate(&self) -> Result<(), AppError> {
        require_field(&self.group_id, "group_id", Self::SECTION)?;
        require_segment(&self.artifact_id, "artifact_id", Self::SECTION)?;
        require_field(&self.version, "version", Self::SECTION)?;
        require_field(&self.package, "package", Self::SECTION)?;
        require_field(&self.project_name, "project_name", Self::SECTION)?;
        Ok(())
    }

    pub fn archetype_version_or_default(&self) -> &str {
        non_empty_or(&self.archetype_version, BLOOMREACH_ARCHETYPE_VERSION)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}
