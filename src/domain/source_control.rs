//! Source-control (Gogs) configuration document and request payloads.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::content_source::{
    BloomreachArchetype, ContentSource, DantaAemArchetype, EpCommerceArchive,
};
use crate::domain::validation::validate_path_segment;
use crate::domain::{AppError, Credentials};

/// Readiness endpoint before installation.
pub const ROOT_PATH: &str = "/";

/// Readiness endpoint once the installed instance has restarted.
pub const HEALTHCHECK_PATH: &str = "/healthcheck";

/// Administrative account name Gogs refuses to install with.
pub const RESERVED_ADMIN_NAME: &str = "admin";

/// README template requested for server-initialized repositories.
pub const DEFAULT_README: &str = "Default";

/// Top-level source-control configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceControlConfig {
    pub init_data: InitData,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,
}

impl SourceControlConfig {
    /// Check every rule the run depends on, before any network call.
    pub fn validate(&self) -> Result<(), AppError> {
        self.init_data.validate()?;

        for (index, org) in self.organizations.iter().enumerate() {
            if !validate_path_segment(&org.username) {
                return Err(AppError::validation(format!(
                    "organizations[{}].username '{}' is not a valid name",
                    index, org.username
                )));
            }
        }

        for (index, repo) in self.repositories.iter().enumerate() {
            repo.validate().map_err(|e| match e {
                AppError::Validation(message) => {
                    AppError::Validation(format!("repositories[{}]: {}", index, message))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Installation parameters for a fresh Gogs instance.
///
/// Fields default to empty so that absent keys surface as validation errors
/// naming the field, not as JSON decoding errors.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct InitData {
    #[validate(length(min = 1, code = "required"))]
    pub domain: String,
    #[serde(deserialize_with = "string_or_number")]
    #[validate(length(min = 1, code = "required"), custom(function = "numeric"))]
    pub http_port: String,
    #[validate(length(min = 1, code = "required"), url)]
    pub app_url: String,
    #[validate(length(min = 1, code = "required"), custom(function = "not_reserved_admin"))]
    pub admin_name: String,
    #[validate(length(min = 1, code = "required"))]
    pub admin_passwd: String,
    #[validate(length(min = 1, code = "required"))]
    pub admin_confirm_passwd: String,
    #[validate(length(min = 1, code = "required"), email)]
    pub admin_email: String,
    #[validate(length(min = 1, code = "required"))]
    pub repo_root_path: String,
    #[validate(length(min = 1, code = "required"))]
    pub log_root_path: String,
}

impl std::fmt::Debug for InitData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitData")
            .field("domain", &self.domain)
            .field("http_port", &self.http_port)
            .field("app_url", &self.app_url)
            .field("admin_name", &self.admin_name)
            .field("admin_passwd", &"[REDACTED]")
            .field("admin_email", &self.admin_email)
            .field("repo_root_path", &self.repo_root_path)
            .field("log_root_path", &self.log_root_path)
            .finish()
    }
}

fn numeric(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("numeric"))
    }
}

fn not_reserved_admin(value: &str) -> Result<(), ValidationError> {
    if value == RESERVED_ADMIN_NAME { Err(ValidationError::new("reserved")) } else { Ok(()) }
}

impl InitData {
    /// Run the field rules and report the first violation in document order.
    pub fn validate(&self) -> Result<(), AppError> {
        Validate::validate(self).map_err(|errors| AppError::validation(self.describe(&errors)))
    }

    fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("domain", self.domain.as_str()),
            ("http_port", self.http_port.as_str()),
            ("app_url", self.app_url.as_str()),
            ("admin_name", self.admin_name.as_str()),
            ("admin_passwd", self.admin_passwd.as_str()),
            ("admin_confirm_passwd", self.admin_confirm_passwd.as_str()),
            ("admin_email", self.admin_email.as_str()),
            ("repo_root_path", self.repo_root_path.as_str()),
            ("log_root_path", self.log_root_path.as_str()),
        ]
    }

    fn describe(&self, errors: &ValidationErrors) -> String {
        let violations = errors.field_errors();
        for (field, value) in self.fields() {
            let Some(failed) = violations.get(field) else {
                continue;
            };
            if failed.iter().any(|e| e.code == "required") {
                return format!("init_data.{} is required", field);
            }
            let code = failed.first().map(|e| e.code.to_string()).unwrap_or_default();
            return match code.as_str() {
                "numeric" => format!("init_data.{} '{}' must be numeric", field, value),
                "url" => format!("init_data.{} '{}' is not a valid URL", field, value),
                "email" => format!("init_data.{} '{}' is not a valid e-mail address", field, value),
                "reserved" => format!("init_data.{} must not be '{}'", field, RESERVED_ADMIN_NAME),
                other => format!("init_data.{} '{}' failed the {} rule", field, value, other),
            };
        }
        errors.to_string()
    }

    /// Credentials used for every authenticated API call and for the push.
    pub fn admin_credentials(&self) -> Credentials {
        Credentials::new(self.admin_name.clone(), self.admin_passwd.clone())
    }

    /// Form fields for `POST /install`, including the fixed server settings.
    pub fn install_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("domain", self.domain.clone()),
            ("http_port", self.http_port.clone()),
            ("app_url", self.app_url.clone()),
            ("admin_name", self.admin_name.clone()),
            ("admin_passwd", self.admin_passwd.clone()),
            ("admin_confirm_passwd", self.admin_confirm_passwd.clone()),
            ("admin_email", self.admin_email.clone()),
            ("repo_root_path", self.repo_root_path.clone()),
            ("log_root_path", self.log_root_path.clone()),
            ("db_type", "SQLite3".to_string()),
            ("ssl_mode", "disable".to_string()),
            ("db_path", "data/gogs.db".to_string()),
            ("app_name", "Gogs".to_string()),
            ("run_user", "git".to_string()),
            // empty disables cloning over ssh
            ("ssh_port", String::new()),
            ("enable_federated_avatar", "on".to_string()),
            ("enable_captcha", "on".to_string()),
        ]
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

/// Organization to create; serialized as-is for the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub username: String,
    pub full_name: String,
    pub description: String,
    pub website: String,
    pub location: String,
}

/// Code repository as written in the configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepositoryEntry {
    pub name: String,
    pub description: String,
    pub private: bool,
    /// Empty means the administrative account.
    pub owner: String,
    pub content_setup_type: String,
    pub danta_aem_archetype: Option<DantaAemArchetype>,
    pub ep_commerce: Option<EpCommerceArchive>,
    pub bloomreach_archetype: Option<BloomreachArchetype>,
}

impl RepositoryEntry {
    pub fn validate(&self) -> Result<(), AppError> {
        if !validate_path_segment(&self.name) {
            return Err(AppError::validation(format!(
                "name '{}' is not a valid repository name",
                self.name
            )));
        }
        if !self.owner.is_empty() && !validate_path_segment(&self.owner) {
            return Err(AppError::validation(format!(
                "owner '{}' is not a valid account name",
                self.owner
            )));
        }
        self.content_source().map(|_| ())
    }

    pub fn content_source(&self) -> Result<ContentSource, AppError> {
        ContentSource::from_tag(
            &self.content_setup_type,
            self.danta_aem_archetype.as_ref(),
            self.ep_commerce.as_ref(),
            self.bloomreach_archetype.as_ref(),
        )
    }

    pub fn resolve_owner(&self, admin: &str) -> String {
        if self.owner.is_empty() { admin.to_string() } else { self.owner.clone() }
    }

    /// Derive the fully resolved repository; the entry itself is left untouched.
    pub fn resolve(&self, admin: &str) -> Result<CodeRepository, AppError> {
        Ok(CodeRepository {
            name: self.name.clone(),
            description: self.description.clone(),
            private: self.private,
            owner: self.resolve_owner(admin),
            content: self.content_source()?,
        })
    }
}

/// Repository with its owner resolved and its content strategy decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRepository {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub owner: String,
    pub content: ContentSource,
}

impl CodeRepository {
    pub fn create_request(&self) -> CreateRepositoryRequest {
        CreateRepositoryRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            private: self.private,
            auto_init: self.content.auto_init(),
            readme: DEFAULT_README.to_string(),
        }
    }
}

/// JSON body of `POST /api/v1/admin/users/{owner}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub auto_init: bool,
    pub readme: String,
}
