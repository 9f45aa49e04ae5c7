//! Artifact-registry (Nexus) configuration document and ExtDirect payloads.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Readiness endpoint; requires basic auth.
pub const PING_PATH: &str = "/service/metrics/ping";

const EXT_DIRECT_ACTION: &str = "coreui_Repository";
const EXT_DIRECT_TID: u32 = 27;
const BLOB_STORE: &str = "default";

/// Top-level registry configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub groups: Vec<GroupRepository>,
    pub hosteds: Vec<HostedRepository>,
    pub proxies: Vec<ProxyRepository>,
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for hosted in &self.hosteds {
            require_name("hosteds", &hosted.name)?;
        }
        for proxy in &self.proxies {
            require_name("proxies", &proxy.name)?;
            if proxy.required_auth && proxy.authentication.is_none() {
                return Err(AppError::validation(format!(
                    "proxies '{}': requiredAuth is set but no authentication is given",
                    proxy.name
                )));
            }
        }
        for group in &self.groups {
            require_name("groups", &group.name)?;
        }
        Ok(())
    }

    /// Entries in the order they must be created: hosted, proxy, then group,
    /// since groups reference the other two by name.
    pub fn entries_in_creation_order(&self) -> Vec<RegistryEntry> {
        let hosted = self.hosteds.iter().cloned().map(RegistryEntry::Hosted);
        let proxies = self.proxies.iter().cloned().map(RegistryEntry::Proxy);
        let groups = self.groups.iter().cloned().map(RegistryEntry::Group);
        hosted.chain(proxies).chain(groups).collect()
    }
}

fn require_name(section: &str, name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation(format!("{}: every entry needs a name", section)));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupRepository {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostedRepository {
    pub name: String,
    /// RELEASE, SNAPSHOT or MIXED.
    pub version_policy: String,
    /// STRICT or PERMISSIVE.
    pub layout_policy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProxyRepository {
    pub name: String,
    pub version_policy: String,
    pub layout_policy: String,
    pub remote_url: String,
    pub required_auth: bool,
    pub authentication: Option<ProxyAuth>,
}

#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ProxyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// One registry repository definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEntry {
    Hosted(HostedRepository),
    Proxy(ProxyRepository),
    Group(GroupRepository),
}

impl RegistryEntry {
    pub fn name(&self) -> &str {
        match self {
            RegistryEntry::Hosted(h) => &h.name,
            RegistryEntry::Proxy(p) => &p.name,
            RegistryEntry::Group(g) => &g.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RegistryEntry::Hosted(_) => "hosted",
            RegistryEntry::Proxy(_) => "proxy",
            RegistryEntry::Group(_) => "group",
        }
    }

    /// Repository definition in the shape the Nexus UI endpoint expects.
    pub fn data_config(&self) -> DataConfig {
        match self {
            RegistryEntry::Hosted(h) => DataConfig {
                name: h.name.clone(),
                online: true,
                recipe: "maven2-hosted".to_string(),
                attributes: Attributes {
                    maven: Some(Maven {
                        version_policy: h.version_policy.clone(),
                        layout_policy: h.layout_policy.clone(),
                    }),
                    storage: Storage {
                        write_policy: Some("ALLOW".to_string()),
                        ..Storage::default()
                    },
                    ..Attributes::default()
                },
                ..DataConfig::default()
            },
            RegistryEntry::Proxy(p) => {
                let authentication = if p.required_auth {
                    p.authentication.as_ref().map(|auth| Authentication {
                        kind: "username".to_string(),
                        username: auth.username.clone(),
                        password: auth.password.clone(),
                        ntlm_host: String::new(),
                        ntlm_domain: String::new(),
                    })
                } else {
                    None
                };
                DataConfig {
                    name: p.name.clone(),
                    online: true,
                    auth_enabled: p.required_auth,
                    recipe: "maven2-proxy".to_string(),
                    attributes: Attributes {
                        maven: Some(Maven {
                            version_policy: p.version_policy.clone(),
                            layout_policy: p.layout_policy.clone(),
                        }),
                        proxy: Some(Proxy {
                            remote_url: p.remote_url.clone(),
                            content_max_age: -1,
                            metadata_max_age: 1440,
                        }),
                        http_client: Some(HttpClient {
                            blocked: false,
                            auto_block: true,
                            authentication,
                        }),
                        negative_cache: Some(NegativeCache { enabled: true, time_to_live: 1440 }),
                        ..Attributes::default()
                    },
                    ..DataConfig::default()
                }
            }
            RegistryEntry::Group(g) => DataConfig {
                name: g.name.clone(),
                online: true,
                recipe: "maven2-group".to_string(),
                attributes: Attributes {
                    group: Some(Group { member_names: g.members.clone() }),
                    ..Attributes::default()
                },
                ..DataConfig::default()
            },
        }
    }

    /// Full ExtDirect envelope carrying this single definition.
    pub fn envelope(&self) -> ExtDirectRequest {
        ExtDirectRequest {
            action: EXT_DIRECT_ACTION.to_string(),
            method: "create".to_string(),
            data: vec![self.data_config()],
            kind: "rpc".to_string(),
            tid: EXT_DIRECT_TID,
        }
    }
}

/// ExtDirect RPC envelope; `data` holds exactly one definition.
#[derive(Debug, Clone, Serialize)]
pub struct ExtDirectRequest {
    pub action: String,
    pub method: String,
    pub data: Vec<DataConfig>,
    #[serde(rename = "type")]
    pub kind: String,
    pub tid: u32,
}

/// ExtDirect reply. Nexus answers 200 even on failure; `result.success` decides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtDirectResponse {
    #[serde(default)]
    pub result: Option<ExtDirectResult>,
}

impl ExtDirectResponse {
    pub fn succeeded(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.success)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtDirectResult {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataConfig {
    pub attributes: Attributes,
    pub name: String,
    pub format: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub online: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auth_enabled: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub http_request_settings: bool,
    pub recipe: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Attributes {
    pub storage: Storage,
    /// Serialized as `null` when absent.
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<Maven>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<Proxy>,
    #[serde(rename = "httpclient", skip_serializing_if = "Option::is_none")]
    pub http_client: Option<HttpClient>,
    #[serde(rename = "negativeCache", skip_serializing_if = "Option::is_none")]
    pub negative_cache: Option<NegativeCache>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub blob_store_name: String,
    pub strict_content_type_validation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_policy: Option<String>,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            blob_store_name: BLOB_STORE.to_string(),
            strict_content_type_validation: true,
            write_policy: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub member_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Maven {
    pub version_policy: String,
    pub layout_policy: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proxy {
    pub remote_url: String,
    pub content_max_age: i64,
    pub metadata_max_age: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpClient {
    pub blocked: bool,
    pub auto_block: bool,
    /// Serialized as `null` when the proxy needs no credentials.
    pub authentication: Option<Authentication>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeCache {
    pub enabled: bool,
    pub time_to_live: i64,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    #[serde(rename = "type")]
    pub kind: String,
    pub username: String,
    pub password: String,
    pub ntlm_host: String,
    pub ntlm_domain: String,
}

impl std::fmt::Debug for Authentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authentication")
            .field("type", &self.kind)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
