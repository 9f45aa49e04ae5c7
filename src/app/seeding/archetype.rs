//! Project generation through Maven archetypes.

use std::path::{Path, PathBuf};

use log::info;

use crate::domain::{AppError, BloomreachArchetype, DantaAemArchetype};
use crate::ports::ProcessRunner;

const MAVEN: &str = "mvn";
const BLOOMREACH_PLUGIN_GOAL: &str = "org.apache.maven.plugins:maven-archetype-plugin:2.4:generate";
const BLOOMREACH_ARCHETYPE_REPOSITORY: &str = "https://maven.onehippo.com/maven2";
const BLOOMREACH_ARCHETYPE_GROUP: &str = "org.onehippo.cms7";
const BLOOMREACH_ARCHETYPE_ARTIFACT: &str = "hippo-project-archetype";

fn define(key: &str, value: &str) -> String {
    format!("-D{}={}", key, value)
}

pub fn danta_arguments(params: &DantaAemArchetype) -> Vec<String> {
    vec![
        "archetype:generate".to_string(),
        define("archetypeGroupId", params.archetype_group_or_default()),
        define("archetypeArtifactId", params.archetype_artifact_or_default()),
        define("archetypeVersion", &params.archetype_version),
        define("groupId", &params.group_id),
        define("artifactId", &params.artifact_id),
        define("project-app-name", &params.app_name),
        define("package", &params.package),
        define("cq-server", &params.aem_server),
        define("nexus-public-url", &params.nexus_url),
        define("interactiveMode", "false"),
    ]
}

pub fn bloomreach_arguments(params: &BloomreachArchetype) -> Vec<String> {
    vec![
        BLOOMREACH_PLUGIN_GOAL.to_string(),
        define("archetypeRepository", BLOOMREACH_ARCHETYPE_REPOSITORY),
        define("archetypeGroupId", BLOOMREACH_ARCHETYPE_GROUP),
        define("archetypeArtifactId", BLOOMREACH_ARCHETYPE_ARTIFACT),
        define("archetypeVersion", params.archetype_version_or_default()),
        define("groupId", &params.group_id),
        define("artifactId", &params.artifact_id),
        define("version", &params.version),
        define("package", &params.package),
        define("projectName", &params.project_name),
        define("interactiveMode", "false"),
    ]
}

/// Generate a Danta AEM project; the content root is `<workdir>/<app_name>`.
pub fn generate_danta<R>(
    runner: &R,
    params: &DantaAemArchetype,
    workdir: &Path,
) -> Result<PathBuf, AppError>
where
    R: ProcessRunner + ?Sized,
{
    info!("generating danta aem project {}", params.app_name);
    generate(runner, &danta_arguments(params), workdir, &params.app_name)
}

/// Generate a Bloomreach project; the content root is `<workdir>/<artifact_id>`.
pub fn generate_bloomreach<R>(
    runner: &R,
    params: &BloomreachArchetype,
    workdir: &Path,
) -> Result<PathBuf, AppError>
where
    R: ProcessRunner + ?Sized,
{
    info!("generating bloomreach project {}", params.project_name);
    generate(runner, &bloomreach_arguments(params), workdir, &params.artifact_id)
}

fn generate<R>(runner: &R, args: &[String], workdir: &Path, output: &str) -> Result<PathBuf, AppError>
where
    R: ProcessRunner + ?Sized,
{
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    runner.run(MAVEN, &args, workdir)?;

    let content_root = workdir.join(output);
    if !content_root.is_dir() {
        return Err(AppError::Process {
            command: format!("{} {}", MAVEN, args[0]),
            details: format!("expected generated project at {}", content_root.display()),
        });
    }
    Ok(content_root)
}
