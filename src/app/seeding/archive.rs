//! Seed from a downloadable source archive that needs local patching.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::{AppError, EpCommerceArchive};
use crate::ports::{ArtifactDownloader, ProcessRunner};

const ARCHIVE_FILE: &str = "source";
const EXTRACTED_ROOT: &str = "ep-commerce";
const SETTINGS_PATH: [&str; 3] = ["extensions", "maven", "settings.xml"];
const REPOSITORY_PLACEHOLDER: &str = "PROJECT_REPOSITORY_GROUP_URL";
const VERSION_SCRIPT: &str = "./devops/scripts/set-ep-versions.sh";
const VERSIONS_BACKUP: &str = "commerce-manager/cm-modules/pom.xml.versionsBackup";

/// Download, extract and patch the archive; the content root is
/// `<workdir>/ep-commerce`.
///
/// Download and extraction failures are fatal. The settings rewrite, version
/// bump and backup cleanup only log a warning.
pub fn unpack_archive<R, D>(
    runner: &R,
    downloader: &D,
    params: &EpCommerceArchive,
    workdir: &Path,
) -> Result<PathBuf, AppError>
where
    R: ProcessRunner + ?Sized,
    D: ArtifactDownloader + ?Sized,
{
    info!("downloading EP commerce project");
    let archive = workdir.join(ARCHIVE_FILE);
    let bytes = downloader.download(&params.source_code_url, &archive)?;
    info!("{} bytes downloaded", bytes);

    info!("unzipping EP commerce source code");
    runner.run("unzip", &[ARCHIVE_FILE], workdir)?;

    let content_root = workdir.join(EXTRACTED_ROOT);
    let settings = SETTINGS_PATH.iter().fold(content_root.clone(), |path, part| path.join(part));

    info!("editing settings.xml file");
    if let Err(e) = replace_in_file(&settings, REPOSITORY_PLACEHOLDER, &params.maven_rep_url) {
        warn!("error editing settings file: {}", e);
    }

    info!("changing versions");
    let settings_arg = settings.to_string_lossy();
    if let Err(e) = runner.run(
        VERSION_SCRIPT,
        &["-s", &settings_arg, &params.platform_version, &params.extension_version],
        &content_root,
    ) {
        warn!("error setting versions: {}", e);
    }

    info!("removing unused files");
    if let Err(e) = fs::remove_file(content_root.join(VERSIONS_BACKUP)) {
        warn!("error removing unused files: {}", e);
    }

    Ok(content_root)
}

/// Replace every occurrence of `from` with `to` in the file at `path`.
fn replace_in_file(path: &Path, from: &str, to: &str) -> Result<(), AppError> {
    let contents = fs::read_to_string(path)?;
    fs::write(path, contents.replace(from, to))?;
    Ok(())
}
