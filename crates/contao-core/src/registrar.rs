//! Supplementary package repositories

use contao_fs::{ContaoPath, NormalizedPath};

use crate::host::{HostContext, RepositoryDescriptor, RepositoryKind};

/// Mirror serving legacy extension repository packages to Composer.
pub const LEGACY_REPOSITORY_URL: &str = "http://legacy-packages-via.contao-community-alliance.org/";

/// Register `<root>/composer/packages` as an artifact repository if the
/// directory exists. Returns whether a repository was added.
pub fn register_artifact_repository_if_present(host: &mut HostContext, root: &NormalizedPath) -> bool {
    let path = root.join(ContaoPath::ArtifactPackages.as_str());
    if !path.is_dir() {
        tracing::debug!(path = %path, "No local artifact repository");
        return false;
    }

    tracing::info!(path = %path, "Registering local artifact repository");
    host.repositories
        .add(RepositoryDescriptor::new(RepositoryKind::Artifact, path.as_str()));
    true
}

/// Register the legacy package mirror.
///
/// Reachability is not checked; an unreachable mirror only shows up once
/// the host resolves dependencies.
pub fn register_legacy_repository(host: &mut HostContext) {
    tracing::info!(url = LEGACY_REPOSITORY_URL, "Registering legacy package repository");
    host.repositories.add(RepositoryDescriptor::new(
        RepositoryKind::Composer,
        LEGACY_REPOSITORY_URL,
    ));
}
