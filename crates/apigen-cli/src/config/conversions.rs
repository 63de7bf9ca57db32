use apigen_docs::{ArtifactCoordinates, BuildOptions};

use crate::config::{ApigenConfig, ArtifactConfig};

// Conversion implementations: config types -> library types

impl From<&ArtifactConfig> for ArtifactCoordinates {
    fn from(artifact: &ArtifactConfig) -> Self {
        ArtifactCoordinates {
            group_id: artifact.group_id.clone(),
            artifact_id: artifact.artifact_id.clone(),
            version: artifact.version.clone(),
        }
    }
}

impl From<&ApigenConfig> for BuildOptions {
    fn from(config: &ApigenConfig) -> Self {
        BuildOptions {
            max_depth: config.max_depth,
        }
    }
}
