//! Generating every artifact of one entity into an app.

use djscaffold_core::{ArtifactToggles, Result, RouterKind};

use crate::{
    artifacts::{
        AdminArtifact, Artifact, FactoryArtifact, ModelArtifact, SerializerArtifact, UrlsArtifact,
        ViewSetArtifact,
    },
    names::EntityNames,
    patcher::{FileChange, FilePatcher},
    project::App,
};

/// Generator for the model, serializer, viewset, factory, admin and route
/// of one entity.
#[derive(Debug, Clone)]
pub struct Generator {
    names: EntityNames,
    router: RouterKind,
    toggles: ArtifactToggles,
}

/// One artifact after it was applied.
#[derive(Debug, Clone)]
pub struct ArtifactChange {
    /// File inside the app, e.g. `models.py`
    pub file_name: &'static str,
    /// Confirmation line for the user
    pub message: String,
    pub change: FileChange,
}

impl Generator {
    pub fn new(names: EntityNames) -> Self {
        Self {
            names,
            router: RouterKind::default(),
            toggles: ArtifactToggles::default(),
        }
    }

    pub fn router(mut self, router: RouterKind) -> Self {
        self.router = router;
        self
    }

    pub fn toggles(mut self, toggles: ArtifactToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Enabled artifacts in the order they are applied.
    pub fn artifacts(&self) -> Vec<Box<dyn Artifact + '_>> {
        let mut artifacts: Vec<Box<dyn Artifact + '_>> = vec![
            Box::new(ModelArtifact::new(&self.names)),
            Box::new(SerializerArtifact::new(&self.names)),
            Box::new(ViewSetArtifact::new(&self.names)),
        ];
        if self.toggles.factory {
            artifacts.push(Box::new(FactoryArtifact::new(&self.names)));
        }
        if self.toggles.admin {
            artifacts.push(Box::new(AdminArtifact::new(&self.names)));
        }
        artifacts.push(Box::new(UrlsArtifact::new(&self.names, self.router)));
        artifacts
    }

    /// Apply every enabled artifact to its file, one file at a time.
    ///
    /// There is no rollback: an error part way leaves the files patched so
    /// far in place.
    pub fn generate(&self, app: &App, patcher: &FilePatcher) -> Result<Vec<ArtifactChange>> {
        self.artifacts()
            .iter()
            .map(|artifact| -> Result<ArtifactChange> {
                let path = app.file(artifact.file_name());
                let change = patcher.patch(&path, |document| artifact.apply(document))?;
                Ok(ArtifactChange {
                    file_name: artifact.file_name(),
                    message: artifact.message(app.label()),
                    change,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_names(generator: &Generator) -> Vec<&'static str> {
        generator
            .artifacts()
            .iter()
            .map(|a| a.file_name())
            .collect()
    }

    #[test]
    fn test_artifact_order() {
        let generator = Generator::new(EntityNames::new("order").unwrap());

        assert_eq!(
            file_names(&generator),
            [
                "models.py",
                "serializers.py",
                "views.py",
                "factories.py",
                "admin.py",
                "urls.py"
            ]
        );
    }

    #[test]
    fn test_disabled_artifacts_are_skipped() {
        let generator = Generator::new(EntityNames::new("order").unwrap()).toggles(
            ArtifactToggles {
                factory: false,
                admin: false,
            },
        );

        assert_eq!(
            file_names(&generator),
            ["models.py", "serializers.py", "views.py", "urls.py"]
        );
    }
}
