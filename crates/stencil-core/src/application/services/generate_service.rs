//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Scan documents into a registry
//! 2. Emit the requested artifact families
//! 3. Format and write artifacts
//! 4. Remove stale generated files

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{ArtifactFormatter, Filesystem},
        services::scan_service::{ScanFailure, ScanService},
    },
    domain::{
        Artifact, ArtifactRoot, ArtifactSet, DEFAULT_CLIENT_MODULE, EmitContext, EmitTarget,
        emit::{client::CLIENT_FILE, types::TYPES_FILE},
        emit_all, is_generated,
    },
    error::StencilResult,
};

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub output_root: PathBuf,
    pub routes_root: PathBuf,
    pub targets: Vec<EmitTarget>,
    /// Module specifier route files import the client from.
    pub client_module: String,
    /// Plan only; touch nothing on disk.
    pub dry_run: bool,
    /// Remove generated files that are no longer emitted.
    pub clean: bool,
}

impl GenerateRequest {
    pub fn new(output_root: impl Into<PathBuf>, routes_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            routes_root: routes_root.into(),
            targets: EmitTarget::ALL.to_vec(),
            client_module: DEFAULT_CLIENT_MODULE.into(),
            dry_run: false,
            clean: true,
        }
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = EmitTarget>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    pub fn with_client_module(mut self, module: impl Into<String>) -> Self {
        self.client_module = module.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    fn wants(&self, target: EmitTarget) -> bool {
        self.targets.contains(&target)
    }

    fn root_dir(&self, root: ArtifactRoot) -> &Path {
        match root {
            ArtifactRoot::Output => &self.output_root,
            ArtifactRoot::Routes => &self.routes_root,
        }
    }
}

/// What a generation run did (or, for a dry run, would do).
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub schemas: Vec<String>,
    pub written: Vec<PathBuf>,
    /// Artifacts whose content on disk already matched.
    pub unchanged: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub skipped: Vec<String>,
    pub failures: Vec<ScanFailure>,
    pub duplicates: Vec<String>,
    pub warnings: Vec<String>,
    pub dry_run: bool,
}

/// Main generation service.
pub struct GenerateService {
    scanner: ScanService,
    filesystem: Box<dyn Filesystem>,
    formatter: Box<dyn ArtifactFormatter>,
}

impl GenerateService {
    pub fn new(
        scanner: ScanService,
        filesystem: Box<dyn Filesystem>,
        formatter: Box<dyn ArtifactFormatter>,
    ) -> Self {
        Self {
            scanner,
            filesystem,
            formatter,
        }
    }

    pub fn scanner(&self) -> &ScanService {
        &self.scanner
    }

    /// Run the full workflow for `request`.
    ///
    /// Per-document problems end up in the summary. Errors are returned only
    /// when the source cannot be listed, the artifact set is invalid, or a
    /// write fails.
    #[instrument(
        skip_all,
        fields(
            output = %request.output_root.display(),
            routes = %request.routes_root.display(),
            dry_run = request.dry_run
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> StencilResult<GenerationSummary> {
        let report = self.scanner.scan()?;

        let mut summary = GenerationSummary {
            schemas: report.registry.identifiers().map(str::to_string).collect(),
            skipped: report.skipped,
            failures: report.failures,
            duplicates: report.duplicates,
            dry_run: request.dry_run,
            ..GenerationSummary::default()
        };

        let ctx = EmitContext::new(self.scanner.conventions().clone())
            .with_client_module(request.client_module.clone());
        let mut set = emit_all(&report.registry, &ctx, &request.targets)?;

        self.check_upstream(request, &mut summary);
        self.format_all(&mut set);

        for artifact in set.iter() {
            let path = request.root_dir(artifact.root).join(artifact.path.as_path());
            if request.dry_run {
                summary.written.push(path);
            } else if self.write(&path, artifact)? {
                summary.written.push(path);
            } else {
                summary.unchanged.push(path);
            }
        }

        if request.clean {
            summary.removed = self.cleanup(request, &set)?;
        }

        info!(
            schemas = summary.schemas.len(),
            written = summary.written.len(),
            removed = summary.removed.len(),
            "Generation completed"
        );
        Ok(summary)
    }

    /// Warn when the client is emitted alone and the types it imports are
    /// not on disk.
    fn check_upstream(&self, request: &GenerateRequest, summary: &mut GenerationSummary) {
        if !request.wants(EmitTarget::Client) || request.wants(EmitTarget::Types) {
            return;
        }
        let types = request.output_root.join(TYPES_FILE);
        if !self.filesystem.exists(&types) {
            warn!(path = %types.display(), "missing upstream artifact");
            summary.warnings.push(format!(
                "{} does not exist; the generated client imports from it",
                types.display()
            ));
        }
    }

    /// Format in place. A failing artifact keeps its unformatted text.
    fn format_all(&self, set: &mut ArtifactSet) {
        for artifact in set.iter_mut() {
            match self.formatter.format(artifact) {
                Ok(formatted) => artifact.content = formatted,
                Err(error) => {
                    warn!(path = %artifact.path, error = %error, "formatting failed");
                }
            }
        }
    }

    /// Returns `false` when the file already holds exactly this content.
    fn write(&self, path: &Path, artifact: &Artifact) -> StencilResult<bool> {
        if self.filesystem.exists(path)
            && self
                .filesystem
                .read_to_string(path)
                .is_ok_and(|current| current == artifact.content)
        {
            debug!(path = %path.display(), "Artifact unchanged");
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &artifact.content)?;
        debug!(path = %path.display(), kind = %artifact.kind, "Artifact written");
        Ok(true)
    }

    /// Remove files that carry the generated header but are not part of
    /// `set`. Only roots owned by a requested target are searched, and an
    /// output file belonging to a target that was not requested is kept.
    fn cleanup(&self, request: &GenerateRequest, set: &ArtifactSet) -> StencilResult<Vec<PathBuf>> {
        let current: HashSet<PathBuf> = set
            .iter()
            .map(|a| request.root_dir(a.root).join(a.path.as_path()))
            .collect();

        let mut roots = Vec::new();
        if request.wants(EmitTarget::Types) && request.wants(EmitTarget::Client) {
            roots.push(request.output_root.clone());
        }
        if request.wants(EmitTarget::Routes) && !roots.contains(&request.routes_root) {
            roots.push(request.routes_root.clone());
        }

        let mut protected = HashSet::new();
        if !request.wants(EmitTarget::Types) {
            protected.insert(request.output_root.join(TYPES_FILE));
        }
        if !request.wants(EmitTarget::Client) {
            protected.insert(request.output_root.join(CLIENT_FILE));
        }

        let mut removed = Vec::new();
        for root in roots {
            for path in self.filesystem.list_files(&root)? {
                if current.contains(&path) || protected.contains(&path) {
                    continue;
                }
                let generated = self
                    .filesystem
                    .read_to_string(&path)
                    .is_ok_and(|content| is_generated(&content));
                if !generated {
                    continue;
                }

                if !request.dry_run {
                    self.filesystem.remove_file(&path)?;
                }
                info!(path = %path.display(), "stale artifact removed");
                removed.push(path);
            }
        }
        Ok(removed)
    }
}
