//! iconforge CLI entrypoint
//! Parses command-line arguments and dispatches to the generate use case.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use iconforge::application::{GenerateBatchUseCase, GenerateRequest};
use iconforge::generation::{GeneratorPipeline, OutputTarget, Scope, TemplateSource, WikiRepo};
use iconforge::infrastructure::{
    FileSystemArtifactWriter, GitCliWikiRepo, JsonAssociationLoader, LocalTemplateSource,
    RemoteTemplateSource,
};

#[derive(Parser)]
#[command(name = "iconforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate icon association artifacts
    Generate {
        #[command(subcommand)]
        target: GenerateTargets,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum GenerateTargets {
    /// Kotlin association maps published to the project wiki
    Kotlin {
        /// Which association kinds to generate: all, files or folders
        #[arg(long, default_value = "all")]
        scope: String,
        /// GitHub account owning the wiki
        #[arg(long)]
        account: String,
        /// Where artifacts go: 'local' writes next to the binary and
        /// fetches the template over HTTPS; 'repo' works inside a wiki
        /// working copy and synchronizes it
        #[arg(long, default_value = "local")]
        output: String,
        /// Directory containing the association JSON documents
        #[arg(long, default_value = "associations")]
        associations_dir: PathBuf,
        /// Previously-prepared wiki working copy (required with --output repo)
        #[arg(long)]
        wiki_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Starting iconforge CLI");
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate { target } => match target {
            GenerateTargets::Kotlin {
                scope,
                account,
                output,
                associations_dir,
                wiki_dir,
            } => {
                generate_kotlin(scope, account, output, associations_dir, wiki_dir.as_ref())
                    .await?
            }
        },
    }
    Ok(())
}

/// Build the adapters for the requested sync mode and run the batch
async fn generate_kotlin(
    scope: &str,
    account: &str,
    output: &str,
    associations_dir: &PathBuf,
    wiki_dir: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let scope: Scope = scope
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid scope '{scope}': {e}"))?;
    let output: OutputTarget = output
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid output target '{output}': {e}"))?;

    let request = GenerateRequest {
        scope,
        account: account.to_string(),
        output,
        associations_dir: associations_dir.clone(),
        wiki_dir: wiki_dir.cloned(),
    };

    // Artifacts land in the wiki working copy, or next to the binary
    let base_dir = match output {
        OutputTarget::Repo => wiki_dir
            .cloned()
            .context("--wiki-dir is required when --output repo")?,
        OutputTarget::Local => std::env::current_exe()
            .context("Failed to locate the running binary")?
            .parent()
            .map(PathBuf::from)
            .context("Running binary has no parent directory")?,
    };

    let template_source: Arc<dyn TemplateSource> = match output {
        OutputTarget::Repo => Arc::new(LocalTemplateSource::new(base_dir.clone())),
        OutputTarget::Local => Arc::new(RemoteTemplateSource::new(account)?),
    };
    let writer = Arc::new(FileSystemArtifactWriter::new(base_dir.clone()));
    let pipeline = Arc::new(GeneratorPipeline::new(template_source, writer));
    let association_source = Arc::new(JsonAssociationLoader::new(
        request.associations_dir.clone(),
    ));
    let wiki_repo: Option<Arc<dyn WikiRepo>> = match output {
        OutputTarget::Repo => Some(Arc::new(GitCliWikiRepo::new(base_dir))),
        OutputTarget::Local => None,
    };

    let use_case = GenerateBatchUseCase::new(association_source, pipeline, wiki_repo);
    let response = use_case.execute(&request).await.map_err(|e| {
        error!("Generation failed: {e}");
        anyhow::anyhow!("Generation failed: {e}")
    })?;

    info!(
        artifacts = response.artifacts.len(),
        "Finished generating association artifacts"
    );
    if let Some(sync) = response.sync {
        info!(
            committed = sync.committed,
            pushed = sync.pushed,
            "Wiki synchronization complete"
        );
    }
    Ok(())
}
