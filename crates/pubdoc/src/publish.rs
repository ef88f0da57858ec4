//! Publish command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use pubdoc_config::{CliSettings, Config};
use pubdoc_confluence::{ConfluenceClient, LocalDocument, PublishOutcome, Publisher};
use pubdoc_renderer::MarkdownRenderer;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for publishing a markdown file.
#[derive(Args, Debug)]
pub(crate) struct PublishArgs {
    /// Path to the markdown file to publish.
    #[arg(
        long = "markdownFilePath",
        visible_alias = "markdown-file-path",
        value_name = "PATH"
    )]
    pub(crate) markdown_file_path: Option<PathBuf>,

    /// Page title (default: file name without extension).
    #[arg(long)]
    pub(crate) title: Option<String>,

    /// Create new pages under this parent page ID.
    #[arg(long, alias = "parentID", value_name = "ID")]
    pub(crate) parent_id: Option<String>,

    /// Target space ID (overrides CONFLUENCE_SPACEID).
    #[arg(long, alias = "spaceID", value_name = "ID")]
    pub(crate) space_id: Option<String>,

    /// Confluence hostname (overrides CONFLUENCE_DOMAIN).
    #[arg(long)]
    pub(crate) domain: Option<String>,

    /// Environment file to load (default: .env if present).
    #[arg(long, value_name = "PATH")]
    pub(crate) env_file: Option<PathBuf>,

    /// Delete the page with this document's title instead of publishing.
    #[arg(long, conflicts_with = "dry_run")]
    pub(crate) delete: bool,

    /// Render the document without contacting Confluence.
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Log each request.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PublishArgs {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, the markdown file, or any
    /// Confluence call fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let path = self.markdown_file_path.clone().unwrap_or_default();
        let document = self.load_document(&path)?;

        if self.dry_run {
            print_dry_run(output, &document);
            return Ok(());
        }

        if self.delete && document.title.is_empty() {
            return Err(CliError::EmptyTitle(path));
        }

        let config = Config::load(self.env_file.as_deref(), Some(&self.cli_settings()))?;
        let client = ConfluenceClient::from_config(&config);

        if self.delete {
            let title = &document.title;
            output.info(&format!(
                "Deleting '{title}' from space {}...",
                client.space_id()
            ));
            let deleted = Publisher::new(&client).unpublish(title)?;
            print_delete_result(output, title, deleted);
            return Ok(());
        }

        output.info(&format!(
            "Publishing '{}' to space {}...",
            document.title,
            client.space_id()
        ));

        let outcome = Publisher::new(&client)
            .with_parent_id(self.parent_id.clone())
            .publish(&document)?;
        print_publish_result(output, &document, &outcome);
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            domain: self.domain.clone(),
            space_id: self.space_id.clone(),
        }
    }

    fn load_document(&self, path: &Path) -> Result<LocalDocument, CliError> {
        let document = LocalDocument::load(path, &MarkdownRenderer::new())?;
        Ok(match &self.title {
            Some(title) => document.with_title(title),
            None => document,
        })
    }
}

fn print_dry_run(output: &Output, document: &LocalDocument) {
    output.highlight("[DRY RUN] No changes made.");
    output.detail("Title", &document.title);
    output.detail("HTML", format!("{} bytes", document.html.len()));
}

fn print_publish_result(output: &Output, document: &LocalDocument, outcome: &PublishOutcome) {
    match outcome {
        PublishOutcome::Created { id } => {
            info!("Created page {id}");
            output.success("Page created successfully!");
            output.detail("ID", id);
            output.detail("Title", &document.title);
        }
        PublishOutcome::Updated(page) => {
            info!("Updated page {}", page.summary.id);
            output.success("Page updated successfully!");
            output.detail("ID", &page.summary.id);
            output.detail("Title", &page.summary.title);
            output.detail("Version", page.summary.version.number);
        }
        PublishOutcome::Unresolved => {
            output.warning(&format!(
                "A page titled '{}' exists but no single page matched it; nothing was changed.",
                document.title
            ));
        }
    }
}

fn print_delete_result(output: &Output, title: &str, deleted: bool) {
    if deleted {
        output.success(&format!("Page '{title}' deleted."));
    } else {
        output.warning(&format!(
            "No single page titled '{title}' found; nothing was deleted."
        ));
    }
}
