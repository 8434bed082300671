//! Command-line interface
//!
//! One-shot harness over the selection core: search a catalog, inspect a
//! parameter's stat capabilities, or run the full selection
//! reconciliation and print the query a host panel would receive.

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::path::PathBuf;

use crate::catalog::{Catalog, MemoryCatalog, ParameterMetadata, RestCatalog};
use crate::config::Config;
use crate::editor::{EditorHost, ParameterQueryEditor, Query, QueryType, fetch_metadata};
use crate::stats::{EngTypeStatRegistry, StatKind, StatRegistry};
use crate::suggest::SuggestionProvider;

#[derive(Debug, Parser)]
#[command(name = "telepick", version, about = "Search and pick telemetry parameters")]
pub struct Cli {
    /// JSON catalog file (array of parameter records)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Base URL of the archive's HTTP API
    #[arg(long, global = true, conflicts_with = "catalog")]
    pub url: Option<String>,

    /// Instance name under the HTTP API
    #[arg(long, global = true, requires = "url")]
    pub instance: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Grouped typeahead suggestions for a partial name
    Search { text: String },
    /// Flat selectable options for a partial name
    Options { text: String },
    /// Metadata and stat capabilities of one parameter
    Info { qualified_name: String },
    /// Reconcile a query against a selected parameter and print the result
    Pick {
        qualified_name: String,
        /// Query type the host panel is composing
        #[arg(long, default_value = "samples")]
        query_type: QueryType,
        /// Stats currently requested by the query
        #[arg(long, value_delimiter = ',')]
        stats: Vec<StatKind>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = Config::load();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        if let Some(path) = &self.catalog {
            let catalog = MemoryCatalog::from_file(path)?;
            return runtime.block_on(run_command(self.command, catalog, &config));
        }

        let url = self
            .url
            .clone()
            .or_else(|| config.catalog.url.clone())
            .ok_or_else(|| eyre!("no catalog: pass --catalog FILE or --url URL"))?;
        let instance = self
            .instance
            .clone()
            .or_else(|| config.catalog.instance.clone())
            .ok_or_else(|| eyre!("no instance: pass --instance or set it in the config"))?;
        let catalog = RestCatalog::new(url, instance);
        runtime.block_on(run_command(self.command, catalog, &config))
    }
}

async fn run_command<C: Catalog>(command: Command, catalog: C, config: &Config) -> Result<()> {
    let provider = SuggestionProvider::with_limits(
        catalog,
        config.search.suggest_limit,
        config.search.options_limit,
    );
    match command {
        Command::Search { text } => {
            for group in provider.suggest(&text).await? {
                println!("{}", group.namespace);
                for item in &group.items {
                    match &item.documentation {
                        Some(docs) => println!("  {}  {}", item.label, docs),
                        None => println!("  {}", item.label),
                    }
                }
            }
        }
        Command::Options { text } => {
            for option in provider.options(&text).await? {
                match &option.description {
                    Some(description) => println!("{}  {}", option.value, description),
                    None => println!("{}", option.value),
                }
            }
        }
        Command::Info { qualified_name } => {
            let dictionary = provider.catalog().load_dictionary().await?;
            match dictionary.get_parameter_info(&qualified_name) {
                Some(info) => print_info(info),
                None => println!("{qualified_name}: not in dictionary"),
            }
        }
        Command::Pick {
            qualified_name,
            query_type,
            stats,
        } => {
            let mut editor = ParameterQueryEditor::new(EngTypeStatRegistry);
            let mut query = Query::new(query_type);
            query.parameter = Some(qualified_name.clone());
            query.stats = (!stats.is_empty()).then_some(stats);
            if let Some(request) = editor.sync(&query) {
                let response = fetch_metadata(provider.catalog(), &request).await?;
                editor.apply_metadata(response);
            }
            let mut host = PrintingHost;
            editor.select_parameter(Some(qualified_name), &query, &mut host);
        }
    }
    Ok(())
}

fn print_info(info: &ParameterMetadata) {
    println!("{}", info.qualified_name);
    if let Some(eng_type) = info.eng_type() {
        println!("  type: {eng_type}");
    }
    if let Some(units) = &info.units {
        println!("  units: {units}");
    }
    if let Some(docs) = info
        .long_description
        .as_ref()
        .or(info.short_description.as_ref())
    {
        println!("  {docs}");
    }
    let registry = EngTypeStatRegistry;
    let valid: Vec<String> = StatKind::ALL
        .iter()
        .filter(|kind| registry.is_valid(**kind, info))
        .map(StatKind::to_string)
        .collect();
    println!("  stats: {}", valid.join(" "));
    println!("  default stat: {}", registry.default_stat(Some(info)));
}

/// Prints committed queries the way a host panel would consume them
struct PrintingHost;

impl EditorHost for PrintingHost {
    fn commit_query(&mut self, query: Query) {
        match serde_json::to_string_pretty(&query) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => log::warn!("cannot render query: {err}"),
        }
    }

    fn run_query(&mut self) {
        println!("run query");
    }
}
