//! Neighborhood command handler.
//!
//! Implements the `neighborhood` subcommand: diff two concept graphs and
//! show the subgraph within a number of layers around one code.

use super::output::{render_legend, TextLayout};
use super::{load_pair, GraphPaths};
use crate::color::{ColorBucket, ColorRegistry};
use crate::config::{AppConfig, OutputFormat};
use crate::diff::DiffGraphBuilder;
use crate::neighborhood::NeighborhoodSession;
use crate::render::{DiffStyle, LayoutOutput};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Options of the `neighborhood` subcommand that are not part of [`AppConfig`].
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodOptions {
    pub paths: GraphPaths,
    pub focus: String,
    /// Show the whole component reachable from the focus
    pub all_layers: bool,
}

/// Run the neighborhood command.
pub fn run_neighborhood(options: &NeighborhoodOptions, config: &AppConfig) -> Result<()> {
    let (left, right) = load_pair(&options.paths)?;

    let registry = Arc::new(ColorRegistry::new());
    let diff = DiffGraphBuilder::new()
        .with_config(config.diff.clone())
        .with_registry(Arc::clone(&registry))
        .build(&left, &right)
        .context("Failed to build diff graph")?;

    let mut session =
        NeighborhoodSession::open_with_config(Arc::new(diff), &options.focus, &config.neighborhood)
            .with_context(|| format!("Cannot explore around '{}'", options.focus))?;
    if options.all_layers {
        while !session.is_complete() {
            session.increase_layer();
        }
    }
    if !session.is_complete() {
        tracing::info!(
            "Showing {} of {} reachable concepts; raise --layers (max depth {}) to see more",
            session.current_graph().vertex_count(),
            session.reachable_count(),
            session.max_depth()
        );
    }

    let graph = session.current_graph();
    match config.output.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(graph.as_ref())
                .context("Failed to serialize neighborhood")?;
            println!("{json}");
        }
        OutputFormat::Summary => {
            let colored = !config.output.no_color;
            let mut layout = TextLayout::new(colored);
            layout.layout(&graph, &DiffStyle);
            print!("{}", layout.into_string());
            println!();
            print!("{}", render_legend(&registry, ColorBucket::Relationship, colored));
        }
    }
    Ok(())
}
