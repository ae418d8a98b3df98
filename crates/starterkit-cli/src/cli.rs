use std::path::PathBuf;

use clap::{Parser, Subcommand};
use starterkit_core::Theme;

/// Frontend starter kit in the terminal: theme, API docs and component gallery.
#[derive(Debug, Parser)]
#[command(name = "starterkit", version)]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the saved theme.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change the light/dark theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Browse the mock API reference.
    Docs {
        #[command(subcommand)]
        action: Option<DocsAction>,
    },
    /// Browse the UI component gallery.
    Components {
        #[command(subcommand)]
        action: Option<ComponentsAction>,
    },
    /// Copy an endpoint's example payload to the clipboard.
    Copy {
        /// Endpoint id, e.g. `get-users`.
        id: String,
        /// Copy the request example instead of the response.
        #[arg(long)]
        request: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ThemeAction {
    /// Print the active theme and its palette.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Switch to a specific theme.
    Set {
        /// `light` or `dark`.
        theme: Theme,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DocsAction {
    /// List endpoints.
    List {
        /// Only endpoints with this tag.
        #[arg(long)]
        tag: Option<String>,
    },
    /// List endpoint tags.
    Tags,
    /// Show one endpoint in full.
    Show { id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ComponentsAction {
    /// List components grouped by category.
    List {
        /// Only components in this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// List component categories.
    Categories,
    /// Show one component.
    Show { id: String },
    /// Render the table demo.
    Table,
}
