//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Hospital role management: evaluation permissions, member directory, and tier-based menu visibility
#[derive(Parser, Debug)]
#[command(name = "medhier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the role hierarchy
    Hierarchy {
        #[command(subcommand)]
        command: HierarchyCommands,
    },

    /// Look up member records
    Member {
        #[command(subcommand)]
        command: MemberCommands,
    },

    /// Show menu sections visible to a tier
    Menu {
        /// Tier label (N0..N10)
        tier: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum HierarchyCommands {
    /// Render the hierarchy as a tree
    Tree,

    /// List every title with its tier
    Titles,

    /// Show the direct reports of a title
    Reports {
        /// Exact title string (e.g. "Chefe de Cirurgia")
        title: String,
    },

    /// Query evaluation permission for two raw title strings
    Check {
        /// Leader title
        leader: String,
        /// Subordinate title
        subordinate: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// Show one member record
    Show {
        /// Member id (document name without .json)
        id: String,
    },

    /// List all member records
    List,

    /// Query evaluation permission between two members
    CanEvaluate {
        /// Leader member id
        leader_id: String,
        /// Subordinate member id
        subordinate_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
