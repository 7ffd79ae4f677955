//! CLI command definitions

use crate::domain::{DraftEntry, EntryPatch};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "urgelog")]
#[command(about = "Private journal for gambling urges", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal home directory (default: platform data directory)
    #[arg(long, global = true, env = "URGELOG_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Display language for titles and tags (en, ru)
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Synced folder to use as primary storage
        #[arg(long, value_name = "DIR")]
        sync_dir: Option<PathBuf>,
    },

    /// Record a new entry
    Add {
        #[command(flatten)]
        fields: EntryFields,
    },

    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one entry
    Show {
        id: String,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an existing entry
    Edit {
        id: String,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Delete an entry
    Delete { id: String },

    /// Show which storage backend serves the journal
    Backend,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Free-text fields of an entry
#[derive(Args, Debug, Default)]
pub struct EntryFields {
    /// Where you were
    #[arg(long)]
    pub location: Option<String>,

    /// Who was around
    #[arg(long)]
    pub witnesses: Option<String>,

    /// What was going on
    #[arg(long)]
    pub circumstances: Option<String>,

    /// What set off the urge
    #[arg(long)]
    pub trigger: Option<String>,

    /// What went through your mind
    #[arg(long)]
    pub thoughts: Option<String>,

    /// What you felt in your body
    #[arg(long)]
    pub body_feelings: Option<String>,

    /// What you did
    #[arg(long)]
    pub actions: Option<String>,
}

impl EntryFields {
    /// Fields as a new draft; missing fields are empty
    pub fn into_draft(self) -> DraftEntry {
        DraftEntry {
            location: self.location.unwrap_or_default(),
            witnesses: self.witnesses.unwrap_or_default(),
            circumstances: self.circumstances.unwrap_or_default(),
            trigger: self.trigger.unwrap_or_default(),
            thoughts: self.thoughts.unwrap_or_default(),
            body_feelings: self.body_feelings.unwrap_or_default(),
            actions: self.actions.unwrap_or_default(),
        }
    }

    /// Fields as a patch; missing fields stay untouched
    pub fn into_patch(self) -> EntryPatch {
        EntryPatch {
            location: self.location,
            witnesses: self.witnesses,
            circumstances: self.circumstances,
            trigger: self.trigger,
            thoughts: self.thoughts,
            body_feelings: self.body_feelings,
            actions: self.actions,
        }
    }
}
