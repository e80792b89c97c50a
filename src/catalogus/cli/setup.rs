use catalogus::api::View;
use catalogus::query::Column;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// "0.3.0" for releases, "0.3.0@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "catalogus", bin_name = "catalogus", version = get_version())]
#[command(about = "Catalog of items and bookmarks kept in plain JSON files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    #[default]
    All,
    Top,
    Online,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::All => View::All,
            ViewArg::Top => View::Top,
            ViewArg::Online => View::Online,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    Name,
    Label,
    Description,
    Location,
    Date,
    Pinned,
}

impl From<ColumnArg> for Column {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Name => Column::Name,
            ColumnArg::Label => Column::Label,
            ColumnArg::Description => Column::Description,
            ColumnArg::Location => Column::Location,
            ColumnArg::Date => Column::Date,
            ColumnArg::Pinned => Column::Pinned,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records (newest first)
    #[command(alias = "ls")]
    List {
        /// Which list to show
        #[arg(long, value_enum, default_value_t = ViewArg::All)]
        view: ViewArg,

        /// Only records whose name, label or description contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by a column instead of by date
        #[arg(long, value_enum)]
        sort: Option<ColumnArg>,

        /// Reverse the column sort
        #[arg(short, long, requires = "sort")]
        reverse: bool,
    },

    /// Search name, label and description
    Search {
        term: String,

        /// Which list to search
        #[arg(long, value_enum, default_value_t = ViewArg::All)]
        view: ViewArg,
    },

    /// Show one record in full
    #[command(alias = "v")]
    Show { id: u64 },

    /// Add a record
    #[command(alias = "n")]
    Add {
        /// Name of the record
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(short, long, default_value = "")]
        label: String,

        /// Description; `-` reads it from stdin
        #[arg(short, long, default_value = "")]
        description: String,

        /// Where the item is; `-` reads it from stdin
        #[arg(long, default_value = "")]
        location: String,

        /// Date as DD.MM.YYYY (defaults to today)
        #[arg(long, conflicts_with = "no_date")]
        date: Option<String>,

        /// Leave the date empty
        #[arg(long)]
        no_date: bool,

        /// Pin the record to the top list
        #[arg(short, long)]
        pin: bool,
    },

    /// Edit a record; fields not given keep their value
    #[command(alias = "e")]
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        label: Option<String>,

        /// New description; `-` reads it from stdin
        #[arg(short, long)]
        description: Option<String>,

        /// New location; `-` reads it from stdin
        #[arg(long)]
        location: Option<String>,

        /// New date as DD.MM.YYYY, or "" to clear it
        #[arg(long)]
        date: Option<String>,

        #[arg(short, long, conflicts_with = "unpin")]
        pin: bool,

        #[arg(short, long)]
        unpin: bool,
    },

    /// Pin records to the top list
    #[command(alias = "p")]
    Pin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Remove records from the top list
    #[command(alias = "u")]
    Unpin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Copy records to the online list
    Online {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Delete records from every list
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Snapshot the base and top files
    Backup,

    /// Show the storage location, or move to a new folder
    Location {
        /// New storage folder (records are not moved)
        folder: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (base-path, write-mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_sort() {
        let cli = Cli::parse_from(["catalogus", "list", "--view", "top", "--sort", "name", "-r"]);
        match cli.command {
            Some(Commands::List {
                view, sort, reverse, ..
            }) => {
                assert_eq!(view, ViewArg::Top);
                assert_eq!(sort, Some(ColumnArg::Name));
                assert!(reverse);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_joins_name_words() {
        let cli = Cli::parse_from(["catalogus", "add", "Desk", "lamp", "--pin"]);
        match cli.command {
            Some(Commands::Add { name, pin, .. }) => {
                assert_eq!(name.join(" "), "Desk lamp");
                assert!(pin);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn edit_rejects_pin_and_unpin_together() {
        assert!(Cli::try_parse_from(["catalogus", "edit", "1", "--pin", "--unpin"]).is_err());
    }

    #[test]
    fn reverse_requires_sort() {
        assert!(Cli::try_parse_from(["catalogus", "list", "--reverse"]).is_err());
    }
}
