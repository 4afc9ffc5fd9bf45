use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shoplist",
    bin_name = "shoplist",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Weekly shopping list with sections", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the list served at this URL instead of the local file
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub remote: Option<String>,

    /// Data directory (default: $SHOPLIST_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Entry,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Entry => "Per-Entry Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "shop" => Some(CommandGroup::Core),
            "edit" | "toggle" | "qty" | "note" | "delete" | "move" => Some(CommandGroup::Entry),
            "reset" | "export" | "copy" | "backup" | "restore" => Some(CommandGroup::Data),
            "theme" | "serve" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Entry,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("shoplist {version}\n"));
    output.push_str("Weekly shopping list with sections\n");
    output.push('\n');
    output.push_str("Usage: shoplist [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --remote <URL>    Use the list served at this URL\n");
    output.push_str("      --data-dir <DIR>  Data directory\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");
    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints clap's help for one subcommand, or the grouped help if unknown.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }
    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Core(c) => match c {
                CoreCommands::Add { .. } => "add",
                CoreCommands::List => "list",
                CoreCommands::Shop { .. } => "shop",
            },
            Commands::Entry(c) => match c {
                EntryCommands::Edit { .. } => "edit",
                EntryCommands::Toggle { .. } => "toggle",
                EntryCommands::Qty { .. } => "qty",
                EntryCommands::Note { .. } => "note",
                EntryCommands::Delete { .. } => "delete",
                EntryCommands::Move { .. } => "move",
            },
            Commands::Data(c) => match c {
                DataCommands::Reset { .. } => "reset",
                DataCommands::Export { .. } => "export",
                DataCommands::Copy { .. } => "copy",
                DataCommands::Backup { .. } => "backup",
                DataCommands::Restore { .. } => "restore",
            },
            Commands::Misc(c) => match c {
                MiscCommands::Theme { .. } => "theme",
                MiscCommands::Serve { .. } => "serve",
                MiscCommands::Config { .. } => "config",
                MiscCommands::Help { .. } => "help",
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Entry(EntryCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add an item (`Milk`, `Apple-Fruit`) or a section (`-Dairy`)
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Words joined with spaces
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        words: Vec<String>,
    },

    /// Show the whole list with sections
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Show this week's shop
    #[command(display_order = 3)]
    Shop {
        /// Group items under their sections
        #[arg(short, long)]
        grouped: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Rename an entry
    #[command(alias = "e", display_order = 10)]
    Edit {
        /// Position or name of the entry
        selector: String,

        /// New name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Add items to or remove them from this week's shop
    #[command(alias = "t", display_order = 11)]
    Toggle {
        /// Positions (e.g. 1 3 5-7) or a name
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Set how many of an item to buy
    #[command(alias = "q", display_order = 12)]
    Qty {
        /// Position or name of the item
        selector: String,

        /// Quantity (values below 1 become 1)
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Set or clear the note on an entry
    #[command(display_order = 13)]
    Note {
        /// Position or name of the entry
        selector: String,

        /// Note text; omit to clear
        #[arg(num_args = 0..)]
        note: Vec<String>,
    },

    /// Delete entries (deleting a section keeps its items)
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Positions (e.g. 1 3 5-7) or a name
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Move an entry to another position
    #[command(alias = "mv", display_order = 15)]
    Move { from: usize, to: usize },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Clear this week's shop, or everything with --all
    #[command(display_order = 20)]
    Reset {
        /// Remove every entry and section
        #[arg(long)]
        all: bool,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export this week's shop as text (stdout, or a file with --output)
    #[command(display_order = 21)]
    Export {
        /// Write to a file (default name: shopping-list.txt)
        #[arg(short, long, num_args = 0..=1, default_missing_value = "shopping-list.txt")]
        output: Option<PathBuf>,

        /// Group items under their sections
        #[arg(short, long)]
        grouped: bool,
    },

    /// Copy this week's shop to the clipboard
    #[command(alias = "cp", display_order = 22)]
    Copy {
        /// Group items under their sections
        #[arg(short, long)]
        grouped: bool,
    },

    /// Write a JSON backup of the whole list
    #[command(display_order = 23)]
    Backup {
        /// Backup file (default: shopping-list-backup-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the list with a JSON backup
    #[command(display_order = 24)]
    Restore { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show or change the colour theme (dark, light, toggle)
    #[command(display_order = 30)]
    Theme { value: Option<String> },

    /// Serve the list over HTTP for other machines
    #[command(display_order = 31)]
    Serve {
        /// Address to bind (default from config: 127.0.0.1:8080)
        #[arg(long)]
        addr: Option<String>,

        /// Data file to serve
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Get or set configuration
    #[command(display_order = 32)]
    Config {
        /// Configuration key (backend, remote-url, server-addr, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for shoplist or a subcommand
    #[command(display_order = 33)]
    Help { command: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shoplist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn every_command_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no group",
                sc.get_name()
            );
        }
        let help = get_grouped_help();
        assert!(help.contains("Per-Entry Commands:"));
        assert!(help.contains("toggle"));
    }

    #[test]
    fn add_keeps_words_and_leading_dash() {
        let cli = parse(&["add", "Olive", "Oil-Pantry"]);
        match cli.command {
            Some(Commands::Core(CoreCommands::Add { words })) => {
                assert_eq!(words, vec!["Olive", "Oil-Pantry"])
            }
            other => panic!("unexpected {:?}", other),
        }

        let cli = parse(&["add", "--", "-Dairy"]);
        match cli.command {
            Some(Commands::Core(CoreCommands::Add { words })) => assert_eq!(words, vec!["-Dairy"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn qty_accepts_negative_numbers() {
        let cli = parse(&["qty", "2", "-3"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Entry(EntryCommands::Qty { quantity: -3, .. }))
        ));
    }

    #[test]
    fn export_output_has_default_name() {
        let cli = parse(&["export", "--output"]);
        match cli.command {
            Some(Commands::Data(DataCommands::Export { output, grouped })) => {
                assert_eq!(output, Some(PathBuf::from("shopping-list.txt")));
                assert!(!grouped);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "--remote", "http://nas:8080", "-v"]);
        assert_eq!(cli.remote.as_deref(), Some("http://nas:8080"));
        assert!(cli.verbose);
        assert_eq!(cli.command.map(|c| c.name()), Some("list"));
    }
}
