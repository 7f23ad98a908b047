use clap::{Parser, Subcommand, ValueEnum};
use contacts::model::ContactType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts", bin_name = "contacts", version)]
#[command(about = "Plain-text contact list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contact file to use instead of the configured one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Contact type as typed on the command line (lowercase).
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Personal,
    Work,
    Family,
    Other,
}

impl From<TypeArg> for ContactType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Personal => ContactType::Personal,
            TypeArg::Work => ContactType::Work,
            TypeArg::Family => ContactType::Family,
            TypeArg::Other => ContactType::Other,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Full name
        name: String,

        /// Phone number (must be unique)
        phone: String,

        /// E-mail address
        #[arg(short, long)]
        email: Option<String>,

        /// Contact type
        #[arg(short = 't', long = "type", value_enum, default_value_t = TypeArg::Personal)]
        contact_type: TypeArg,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Phone number of the contact
        phone: String,
    },

    /// Find a contact and show all of its fields
    #[command(alias = "f")]
    Find {
        /// Phone number of the contact
        phone: String,
    },

    /// Show name, phone and e-mail of a contact
    #[command(alias = "v")]
    Get {
        /// Phone number of the contact
        phone: String,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Change the name or e-mail of a contact
    #[command(alias = "e")]
    Update {
        /// Phone number of the contact
        phone: String,

        /// New name (keeps the current one if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// New e-mail (keeps the current one if omitted, empty clears it)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
