use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use user_directory::users::{SortDir, SortField};

#[derive(Parser, Debug)]
#[command(name = "user-directory", version)]
#[command(about = "Manage users of the user directory API and look up phone country codes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, list, edit and delete users
    #[command(alias = "u")]
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Show flag, country and formatting for phone numbers
    Phone {
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Show the dialing prefix of countries by ISO code
    Country {
        #[arg(required = true)]
        iso_codes: Vec<String>,
    },

    /// Run a console demo
    Demo {
        #[command(subcommand)]
        demo: DemoCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users, one page at a time
    #[command(alias = "ls")]
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Page size (defaults to the configured value)
        #[arg(long)]
        per_page: Option<u32>,

        /// Match against name and email
        #[arg(short, long)]
        search: Option<String>,

        /// name, email, age, phone, created_at or updated_at
        #[arg(long)]
        sort_by: Option<SortField>,

        /// asc or desc
        #[arg(long)]
        sort_dir: Option<SortDir>,
    },

    /// Show one user
    Get { id: u64 },

    /// Create a user
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// YYYY-MM-DD
        #[arg(long)]
        date_of_birth: NaiveDate,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Change name, phone or address of a user
    Update {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum DemoCommands {
    /// Country flags for a set of sample numbers
    Flags,

    /// Sorting scenarios against the configured backend
    Sorting,
}
