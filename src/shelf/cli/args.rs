use clap::{Parser, Subcommand};
use shelf::query::{ReadFilter, SearchField, SortKey};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Track the books you own and the ones you have read", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List books, optionally filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Only books in this genre (exact match), or "all"
        #[arg(short, long)]
        genre: Option<String>,

        /// all, read or unread
        #[arg(short, long, default_value = "all")]
        status: ReadFilter,

        /// title, author, newest or oldest
        #[arg(long, default_value = "title")]
        sort: SortKey,
    },

    /// Add a book
    #[command(alias = "a")]
    Add {
        /// Book title
        title: String,

        /// Author name
        author: String,

        /// Publication year
        #[arg(short, long)]
        year: i32,

        /// Genre (any value, e.g. Python, Motivational, Sci-Fi)
        #[arg(short, long)]
        genre: String,

        /// I have read this book
        #[arg(long)]
        read: bool,
    },

    /// Remove one or more books
    #[command(alias = "rm")]
    Remove {
        /// Indexes of the books (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Flip the read status of one or more books
    #[command(alias = "t")]
    Toggle {
        /// Indexes of the books (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Mark one or more books as read
    Read {
        /// Indexes of the books (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Mark one or more books as unread
    Unread {
        /// Indexes of the books (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Search books by title, author or genre
    #[command(alias = "s")]
    Search {
        /// Text to look for (case-insensitive)
        term: String,

        /// Field to search: title, author or genre
        #[arg(long = "by", default_value = "title")]
        field: SearchField,
    },

    /// Show library statistics (the default command)
    #[command(alias = "dashboard")]
    Stats,

    /// Show the most recently added books
    Recent {
        /// How many books to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// List the genres in the library
    Genres,

    /// Print the path of the library file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (library-file, keep-corrupt, recent-count)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
