use artistly::model::{BookingAction, ViewMode};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const CATEGORY_HELP: &str =
    "Category: Singer, Dancer, Speaker, DJ, Musician, Comedian, Magician or all";
pub const PRICE_HELP: &str = "Price range: $500-1000, $1000-2500, $2500-5000, $5000+ or all";
pub const STATUS_HELP: &str = "Booking status: pending, confirmed, rejected or all";

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
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
#[command(name = "artistly", bin_name = "artistly", version = get_version())]
#[command(about = "Browse, filter and book performing artists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read artists and bookings from this JSON file instead of the demo data
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Grid,
    List,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::List => ViewMode::List,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    Accept,
    Reject,
}

impl From<ActionArg> for BookingAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Accept => BookingAction::Accept,
            ActionArg::Reject => BookingAction::Reject,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Landing page: categories, features and where to go next
    Home,

    /// Browse the artist directory
    #[command(alias = "ls")]
    Artists {
        #[arg(short, long, help = CATEGORY_HELP)]
        category: Option<String>,

        /// Case-insensitive substring of the artist's location
        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long, help = PRICE_HELP)]
        price: Option<String>,

        /// Card layout (defaults to the configured view)
        #[arg(long, value_enum)]
        view: Option<ViewArg>,

        /// Drop every filter given on the command line, keeping the view
        #[arg(long)]
        clear: bool,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manager dashboard: stats, artist roster and booking requests
    Dashboard {
        /// Case-insensitive substring of artist name or location
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, help = CATEGORY_HELP)]
        category: Option<String>,

        #[arg(long, help = STATUS_HELP)]
        status: Option<String>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Accept or reject a pending booking request (not saved)
    Respond {
        /// Booking id, with or without a leading '#'
        booking: String,

        #[arg(value_enum)]
        action: ActionArg,
    },

    /// Submit an artist registration
    #[command(alias = "join")]
    Onboard {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        bio: String,

        #[arg(long, default_value = "")]
        location: String,

        /// Repeat for several categories
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Repeat for several languages
        #[arg(long = "language")]
        languages: Vec<String>,

        /// Fee range label: $500-1000, $1000-2500, $2500-5000 or $5000+
        #[arg(long)]
        fee: Option<String>,

        /// Profile image (png, jpg, jpeg or gif)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Simulated submission delay, overriding submit-delay-ms
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the pages and the commands that open them
    Routes,

    /// Get or set configuration values
    Config {
        /// Configuration key: data-file, default-view, submit-delay-ms or color
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
