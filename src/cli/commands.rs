use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "taskhelper",
    version = VERSION,
    about = "Browse, post and manage neighbourhood help requests",
    after_help = "\
NOTE:
  All data is in-memory mock data. Nothing is persisted between runs.
  Use --catalog <file> (or TASKHELPER_CATALOG) to browse your own JSON catalog.

EXIT CODES:
  0  Success
  1  Error (invalid filter, invalid form input, unknown task, etc.)

LOGGING:
  Set TASKHELPER_LOG (e.g. `taskhelper=debug`) to log to stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Task catalog file (JSON), overrides the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks matching the given filters
    #[command(after_help = "\
FILTERS:
  --scope     all | title | description | tags | location
  --quick     urgent | today | high-pay
  --category  all | shopping | cleaning | delivery | petcare | repair | others
  --price     0-2000 | 2000-5000 | 5000-10000 | 10000+   (bounds inclusive)
  --time      today | tomorrow | this-week | flexible
  --sort      newest | price-high | price-low | distance

  All filters combine with AND. `distance` keeps catalog order.")]
    List(ListArgs),

    /// Show one task
    Show {
        /// Task ID
        id: u32,
    },

    /// List task categories
    Categories,

    /// Post a new task
    #[command(after_help = "\
RULES:
  title >= 5 chars, description >= 15 chars, budget 500..=50000,
  date today or later (YYYY-MM-DD), time morning|afternoon|evening|anytime.
  Up to 4 images, image/* only, 10MB each. Image problems never block posting.")]
    Create(CreateArgs),

    /// Requester / helper dashboard
    Dashboard {
        /// requester | helper
        #[arg(long)]
        role: String,
        /// View name (requester: posted|completed, helper: applied|completed)
        #[arg(long)]
        view: Option<String>,
        /// Status filter key, or `all`
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Review applicants for the sample posting
    Applicants {
        /// rating | experience | distance | applied
        #[arg(long, default_value = "rating")]
        sort: String,
        /// Select this applicant as the helper
        #[arg(long)]
        select: Option<u32>,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Free-text search (case-insensitive)
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value = "all")]
    pub scope: String,
    #[arg(long, default_value = "")]
    pub quick: String,
    #[arg(long, default_value = "all")]
    pub category: String,
    /// Location code, e.g. `shibuya`
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub time: String,
    #[arg(long, default_value = "newest")]
    pub sort: String,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub budget: String,
    /// Preferred date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub date: String,
    /// Preferred time slot
    #[arg(long, default_value = "")]
    pub time: String,
    #[arg(long)]
    pub urgent: bool,
    /// Attach an image (repeatable)
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,
    /// Validate and preview without posting
    #[arg(long)]
    pub dry_run: bool,
}
