use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mis", about = concat!("make it so v", env!("CARGO_PKG_VERSION"), " - edit tasks from the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory (default: ./.makeitso)
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default makeitso.toml into the data directory
    Init(InitArgs),
    /// Create a task
    New(TaskFieldArgs),
    /// Edit fields of an existing task
    Edit(EditArgs),
    /// Show task details
    Show(ShowArgs),
    /// List all tasks
    List,
    /// Manage todo items
    Todo(TodoCmd),
}

#[derive(Args)]
pub struct InitArgs {
    /// Account recorded as owner of new todo items
    #[arg(long, default_value = "")]
    pub owner: String,
    /// Overwrite an existing makeitso.toml
    #[arg(long)]
    pub force: bool,
}

/// Field edits shared by `new` and `edit`
#[derive(Args, Default)]
pub struct TaskFieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    /// None, Low, Medium or High (anything else means None)
    #[arg(long)]
    pub priority: Option<String>,
    /// On or Off (anything else means Off)
    #[arg(long)]
    pub flag: Option<String>,
    /// Due date as YYYY-MM-DD (UTC)
    #[arg(long, conflicts_with = "clear_date")]
    pub date: Option<String>,
    /// Due time as HH:MM, 24-hour clock
    #[arg(long, conflicts_with = "clear_time")]
    pub time: Option<String>,
    /// Remove the due date
    #[arg(long)]
    pub clear_date: bool,
    /// Remove the due time
    #[arg(long)]
    pub clear_time: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    #[command(flatten)]
    pub fields: TaskFieldArgs,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct TodoCmd {
    #[command(subcommand)]
    pub action: TodoAction,
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo item
    Add(TodoAddArgs),
    /// List todo items
    List(TodoListArgs),
    /// Toggle a todo item's completed state
    Done(TodoIdArg),
}

#[derive(Args)]
pub struct TodoAddArgs {
    /// Title text
    pub title: String,
    /// None, Low, Medium or High
    #[arg(long, default_value = "")]
    pub priority: String,
}

#[derive(Args)]
pub struct TodoListArgs {
    /// Only items owned by the configured account
    #[arg(long)]
    pub mine: bool,
}

#[derive(Args)]
pub struct TodoIdArg {
    /// Todo item ID
    pub id: String,
}
