mod init;
pub use init::cmd_init;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, ConfigError, DEFAULT_DATA_DIR};
use crate::io::{JsonFileBackend, TaskBackend};
use crate::model::config::AppConfig;
use crate::ops::edit_session::TaskEditSession;
use crate::ops::todo_ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = data_dir(cli.data_dir.as_deref());

    match cli.command {
        Commands::Init(args) => cmd_init(&data_dir, args),
        Commands::New(fields) => cmd_edit(&data_dir, "", fields, json),
        Commands::Edit(args) => cmd_edit(&data_dir, &args.id, args.fields, json),
        Commands::Show(args) => cmd_show(&data_dir, args, json),
        Commands::List => cmd_list(&data_dir, json),
        Commands::Todo(cmd) => match cmd.action {
            TodoAction::Add(args) => cmd_todo_add(&data_dir, args, json),
            TodoAction::List(args) => cmd_todo_list(&data_dir, args, json),
            TodoAction::Done(args) => cmd_todo_done(&data_dir, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn data_dir(arg: Option<&str>) -> PathBuf {
    PathBuf::from(arg.unwrap_or(DEFAULT_DATA_DIR))
}

/// Config plus the store it points at
struct Context {
    config: AppConfig,
    store: JsonFileBackend,
}

fn load_context(data_dir: &Path) -> Result<Context, ConfigError> {
    let config = config_io::read_config(data_dir)?;
    let store = JsonFileBackend::new(config_io::store_path(data_dir, &config));
    Ok(Context { config, store })
}

/// `YYYY-MM-DD` as milliseconds at UTC midnight, the shape a date picker hands over
fn parse_date_arg(s: &str) -> Result<i64, String> {
    let bad = || format!("invalid date '{}': expected YYYY-MM-DD", s);
    let midnight = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| bad())?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(bad)?;
    Ok(midnight.and_utc().timestamp_millis())
}

/// `HH:MM` split into hour and minute; range checking is left to the session
fn parse_time_arg(s: &str) -> Result<(i32, i32), String> {
    let bad = || format!("invalid time '{}': expected HH:MM", s);
    let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
    let hour = h.parse::<i32>().map_err(|_| bad())?;
    let minute = m.parse::<i32>().map_err(|_| bad())?;
    Ok((hour, minute))
}

/// Forward each given field to the session, in form order.
fn apply_fields<B: TaskBackend>(
    session: &mut TaskEditSession<B>,
    fields: TaskFieldArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(title) = fields.title {
        session.set_title(title);
    }
    if let Some(description) = fields.description {
        session.set_description(description);
    }
    if let Some(url) = fields.url {
        session.set_url(url);
    }
    if let Some(priority) = fields.priority {
        session.set_priority(&priority);
    }
    if let Some(flag) = fields.flag {
        session.toggle_flag(&flag);
    }
    if fields.clear_date {
        session.clear_due_date();
    }
    if let Some(date) = fields.date {
        session.set_due_date(parse_date_arg(&date)?)?;
    }
    if fields.clear_time {
        session.clear_due_time();
    }
    if let Some(time) = fields.time {
        let (hour, minute) = parse_time_arg(&time)?;
        session.set_due_time(hour, minute)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_edit(
    data_dir: &Path,
    id: &str,
    fields: TaskFieldArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_context(data_dir)?;
    let mut session = TaskEditSession::initialize(ctx.store, id)?;
    apply_fields(&mut session, fields)?;

    if !id.is_empty() && !session.is_modified() {
        println!("{} unchanged", id);
        return Ok(());
    }

    let verb = if id.is_empty() { "created" } else { "updated" };
    let task = session.commit(|| {})?;
    if json {
        let tj = task_to_json(&task, &ctx.config.display);
        println!("{}", serde_json::to_string_pretty(&tj)?);
    } else {
        println!("{} {}", task.id, verb);
    }
    Ok(())
}

fn cmd_show(
    data_dir: &Path,
    args: ShowArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_context(data_dir)?;
    let task = ctx.store.load(&args.id)?;
    if json {
        let tj = task_to_json(&task, &ctx.config.display);
        println!("{}", serde_json::to_string_pretty(&tj)?);
    } else {
        for line in format_task_detail(&task, &ctx.config.display) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_list(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_context(data_dir)?;
    let doc = ctx.store.read_document()?;
    if json {
        let tasks: Vec<TaskJson> = doc
            .tasks
            .values()
            .map(|t| task_to_json(t, &ctx.config.display))
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        for task in doc.tasks.values() {
            println!("{}", format_task_line(task, &ctx.config.display));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Todo commands
// ---------------------------------------------------------------------------

fn cmd_todo_add(
    data_dir: &Path,
    args: TodoAddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = load_context(data_dir)?;
    let item = todo_ops::add_todo(
        &mut ctx.store,
        &args.title,
        &args.priority,
        &ctx.config.account.owner,
    )?;
    if json {
        println!("{}", serde_json::to_string_pretty(&todo_to_json(&item))?);
    } else {
        println!("{} added", item.id);
    }
    Ok(())
}

fn cmd_todo_list(
    data_dir: &Path,
    args: TodoListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_context(data_dir)?;
    let owner = args.mine.then_some(ctx.config.account.owner.as_str());
    let items = todo_ops::list_todos(&ctx.store, owner)?;
    if json {
        let out: Vec<TodoJson> = items.iter().map(todo_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for item in &items {
            println!("{}", format_todo_line(item));
        }
    }
    Ok(())
}

fn cmd_todo_done(
    data_dir: &Path,
    args: TodoIdArg,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = load_context(data_dir)?;
    let item = todo_ops::toggle_completed(&mut ctx.store, &args.id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&todo_to_json(&item))?);
    } else if item.completed {
        println!("{} done", item.id);
    } else {
        println!("{} reopened", item.id);
    }
    Ok(())
}
