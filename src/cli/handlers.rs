use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::board::{
    prefers_dark_from_colorfgbg, DraftEdit, Editor, EditorResult, SaveOutcome, ViewMode, Workspace,
};
use crate::config::{Backend, Config};
use crate::entity::{EntityId, Importance, MemoEdit, Task, TaskStatus};
use crate::error::{Result, TaskboardError};
use crate::snapshot::generate_snapshot;
use crate::storage::{find_project_root, init_project, open_project, SharedStore, TASKBOARD_DIR};
use crate::todo::TodoList;
use crate::view::{GridBinding, TextGrid};
use crate::warnings::{check_board, format_warning};

/// An opened project: where it lives, how it is configured, and its store.
struct Session {
    root: PathBuf,
    config: Config,
    store: SharedStore,
}

impl Session {
    fn open() -> Result<Self> {
        let cwd = env::current_dir()?;
        let root = find_project_root(&cwd);
        let (config, store) = open_project(&root)?;
        Ok(Self {
            root,
            config,
            store,
        })
    }

    fn workspace(&self) -> Result<Workspace> {
        Workspace::open(self.store.clone(), system_prefers_dark())
    }

    fn todos(&self) -> Result<TodoList> {
        TodoList::load(self.store.clone())
    }
}

fn system_prefers_dark() -> bool {
    prefers_dark_from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

fn parse_status(s: &str) -> Result<TaskStatus> {
    s.parse().map_err(TaskboardError::InvalidValue)
}

fn parse_importance(s: &str) -> Result<Importance> {
    s.parse().map_err(TaskboardError::InvalidValue)
}

/// The editor only offers live categories, so reject anything else up front.
fn check_category(workspace: &Workspace, category: &str) -> Result<()> {
    if workspace.categories().contains(category) {
        Ok(())
    } else {
        Err(TaskboardError::InvalidValue(format!(
            "Unknown category '{}'. Categories: {}",
            category,
            workspace.categories().list().join(", ")
        )))
    }
}

fn print_task_line(task: &Task) {
    let closed = if task.status.is_closed() { " (closed)" } else { "" };
    let d_day = if task.d_day.is_empty() {
        String::new()
    } else {
        format!(" {}", task.d_day)
    };
    println!(
        "  {} [{}|{}]{} {}{}",
        task.id, task.status, task.importance, d_day, task.title, closed
    );
}

fn print_task_detail(task: &Task) {
    println!("Task {}", task.id);
    println!("  title:      {}", task.title);
    println!("  category:   {}", task.category);
    println!("  importance: {}", task.importance);
    println!("  status:     {}", task.status);
    if !task.d_day.is_empty() {
        println!("  d-day:      {}", task.d_day);
    }
    if !task.content.is_empty() {
        println!();
        for line in task.content.lines() {
            println!("  {}", line);
        }
    }
}

/// Save the editor and report. A rejected draft is reported, not treated as an error.
fn finish_editor(workspace: &mut Workspace, editor: Editor, json: bool) -> Result<()> {
    let id = editor.draft().id;
    match workspace.save_editor(editor)? {
        EditorResult::Open(_) => {
            eprintln!("Task not saved: title is empty.");
        }
        EditorResult::Closed(outcome) => {
            let task = workspace
                .tasks()
                .get(id)
                .ok_or(TaskboardError::TaskNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(task)?);
            } else {
                let verb = match outcome {
                    SaveOutcome::Replaced => "Updated",
                    _ => "Created",
                };
                println!("{} task {} - {}", verb, task.id, task.title);
            }
        }
    }
    Ok(())
}

pub fn handle_init(backend: String) -> Result<()> {
    let root = env::current_dir()?;
    let backend: Backend = backend.parse().map_err(TaskboardError::InvalidValue)?;

    let store = init_project(&root, backend)?;
    // Write the seed collections now so the files are complete from the start
    Workspace::open(store.clone(), system_prefers_dark())?;
    TodoList::load(store)?;

    println!(
        "Initialized taskboard ({}) in {}",
        backend,
        root.join(TASKBOARD_DIR).display()
    );
    Ok(())
}

pub fn handle_board(json: bool) -> Result<()> {
    let session = Session::open()?;
    let workspace = session.workspace()?;
    print_board(&workspace, json)
}

fn print_board(workspace: &Workspace, json: bool) -> Result<()> {
    let columns = workspace.board();

    if json {
        println!("{}", serde_json::to_string_pretty(&columns)?);
    } else {
        for column in &columns {
            println!("{} ({})", column.category, column.tasks.len());
            for task in &column.tasks {
                print_task_line(task);
            }
            println!();
        }
    }

    for warning in check_board(workspace) {
        eprintln!("{}", format_warning(&warning));
    }
    Ok(())
}

pub fn handle_grid(json: bool) -> Result<()> {
    let session = Session::open()?;
    let workspace = session.workspace()?;
    print_grid(&workspace, json)
}

fn print_grid(workspace: &Workspace, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&workspace.grid())?);
        return Ok(());
    }

    let binding = GridBinding::mount(TextGrid::new(), workspace.tasks().list());
    if binding.is_mounted() {
        print!("{}", binding.collaborator().rendered());
    }
    Ok(())
}

pub fn handle_show(view: String) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    let mode: ViewMode = view.parse().map_err(TaskboardError::InvalidValue)?;
    workspace.set_view_mode(mode);

    println!("[{} | {}]\n", workspace.view_mode(), workspace.theme());
    match workspace.view_mode() {
        ViewMode::Kanban => print_board(&workspace, false),
        ViewMode::Grid => print_grid(&workspace, false),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_task_new(
    category: Option<String>,
    title: String,
    importance: Option<String>,
    status: Option<String>,
    content: Option<String>,
    dday: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;

    if let Some(ref c) = category {
        check_category(&workspace, c)?;
    }
    let mut editor = workspace.new_task(category.as_deref())?;

    editor.apply(DraftEdit::Title(title));
    if let Some(i) = importance {
        editor.apply(DraftEdit::Importance(parse_importance(&i)?));
    }
    if let Some(s) = status {
        editor.apply(DraftEdit::Status(parse_status(&s)?));
    }
    if let Some(d) = dday {
        editor.apply(DraftEdit::DDay(d));
    }
    if let Some(c) = content {
        editor.apply(DraftEdit::Content(c));
    }
    if stdin {
        let content = read_stdin()?;
        if !content.is_empty() {
            editor.apply(DraftEdit::Content(content));
        }
    }

    finish_editor(&mut workspace, editor, json)
}

#[allow(clippy::too_many_arguments)]
pub fn handle_task_edit(
    id: EntityId,
    title: Option<String>,
    category: Option<String>,
    importance: Option<String>,
    status: Option<String>,
    content: Option<String>,
    dday: Option<String>,
    json: bool,
) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    let mut editor = workspace.edit_task(id)?;

    if let Some(t) = title {
        editor.apply(DraftEdit::Title(t));
    }
    if let Some(c) = category {
        check_category(&workspace, &c)?;
        editor.apply(DraftEdit::Category(c));
    }
    if let Some(i) = importance {
        editor.apply(DraftEdit::Importance(parse_importance(&i)?));
    }
    if let Some(s) = status {
        editor.apply(DraftEdit::Status(parse_status(&s)?));
    }
    if let Some(c) = content {
        editor.apply(DraftEdit::Content(c));
    }
    if let Some(d) = dday {
        editor.apply(DraftEdit::DDay(d));
    }

    finish_editor(&mut workspace, editor, json)
}

pub fn handle_task_get(id: EntityId, json: bool) -> Result<()> {
    let session = Session::open()?;
    let workspace = session.workspace()?;
    let task = workspace
        .tasks()
        .get(id)
        .ok_or(TaskboardError::TaskNotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        print_task_detail(task);
    }
    Ok(())
}

pub fn handle_task_delete(id: EntityId, force: bool) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    let editor = workspace.edit_task(id)?;
    let title = editor.draft().title.clone();

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete task {} - {}? [y/N] ", id, title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                editor.cancel();
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(TaskboardError::InvalidValue(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    workspace.delete_from_editor(editor)?;
    println!("Deleted task {} - {}", id, title);
    Ok(())
}

pub fn handle_memo_list(json: bool) -> Result<()> {
    let session = Session::open()?;
    let workspace = session.workspace()?;
    let memos = workspace.memos().list();

    if json {
        println!("{}", serde_json::to_string_pretty(memos)?);
    } else if memos.is_empty() {
        println!("No memos found.");
    } else {
        for memo in memos {
            let marker = if memo.expanded { "v" } else { ">" };
            println!("{} {} {}", marker, memo.id, memo.title);
            if memo.expanded {
                for line in memo.content.lines() {
                    println!("    {}", line);
                }
            }
        }
    }
    Ok(())
}

pub fn handle_memo_add(title: Option<String>, content: Option<String>, json: bool) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    let memos = workspace.memos_mut();

    let memo = memos.add()?;
    if let Some(t) = title {
        memos.update(memo.id, MemoEdit::SetTitle(t))?;
    }
    if let Some(c) = content {
        memos.update(memo.id, MemoEdit::SetContent(c))?;
    }

    let memo = memos
        .get(memo.id)
        .ok_or(TaskboardError::MemoNotFound(memo.id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(memo)?);
    } else {
        println!("Created memo {} - {}", memo.id, memo.title);
    }
    Ok(())
}

fn update_memo(id: EntityId, edit: MemoEdit) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    if !workspace.memos_mut().update(id, edit)? {
        return Err(TaskboardError::MemoNotFound(id));
    }
    println!("Updated memo {}", id);
    Ok(())
}

pub fn handle_memo_title(id: EntityId, title: String) -> Result<()> {
    update_memo(id, MemoEdit::SetTitle(title))
}

pub fn handle_memo_content(id: EntityId, content: Option<String>, stdin: bool) -> Result<()> {
    let content = match (content, stdin) {
        (_, true) => read_stdin()?,
        (Some(c), false) => c,
        (None, false) => {
            return Err(TaskboardError::InvalidValue(
                "Provide content or use --stdin".to_string(),
            ))
        }
    };
    update_memo(id, MemoEdit::SetContent(content))
}

pub fn handle_memo_toggle(id: EntityId) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    let memos = workspace.memos_mut();
    if !memos.toggle_expanded(id)? {
        return Err(TaskboardError::MemoNotFound(id));
    }
    let expanded = memos.get(id).map(|m| m.expanded).unwrap_or(false);
    println!(
        "Memo {} {}",
        id,
        if expanded { "expanded" } else { "collapsed" }
    );
    Ok(())
}

pub fn handle_memo_delete(id: EntityId) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    if !workspace.memos_mut().delete(id)? {
        return Err(TaskboardError::MemoNotFound(id));
    }
    println!("Deleted memo {}", id);
    Ok(())
}

pub fn handle_categories(json: bool) -> Result<()> {
    let session = Session::open()?;
    let workspace = session.workspace()?;
    let categories = workspace.categories().list();

    if json {
        println!("{}", serde_json::to_string_pretty(categories)?);
    } else {
        for (i, category) in categories.iter().enumerate() {
            println!("  {}. {}", i + 1, category);
        }
    }
    Ok(())
}

pub fn handle_theme(toggle: bool) -> Result<()> {
    let session = Session::open()?;
    let mut workspace = session.workspace()?;
    let theme = if toggle {
        workspace.toggle_theme()?
    } else {
        workspace.theme()
    };
    println!("{}", theme);
    Ok(())
}

pub fn handle_todo_list(json: bool) -> Result<()> {
    let session = Session::open()?;
    let todos = session.todos()?;

    if json {
        println!("{}", serde_json::to_string_pretty(todos.list())?);
    } else if todos.list().is_empty() {
        println!("Nothing to do.");
    } else {
        for item in todos.list() {
            let checkbox = if item.completed { "[x]" } else { "[ ]" };
            println!("  {} {} {}", checkbox, item.id, item.text);
        }
        println!("\n{} remaining", todos.remaining());
    }
    Ok(())
}

pub fn handle_todo_add(text: Vec<String>) -> Result<()> {
    let session = Session::open()?;
    let mut todos = session.todos()?;
    match todos.add(&text.join(" "))? {
        Some(item) => println!("Added {} - {}", item.id, item.text),
        None => eprintln!("Nothing added: text is empty."),
    }
    Ok(())
}

pub fn handle_todo_toggle(id: EntityId) -> Result<()> {
    let session = Session::open()?;
    let mut todos = session.todos()?;
    if !todos.toggle(id)? {
        return Err(TaskboardError::TodoNotFound(id));
    }
    println!("Toggled {}", id);
    Ok(())
}

pub fn handle_todo_delete(id: EntityId) -> Result<()> {
    let session = Session::open()?;
    let mut todos = session.todos()?;
    if !todos.delete(id)? {
        return Err(TaskboardError::TodoNotFound(id));
    }
    println!("Deleted {}", id);
    Ok(())
}

pub fn handle_todo_clear() -> Result<()> {
    let session = Session::open()?;
    let mut todos = session.todos()?;
    let removed = todos.clear_completed()?;
    println!("Removed {} completed item(s)", removed);
    Ok(())
}

pub fn handle_snapshot(dir: Option<PathBuf>) -> Result<()> {
    let session = Session::open()?;
    let workspace = session.workspace()?;
    let todos = session.todos()?;

    let dir = dir.unwrap_or_else(|| default_snapshot_dir(&session.root, &session.config));
    let stats = generate_snapshot(&workspace, &todos, &dir)?;

    println!("Snapshot written to {}", dir.display());
    for file in &stats.files_generated {
        println!("  {}", file);
    }
    println!(
        "  {} on board, {} in grid, {} memo(s), {} to-do item(s)",
        stats.board_tasks, stats.grid_rows, stats.memos, stats.todos
    );
    Ok(())
}

fn default_snapshot_dir(root: &Path, config: &Config) -> PathBuf {
    root.join(TASKBOARD_DIR).join(&config.snapshot_dir)
}
