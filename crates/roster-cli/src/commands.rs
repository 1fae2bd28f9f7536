use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use tracing::{info, warn};

use roster_cli::render::render_page;
use roster_cli::state_dir::resolve_state_dir;
use roster_core::{DeleteOutcome, EngineOptions, ExportScope, Session};
use roster_fixtures::RandomRoster;
use roster_model::RecordId;
use roster_persistence::FileStore;
use roster_validate::NameStrictness;

use crate::cli::{
    Cli, ColumnsArgs, Command, DeleteArgs, EditArgs, ExportArgs, ExportScopeArg, FilterArgs,
    MoveArgs, PageArgs, ResetArgs, SelectArgs, SortArgs,
};

/// Exit code for an edit the validator rejected.
pub const EXIT_REJECTED: i32 = 2;

type RosterSession = Session<FileStore>;

/// Load the roster, apply the command, persist and print.
pub fn run(cli: &Cli) -> Result<i32> {
    let dir = resolve_state_dir(cli.state_dir.clone())
        .ok_or_else(|| anyhow!("could not determine a data directory; pass --state-dir"))?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("create state directory {}", dir.display()))?;

    let mut generator = match cli.seed {
        Some(seed) => RandomRoster::with_seed(seed),
        None => RandomRoster::new(),
    };
    let mut session = Session::open(FileStore::new(&dir), engine_options(cli), &mut generator);
    info!(dir = %dir.display(), records = session.grid().records().len(), "roster loaded");

    match &cli.command {
        Command::Show => {}
        Command::Sort(args) => run_sort(&mut session, args),
        Command::Filter(args) => run_filter(&mut session, args),
        Command::Select(args) => run_select(&mut session, args),
        Command::Edit(args) => {
            if let Err(message) = run_edit(&mut session, args)? {
                eprintln!("rejected: {message}");
                return Ok(EXIT_REJECTED);
            }
        }
        Command::Delete(args) => run_delete(&mut session, args),
        Command::Move(args) => run_move(&mut session, args),
        Command::Columns(args) => run_columns(&mut session, args),
        Command::Page(args) => run_page(&mut session, args),
        Command::Export(args) => return run_export(&session, args).map(|()| 0),
        Command::Reset(args) => run_reset(&mut session, args, &mut generator)?,
    }

    println!("{}", render_page(session.grid()));
    Ok(0)
}

fn engine_options(cli: &Cli) -> EngineOptions {
    let strictness = if cli.strict_names {
        NameStrictness::FullName
    } else {
        NameStrictness::Lenient
    };
    EngineOptions::default()
        .with_record_count(cli.record_count)
        .with_default_page_size(cli.default_page_size)
        .with_name_strictness(strictness)
}

fn run_sort(session: &mut RosterSession, args: &SortArgs) {
    session.update(|grid| match args.column {
        _ if args.clear => grid.clear_sort(),
        Some(column) if args.remove => grid.remove_sort(column),
        Some(column) => grid.toggle_sort(column),
        None => {}
    });
}

fn run_filter(session: &mut RosterSession, args: &FilterArgs) {
    session.update(|grid| {
        if args.clear {
            grid.clear_filters();
        }
        for column in &args.clear_field {
            grid.clear_field_filter(*column);
        }
        for filter in &args.field {
            grid.set_field_filter(filter.column, &filter.values);
        }
        if let Some(text) = &args.text {
            grid.set_global_filter(text);
        }
    });
}

fn run_select(session: &mut RosterSession, args: &SelectArgs) {
    session.update(|grid| {
        if args.clear {
            grid.clear_selection();
        } else if args.all {
            grid.toggle_all(true);
        } else if args.none {
            grid.toggle_all(false);
        }
        for id in args.ids.iter().copied().map(RecordId::new) {
            if grid.record(id).is_none() {
                warn!(%id, "no such record");
            }
            grid.set_selected(id, !args.off);
        }
    });
}

/// `Ok(Err(message))` is a validation rejection; `Err` is a usage error.
fn run_edit(session: &mut RosterSession, args: &EditArgs) -> Result<Result<(), String>> {
    let id = RecordId::new(args.id);
    if session.grid().record(id).is_none() {
        bail!("no record with id {id}");
    }
    if !args.column.is_editable() {
        bail!("column `{}` cannot be edited", args.column.as_str());
    }
    Ok(session.update(|grid| {
        grid.begin_edit(id, args.column);
        grid.stage_edit_value(&args.value);
        let result = grid.commit_edit().map(|_| ()).map_err(|error| error.to_string());
        grid.cancel_edit();
        result
    }))
}

fn run_delete(session: &mut RosterSession, args: &DeleteArgs) {
    let outcome = session.update(|grid| {
        if args.ids.is_empty() {
            grid.delete_selected()
        } else {
            let ids: Vec<RecordId> = args.ids.iter().copied().map(RecordId::new).collect();
            grid.delete_records(&ids)
        }
    });
    match outcome {
        DeleteOutcome::NothingSelected => eprintln!("Nothing selected; no rows deleted."),
        DeleteOutcome::Deleted(count) => println!("Deleted {count} row(s)."),
    }
}

fn run_move(session: &mut RosterSession, args: &MoveArgs) {
    let moved = session.update(|grid| {
        grid.reorder(RecordId::new(args.source), RecordId::new(args.target))
    });
    if !moved {
        eprintln!("Nothing moved.");
    }
}

fn run_columns(session: &mut RosterSession, args: &ColumnsArgs) {
    session.update(|grid| {
        if !args.order.is_empty() {
            grid.set_column_order(&args.order);
        }
        if let (Some(column), Some(target)) = (args.moved, args.to) {
            grid.move_column(column, target);
        }
        for column in &args.hide {
            grid.set_column_visibility(*column, false);
        }
        for column in &args.show {
            grid.set_column_visibility(*column, true);
        }
    });
}

fn run_page(session: &mut RosterSession, args: &PageArgs) {
    session.update(|grid| {
        if let Some(size) = args.size {
            grid.set_page_size(size);
        }
        if args.next {
            grid.next_page();
        } else if args.prev {
            grid.previous_page();
        } else if let Some(page) = args.go {
            grid.go_to_page(page.saturating_sub(1));
        }
    });
}

fn run_export(session: &RosterSession, args: &ExportArgs) -> Result<()> {
    let scope = match args.scope {
        ExportScopeArg::Filtered => ExportScope::AllFiltered,
        ExportScopeArg::Selected => ExportScope::Selected,
    };
    let grid = session.grid();
    if args.stdout {
        let csv = grid.export_csv(scope).context("encode CSV")?;
        print!("{csv}");
        return Ok(());
    }

    let dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let rows = grid.export_rows(scope).len();
    let path = grid
        .export_csv_file(scope, &dir, Local::now().date_naive())
        .with_context(|| format!("export CSV into {}", dir.display()))?;
    println!("Exported {rows} row(s) to {}", path.display());
    Ok(())
}

fn run_reset(
    session: &mut RosterSession,
    args: &ResetArgs,
    generator: &mut RandomRoster,
) -> Result<()> {
    if !args.yes {
        bail!("reset discards every record and view setting; re-run with --yes to confirm");
    }
    let failures = session.reset(generator);
    if let Some(error) = failures.first() {
        eprintln!("warning: {}", error.user_message());
        if let Some(hint) = error.suggestion() {
            eprintln!("hint: {hint}");
        }
    }
    Ok(())
}
