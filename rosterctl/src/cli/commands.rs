use std::io::Write;

use anyhow::Result;
use roster_core::{
    ClientListController, KeyValueStore, SortChange, query::ClientQueryBuilder,
};

use super::args::{Command, Format, ListArgs, PriorityAction, SortAction};
use super::render;

/// Execute one command against `list`, writing its output to `out`
pub fn run<S: KeyValueStore>(
    command: Command,
    list: &mut ClientListController<S>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::List(args) => list_clients(args, list, out),
        Command::Sort { action } => sort(action, list, out),
        Command::Priority { action } => priority(action, list, out),
        Command::Options => {
            let engine = list.engine();
            render::options(out, engine.field_order(), engine.active_sorts())?;
            Ok(())
        }
    }
}

fn list_clients<S: KeyValueStore>(
    args: ListArgs,
    list: &mut ClientListController<S>,
    out: &mut impl Write,
) -> Result<()> {
    let mut query = ClientQueryBuilder::new().category(args.category.as_str());
    if let Some(search) = args.search {
        query = query.search(search);
    }
    list.set_query(query.build());

    match args.format {
        Format::Table => render::table(out, list.rows())?,
        Format::Cards => render::cards(out, list.rows())?,
        Format::Json => render::json(out, list.rows())?,
    }
    Ok(())
}

fn sort<S: KeyValueStore>(
    action: SortAction,
    list: &mut ClientListController<S>,
    out: &mut impl Write,
) -> Result<()> {
    let change = match action {
        SortAction::Toggle { field, direction } => {
            list.toggle_criterion(field, direction)
        }
        SortAction::Remove { field } => list.remove_criterion(field),
        SortAction::Clear => list.clear_all_criteria(),
        SortAction::Show => SortChange::Unchanged,
        SortAction::Move { key, index } => {
            let change = list.reorder_active_criteria(&key, index);
            if change == SortChange::Unchanged {
                writeln!(out, "no active criterion {key} to move to {index}")?;
            }
            change
        }
    };
    tracing::debug!(?change, "sort command finished");

    render::active_sorts(out, list.engine().active_sorts())?;
    Ok(())
}

fn priority<S: KeyValueStore>(
    action: PriorityAction,
    list: &mut ClientListController<S>,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        PriorityAction::Show => {}
        PriorityAction::Move { field, index } => {
            list.reorder_field_priority(field, index);
        }
        PriorityAction::Before { field, target } => {
            list.move_field_before(field, target);
        }
    }

    let engine = list.engine();
    render::priority(out, engine.field_order(), engine.active_sorts())?;
    Ok(())
}
