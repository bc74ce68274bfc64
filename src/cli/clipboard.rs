//! Clipboard history commands.

use dk_app::usecases::{ClipboardHistoryStore, CopyHistoryEntry};
use dk_app::Notice;
use dk_core::error::ToolResult;
use dk_core::{ClipboardEntry, ToolError};

use super::input::read_input;
use super::{AppContext, ClipboardAction, Report};

const PREVIEW_CHARS: usize = 60;

fn entry_line(position: usize, entry: &ClipboardEntry, store: &ClipboardHistoryStore) -> String {
    let mut preview: String = entry
        .content
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(PREVIEW_CHARS)
        .collect();
    if entry.content.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    format!(
        "{position:>3}  {:<5}  {:>9}  {preview}  [{}]",
        entry.kind.as_str(),
        store.relative_age(entry),
        entry.id
    )
}

fn not_found(selector: &str) -> ToolError {
    ToolError::invalid_format(format!("no clipboard entry matches {selector}"))
}

pub fn run(action: ClipboardAction, ctx: &AppContext) -> ToolResult<Report> {
    let mut store = ClipboardHistoryStore::init(ctx.deps.storage.clone(), ctx.deps.clock.clone());

    match action {
        ClipboardAction::Add { content } => {
            let content = read_input(content)?;
            let entry = store.add(&content)?;
            Ok(Report::line(entry_line(1, &entry, &store)).with_notice(Notice::success(
                "Added to clipboard history",
                "Content has been saved to your clipboard history",
            )))
        }
        ClipboardAction::List => {
            if store.is_empty() {
                return Ok(Report::line("No clipboard history yet"));
            }
            let lines = store
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| entry_line(i + 1, entry, &store))
                .collect();
            Ok(Report::new(lines))
        }
        ClipboardAction::Search { term } => {
            let found = store.search(&term);
            if found.is_empty() {
                return Ok(Report::line(format!("No entries match \"{term}\"")));
            }
            let lines = store
                .entries()
                .iter()
                .enumerate()
                .filter(|(_, entry)| found.iter().any(|f| f.id == entry.id))
                .map(|(i, entry)| entry_line(i + 1, entry, &store))
                .collect();
            Ok(Report::new(lines))
        }
        ClipboardAction::Copy { entry } => {
            let id = store.resolve(&entry).ok_or_else(|| not_found(&entry))?.id.clone();
            CopyHistoryEntry::from_port(ctx.deps.clipboard.clone())
                .execute(&store, &id)?
                .ok_or_else(|| not_found(&entry))?;
            Ok(Report::notice_only(Notice::success(
                "Copied!",
                "Content copied to clipboard",
            )))
        }
        ClipboardAction::Remove { entry } => {
            let id = store.resolve(&entry).ok_or_else(|| not_found(&entry))?.id.clone();
            store.remove(&id)?;
            Ok(Report::notice_only(Notice::success(
                "Deleted",
                "Item removed from clipboard history",
            )))
        }
        ClipboardAction::Clear => {
            let removed = store.clear()?;
            Ok(Report::line(format!("Removed {removed} entries")).with_notice(
                Notice::success("History cleared", "All clipboard history has been deleted"),
            ))
        }
    }
}
