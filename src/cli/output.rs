//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use repo_pulse::{ActivityError, PageResult, RepositoryActivity, RepositoryPage};
use serde::Serialize;

/// Writes the activity summary header followed by one block per repository.
pub fn write_activity_summary<W: Write>(
    writer: &mut W,
    username: &str,
    activity: &[RepositoryActivity],
    limit: usize,
) -> Result<(), ActivityError> {
    writeln!(
        writer,
        "Username: {username} | Repositories: {} | Limit: {limit}",
        activity.len()
    )
    .map_err(|e| io_error(&e))?;

    for entry in activity {
        write_repository_activity(writer, entry)?;
    }

    Ok(())
}

/// Writes one page of activity together with its position.
pub fn write_activity_page_summary<W: Write>(
    writer: &mut W,
    username: &str,
    page: &PageResult<RepositoryActivity>,
    limit: usize,
) -> Result<(), ActivityError> {
    write_activity_summary(writer, username, page.content(), limit)?;

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Page {} of {} ({} of {} repositories shown, size {})",
        page.page_number().saturating_add(1),
        page.total_pages(),
        page.content().len(),
        page.total_elements(),
        page.page_size()
    )
    .map_err(|e| io_error(&e))?;

    if page.has_next() {
        writeln!(writer, "More pages available.").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

fn write_repository_activity<W: Write>(
    writer: &mut W,
    entry: &RepositoryActivity,
) -> Result<(), ActivityError> {
    writeln!(
        writer,
        "Repo: {} ({}) commits={}",
        entry.repository.full_name,
        entry.repository.html_url,
        entry.commits.len()
    )
    .map_err(|e| io_error(&e))?;

    for commit in &entry.commits {
        let timestamp = commit
            .timestamp
            .map_or_else(|| "-".to_owned(), |instant| instant.to_rfc3339());
        writeln!(writer, "  - {} | {timestamp} | {}", commit.sha, commit.summary())
            .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes one upstream page of repositories.
pub fn write_repository_page<W: Write>(
    writer: &mut W,
    username: &str,
    page: &RepositoryPage,
) -> Result<(), ActivityError> {
    let page_info = &page.page_info;

    writeln!(writer, "Repositories for {username}:").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    for repository in &page.items {
        let mut flags = Vec::new();
        if repository.is_private {
            flags.push("private");
        }
        if repository.is_fork {
            flags.push("fork");
        }
        let suffix = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        writeln!(
            writer,
            "  {} ({}){suffix}",
            repository.full_name, repository.html_url
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    let total = match page_info.total_pages() {
        0 => "?".to_owned(),
        known => known.to_string(),
    };
    writeln!(
        writer,
        "Page {} of {total} ({} repositories shown)",
        page_info.current_page(),
        page.items.len()
    )
    .map_err(|e| io_error(&e))?;

    if page_info.has_next() {
        writeln!(writer, "More pages available.").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes any serialisable result as pretty-printed JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> Result<(), ActivityError> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(|error| ActivityError::Io {
        message: format!("JSON serialisation failed: {error}"),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Converts an I/O error to an [`ActivityError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ActivityError {
    ActivityError::Io {
        message: error.to_string(),
    }
}
