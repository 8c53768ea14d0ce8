//! CSV Export
//!
//! Writes articles and activity entries to CSV files.

use std::io::Write;

use crate::domain::fixtures::ActivityEntry;
use crate::domain::Post;
use crate::error::Result;

/// Write articles as CSV
pub fn write_posts<W: Write>(out: W, posts: &[&Post]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["id", "title", "status", "author", "updated", "tags", "cover"])?;

    for post in posts {
        wtr.write_record([
            post.id.to_string(),
            post.title.to_string(),
            post.status.to_string(),
            post.author.to_string(),
            post.updated.to_string(),
            post.tags.join(";"),
            post.cover.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(posts.len())
}

/// Write activity entries as CSV
pub fn write_activity<W: Write>(out: W, entries: &[ActivityEntry]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["id", "actor", "action", "target", "time"])?;

    for entry in entries {
        wtr.write_record([
            entry.id.to_string(),
            entry.actor.to_string(),
            entry.action.to_string(),
            entry.target.to_string(),
            entry.time.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(entries.len())
}
