//! Tag line filtering
//!
//! A tag line is the set of tags sharing a prefix such as `v2`, i.e. one major version line.

use tracing::trace;

/// Keep only the tag names that start with `line_prefix`, preserving input order
///
/// Names from other lines are dropped silently; seeing them is normal.
pub fn filter_line<'a, S: AsRef<str>>(tags: &'a [S], line_prefix: &str) -> Vec<&'a str> {
    tags.iter()
        .map(AsRef::<str>::as_ref)
        .filter(|tag| {
            let keep = tag.starts_with(line_prefix);
            if !keep {
                trace!("Skipping tag {} outside line {}", tag, line_prefix);
            }
            keep
        })
        .collect()
}
