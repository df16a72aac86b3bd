//! Changelog rendering
//!
//! Turns an ordered commit sequence plus the two version identifiers into
//! text. Rendering is behind a trait so hosts can plug in their own
//! templates; [ListRenderer] covers the common case of one line per commit.

use crate::error::Result;
use crate::vcs::CommitRecord;

/// Output format for a rendered changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeLogFormat {
    Markdown,
    Text,
}

/// Renders a commit sequence into changelog text
///
/// Implementations must render the sequence as given; ordering, filtering
/// and deduplication are the commit log provider's concern.
pub trait ChangeLogRenderer: Send + Sync {
    fn render(
        &self,
        commits: &[CommitRecord],
        from_version: &str,
        to_version: &str,
        format: ChangeLogFormat,
    ) -> Result<String>;
}

/// Default renderer: a version-range header followed by one line per commit
/// (short id, subject, author)
#[derive(Debug, Default, Clone, Copy)]
pub struct ListRenderer;

impl ChangeLogRenderer for ListRenderer {
    fn render(
        &self,
        commits: &[CommitRecord],
        from_version: &str,
        to_version: &str,
        format: ChangeLogFormat,
    ) -> Result<String> {
        let mut out = String::new();

        match format {
            ChangeLogFormat::Markdown => {
                out.push_str(&format!("## {} (since {})\n", to_version, from_version));
                for commit in commits {
                    out.push_str(&format!(
                        "\n- {} {} ({})",
                        commit.short_id(),
                        commit.subject(),
                        commit.author
                    ));
                }
                out.push('\n');
            }
            ChangeLogFormat::Text => {
                out.push_str(&format!("{} (since {})\n", to_version, from_version));
                for commit in commits {
                    out.push_str(&format!(
                        "  * {} {} ({})\n",
                        commit.short_id(),
                        commit.subject(),
                        commit.author
                    ));
                }
            }
        }

        Ok(out)
    }
}
