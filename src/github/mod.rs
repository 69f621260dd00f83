//! GitHub snapshot data model and loading.
//!
//! The types here mirror what a fetch step pulls from the GitHub APIs:
//! profile (REST), repositories (REST), and the contribution calendar
//! (GraphQL). ghstreak reads them from a local JSON export.

mod source;
mod types;

pub use source::{JsonSnapshotSource, SnapshotSource};
pub use types::{ContributionCalendar, ContributionDay, ContributionWeek, Profile, Repo, Snapshot};
