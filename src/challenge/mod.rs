//! Challenge catalog and local workspaces
//!
//! Loading challenges, scaffolding a directory for one, and reading back
//! the metadata `fetch` left there. Nothing here runs code.

pub mod loader;
pub mod types;
pub mod workspace;

pub use loader::{filter_challenges, find_by_slug, load_challenges, render_challenge_list};
pub use types::{Challenge, ChallengeMetadata, TestCase};
pub use workspace::{create_workspace, load_metadata, METADATA_FILE};
