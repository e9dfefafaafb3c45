//! `codequest` subcommands

pub mod fetch;
pub mod list;

pub use fetch::fetch_challenge;
pub use list::list_challenges;
pub use test::test_solution;
