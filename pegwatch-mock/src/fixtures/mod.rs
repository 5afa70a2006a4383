pub mod assets;
pub mod history;

/// Last fixture day, 2026-02-01T00:00:00Z.
pub const FIXTURE_END: i64 = 1_769_904_000;

/// Number of daily points in every fixture history.
pub const FIXTURE_DAYS: i64 = 400;
