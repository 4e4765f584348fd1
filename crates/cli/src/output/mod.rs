//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::format_summary_detail;
pub use table::format_points_table;
