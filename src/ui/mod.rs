// UI module exports
// Text renderers for the month grid and the activity detail view

pub mod details;
pub mod labels;
pub mod month_view;
pub mod utils;

pub use details::DetailView;
pub use labels::Labels;
pub use month_view::MonthTextRenderer;
