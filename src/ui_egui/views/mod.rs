pub mod month_view;
pub mod year_view;
