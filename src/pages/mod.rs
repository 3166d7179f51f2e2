pub mod charts_page;
pub mod summary_page;
