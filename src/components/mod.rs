pub mod growth_bars;
pub mod selection_status;
