pub mod name_input;
pub mod point_summaries;
pub mod title_selector;
pub mod track_detail;
pub mod track_selector;
