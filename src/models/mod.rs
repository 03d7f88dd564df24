pub mod entry_detail;
pub mod place;
pub mod rating;
