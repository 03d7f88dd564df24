pub mod entries_file_repo;
pub mod places_api_repo;
