pub mod contest_service;
pub mod drive_service;
pub mod library_service;
