pub mod contest_dto;
pub mod drive_dto;
pub mod library_dto;
