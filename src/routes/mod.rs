pub mod contest;
pub mod drive;
pub mod health;
pub mod library;
pub mod media;
