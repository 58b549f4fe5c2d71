pub mod participant;
pub mod telegram_handle;
