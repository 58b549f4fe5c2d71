pub mod byte_range;
pub mod embedded_art;
pub mod media_types;
pub mod natural_sort;
pub mod path_id;
pub mod validation;
