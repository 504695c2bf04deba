pub mod hash;
pub mod recover;
pub mod sign;
pub mod typed_data;
