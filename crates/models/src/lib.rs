pub mod errors;
pub mod pokemon;
