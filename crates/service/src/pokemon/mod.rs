pub mod lookup;
pub mod repository;
pub mod service;

pub use repository::PokemonRepository;
pub use service::PokemonService;
