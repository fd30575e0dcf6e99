pub mod resources;
pub mod state;
pub mod table;
