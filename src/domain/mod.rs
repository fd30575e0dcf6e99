pub mod column;
pub mod debounce;
pub mod entities;
pub mod page;
pub mod query;
pub mod url;
