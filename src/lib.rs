pub mod dom;
pub mod net;
pub mod engine;
pub mod schema;
