// Database service module
// SQLite connection and schema management for the notes store

mod connection;
mod schema;

pub use connection::Database;
