mod database;
mod hashing;
mod jwt;

pub use self::database::{ConnectionManager, ConnectionPool, DatabaseParts};
pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig};
