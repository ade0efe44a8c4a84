//! Shared constant values for test fixtures.

/// Plaintext senha used for every fixture usuario.
///
/// Stored hashed in the database. Tests that verify credentials can hash or
/// compare against this value.
pub static TEST_SENHA: &str = "senha123";

/// Bcrypt cost for fixture password hashing.
///
/// The minimum cost accepted by bcrypt, keeping fixture insertion fast. The
/// application itself hashes with a production cost.
pub static TEST_BCRYPT_COST: u32 = 4;
