//! Password hashing
//!
//! bcrypt with a configurable work factor. Hashing is CPU bound and runs on
//! the blocking thread pool.

mod bcrypt_hasher;

pub use bcrypt_hasher::BcryptHasher;
