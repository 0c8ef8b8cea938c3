//! Store implementations backing the provider traits.

pub mod redis;

pub use redis::RedisRepository;
