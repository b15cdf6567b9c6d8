pub mod error;
pub mod id_allocator;
