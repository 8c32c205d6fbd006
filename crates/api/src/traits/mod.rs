//! Public traits implemented by the cipher engines

pub mod stream;

pub use stream::StreamCipher;
