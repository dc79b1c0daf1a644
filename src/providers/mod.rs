//! External capability providers

pub mod cloudinary;
pub mod local;
pub mod object_store;

pub use cloudinary::CloudinaryStore;
pub use local::LocalObjectStore;
pub use object_store::ObjectStore;
