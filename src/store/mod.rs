// Key-value storage for tool state
//
// Values are opaque serialized blobs; callers own the encoding.

pub mod error;
pub mod file;
pub mod memory;
#[cfg(test)]
pub(crate) mod testing;

pub use error::StoreError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Whole-value get/set storage keyed by name
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
