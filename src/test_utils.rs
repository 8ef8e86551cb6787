use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// 記憶體內的儲存，讀取不存在的檔案時回傳 `NotFound`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn with_file(path: &str, content: &str) -> Self {
        let storage = Self::default();
        storage
            .files
            .borrow_mut()
            .insert(path.to_string(), content.as_bytes().to_vec());
        storage
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.contents(path).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            )
            .into()
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_string(), data.to_vec());
        Ok(())
    }
}
