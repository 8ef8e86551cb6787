use crate::utils::error::Result;

/// 案例檔的讀寫介面，本地檔案系統或測試用的記憶體儲存皆可實作
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}
