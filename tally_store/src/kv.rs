use crate::error::StoreError;
use dashmap::DashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 最简单的键值存储：只需要 get/put/remove 语义
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// 内存中的存储，可以在多个会话之间共享
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// 基于文件的存储：根目录下每个键一个文件
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// 根目录在第一次写入时才创建
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && !key.contains("..")
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io { path: self.root.clone(), source })?;
        // 写入临时文件后改名，读到的总是完整内容
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|source| StoreError::Io { path: tmp.clone(), source })?;
        if let Err(source) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Io { path, source });
        }
        debug!("写入 {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use uuid::Uuid;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("tally_store_test_{}", Uuid::new_v4().simple()))
    }

    #[test]
    fn test_memory_store_get_put_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.put("a", "1").unwrap();
        store.put("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_shared_between_threads() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.put(&format!("k{i}"), "v").unwrap())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_file_store_round_trip() {
        let root = temp_root();
        let store = FileStore::new(&root);
        assert_eq!(store.get("game").unwrap(), None);

        store.put("game", "{\"x\":1}").unwrap();
        assert_eq!(store.get("game").unwrap().as_deref(), Some("{\"x\":1}"));
        assert!(root.join("game.json").exists());

        store.remove("game").unwrap();
        assert_eq!(store.get("game").unwrap(), None);
        store.remove("game").unwrap();

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_file_store_failed_rename_leaves_no_temp_file() {
        let root = temp_root();
        // 目标位置被一个非空目录占着，改名一定失败
        fs::create_dir_all(root.join("game.json").join("inner")).unwrap();
        let store = FileStore::new(&root);

        assert!(matches!(store.put("game", "{}"), Err(StoreError::Io { .. })));
        assert!(!root.join("game.json.tmp").exists());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let store = FileStore::new(temp_root());
        for key in ["", ".", "../escape", "a/b", "a\\b"] {
            assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))), "key {key:?} should be rejected");
        }
    }
}
