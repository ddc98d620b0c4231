use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{
    app_data_dir, data_env_dirs, ConfigPathError, APP_DIR, EXTENSION_STORE_FILE,
    LOCAL_STORAGE_FILE,
};

mod local_cache;

pub use local_cache::LocalCache;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("storage io error: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse stored value")]
    Parse(#[from] serde_json::Error),
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Key-value storage where every `set` replaces the whole value under a key.
///
/// Callers treat `Ok(None)` and `Err(_)` from `get` the same way: the key is
/// absent and defaults apply.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> StorageResult<()>;
}

/// A JSON object persisted as a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> StorageResult<Map<String, Value>> {
        let serialized = match fs::read_to_string(&self.path) {
            Ok(serialized) => serialized,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if serialized.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&serialized)? {
            Value::Object(object) => Ok(object),
            _ => Err(StorageError::Unavailable {
                message: format!("{} does not hold a JSON object", self.path.display()),
            }),
        }
    }

    fn write_object(&self, object: &Map<String, Value>) -> StorageResult<()> {
        let io_error = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let serialized = serde_json::to_string_pretty(object)?;
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);
        fs::write(&staging, serialized).map_err(io_error)?;
        fs::rename(&staging, &self.path).map_err(io_error)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.read_object()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut object = self.read_object().unwrap_or_else(|err| {
            tracing::warn!(?err, path = %self.path.display(), "discarding unreadable store");
            Map::new()
        });
        object.insert(key.to_string(), value);
        self.write_object(&object)
    }
}

/// In-memory store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// File locations of the two independent stores.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub extension_store: PathBuf,
    pub local_storage: PathBuf,
}

impl StoragePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            extension_store: dir.join(EXTENSION_STORE_FILE),
            local_storage: dir.join(LOCAL_STORAGE_FILE),
        }
    }

    pub fn with_default_dirs() -> StorageResult<Self> {
        let (xdg_data_home, home) = data_env_dirs();
        let dir = app_data_dir(APP_DIR, xdg_data_home.as_deref(), home.as_deref()).map_err(
            |error| match error {
                ConfigPathError::MissingHomeDirectory => StorageError::MissingHomeDirectory,
            },
        )?;
        Ok(Self::in_dir(&dir))
    }
}
