extern crate log;
extern crate serde_json;

use log::warn;
use std::{
    collections::{BTreeMap, HashMap},
    error::Error as StdError,
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error accessing store: {}", e),
            Self::Json(e) => write!(f, "Error processing stored data: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Flat string key-value store.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// A JSON object on disk, rewritten wholesale on every change.
pub struct FileStore {
    path: PathBuf,
}
impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileStore { path: path.into() }
    }
    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match File::open(&self.path) {
            Ok(f) => serde_json::from_reader(BufReader::new(f)).map_err(Error::Json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(Error::Io(e)),
        }
    }
    /// An unparseable file is replaced on the next write.
    fn read_for_update(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.read_all() {
            Ok(v) => Ok((v, false)),
            Err(Error::Json(e)) => {
                warn!("Replacing unreadable store {}: {}", self.path.display(), e);
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }
    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let mut wdr = BufWriter::new(File::create(&self.path).map_err(Error::Io)?);
        serde_json::to_writer_pretty(&mut wdr, items).map_err(Error::Json)?;
        wdr.flush().map_err(Error::Io)
    }
}
impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }
    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let (mut items, _) = self.read_for_update()?;
        items.insert(key.to_string(), value);
        self.write_all(&items)
    }
    fn remove(&mut self, key: &str) -> Result<()> {
        let (mut items, broken) = self.read_for_update()?;
        if items.remove(key).is_some() || broken {
            self.write_all(&items)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }
    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }
    fn remove(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
