use flap_engine::{parse_best_score, MemoryStore, ScoreStore};
use web_sys::Storage;

/// Best score kept in `window.localStorage` under a single key.
pub struct LocalStorageStore {
    storage: Storage,
    key: String,
}

impl LocalStorageStore {
    /// `None` when the page has no usable local storage (privacy modes, sandboxed iframes).
    pub fn open(key: &str) -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self {
            storage,
            key: key.to_string(),
        })
    }
}

impl ScoreStore for LocalStorageStore {
    fn read_best(&self) -> u32 {
        match self.storage.get_item(&self.key) {
            Ok(raw) => parse_best_score(raw.as_deref()),
            Err(err) => {
                log::warn!("reading {} failed: {:?}", self.key, err);
                0
            }
        }
    }

    fn write_best(&mut self, score: u32) {
        if let Err(err) = self.storage.set_item(&self.key, &score.to_string()) {
            log::warn!("writing {} failed: {:?}", self.key, err);
        }
    }
}

/// Durable store when available, otherwise an in-memory one for this page load.
pub fn open_store(key: &str) -> Box<dyn ScoreStore> {
    match LocalStorageStore::open(key) {
        Some(store) => Box::new(store),
        None => {
            log::warn!("localStorage unavailable; best score will not survive reload");
            Box::new(MemoryStore::new())
        }
    }
}
