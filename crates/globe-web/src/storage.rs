use globe_core::constants::HIGH_SCORE_KEY;
use globe_core::HighScoreStore;
use web_sys as web;

/// High score kept in the browser's `localStorage`.
pub struct LocalStorageHighScore {
    storage: Option<web::Storage>,
}

impl LocalStorageHighScore {
    pub fn new() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[score] localStorage unavailable; high score will not persist");
        }
        Self { storage }
    }
}

impl HighScoreStore for LocalStorageHighScore {
    fn load(&self) -> anyhow::Result<Option<i32>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        let raw = storage
            .get_item(HIGH_SCORE_KEY)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        match raw {
            Some(text) => Ok(Some(text.trim().parse()?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, value: i32) -> anyhow::Result<()> {
        if let Some(storage) = &self.storage {
            storage
                .set_item(HIGH_SCORE_KEY, &value.to_string())
                .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        }
        Ok(())
    }
}
