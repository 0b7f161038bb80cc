use anyhow::Context;
use globe_core::HighScoreStore;
use std::path::PathBuf;

/// High score kept as a single integer in a text file.
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> anyhow::Result<Option<i32>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let value = text
            .trim()
            .parse()
            .with_context(|| format!("{} does not hold a number", self.path.display()))?;
        Ok(Some(value))
    }

    fn save(&mut self, value: i32) -> anyhow::Result<()> {
        std::fs::write(&self.path, format!("{value}\n"))
            .with_context(|| format!("writing {}", self.path.display()))
    }
}
