/// Durable home of the best score. Read once at startup, written at most once
/// per game over.
pub trait ScoreStore {
    fn read_best(&self) -> u32;
    fn write_best(&mut self, score: u32);
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn read_best(&self) -> u32 {
        (**self).read_best()
    }

    fn write_best(&mut self, score: u32) {
        (**self).write_best(score)
    }
}

/// In-process store for headless runs, tests, and hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best, writes: 0 }
    }

    /// Number of writes so far.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn read_best(&self) -> u32 {
        self.best
    }

    fn write_best(&mut self, score: u32) {
        self.best = score;
        self.writes += 1;
    }
}

/// Decode a stored best score. Missing or unreadable values count as 0.
pub fn parse_best_score(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(best) => best,
        Err(err) => {
            log::warn!("ignoring stored best score {:?}: {}", raw, err);
            0
        }
    }
}
