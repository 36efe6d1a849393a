use flap_engine::{DrawSurface, EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, ScoreStore};

/// Source of frame deltas for a blocking run loop. `None` means shut down.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Fixed number of frames at a constant delta. Handy for headless runs.
pub struct FixedFrames {
    remaining: u64,
    dt_ms: f64,
}

impl FixedFrames {
    pub fn new(count: u64, dt_ms: f64) -> Self {
        Self {
            remaining: count,
            dt_ms,
        }
    }
}

impl FrameSource for FixedFrames {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.dt_ms)
    }
}

/// Generic game runner that wires up the engine loop.
///
/// The browser entry points keep one `GameRunner` in a `thread_local!` and
/// drive `frame` from `requestAnimationFrame`; native hosts call `run`.
pub struct GameRunner<G: Game, S: ScoreStore> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    store: S,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game, S: ScoreStore> GameRunner<G, S> {
    pub fn new(game: G, store: S) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::with_max_events(config.max_events),
            input: InputQueue::new(),
            game,
            store,
            config,
            initialized: false,
        }
    }

    /// Load the stored best score and initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.ctx.best_score = self.store.read_best();
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update, persist a new best, render. Runs in every
    /// phase so idle screens keep redrawing.
    pub fn frame(&mut self, dt_ms: f64, surface: &mut dyn DrawSurface) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.clock.advance(dt_ms);

        let best_before = self.ctx.best_score;
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        if self.ctx.best_score > best_before {
            self.store.write_best(self.ctx.best_score);
            log::info!("persisted best score {}", self.ctx.best_score);
        }

        self.game.render(surface);
    }

    /// Blocking loop: one frame per delta until the source shuts down.
    /// Returns the number of frames run.
    pub fn run(&mut self, frames: &mut dyn FrameSource, surface: &mut dyn DrawSurface) -> u64 {
        let mut count = 0;
        while let Some(dt_ms) = frames.next_frame() {
            self.frame(dt_ms, surface);
            count += 1;
        }
        count
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Events emitted during the last frame.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    // ---- Pointer accessors for reads from wasm memory ----

    pub fn game_events_ptr(&self) -> *const f32 {
        self.events().as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.events().len() as u32
    }
}
