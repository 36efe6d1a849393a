use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{EventKind, GameEvent};
use crate::config::{Metrics, Viewport};
use crate::core::physics::Avatar;
use crate::core::rng::Rng;
use crate::core::scene::ObstacleField;
use crate::core::time::SpawnTimer;
use crate::game::session::{Hud, Phase, Session};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::DrawSurface;
use crate::systems::collision::{hits_boundary, sweep_obstacles};
use crate::systems::render::{draw_frame, FrameView};
use crate::systems::spawner::spawn_obstacle;

/// The flap-and-dodge game: one avatar, a stream of gate pairs, and the
/// Start -> Playing -> GameOver -> Start cycle.
pub struct FlappyGame {
    config: GameConfig,
    metrics: Metrics,
    avatar: Avatar,
    obstacles: ObstacleField,
    session: Session,
    spawn_timer: SpawnTimer,
    rng: Rng,
}

impl FlappyGame {
    pub fn new(config: GameConfig) -> Self {
        let metrics = Metrics::for_profile(config.profile, config.viewport, config.min_gate_height);
        Self {
            avatar: Avatar::from_metrics(&metrics),
            obstacles: ObstacleField::new(),
            session: Session::default(),
            spawn_timer: SpawnTimer::new(config.profile.spawn_interval_ms()),
            rng: Rng::new(config.seed),
            metrics,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn best_score(&self) -> u32 {
        self.session.best()
    }

    pub fn hud(&self) -> Hud {
        self.session.hud()
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The primary action, routed by phase.
    pub fn on_input(&mut self, ctx: &mut EngineContext) {
        match self.session.phase() {
            Phase::Start => self.start(ctx),
            Phase::Playing => self.avatar.flap(),
            Phase::GameOver => self.restart(ctx),
        }
    }

    /// Recompute size-derived constants for a new viewport. While idle the
    /// avatar is re-centred and stale obstacles are dropped.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.metrics = Metrics::for_profile(self.config.profile, viewport, self.config.min_gate_height);
        let idle = self.session.phase() == Phase::Start;
        self.avatar.rescale(&self.metrics, idle);
        if idle {
            self.obstacles.clear();
        }
        log::debug!(
            "resized to {}x{} (canvas {}x{})",
            viewport.width,
            viewport.height,
            self.metrics.canvas.width,
            self.metrics.canvas.height
        );
    }

    fn start(&mut self, ctx: &mut EngineContext) {
        if self.session.begin() {
            self.avatar.flap();
            log::info!("session started");
            self.emit_phase(ctx);
        }
    }

    fn game_over(&mut self, ctx: &mut EngineContext) {
        if let Some(best) = self.session.finish() {
            ctx.best_score = best;
            log::info!("new best score: {}", best);
            ctx.emit_event(GameEvent::new(EventKind::NewBest, best as f32));
        }
        log::info!("game over with score {}", self.session.score());
        self.emit_phase(ctx);
    }

    fn restart(&mut self, ctx: &mut EngineContext) {
        if self.session.reset() {
            self.avatar.reset(&self.metrics);
            self.obstacles.clear();
            self.spawn_timer.reset();
            log::info!("session reset");
            self.emit_phase(ctx);
            ctx.emit_event(GameEvent::new(EventKind::ScoreChanged, 0.0));
        }
    }

    fn emit_phase(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::new(
            EventKind::PhaseChanged,
            self.session.phase().code() as f32,
        ));
    }

    /// One simulation tick: physics, spawning, obstacles, boundaries.
    fn step(&mut self, ctx: &mut EngineContext) {
        if self.session.phase() != Phase::Playing {
            return;
        }

        self.avatar.step();

        if self.spawn_timer.poll(ctx.now_ms()) {
            spawn_obstacle(&mut self.obstacles, &mut self.rng, &self.metrics);
        }

        let bounds = self.avatar.bounds();
        let sweep = sweep_obstacles(
            &mut self.obstacles,
            &bounds,
            self.metrics.obstacle_width,
            self.metrics.obstacle_speed,
        );
        if sweep.scored > 0 {
            self.session.add_points(sweep.scored);
            ctx.emit_event(GameEvent::new(
                EventKind::ScoreChanged,
                self.session.score() as f32,
            ));
        }

        if sweep.collided || hits_boundary(&bounds, self.metrics.ground_y) {
            self.game_over(ctx);
        }
    }
}

impl Game for FlappyGame {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.session = Session::with_best(ctx.best_score);
        log::info!(
            "flappy: {:?} profile, canvas {}x{}, best {}",
            self.config.profile,
            self.metrics.canvas.width,
            self.metrics.canvas.height,
            ctx.best_score
        );
        self.emit_phase(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Resize { width, height } => match Viewport::new(width, height) {
                    Ok(viewport) => self.on_resize(viewport),
                    Err(err) => log::warn!("ignoring resize: {}", err),
                },
                e if e.is_primary_action() => self.on_input(ctx),
                _ => {}
            }
        }

        self.step(ctx);
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        draw_frame(
            surface,
            &FrameView {
                metrics: &self.metrics,
                avatar: &self.avatar,
                obstacles: &self.obstacles,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayProfile, POINTER_CANVAS};
    use crate::core::scene::Obstacle;
    use crate::input::queue::KEY_SPACE;
    use crate::renderer::draw_list::DrawList;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn new_game() -> (FlappyGame, EngineContext) {
        let mut game = FlappyGame::new(GameConfig::default());
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        ctx.clear_frame_data();
        (game, ctx)
    }

    fn frame(game: &mut FlappyGame, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for e in events {
            input.push(*e);
        }
        ctx.clear_frame_data();
        ctx.clock.advance(FRAME_MS);
        game.update(ctx, &input);
    }

    fn kinds(ctx: &EngineContext) -> Vec<EventKind> {
        ctx.events.iter().filter_map(|e| e.kind()).collect()
    }

    #[test]
    fn idle_until_first_input() {
        let (mut game, mut ctx) = new_game();
        let start = game.avatar().clone();
        for _ in 0..30 {
            frame(&mut game, &mut ctx, &[]);
        }
        assert_eq!(game.phase(), Phase::Start);
        assert_eq!(game.avatar(), &start);
        assert!(game.obstacles().is_empty());
    }

    #[test]
    fn first_input_starts_and_flaps() {
        let (mut game, mut ctx) = new_game();
        game.on_input(&mut ctx);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.avatar().velocity, game.avatar().impulse);
        assert_eq!(kinds(&ctx), vec![EventKind::PhaseChanged]);
    }

    #[test]
    fn gravity_accumulates_while_playing() {
        let (mut game, mut ctx) = new_game();
        frame(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: KEY_SPACE }]);
        let g = game.avatar().gravity;
        let mut prev = game.avatar().velocity;
        for _ in 0..10 {
            frame(&mut game, &mut ctx, &[]);
            assert!((game.avatar().velocity - (prev + g)).abs() < 1e-4);
            prev = game.avatar().velocity;
        }
    }

    #[test]
    fn flap_overwrites_velocity() {
        let (mut game, mut ctx) = new_game();
        frame(&mut game, &mut ctx, &[InputEvent::Action]);
        for _ in 0..5 {
            frame(&mut game, &mut ctx, &[]);
        }
        game.on_input(&mut ctx);
        assert_eq!(game.avatar().velocity, game.avatar().impulse);
        game.on_input(&mut ctx);
        assert_eq!(game.avatar().velocity, game.avatar().impulse);
    }

    #[test]
    fn first_playing_frame_spawns_at_right_edge() {
        let (mut game, mut ctx) = new_game();
        frame(&mut game, &mut ctx, &[InputEvent::Action]);
        assert_eq!(game.obstacles().len(), 1);
        let o = game.obstacles().iter().next().copied().unwrap();
        // Spawned at the right edge, then advanced once in the same frame.
        assert!((o.x - (POINTER_CANVAS.width - game.metrics().obstacle_speed)).abs() < 1e-4);
    }

    /// Start a run, then pin the bird at its start height and discard
    /// obstacles until the timer fires again. Returns frames waited.
    fn frames_between_spawns(game: &mut FlappyGame, ctx: &mut EngineContext) -> u32 {
        frame(game, ctx, &[InputEvent::Action]);
        assert_eq!(game.obstacles().len(), 1);
        let mut frames = 0;
        for _ in 0..200 {
            game.avatar.pos.y = game.metrics.avatar_start_y;
            game.avatar.velocity = 0.0;
            game.obstacles.clear();
            frame(game, ctx, &[]);
            frames += 1;
            if !game.obstacles().is_empty() {
                break;
            }
        }
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.obstacles().len(), 1);
        frames
    }

    #[test]
    fn pointer_profile_spawns_every_1500ms() {
        let (mut game, mut ctx) = new_game();
        let frames = frames_between_spawns(&mut game, &mut ctx);
        // 1500 ms at 60 fps is about 90 frames.
        assert!((90..=92).contains(&frames), "spawned after {} frames", frames);
        assert!(ctx.now_ms() > 1500.0);
    }

    #[test]
    fn touch_profile_spawns_every_2000ms() {
        let mut game = FlappyGame::new(GameConfig::for_profile(
            DisplayProfile::TouchPrimary,
            Viewport::new(360.0, 640.0).unwrap(),
        ));
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        let frames = frames_between_spawns(&mut game, &mut ctx);
        // 2000 ms at 60 fps is about 120 frames.
        assert!((120..=122).contains(&frames), "spawned after {} frames", frames);
        assert!(ctx.now_ms() > 2000.0);
    }

    #[test]
    fn ceiling_ends_the_run_immediately() {
        let (mut game, mut ctx) = new_game();
        game.on_input(&mut ctx);
        game.avatar.pos.y = -1.0;
        game.avatar.velocity = 0.0;
        game.avatar.gravity = 0.0;
        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn ground_ends_the_run() {
        let (mut game, mut ctx) = new_game();
        game.on_input(&mut ctx);
        let mut frames = 0;
        while game.phase() == Phase::Playing && frames < 1000 {
            game.obstacles.clear();
            frame(&mut game, &mut ctx, &[]);
            frames += 1;
        }
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.avatar().bounds().bottom() >= game.metrics().ground_y);
    }

    #[test]
    fn game_over_freezes_physics() {
        let (mut game, mut ctx) = new_game();
        game.on_input(&mut ctx);
        game.avatar.pos.y = -5.0;
        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.phase(), Phase::GameOver);
        let frozen = game.avatar().clone();
        let obstacles = game.obstacles().len();
        for _ in 0..10 {
            frame(&mut game, &mut ctx, &[]);
        }
        assert_eq!(game.avatar(), &frozen);
        assert_eq!(game.obstacles().len(), obstacles);
    }

    #[test]
    fn passing_an_obstacle_scores_once() {
        let (mut game, mut ctx) = new_game();
        game.on_input(&mut ctx);
        game.spawn_timer = SpawnTimer::new(f64::INFINITY);
        game.spawn_timer.poll(0.0);
        let m = *game.metrics();
        // Wide-open gate around the avatar, right edge just short of passing.
        let x = m.avatar_x - m.obstacle_width + m.obstacle_speed * 0.5;
        game.obstacles.spawn(Obstacle::new(x, 1.0, m.ground_y - 2.0));
        game.avatar.gravity = 0.0;
        game.avatar.velocity = 0.0;

        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.score(), 1);
        assert!(kinds(&ctx).contains(&EventKind::ScoreChanged));
        for _ in 0..20 {
            frame(&mut game, &mut ctx, &[]);
        }
        assert_eq!(game.score(), 1);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn gate_collision_ends_the_run() {
        let (mut game, mut ctx) = new_game();
        game.on_input(&mut ctx);
        game.spawn_timer = SpawnTimer::new(f64::INFINITY);
        game.spawn_timer.poll(0.0);
        let m = *game.metrics();
        game.avatar.gravity = 0.0;
        game.avatar.velocity = 0.0;
        game.avatar.pos.y = 100.0;
        // Opening well below the avatar: top gate covers it.
        game.obstacles.spawn(Obstacle::new(m.avatar_x, 300.0, m.gate_gap));
        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn new_best_is_reported_once() {
        let mut game = FlappyGame::new(GameConfig::default());
        let mut ctx = EngineContext::new();
        ctx.best_score = 2;
        game.init(&mut ctx);
        game.on_input(&mut ctx);
        game.session.add_points(5);
        game.avatar.pos.y = -1.0;
        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.best_score(), 5);
        assert_eq!(ctx.best_score, 5);
        assert!(kinds(&ctx).contains(&EventKind::NewBest));
    }

    #[test]
    fn low_score_keeps_best() {
        let mut game = FlappyGame::new(GameConfig::default());
        let mut ctx = EngineContext::new();
        ctx.best_score = 9;
        game.init(&mut ctx);
        game.on_input(&mut ctx);
        game.avatar.pos.y = -1.0;
        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(ctx.best_score, 9);
        assert!(!kinds(&ctx).contains(&EventKind::NewBest));
    }

    #[test]
    fn input_after_game_over_resets_to_start() {
        let (mut game, mut ctx) = new_game();
        frame(&mut game, &mut ctx, &[InputEvent::Action]);
        game.session.add_points(3);
        game.avatar.pos.y = -1.0;
        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(!game.obstacles().is_empty());

        frame(&mut game, &mut ctx, &[InputEvent::PointerDown { x: 5.0, y: 5.0 }]);
        assert_eq!(game.phase(), Phase::Start);
        assert_eq!(game.score(), 0);
        assert!(game.obstacles().is_empty());
        assert_eq!(game.avatar(), &Avatar::from_metrics(game.metrics()));

        // A second input starts a fresh run, spawning straight away.
        frame(&mut game, &mut ctx, &[InputEvent::Action]);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.obstacles().len(), 1);
    }

    #[test]
    fn other_keys_are_ignored() {
        let (mut game, mut ctx) = new_game();
        frame(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: 13 }]);
        assert_eq!(game.phase(), Phase::Start);
    }

    #[test]
    fn resize_while_idle_rescales_and_clears() {
        let mut game = FlappyGame::new(GameConfig::for_profile(
            DisplayProfile::TouchPrimary,
            Viewport::new(360.0, 640.0).unwrap(),
        ));
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        game.obstacles.spawn(Obstacle::new(100.0, 100.0, 150.0));

        frame(&mut game, &mut ctx, &[InputEvent::Resize { width: 720.0, height: 1280.0 }]);
        let once = *game.metrics();
        assert_eq!(once.canvas, Viewport { width: 720.0, height: 1280.0 });
        assert!(game.obstacles().is_empty());
        assert_eq!(game.avatar().pos.y, once.avatar_start_y);

        frame(&mut game, &mut ctx, &[InputEvent::Resize { width: 720.0, height: 1280.0 }]);
        assert_eq!(*game.metrics(), once);
    }

    #[test]
    fn resize_while_playing_keeps_obstacles() {
        let mut game = FlappyGame::new(GameConfig::for_profile(
            DisplayProfile::TouchPrimary,
            Viewport::new(360.0, 640.0).unwrap(),
        ));
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        game.on_input(&mut ctx);
        game.obstacles.spawn(Obstacle::new(300.0, 100.0, 150.0));
        let y = game.avatar().pos.y;
        game.on_resize(Viewport::new(360.0, 700.0).unwrap());
        assert_eq!(game.obstacles().len(), 1);
        assert_eq!(game.avatar().pos.y, y);
    }

    #[test]
    fn invalid_resize_is_ignored() {
        let (mut game, mut ctx) = new_game();
        let before = *game.metrics();
        frame(&mut game, &mut ctx, &[InputEvent::Resize { width: -10.0, height: 0.0 }]);
        assert_eq!(*game.metrics(), before);
    }

    #[test]
    fn pointer_profile_keeps_fixed_canvas_on_resize() {
        let (mut game, _ctx) = new_game();
        game.on_resize(Viewport::new(1920.0, 1080.0).unwrap());
        assert_eq!(game.metrics().canvas, POINTER_CANVAS);
    }

    #[test]
    fn renders_in_every_phase() {
        let (mut game, mut ctx) = new_game();
        let mut list = DrawList::new();
        game.render(&mut list);
        assert!(!list.is_empty());
        frame(&mut game, &mut ctx, &[InputEvent::Action]);
        game.render(&mut list);
        assert!(!list.is_empty());
        game.avatar.pos.y = -50.0;
        frame(&mut game, &mut ctx, &[]);
        assert_eq!(game.phase(), Phase::GameOver);
        game.render(&mut list);
        assert!(!list.is_empty());
    }
}
