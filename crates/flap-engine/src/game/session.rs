use serde::Serialize;

/// Phases of one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Idle: avatar shown, waiting for the first input.
    #[default]
    Start,
    /// Physics running, score accumulating.
    Playing,
    /// Frozen after a collision until the next input.
    GameOver,
}

impl Phase {
    /// Numeric code used in events and wasm exports.
    pub fn code(self) -> u8 {
        match self {
            Phase::Start => 0,
            Phase::Playing => 1,
            Phase::GameOver => 2,
        }
    }
}

/// Score bookkeeping and the phase machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    score: u32,
    best: u32,
}

impl Session {
    pub fn with_best(best: u32) -> Self {
        Self {
            best,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Start -> Playing. Returns false if not in Start.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Start {
            return false;
        }
        self.phase = Phase::Playing;
        true
    }

    pub fn add_points(&mut self, points: u32) {
        if self.phase == Phase::Playing {
            self.score += points;
        }
    }

    /// Playing -> GameOver. Returns the new best when this run beat it.
    pub fn finish(&mut self) -> Option<u32> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.phase = Phase::GameOver;
        if self.score > self.best {
            self.best = self.score;
            Some(self.best)
        } else {
            None
        }
    }

    /// GameOver -> Start with a zeroed score. Returns false if not in GameOver.
    pub fn reset(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.phase = Phase::Start;
        self.score = 0;
        true
    }

    pub fn hud(&self) -> Hud {
        Hud {
            phase: self.phase,
            show_start: self.phase == Phase::Start,
            show_score: self.phase == Phase::Playing,
            show_game_over: self.phase == Phase::GameOver,
            score: self.score,
            best: self.best,
        }
    }
}

/// What the UI layer should display. During GameOver `score` is the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub phase: Phase,
    pub show_start: bool,
    pub show_score: bool,
    pub show_game_over: bool,
    pub score: u32,
    pub best: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut Session, points: u32) -> Option<u32> {
        assert!(session.begin());
        session.add_points(points);
        session.finish()
    }

    #[test]
    fn full_cycle() {
        let mut s = Session::with_best(2);
        assert_eq!(s.phase(), Phase::Start);
        assert_eq!(play(&mut s, 5), Some(5));
        assert_eq!(s.phase(), Phase::GameOver);
        assert_eq!(s.score(), 5);
        assert!(s.reset());
        assert_eq!(s.phase(), Phase::Start);
        assert_eq!(s.score(), 0);
        assert_eq!(s.best(), 5);
    }

    #[test]
    fn best_never_decreases() {
        let mut s = Session::default();
        let mut expected = 0;
        for score in [3, 1, 7, 7, 0, 9, 2] {
            play(&mut s, score);
            expected = expected.max(score);
            assert_eq!(s.best(), expected);
            s.reset();
        }
    }

    #[test]
    fn tying_the_best_is_not_a_new_best() {
        let mut s = Session::with_best(4);
        assert_eq!(play(&mut s, 4), None);
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let mut s = Session::default();
        assert!(!s.reset());
        assert_eq!(s.finish(), None);
        s.add_points(3);
        assert_eq!(s.score(), 0);
        assert!(s.begin());
        assert!(!s.begin());
        assert!(!s.reset());
    }

    #[test]
    fn hud_follows_phase() {
        let mut s = Session::default();
        let hud = s.hud();
        assert!(hud.show_start && !hud.show_score && !hud.show_game_over);
        s.begin();
        let hud = s.hud();
        assert!(!hud.show_start && hud.show_score && !hud.show_game_over);
        s.finish();
        let hud = s.hud();
        assert!(!hud.show_start && !hud.show_score && hud.show_game_over);
    }

    #[test]
    fn hud_serializes_for_the_page() {
        let json = serde_json::to_string(&Session::with_best(3).hud()).unwrap();
        assert!(json.contains("\"phase\":\"start\""));
        assert!(json.contains("\"best\":3"));
    }
}
