//! Game entity types and the shared geometry they are built on.
//!
//! Behaviour lives in `ship`, `projectiles`, `fleet` and `collision`; this
//! module only holds the data those modules operate on.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Integer screen rectangle.  `x`/`y` is the top-left corner, `y` grows down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w as i32 / 2
    }

    /// True when the two rectangles share interior area.  Touching edges do
    /// not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Anything with a bounding box that can be drawn and collided.
pub trait Body {
    fn rect(&self) -> Rect;

    fn overlaps<B: Body + ?Sized>(&self, other: &B) -> bool {
        self.rect().intersects(&other.rect())
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

/// The player ship.  `x` is kept as a float so non-integral speeds do not
/// drift; it is only truncated when the bounding box is read.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player projectile.  Travels straight up at the speed it was fired with.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: i32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub speed: f32,
}

impl Body for Ship {
    fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y, self.width, self.height)
    }
}

impl Body for Enemy {
    fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y, self.width, self.height)
    }
}

impl Body for Projectile {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y as i32, self.width, self.height)
    }
}

// ── Game status & statistics ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the first start command.
    Idle,
    Playing,
    /// Out of ships; waiting for a restart.
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score seen in this process.  Never below `score`.
    pub high_score: u32,
}

impl GameStats {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            ships_left: starting_lives,
            score: 0,
            level: 1,
            high_score: 0,
        }
    }

    /// Start-of-game values.  The high score is kept.
    pub fn reset(&mut self, starting_lives: u32) {
        self.ships_left = starting_lives;
        self.score = 0;
        self.level = 1;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }
}

// ── Render handoff ────────────────────────────────────────────────────────────

/// Read-only view of one tick, handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub screen: Rect,
    pub ship: Rect,
    pub projectiles: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub play_button: Rect,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub status: GameStatus,
    /// True while the post-hit freeze is running.
    pub respawning: bool,
}
