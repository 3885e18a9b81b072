//! Device-independent input commands.

/// What the player asked for.  The front-end translates raw key and mouse
/// events into these before handing them to `Game::handle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Left key pressed (`true`) or released (`false`).
    MoveLeft(bool),
    MoveRight(bool),
    /// Edge-triggered: one command per press.
    Fire,
    Quit,
    /// Keyboard shortcut for the Play control.
    Start,
    /// Pointer click in world coordinates.
    ActivateAt { x: i32, y: i32 },
}

/// Whether the front-end should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
