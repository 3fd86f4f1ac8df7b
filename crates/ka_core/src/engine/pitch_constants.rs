//! Pitch constants for the mini-game
//!
//! All positions are percentages of the pitch surface, 0-100 on both axes.

// ============================================================
// Field dimensions (percent units)
// ============================================================
pub mod field {
    /// Left/top edge of the pitch
    pub const MIN_PCT: f32 = 0.0;

    /// Right/bottom edge of the pitch
    pub const MAX_PCT: f32 = 100.0;

    /// Kick-off spot, x axis
    pub const CENTER_X: f32 = 50.0;

    /// Kick-off spot, y axis
    pub const CENTER_Y: f32 = 50.0;
}

// ============================================================
// Ball travel bounds
// ============================================================
pub mod ball {
    /// Smallest coordinate the ball can be kicked to on either axis
    pub const MIN_PCT: f32 = 5.0;

    /// Largest coordinate the ball can be kicked to on either axis
    pub const MAX_PCT: f32 = 95.0;
}

// ============================================================
// Goal mouths
// ============================================================
pub mod goal {
    /// Ball at or left of this x is on the home goal line
    pub const HOME_LINE_X: f32 = 5.0;

    /// Ball at or right of this x is on the away goal line
    pub const AWAY_LINE_X: f32 = 95.0;

    /// Lower y bound of both goal mouths
    pub const MOUTH_Y_MIN: f32 = 35.0;

    /// Upper y bound of both goal mouths
    pub const MOUTH_Y_MAX: f32 = 65.0;
}

// ============================================================
// Kick mechanic
// ============================================================
pub mod kick {
    /// A player this close to the ball (percent units) kicks it when moved
    pub const RADIUS_PCT: f32 = 8.0;

    /// Distance the ball travels per kick (percent units)
    pub const TRAVEL_PCT: f32 = 15.0;
}
