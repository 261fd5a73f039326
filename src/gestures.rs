//! Drag-vector interpretation for the swipe card.
//!
//! Options sit on a circle around the card; the drag direction picks
//! the option whose angular segment contains it. Segments are centered
//! on each option, with the first option at 0 degrees (dragging right).

/// Fraction of the option radius inside which a drag selects nothing.
pub const DEADZONE_FACTOR: f64 = 0.3;
/// Fraction of the option radius a drag must pass for release to commit.
pub const RELEASE_FACTOR: f64 = 0.5;

/// Option index highlighted by the current drag offset, if any.
///
/// `None` inside the deadzone or when there are no options. Screen
/// coordinates: positive `dy` points down, so option order runs
/// clockwise starting at "east".
pub fn active_option(dx: f64, dy: f64, option_count: usize, radius: f64) -> Option<usize> {
    if option_count == 0 {
        return None;
    }
    if distance(dx, dy) < radius * DEADZONE_FACTOR {
        return None;
    }

    let mut angle = dy.atan2(dx).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }

    let segment = 360.0 / option_count as f64;
    let adjusted = (angle + segment / 2.0) % 360.0;
    Some(((adjusted / segment) as usize) % option_count)
}

/// Whether releasing the pointer at this offset commits the selection.
pub fn release_commits(dx: f64, dy: f64, radius: f64) -> bool {
    distance(dx, dy) > radius * RELEASE_FACTOR
}

fn distance(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}
