//! The 4-5-6 scoring rule.
//!
//! A set of dice scores only if at least one die shows each of 4, 5
//! and 6. A scoring set is worth the sum of every face minus those
//! three (15). Which dice are held does not matter.

use crate::core::Die;

/// Faces that must all be present for the dice to score.
pub const REQUIRED_FACES: [u8; 3] = [4, 5, 6];

/// Sum of [`REQUIRED_FACES`], subtracted from a scoring total.
pub const REQUIRED_TOTAL: u32 = 15;

/// Does any face equal `face`?
#[must_use]
pub fn shows_face(faces: &[u8], face: u8) -> bool {
    faces.contains(&face)
}

/// Points for a set of faces, or `None` if 4, 5 and 6 are not all present.
///
/// ```
/// use dice_game::game::scoring::score_faces;
///
/// assert_eq!(score_faces(&[4, 5, 6, 2, 3]), Some(5));
/// assert_eq!(score_faces(&[4, 4, 5, 3, 2]), None);
/// ```
#[must_use]
pub fn score_faces(faces: &[u8]) -> Option<u32> {
    if !REQUIRED_FACES.iter().all(|&face| shows_face(faces, face)) {
        return None;
    }
    let total: u32 = faces.iter().map(|&f| u32::from(f)).sum();
    Some(total - REQUIRED_TOTAL)
}

/// Points for the current dice, or `None` if they do not score.
#[must_use]
pub fn score_dice(dice: &[Die]) -> Option<u32> {
    let faces: Vec<u8> = dice.iter().map(Die::face_value).collect();
    score_faces(&faces)
}
