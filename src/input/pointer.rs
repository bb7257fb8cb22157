use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

/// Translates mouse activity into direction proposals.
///
/// Two gestures are recognized, both resolved by axis dominance:
/// - **Drag**: the press records an anchor; every drag report proposes the
///   direction of the displacement from that anchor (continuously, not once).
/// - **Tap**: a press released without any drag in between proposes the
///   direction from the snake head's rendered center to the pointer, once
///   per activation.
///
/// The reversal guard lives in the direction queue, so this mapper only
/// selects an axis; it never judges validity.
pub struct PointerMapper {
    anchor: Option<(i32, i32)>,
    dragging: bool,
}

impl PointerMapper {
    pub fn new() -> Self {
        Self {
            anchor: None,
            dragging: false,
        }
    }

    /// Feed one mouse event. `head_center` is the screen position of the
    /// snake head's rendered center, when a grid is on screen.
    pub fn on_event(
        &mut self,
        event: MouseEvent,
        head_center: Option<(i32, i32)>,
    ) -> Option<Direction> {
        let at = (i32::from(event.column), i32::from(event.row));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.anchor = Some(at);
                self.dragging = false;
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (ax, ay) = self.anchor?;
                self.dragging = true;
                Some(axis_dominant(at.0 - ax, at.1 - ay))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let was_tap = self.anchor.is_some() && !self.dragging;
                self.anchor = None;
                self.dragging = false;

                if was_tap {
                    let (hx, hy) = head_center?;
                    Some(axis_dominant(at.0 - hx, at.1 - hy))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for PointerMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the direction along the displacement's dominant axis. A terminal
/// grid cell spans two columns but one row, so horizontal distance counts
/// at half weight; ties fall to the vertical axis.
fn axis_dominant(dx: i32, dy: i32) -> Direction {
    if dx.abs() > 2 * dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
