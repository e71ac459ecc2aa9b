//! Ball / paddle contact classification
//!
//! Both shapes are axis-aligned boxes. A contact is either on a paddle's
//! near face (horizontal contact, reflects vx) or on its top/bottom cap
//! (vertical contact, reflects vy). Each is gated by the ball moving toward
//! that surface, so a ball already leaving a paddle is never caught twice.

use glam::Vec2;

use crate::consts::CONTACT_SINK;

/// Axis-aligned box given by center and half size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }
}

/// Kind of contact between the ball and a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ball touches the paddle's left or right face
    Face,
    /// Ball touches the paddle's top or bottom cap
    Cap,
}

/// Which sides of a paddle a moving ball is overlapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactSides {
    /// Ball and paddle share a height band
    pub same_height: bool,
    /// Ball is entering the paddle's right face while moving left
    pub right_face: bool,
    /// Ball is entering the paddle's left face while moving right
    pub left_face: bool,
    /// Ball and paddle share a horizontal band
    pub same_column: bool,
    /// Ball is landing on the paddle's top while moving down
    pub top_cap: bool,
    /// Ball is rising into the paddle's bottom while moving up
    pub bottom_cap: bool,
}

impl ContactSides {
    pub fn measure(ball: &Aabb, ball_vel: Vec2, paddle: &Aabb) -> Self {
        let ball_left = ball.left() + CONTACT_SINK;
        let ball_right = ball.right() - CONTACT_SINK;
        let ball_bottom = ball.bottom() + CONTACT_SINK;
        let ball_top = ball.top() - CONTACT_SINK;

        Self {
            same_height: ball.bottom() <= paddle.top() && ball.top() >= paddle.bottom(),
            right_face: ball_left <= paddle.right()
                && ball_left >= paddle.center.x
                && ball_vel.x < 0.0,
            left_face: ball_right >= paddle.left()
                && ball_right <= paddle.center.x
                && ball_vel.x > 0.0,
            same_column: ball.left() <= paddle.right() && ball.right() >= paddle.left(),
            top_cap: ball_bottom <= paddle.top()
                && ball_bottom >= paddle.center.y
                && ball_vel.y < 0.0,
            bottom_cap: ball_top >= paddle.bottom()
                && ball_top <= paddle.center.y
                && ball_vel.y > 0.0,
        }
    }

    /// Face contact wins over cap contact
    pub fn contact(&self) -> Option<Contact> {
        if self.same_height && (self.left_face || self.right_face) {
            Some(Contact::Face)
        } else if self.same_column && (self.top_cap || self.bottom_cap) {
            Some(Contact::Cap)
        } else {
            None
        }
    }
}

/// Classify the contact (if any) between a moving ball and a paddle
pub fn classify_contact(ball: &Aabb, ball_vel: Vec2, paddle: &Aabb) -> Option<Contact> {
    ContactSides::measure(ball, ball_vel, paddle).contact()
}
