//! Barycentric mass channels.
//!
//! A mass is the one-hot barycentric label carried by a vertex. It is kept
//! separate from any spatial vector type so geometry and labelling data
//! cannot be mixed up.

use serde::{Deserialize, Serialize};

/// One of the three canonical barycentric labels, or none yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassChannel {
    /// No label assigned. Encodes as the zero vector.
    #[default]
    Unassigned,
    /// `(1, 0, 0)`
    First,
    /// `(0, 1, 0)`
    Second,
    /// `(0, 0, 1)`
    Third,
}

impl MassChannel {
    /// The assignable channels in fixed preference order.
    pub const CANONICAL: [MassChannel; 3] =
        [MassChannel::First, MassChannel::Second, MassChannel::Third];

    /// Returns true for any of the three canonical channels.
    #[inline]
    pub fn is_assigned(self) -> bool {
        self != MassChannel::Unassigned
    }

    /// Component slot (0, 1 or 2) of an assigned channel.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self {
            MassChannel::Unassigned => None,
            MassChannel::First => Some(0),
            MassChannel::Second => Some(1),
            MassChannel::Third => Some(2),
        }
    }

    /// Inverse of [`slot`](Self::slot). Out-of-range slots map to `Unassigned`.
    #[inline]
    pub fn from_slot(slot: usize) -> Self {
        match slot {
            0 => MassChannel::First,
            1 => MassChannel::Second,
            2 => MassChannel::Third,
            _ => MassChannel::Unassigned,
        }
    }

    /// The one-hot vector for this channel (zero when unassigned).
    pub fn vector(self) -> [f32; 3] {
        let mut v = [0.0; 3];
        if let Some(slot) = self.slot() {
            v[slot] = 1.0;
        }
        v
    }

    /// The mass re-encoded as an RGBA color with alpha fixed at 1.
    pub fn rgba(self) -> [f32; 4] {
        let [r, g, b] = self.vector();
        [r, g, b, 1.0]
    }

    /// Decodes an RGB(A) color back into a channel.
    ///
    /// Each component is rounded to the nearest of 0 or 1; anything that is
    /// not exactly one-hot after rounding yields `Unassigned`.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        match (r.round() as i32, g.round() as i32, b.round() as i32) {
            (1, 0, 0) => MassChannel::First,
            (0, 1, 0) => MassChannel::Second,
            (0, 0, 1) => MassChannel::Third,
            _ => MassChannel::Unassigned,
        }
    }
}
