use std::cell::RefCell;
use std::rc::Rc;

/// Pointer offset relative to the viewport center, each axis in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffsets {
    pub mx: f32,
    pub my: f32,
}

/// Single writer (the pointermove handler), any number of readers.
pub type SharedOffsets = Rc<RefCell<PointerOffsets>>;

/// Map a client coordinate to a centered offset: 0 at the middle of the
/// extent, -1/+1 at the edges, clamped outside.
#[inline]
pub fn normalized_offset(client: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let half = extent * 0.5;
    ((client - half) / half).clamp(-1.0, 1.0)
}

impl PointerOffsets {
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        Self {
            mx: normalized_offset(client_x, width),
            my: normalized_offset(client_y, height),
        }
    }
}
