// Selections are tracked as bitmasks over input positions
pub const MAX_MASK_WIDTH: usize = 63;
