use crate::expression::Number;

pub const MAX_NUMBERS: usize = 6;
pub const MIN_TARGET: Number = 1;
pub const MAX_TARGET: Number = 999;
