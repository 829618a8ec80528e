pub const SUCCESS: i32 = 0;
pub const INPUT_ERROR: i32 = 1;
pub const CONVERSION_ERROR: i32 = 2;
