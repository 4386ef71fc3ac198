//! Process exit codes, per the external-interfaces contract.

pub const SUCCESS: i32 = 0;
pub const PARSE_ERROR: i32 = 1;
pub const VALIDATION_ERROR: i32 = 2;
pub const UNSUPPORTED_LANGUAGE: i32 = 3;
pub const RESOURCE_LIMIT_EXCEEDED: i32 = 4;
