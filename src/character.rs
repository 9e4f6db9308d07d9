//! Byte values with special meaning in document syntax.

/// LINE FEED (LF).
pub const LINE_FEED: u8 = 0x0A;

/// CARRIAGE RETURN (CR).
pub const CARRIAGE_RETURN: u8 = 0x0D;
