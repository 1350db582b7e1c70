/// Stream header size (u64 little-endian original length)
pub const HEADER_SIZE: usize = 8;

/// Token flag for a literal byte
pub const FLAG_LITERAL: u8 = 0;

/// Token flag for a back-reference
pub const FLAG_MATCH: u8 = 1;

/// Payload bytes of a literal token (the byte itself)
pub const LITERAL_PAYLOAD_LEN: usize = 1;

/// Payload bytes of a match token (length code, distance low, distance high)
pub const MATCH_PAYLOAD_LEN: usize = 3;

/// Largest distance the 2-byte distance field can carry
pub const MAX_DISTANCE: usize = u16::MAX as usize;

/// Number of distinct match lengths the 1-byte length field can carry
pub const LENGTH_CODES: usize = 256;
