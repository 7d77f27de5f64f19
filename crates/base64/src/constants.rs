/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character. Tolerated on decode, never produced on encode.
pub const PAD: u8 = b'=';
