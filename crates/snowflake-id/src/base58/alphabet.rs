/// The base-58 alphabet, in digit order.
///
/// Digit zero, uppercase `O`, uppercase `I` and lowercase `l` are left out so
/// that encoded IDs cannot be misread. The order is part of the format:
/// changing it changes the meaning of every encoded value.
pub const ALPHABET: &[u8; 58] = b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

pub(crate) const BASE: i64 = 58;
pub(crate) const NO_VALUE: u8 = 255;

/// Maps every byte to its digit value, or [`NO_VALUE`].
pub(crate) const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};
