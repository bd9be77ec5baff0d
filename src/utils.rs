/// Combine a high/low register pair into one 16-bit value
pub fn combine_pair(high: u8, low: u8) -> u16 {
    (u16::from(high) << 8) | u16::from(low)
}

/// Split a 12-bit position into its high nibble and low byte
pub fn split_position(value: u16) -> (u8, u8) {
    let [high, low] = (value & 0x0FFF).to_be_bytes();
    (high, low)
}
