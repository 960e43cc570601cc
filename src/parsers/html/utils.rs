/// ASCII 空白字符
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// 检查字节是否为 ASCII 空白字符
pub fn is_whitespace_byte(byte: u8) -> bool {
    WHITESPACES.contains(&(byte as char))
}
