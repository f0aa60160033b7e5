pub trait StringUtils {
    fn as_bytes_vec(&self) -> Vec<u8>;
}

impl StringUtils for String {
    fn as_bytes_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

pub trait BytesUtils {
    /// Renders bytes the way Python prints a `bytes` value, e.g. `b'OK\r\n'`.
    fn as_literal(&self) -> String;
}

impl BytesUtils for [u8] {
    fn as_literal(&self) -> String {
        // single quotes unless that would need escaping and double quotes would not
        let quote = if self.contains(&b'\'') && !self.contains(&b'"') {
            b'"'
        } else {
            b'\''
        };

        let mut literal = String::with_capacity(self.len() + 3);
        literal.push('b');
        literal.push(quote as char);

        for byte in self.iter().copied() {
            match byte {
                b'\\' => literal.push_str("\\\\"),
                b'\t' => literal.push_str("\\t"),
                b'\n' => literal.push_str("\\n"),
                b'\r' => literal.push_str("\\r"),
                _ if byte == quote => {
                    literal.push('\\');
                    literal.push(byte as char);
                }
                0x20..=0x7e => literal.push(byte as char),
                _ => literal.push_str(&format!("\\x{byte:02x}")),
            }
        }

        literal.push(quote as char);

        literal
    }
}
