/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 Chorus-OSS developers.
 */

use super::PairParseError;

#[derive(Debug)]
pub struct KeyValueLine<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> KeyValueLine<'a> {
    /// Split `line` at the first `delimiter` into a trimmed key and value.
    pub fn parse(line: &'a str, delimiter: u8) -> Result<KeyValueLine<'a>, PairParseError> {
        let Some(p) = memchr::memchr(delimiter, line.as_bytes()) else {
            return Err(PairParseError::NoDelimiterFound(char::from(delimiter)));
        };

        let key = line[..p].trim();
        let value = line[p + 1..].trim();

        Ok(KeyValueLine { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        let kv = KeyValueLine::parse("codec=flac", b'=').unwrap();
        assert_eq!(kv.key, "codec");
        assert_eq!(kv.value, "flac");
    }

    #[test]
    fn trimmed() {
        let kv = KeyValueLine::parse("  name = Living Room ", b'=').unwrap();
        assert_eq!(kv.key, "name");
        assert_eq!(kv.value, "Living Room");

        let kv = KeyValueLine::parse("=", b'=').unwrap();
        assert_eq!(kv.key, "");
        assert_eq!(kv.value, "");
    }

    #[test]
    fn no_delimiter() {
        let e = KeyValueLine::parse("codec flac", b'=').unwrap_err();
        assert_eq!(e, PairParseError::NoDelimiterFound('='));
    }
}
