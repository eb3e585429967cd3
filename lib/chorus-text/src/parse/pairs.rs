/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 Chorus-OSS developers.
 */

use std::collections::HashMap;

use foldhash::fast::FixedState;

use super::{KeyValueLine, split_left};

pub type PairMap<'a> = HashMap<&'a str, &'a str, FixedState>;

/// Parse a delimited key/value list such as `name=Kitchen,codec=flac`.
///
/// Keys and values are whitespace-trimmed. Pieces without the
/// `kv_delimiter` are skipped. A repeated key keeps the last value.
pub fn parse_pairs<'a>(s: &'a str, pair_delimiter: u8, kv_delimiter: u8) -> PairMap<'a> {
    let mut map = PairMap::default();
    let mut left = s;
    while !left.is_empty() {
        let (piece, rest) = split_left(left, pair_delimiter);
        if let Ok(kv) = KeyValueLine::parse(piece, kv_delimiter) {
            map.insert(kv.key, kv.value);
        }
        left = rest;
    }
    map
}
