/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 Chorus-OSS developers.
 */

mod error;
pub use error::PairParseError;

mod split;
pub use split::split_left;

mod key_value;
pub use key_value::KeyValueLine;

mod pairs;
pub use pairs::{PairMap, parse_pairs};
