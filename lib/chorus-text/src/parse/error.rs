/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 Chorus-OSS developers.
 */

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum PairParseError {
    #[error("no delimiter '{0}' found")]
    NoDelimiterFound(char),
}
