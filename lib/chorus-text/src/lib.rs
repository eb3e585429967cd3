/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 Chorus-OSS developers.
 */

pub mod parse;
pub mod percent;
