// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for run segmentation against the full Unicode data.

mod util;
