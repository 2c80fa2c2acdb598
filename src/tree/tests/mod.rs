// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Unit and property-based tests for the radix tree.
