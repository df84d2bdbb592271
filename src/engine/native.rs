// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Native verbs for catalog gates, generated by the build script.

include!(concat!(env!("OUT_DIR"), "/bindings/native.rs"));
