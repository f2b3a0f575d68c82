// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::entropy::{EntropySource, SystemEntropySource};
use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropy, MockEntropySource};

#[test]
fn test_backend_failure_maps_to_entropy_error() {
    let mut bytes = [0u8; 16];
    let result = SystemEntropySource::fill_via(
        |_: &mut [u8]| Err(GetRandomError::UNSUPPORTED),
        &mut bytes,
    );

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
fn test_system_source_fills_completely() {
    let source = SystemEntropySource {};
    let mut bytes = [0u8; 32];

    assert!(source.fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_mock_pattern_is_deterministic() {
    let source = MockEntropySource::new(MockEntropy::Pattern(0x3c));
    let mut bytes = [0u8; 8];

    source.fill_bytes(&mut bytes).expect("pattern fill failed");

    assert_eq!(bytes, [0x3c; 8]);
}

#[test]
fn test_mock_refuses_exactly_the_scripted_call() {
    let source = MockEntropySource::new(MockEntropy::RefuseCall(2));
    let mut bytes = [0u8; 8];

    assert!(source.fill_bytes(&mut bytes).is_ok());
    assert!(matches!(
        source.fill_bytes(&mut bytes),
        Err(EntropyError::EntropyNotAvailable)
    ));
    assert!(source.fill_bytes(&mut bytes).is_ok());
    assert_eq!(source.calls_seen(), 3);
}
