// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BlockDriver, BlockPrimitive};

/// A recording primitive: asserts the driver's contract on every call
/// and keeps the bytes it was fed.
struct MockPrimitive;

#[derive(Default)]
struct MockState {
    seen: Vec<u8>,
    block_call_lens: Vec<usize>,
    last_len: Option<usize>,
}

impl BlockPrimitive for MockPrimitive {
    const BLOCK_LEN: usize = 64;

    type State = MockState;

    fn process_blocks(state: &mut MockState, data: &mut [u8]) {
        assert!(!data.is_empty(), "empty bulk call");
        assert_eq!(data.len() % Self::BLOCK_LEN, 0, "ragged bulk call");
        assert_eq!(
            data.as_ptr() as usize % Self::BUFFER_ALIGNMENT,
            0,
            "misaligned bulk call",
        );

        state.block_call_lens.push(data.len());
        state.seen.extend_from_slice(data);
    }

    fn process_last(state: &mut MockState, tail: &mut [u8]) {
        assert!(tail.len() < Self::BLOCK_LEN, "oversized tail");
        assert!(state.last_len.is_none(), "process_last called twice");

        state.last_len = Some(tail.len());
        state.seen.extend_from_slice(tail);
    }
}

fn input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn test_absorb_reassembles_the_input() {
    for len in [0usize, 1, 63, 64, 65, 127, 128, 129, 1000, 5000] {
        let data = input(len);

        let mut driver = BlockDriver::<MockPrimitive>::new(MockState::default());
        driver.absorb(&data);
        let state = driver.finish();

        assert_eq!(state.seen, data, "byte loss at len {len}");
        assert_eq!(state.last_len, Some(len % 64), "wrong tail at len {len}");
    }
}

#[test]
fn test_chunked_absorb_matches_single_shot() {
    let data = input(10_000);

    let mut single = BlockDriver::<MockPrimitive>::new(MockState::default());
    single.absorb(&data);
    let single = single.finish();

    for chunk_len in [1usize, 7, 63, 64, 65, 1024] {
        let mut chunked = BlockDriver::<MockPrimitive>::new(MockState::default());
        for chunk in data.chunks(chunk_len) {
            chunked.absorb(chunk);
            assert!(chunked.partial_len() < MockPrimitive::BLOCK_LEN);
        }
        let chunked = chunked.finish();

        assert_eq!(chunked.seen, single.seen, "chunk len {chunk_len}");
        assert_eq!(chunked.last_len, single.last_len);
    }
}

#[test]
fn test_absorb_mut_handles_misaligned_input() {
    let mut backing = input(4097);

    // Skip one byte so the slice start misses any 32-byte boundary.
    let data = input(4096);
    backing[1..].copy_from_slice(&data);

    let mut driver = BlockDriver::<MockPrimitive>::new(MockState::default());
    driver.absorb_mut(&mut backing[1..]);
    let state = driver.finish();

    assert_eq!(state.seen, data);
}

#[test]
fn test_absorb_mut_matches_absorb() {
    let data = input(9999);

    let mut by_ref = BlockDriver::<MockPrimitive>::new(MockState::default());
    by_ref.absorb(&data);
    let by_ref = by_ref.finish();

    let mut owned = data.clone();
    let mut by_mut = BlockDriver::<MockPrimitive>::new(MockState::default());
    by_mut.absorb_mut(&mut owned);
    let by_mut = by_mut.finish();

    assert_eq!(by_ref.seen, by_mut.seen);
    assert_eq!(by_ref.last_len, by_mut.last_len);
}

#[test]
fn test_empty_finish_still_finalises() {
    let driver = BlockDriver::<MockPrimitive>::new(MockState::default());
    let state = driver.finish();

    assert_eq!(state.last_len, Some(0));
    assert!(state.block_call_lens.is_empty());
}

#[test]
fn test_exact_block_leaves_empty_tail() {
    let data = input(64 * 3);

    let mut driver = BlockDriver::<MockPrimitive>::new(MockState::default());
    driver.absorb(&data);
    assert_eq!(driver.partial_len(), 0);

    let state = driver.finish();
    assert_eq!(state.last_len, Some(0));
    assert_eq!(state.block_call_lens.iter().sum::<usize>(), 192);
}
