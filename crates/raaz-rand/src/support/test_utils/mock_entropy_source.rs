// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::entropy::{EntropySource, SystemEntropySource};
use crate::error::EntropyError;

/// What a [`MockEntropySource`] does with each `fill_bytes` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropy {
    /// Defer to the operating system.
    System,
    /// Fill every request with one repeated byte. Two generators built
    /// over the same pattern seed identically, which is what the
    /// erasure and determinism tests lean on.
    Pattern(u8),
    /// Refuse every request.
    Refuse,
    /// Serve requests from the OS except the `n`th one (1-indexed),
    /// which is refused. Models an entropy source that dies mid-life.
    RefuseCall(usize),
}

/// Scripted entropy source for exercising the PRG's seeding paths.
///
/// Counts the `fill_bytes` calls it has seen, so tests can pin down
/// exactly which (re)seed consumed which request.
pub struct MockEntropySource {
    script: MockEntropy,
    calls: AtomicUsize,
}

impl MockEntropySource {
    /// Builds a source following `script`.
    pub fn new(script: MockEntropy) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `fill_bytes` requests observed so far.
    pub fn calls_seen(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;

        match self.script {
            MockEntropy::System => SystemEntropySource {}.fill_bytes(dest),
            MockEntropy::Pattern(byte) => {
                dest.fill(byte);
                Ok(())
            }
            MockEntropy::Refuse => Err(EntropyError::EntropyNotAvailable),
            MockEntropy::RefuseCall(n) => {
                if call == n {
                    Err(EntropyError::EntropyNotAvailable)
                } else {
                    SystemEntropySource {}.fill_bytes(dest)
                }
            }
        }
    }
}
