/*! Integration tests for Arbor.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - access: Path reads and writes, including auto-vivification
 * - walk: Traversal order, pruning and abort
 * - flat: Coalescing and diffusing, plain and typed
 * - merge: Deep merge and conflict accumulation
 * - transform: compact, apply, stringify and autotype
 * - record: Records as tree containers
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("arbor=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod access;
mod flat;
mod helpers;
mod merge;
mod record;
mod transform;
mod walk;
