//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `smartnotes_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny probe to validate core crate wiring independently
    // from the page-rendering host setup.
    println!("smartnotes_core ping={}", smartnotes_core::ping());
    println!("smartnotes_core version={}", smartnotes_core::core_version());
}
