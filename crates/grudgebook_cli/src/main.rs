//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `grudgebook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("grudgebook_core ping={}", grudgebook_core::ping());
    println!("grudgebook_core version={}", grudgebook_core::core_version());
}
