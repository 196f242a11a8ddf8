// Browser console output. The console only exists on wasm32; native builds
// (unit tests, tooling) stay silent.

use std::fmt::Arguments;

#[cfg(all(feature = "debug-navigation", target_arch = "wasm32"))]
pub fn debug(args: Arguments) {
    zoon::println!("[DEBUG] {}", args);
}

#[cfg(target_arch = "wasm32")]
pub fn error(args: Arguments) {
    zoon::eprintln!("[ERROR] {}", args);
}

#[cfg(all(feature = "debug-navigation", not(target_arch = "wasm32")))]
pub fn debug(_args: Arguments) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_args: Arguments) {}
