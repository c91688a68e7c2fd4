// Build script for opus-stream-ffi
//
// Links the native codec libraries through pkg-config, matching how the
// libraries themselves are distributed (.pc files "opusfile" and
// "libopusenc"). Each half of the crate is feature-gated, so only the
// libraries the build actually needs are probed.
//
// Note: the C header (include/opus_stream.h) is maintained manually;
// cbindgen does not recognize Rust 2024's #[unsafe(no_mangle)] syntax.

use std::env;

fn main() {
    if env::var_os("CARGO_FEATURE_OPUSFILE").is_some() {
        pkg_config::Config::new()
            .probe("opusfile")
            .expect("libopusfile not found; install it or build with --no-default-features");
    }

    if env::var_os("CARGO_FEATURE_OPUSENC").is_some() {
        pkg_config::Config::new()
            .probe("libopusenc")
            .expect("libopusenc not found; install it or build with --no-default-features");
    }

    println!("cargo:rerun-if-changed=src/");
}
