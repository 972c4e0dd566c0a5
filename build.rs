fn main() {
    // Only the Node.js cdylib needs the napi link setup.
    if std::env::var_os("CARGO_FEATURE_NODE").is_some() {
        napi_build::setup();
    }
}
