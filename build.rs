use shadow_rs::ShadowBuilder;

fn main() {
    // Exposes `build::CLAP_LONG_VERSION` and `build::PKG_VERSION` to the crate.
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
