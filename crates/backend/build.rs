use std::env;
use std::fs;
use std::path::Path;

/// Copy the workspace config.toml next to the built binary, where
/// `load_config` looks for it
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR is target/<profile>/build/backend-<hash>/out
    let Some(target_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=target/{} not found above OUT_DIR, config.toml not copied", profile);
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source_config = workspace_root.join("config.toml");

    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!("cargo:warning=config.toml not found at {:?}, the embedded default applies", source_config);
    }
}
