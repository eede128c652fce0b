use std::{env, path::PathBuf};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap();

    println!("cargo:rerun-if-changed=linker.ld");

    // Host builds (unit tests) link normally; only target images need the
    // user address space layout.
    if target_arch == "riscv64" {
        let link_script = PathBuf::from(manifest_dir).join("linker.ld");
        println!("cargo:rustc-link-arg-bins=-T{}", link_script.display());
    }
}
