use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let forced_u32 = env::var_os("CARGO_FEATURE_U32").is_some();
    let forced_u64 = env::var_os("CARGO_FEATURE_U64").is_some();
    if forced_u32 || forced_u64 {
        return;
    }

    // the cell follows the target's word, not the host's
    match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
        Ok("64") => println!("cargo:rustc-cfg=feature=\"u64\""),
        _ => println!("cargo:rustc-cfg=feature=\"u32\""),
    }
}
