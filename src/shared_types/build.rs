use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_setup_core::{
    BannerKind, ConnectEvent, NetworkListView, ScanEvent, TimerOperation, TimerOutput, UiEvent,
    App,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Domain event enums, so every user-facing variant is traced
    gen.register_type::<ScanEvent>()?;
    gen.register_type::<ConnectEvent>()?;
    gen.register_type::<UiEvent>()?;

    // View model enums
    gen.register_type::<NetworkListView>()?;
    gen.register_type::<BannerKind>()?;

    // Timer effect, fulfilled by the shell with setTimeout
    gen.register_type::<TimerOperation>()?;
    gen.register_type::<TimerOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
