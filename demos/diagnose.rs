//! Discovery walk-through for device bring-up.
//!
//! Prints every udev candidate in activation order with its metadata as
//! JSON, then runs full activation and reports what survived. Run with
//! `RUST_LOG=debug` to see the per-candidate skip reasons.

#[cfg(target_os = "linux")]
fn main() {
    use sightline::backends::linux::{enumerate_candidates, probe_lightguns};
    use sightline::ordering::devnode_cmp;
    use sightline::ModuleConfig;

    env_logger::init();

    let config = ModuleConfig::default();

    let mut candidates = enumerate_candidates(&config.match_property);
    candidates.sort_by(|a, b| devnode_cmp(&a.devnode, &b.devnode));

    println!(
        "{} candidate(s) with {}=1, in activation order:",
        candidates.len(),
        config.match_property
    );
    for (i, cand) in candidates.iter().enumerate() {
        let meta = serde_json::to_string_pretty(&cand.meta)
            .unwrap_or_else(|e| format!("<meta serialization failed: {e}>"));
        println!("--- [{i}] {} ---", cand.devnode);
        println!("syspath: {}", cand.syspath);
        println!("{meta}");
    }

    let devices = probe_lightguns(&config);
    println!();
    println!(
        "{} of {} candidate(s) activated (cap {}):",
        devices.len(),
        candidates.len(),
        config.effective_max()
    );
    for dev in &devices {
        let gun = dev.gun();
        println!("  #{} {} name={:?}", gun.index(), dev.devnode(), gun.name());
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("this demo only runs on Linux");
}
