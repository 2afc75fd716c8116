//! Live state printer for attached lightgun devices.
//!
//! Discovers devices, dumps their control surface, then polls forever and
//! prints a compact line per device whenever its state changes.

#[cfg(target_os = "linux")]
fn main() {
    use sightline::state::MAX_BUTTONS;
    use sightline::{HostContext, InputModule, UdevLightgunModule};
    use std::time::{Duration, Instant};

    env_logger::init();

    let host = HostContext::default();
    let mut module = UdevLightgunModule::new();
    module.init(&host);

    println!("Discovered {} lightgun device(s)", module.devices().len());
    for dev in module.devices() {
        let gun = dev.gun();
        println!("== #{} {:?} ({}) ==", gun.index(), gun.name(), dev.devnode());
        for item in gun.describe() {
            println!("  {:?} #{:02} {}", item.kind, item.idx, item.name);
        }
    }

    // Last flushed state per device: (x, y, buttons)
    let mut last: Vec<(i32, i32, [i32; MAX_BUTTONS])> = module
        .devices()
        .iter()
        .map(|_| (0, 0, [0; MAX_BUTTONS]))
        .collect();

    let flush_every = Duration::from_millis(40);
    let mut last_flush = Instant::now();

    loop {
        module.before_poll(&host);

        // Periodically flush a compact summary per changed device
        if last_flush.elapsed() >= flush_every {
            for (i, dev) in module.devices().iter().enumerate() {
                let gun = dev.gun();
                let mut buttons = [0i32; MAX_BUTTONS];
                for (slot, b) in buttons.iter_mut().enumerate() {
                    *b = gun.button(slot);
                }
                let now = (gun.x(), gun.y(), buttons);
                if now == last[i] {
                    continue;
                }

                let mut sections = Vec::new();
                if now.0 != last[i].0 || now.1 != last[i].1 {
                    sections.push(format!("x={} y={}", now.0, now.1));
                }
                let mut changes = Vec::new();
                for slot in 0..MAX_BUTTONS {
                    if now.2[slot] != last[i].2[slot] {
                        let sign = if now.2[slot] != 0 { '+' } else { '-' };
                        changes.push(format!("{sign}{}", slot + 1));
                    }
                }
                if !changes.is_empty() {
                    sections.push(format!("[{}]", changes.join(",")));
                }

                if !sections.is_empty() {
                    println!("#{}: {}", gun.index(), sections.join(" "));
                }
                last[i] = now;
            }
            last_flush = Instant::now();
        }

        // Keep CPU usage sane
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("this demo only runs on Linux");
}
