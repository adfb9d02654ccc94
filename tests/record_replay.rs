//! Record-replay round-trip integration test.
//!
//! 1. Resolve against live adapters over a fake sysfs tree and a fake
//!    `settings` program while recording.
//! 2. Replay the cassette into a fresh resolver.
//! 3. Assert identical outputs, twice, for determinism.

use std::path::{Path, PathBuf};

use devid::cassette::format::Cassette;
use devid::config::Settings;
use devid::{IdentifierResolver, PlatformContext};

fn fake_sysfs(root: &Path) {
    let wlan = root.join("class/net/wlan0");
    std::fs::create_dir_all(wlan.join("wireless")).unwrap();
    std::fs::write(wlan.join("address"), "aa:bb:cc:dd:ee:ff\n").unwrap();
}

/// Writes an executable stand-in for the platform `settings` command.
#[cfg(unix)]
fn fake_settings(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("settings");
    std::fs::write(&path, "#!/bin/sh\necho a1b2c3d4e5f60718\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn resolve(ctx: &PlatformContext) -> Result<String, String> {
    IdentifierResolver::new().resolve(ctx, true).map_err(|e| e.to_string())
}

#[cfg(unix)]
#[test]
fn record_then_replay_produces_identical_outputs() {
    let dir = std::env::temp_dir().join("devid_record_replay_test");
    let _ = std::fs::remove_dir_all(&dir);
    let sysfs = dir.join("sys");
    fake_sysfs(&sysfs);
    let cassette_path = dir.join("cassettes").join("device.cassette.yaml");

    let settings = Settings {
        sysfs_root: sysfs,
        mmcli_program: dir.join("no-mmcli"),
        settings_program: fake_settings(&dir),
        ..Settings::default()
    };

    // --- Phase 1: record against the fake host ---
    let ctx = PlatformContext::recording(&cassette_path, &settings);
    let recorded = resolve(&ctx);
    assert_eq!(ctx.finish(), Ok(Some(cassette_path.clone())));
    assert_eq!(recorded, Ok("a1b2c3d4e5f60718".to_string()));

    let cassette: Cassette =
        serde_yaml::from_str(&std::fs::read_to_string(&cassette_path).unwrap()).unwrap();
    assert_eq!(cassette.interactions[0].port, "platform");
    assert_eq!(cassette.interactions[0].output, serde_json::json!(["wifi"]));
    assert!(cassette.interactions.iter().any(|i| i.port == "permissions"));

    // --- Phase 2: replay and compare ---
    let ctx1 = PlatformContext::replaying(&cassette_path).unwrap();
    let replayed1 = resolve(&ctx1);
    assert_eq!(recorded, replayed1, "replay mismatch");

    // --- Phase 3: replay again ---
    let ctx2 = PlatformContext::replaying(&cassette_path).unwrap();
    assert_eq!(replayed1, resolve(&ctx2), "determinism: replays differ");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replay_of_hand_written_cassette() {
    let dir = std::env::temp_dir().join("devid_hand_written_cassette_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path: PathBuf = dir.join("emulator.cassette.yaml");
    std::fs::write(
        &path,
        r#"name: emulator
recorded_at: 2025-06-01T09:00:00Z
commit: unknown
interactions:
  - { seq: 0, port: platform, method: services, input: null, output: [bluetooth] }
  - seq: 1
    port: permissions
    method: check
    input: { capability: ReadPhoneState }
    output: true
  - seq: 2
    port: settings
    method: get_string
    input: { key: android_id }
    output: "9774d56d682e549c"
  - { seq: 3, port: permissions, method: check, input: { capability: Bluetooth }, output: true }
  - { seq: 4, port: bluetooth, method: address, input: null, output: "00:1A:7D:DA:71:13" }
"#,
    )
    .unwrap();

    let strict = PlatformContext::replaying(&path).unwrap();
    let err = IdentifierResolver::new().resolve(&strict, false).unwrap_err();
    assert!(err.is_not_unique());

    let lenient = PlatformContext::replaying(&path).unwrap();
    let id = IdentifierResolver::new().resolve(&lenient, true).unwrap();
    assert_eq!(id, "00:1A:7D:DA:71:13");

    let _ = std::fs::remove_dir_all(&dir);
}
