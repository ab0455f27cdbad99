mod common;

use common::{assert_success, read_nonempty_lines, run_avr32, temp_dir};

#[test]
fn test_cli_makeuser_default_page() {
    let dir = temp_dir("makeuser_default");

    let output = run_avr32(&dir, &["makeuser"]);
    assert_success(&output);

    assert!(!dir.join("userpage.bin").exists());
    let lines = read_nonempty_lines(&dir.join("userpage.hex"));
    assert_eq!(lines.len(), 1 + 32 + 1);
    assert_eq!(lines[0], ":020000048080FA");
    assert_eq!(lines[1], ":10000000FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00");
    assert_eq!(lines[32], ":1001F000FFFFFFFFFFFFFFFFFFFFFFFF53059E9283");
    assert_eq!(lines[33], ":00000001FF");
}

#[test]
fn test_cli_makeuser_serial_keep_binary() {
    let dir = temp_dir("makeuser_serial");

    let output = run_avr32(&dir, &["makeuser", "-s", "SN-42", "-p", "13", "--keep-binary"]);
    assert_success(&output);

    let page = std::fs::read(dir.join("SN-42.bin")).unwrap();
    assert_eq!(page.len(), 512);
    assert_eq!(&page[..6], b"SN-42\0");
    assert_eq!(&page[508..], &[0x6B, 0x0D, 0x9E, 0x92]);

    let lines = read_nonempty_lines(&dir.join("SN-42.hex"));
    assert_eq!(lines[1], ":10000000534E2D343200FFFFFFFFFFFFFFFFFFFFC6");
}

#[test]
fn test_cli_makeuser_blank_named() {
    let dir = temp_dir("makeuser_blank");

    let output = run_avr32(&dir, &["makeuser", "--blank", "-f", "erased", "-k"]);
    assert_success(&output);

    let page = std::fs::read(dir.join("erased.bin")).unwrap();
    assert!(page.iter().all(|&b| b == 0xFF));
    assert!(dir.join("erased.hex").exists());
}

#[test]
fn test_cli_makeuser_rejects_wide_pin() {
    let dir = temp_dir("makeuser_pin");

    let output = run_avr32(&dir, &["makeuser", "-p", "300"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid pin 300"), "{stderr}");
    assert!(!dir.join("userpage.hex").exists());
}

#[test]
fn test_cli_makeuser_rejects_long_serial() {
    let dir = temp_dir("makeuser_long");
    let serial = "X".repeat(600);

    let output = run_avr32(&dir, &["makeuser", "-s", serial.as_str(), "-f", "long"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("600 bytes"), "{stderr}");
    assert!(!dir.join("long.bin").exists());
}

#[test]
fn test_cli_cfgword_parsecfg_roundtrip() {
    let dir = temp_dir("cfgword");

    let output = run_avr32(&dir, &["cfgword", "-p", "13", "--pin-high"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Word is: 0x929F0D"), "{stdout}");

    let word = std::fs::read(dir.join("ispcfg.bin")).unwrap();
    assert_eq!(word.len(), 4);
    assert_eq!(&word[..3], &[0x92, 0x9F, 0x0D]);

    let output = run_avr32(&dir, &["parsecfg"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WORD is: 0x 92 9F 0D"), "{stdout}");
    assert!(stdout.contains("IO Condition: Pin 13 High"), "{stdout}");
}

#[test]
fn test_cli_parsecfg_rejects_short_file() {
    let dir = temp_dir("parsecfg_short");
    std::fs::write(dir.join("bad.bin"), [0x92, 0x9E]).unwrap();

    let output = run_avr32(&dir, &["parsecfg", "bad.bin"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be 4 bytes, got 2"), "{stderr}");
}

#[test]
fn test_cli_makeuser_removes_binary_when_hex_write_fails() {
    let dir = temp_dir("makeuser_hex_fail");
    std::fs::create_dir(dir.join("clash.hex")).unwrap();

    let output = run_avr32(&dir, &["makeuser", "-f", "clash"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("clash.hex"), "{stderr}");
    assert!(!dir.join("clash.bin").exists());
}
