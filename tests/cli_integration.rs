//! Exercises the three published binaries end to end.

use std::process::Command;

use tempfile::tempdir;

fn run(bin: &str, args: &[&str]) -> std::process::Output {
    let path = match bin {
        "compress" => env!("CARGO_BIN_EXE_compress"),
        "decompress" => env!("CARGO_BIN_EXE_decompress"),
        "verify" => env!("CARGO_BIN_EXE_verify"),
        other => panic!("unknown binary: {other}"),
    };
    Command::new(path)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"))
}

#[test]
fn compress_decompress_verify_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let compressed = dir.path().join("compressed.bin");
    let decompressed = dir.path().join("decompressed.txt");
    std::fs::write(&input, b"ABCABCABC hello hello hello, the quick brown fox".repeat(20)).unwrap();

    let out = run(
        "compress",
        &[
            input.to_str().unwrap(),
            "-o",
            compressed.to_str().unwrap(),
            "-c",
            "32",
            "-j",
            "1",
        ],
    );
    assert!(out.status.success(), "compress failed: {out:?}");

    let out = run(
        "decompress",
        &[
            compressed.to_str().unwrap(),
            "-o",
            decompressed.to_str().unwrap(),
            "-c",
            "32",
            "-j",
            "1",
        ],
    );
    assert!(out.status.success(), "decompress failed: {out:?}");

    let out = run("verify", &[input.to_str().unwrap(), decompressed.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "ok");
}

#[test]
fn verify_reports_nok_for_differing_files() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, b"one").unwrap();
    std::fs::write(&b, b"two").unwrap();

    let out = run("verify", &[a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "nok");
}

#[test]
fn default_outfile_names_match_the_external_interface() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, b"hello world").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_compress"))
        .arg(input.to_str().unwrap())
        .arg("-j")
        .arg("1")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(dir.path().join("comprimido.elmejorprofesor").exists());
}
