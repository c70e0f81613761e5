//! End-to-end round trips through the public API, covering property 1
//! (lossless round trip) and property 2 (chunk-size independence) from
//! outside the crate.

use tempfile::tempdir;

fn write_and_roundtrip(data: &[u8], chunk_size: usize, workers: usize) -> Vec<u8> {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let compressed = dir.path().join("c.bin");
    let decompressed = dir.path().join("out.bin");

    std::fs::write(&input, data).unwrap();
    lz77mt::compress(&input, &compressed, chunk_size, workers).unwrap();
    lz77mt::decompress(&compressed, &decompressed, chunk_size, workers).unwrap();
    std::fs::read(&decompressed).unwrap()
}

#[test]
fn lossless_round_trip_various_inputs() {
    let cases: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"A".to_vec(),
        b"AB".to_vec(),
        b"ABCABC".to_vec(),
        b"AAAAA".to_vec(),
        b"ABCD".repeat(300),
        (0u32..2000).map(|i| (i % 251) as u8).collect(),
    ];

    for data in cases {
        let sequential = write_and_roundtrip(&data, 64, 1);
        assert_eq!(sequential, data);

        let parallel = write_and_roundtrip(&data, 64, 4);
        assert_eq!(parallel, data);
    }
}

#[test]
fn chunk_size_independence() {
    let data = b"the quick brown fox jumps over the lazy dog. ".repeat(80);
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.bin");
    std::fs::write(&input, &data).unwrap();

    let mut outputs = Vec::new();
    for (chunk_size, workers) in [(64usize, 1usize), (64, 5), (512, 3), (4096, 7)] {
        let compressed = dir.path().join(format!("c-{chunk_size}-{workers}.bin"));
        lz77mt::compress(&input, &compressed, chunk_size, workers).unwrap();
        outputs.push(std::fs::read(&compressed).unwrap());
    }

    for window in outputs.windows(2) {
        assert_eq!(window[0], window[1], "compressed output must be chunk-size independent");
    }
}

#[test]
fn verify_binary_semantics_through_the_library_function() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    std::fs::write(&a, b"same").unwrap();
    std::fs::write(&b, b"same").unwrap();
    assert!(lz77mt::verify(&a, &b).unwrap());

    std::fs::write(&b, b"different").unwrap();
    assert!(!lz77mt::verify(&a, &b).unwrap());
}
