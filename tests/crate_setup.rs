//! Smoke tests confirming the crate and its core dependencies are wired up.

#[test]
fn default_constants_are_self_consistent() {
    assert_eq!(lz77mt::config::WINDOW_SIZE, 511);
    assert_eq!(lz77mt::config::MAX_LENGTH, 63);
    assert_eq!(lz77mt::config::TOKEN_WIDTH, 3);
}

#[test]
fn default_filenames_match_the_external_interface() {
    assert_eq!(lz77mt::DEFAULT_COMPRESSED_FILENAME, "comprimido.elmejorprofesor");
    assert_eq!(lz77mt::DEFAULT_DECOMPRESSED_FILENAME, "descomprimido-elmejorprofesor.txt");
}
