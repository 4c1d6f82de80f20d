use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SynthError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SynthError::surface("x").to_string().contains("surface error:"));
    assert!(SynthError::encode("x").to_string().contains("encode error:"));
    assert!(
        SynthError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SynthError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
