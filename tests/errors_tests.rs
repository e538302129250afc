use serde_json::Value;
use user_registry::core::config::ConfigError;
use user_registry::core::errors::RegistryError;

#[test]
fn all_variants_display_and_conversions() {
    let cases = vec![
        (RegistryError::ConfigError("cfg".into()), "Configuration error: cfg"),
        (RegistryError::NotFound("user 1".into()), "Not found: user 1"),
        (RegistryError::ValidationError("v".into()), "Validation error: v"),
        (RegistryError::SerializationError("s".into()), "Serialization error: s"),
        (RegistryError::IoError("io".into()), "IO error: io"),
        (RegistryError::InternalError("i".into()), "Internal error: i"),
        (RegistryError::Other("o".into()), "Error: o"),
    ];
    for (err, expect) in cases {
        assert_eq!(format!("{}", err), expect);
    }

    // From<std::io::Error>
    let io_err = std::io::Error::other("io fail");
    let e: RegistryError = io_err.into();
    match e {
        RegistryError::IoError(msg) => assert!(msg.contains("io fail")),
        _ => panic!("expected IoError"),
    }

    // From<serde_json::Error>
    let sj = serde_json::from_str::<Value>("not json").unwrap_err();
    let e2: RegistryError = sj.into();
    match e2 {
        RegistryError::SerializationError(msg) => assert!(!msg.is_empty()),
        _ => panic!("expected SerializationError"),
    }

    // From<anyhow::Error>
    let a = anyhow::anyhow!("anyhow-msg");
    let e3: RegistryError = a.into();
    match e3 {
        RegistryError::Other(msg) => assert!(msg.contains("anyhow-msg")),
        _ => panic!("expected Other"),
    }

    // From<ConfigError>
    let c = ConfigError::Read(std::io::Error::other("missing"));
    let e4: RegistryError = c.into();
    match e4 {
        RegistryError::ConfigError(msg) => assert!(msg.contains("missing")),
        _ => panic!("expected ConfigError"),
    }
}

#[test]
fn not_found_predicate() {
    assert!(RegistryError::NotFound("user 9".into()).is_not_found());
    assert!(!RegistryError::Other("x".into()).is_not_found());
    assert!(!RegistryError::new("generic").is_not_found());
}

#[test]
fn implements_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(RegistryError::NotFound("user 2".into()));
    assert_eq!(err.to_string(), "Not found: user 2");
}
