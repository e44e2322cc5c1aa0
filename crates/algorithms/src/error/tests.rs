use super::*;
use cryptkit_api::Error as CoreError;

#[test]
fn test_error_conversion() {
    // Key error
    let err = Error::Key {
        context: "AES",
        expected: "16, 24 or 32 bytes",
        actual: 5,
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidKey { context, .. } => {
            assert_eq!(context, "AES");
        }
        _ => panic!("Expected InvalidKey error"),
    }

    // Length error
    let err = Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    // Mode selector error becomes an invalid parameter
    let core_err = CoreError::from(Error::UnsupportedMode { id: 9 });
    match core_err {
        CoreError::InvalidParameter { context, message } => {
            assert_eq!(context, "mode selector");
            assert!(message.contains('9'));
        }
        _ => panic!("Expected InvalidParameter error"),
    }
}

#[test]
fn test_validation_functions() {
    // Parameter validation
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    // Length validation
    assert!(validate::length("buffer", 32, 32).is_ok());
    let err = validate::length("buffer", 16, 32).unwrap_err();

    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected Length error"),
    }

    // Block alignment rounds the expectation up to the next whole block
    assert!(validate::block_aligned("input", 32, 16).is_ok());
    assert!(validate::block_aligned("input", 0, 16).is_ok());
    let err = validate::block_aligned("input", 17, 16).unwrap_err();
    match err {
        Error::Length {
            expected, actual, ..
        } => {
            assert_eq!(expected, 32);
            assert_eq!(actual, 17);
        }
        _ => panic!("Expected Length error"),
    }
}

#[test]
fn test_to_core_result_adds_context() {
    let r: Result<()> = Err(Error::Length {
        context: "inner",
        expected: 16,
        actual: 3,
    });
    let core = to_core_result(r, "cipher construction").unwrap_err();
    match core {
        CoreError::InvalidLength { context, .. } => assert_eq!(context, "cipher construction"),
        _ => panic!("Expected InvalidLength error"),
    }
}

#[test]
fn test_display_formatting() {
    let err = Error::Key {
        context: "AES",
        expected: "16, 24 or 32 bytes",
        actual: 17,
    };
    assert_eq!(
        err.to_string(),
        "Invalid key length for AES: got 17 bytes, expected 16, 24 or 32 bytes"
    );

    let err = Error::UnsupportedMode { id: 7 };
    assert_eq!(err.to_string(), "Unsupported cipher mode selector 7");
}
