use crate::config::Config;
use crate::{run, ByteSize, ByteSizeExt, FormatError, NumberFormat, Unit};

fn samples() -> Vec<i64> {
    let mut values = vec![0, 1, 512, 1023, 1024, 1025, 1536, 999_999, 1_048_576];
    values.extend([3 * (1 << 30), 5 * (1_i64 << 40) + 17, i64::MAX / 3, i64::MAX]);
    values
}

// Test Invariant 1: unit views are always the byte count over a power of 1024
#[test]
fn test_unit_views_match_byte_count() {
    for n in samples() {
        let size = ByteSize::from_bytes(n);
        let bytes = n as f64;
        assert_eq!(size.kilobytes(), bytes / 1024.0, "kilobytes of {}", n);
        assert_eq!(size.megabytes(), bytes / 1024f64.powi(2), "megabytes of {}", n);
        assert_eq!(size.gigabytes(), bytes / 1024f64.powi(3), "gigabytes of {}", n);
        assert_eq!(size.terabytes(), bytes / 1024f64.powi(4), "terabytes of {}", n);
    }
}

// Test Invariant 2: arithmetic on sizes is arithmetic on byte counts
#[test]
fn test_arithmetic_is_bytewise() {
    let values = [0_i64, 1, 1023, 1536, -4096, 1 << 40];
    for &a in &values {
        for &b in &values {
            let (x, y) = (ByteSize::from_bytes(a), ByteSize::from_bytes(b));
            assert_eq!((x + y).bytes(), a + b);
            assert_eq!((x - y).bytes(), a - b);
        }
    }
}

// Test Invariant 3: ordering follows byte counts exactly
#[test]
fn test_ordering_follows_bytes() {
    let values = [-1_i64, 0, 1, 1023, 1024, 1 << 20, i64::MAX];
    for &a in &values {
        for &b in &values {
            let (x, y) = (ByteSize::from_bytes(a), ByteSize::from_bytes(b));
            assert_eq!(x < y, a < b);
            assert_eq!(x == y, a == b);
            assert_eq!(x.cmp(&y), a.cmp(&b));
        }
    }

    let mut sizes = vec![
        ByteSize::from_megabytes(1.0),
        ByteSize::from_bytes(10),
        ByteSize::from_kilobytes(3.0),
    ];
    sizes.sort();
    assert_eq!(
        sizes.iter().map(ByteSize::bytes).collect::<Vec<_>>(),
        vec![10, 3072, 1_048_576]
    );
}

#[test]
fn test_default_rendering() {
    assert_eq!(ByteSize::from_bytes(1536).to_string(), "1.50 KB");
    assert_eq!(ByteSize::from_bytes(500).to_string(), "500.00 B");
    assert_eq!(ByteSize::ZERO.to_string(), "0.00 B");
    assert_eq!(ByteSize::from_gigabytes(1.0).to_string(), "1.00 GB");
    assert_eq!(ByteSize::from_terabytes(2048.0).to_string(), "2,048.00 TB");
    assert_eq!(ByteSize::from_bytes(-1536).to_string(), "-1.50 KB");
}

#[test]
fn test_short_and_long_rendering() {
    let size = ByteSize::from_megabytes(2.4);
    assert_eq!(size.to_short_string(), "2 MB");
    assert!(!size.to_short_string().contains('.'));
    assert_eq!(size.to_long_string(), "2.40 Megabytes");
    assert_eq!(ByteSize::from_bytes(1).to_long_string(), "1.00 Bytes");
}

#[test]
fn test_best_fit_threshold() {
    assert_eq!(ByteSize::from_bytes(1024).format("f UU").unwrap(), "1 KB");
    assert_eq!(ByteSize::from_bytes(1023).format("f UU").unwrap(), "1023 B");
    assert_eq!(ByteSize::from_bytes(1 << 20).format("f UU").unwrap(), "1 MB");
    assert_eq!(ByteSize::from_bytes((1 << 20) - 1).format("f UU").unwrap(), "1024 KB");
}

#[test]
fn test_unit_name_case_and_verbosity() {
    let size = ByteSize::from_bytes(500);
    assert_eq!(size.format("uuu").unwrap(), "bytes");
    assert_eq!(size.format("UUU").unwrap(), "Bytes");
    assert_eq!(size.format("U").unwrap(), "B");
    assert_eq!(size.format("u").unwrap(), "b");

    let size = ByteSize::from_gigabytes(4.0);
    assert_eq!(size.format("U UU UUU").unwrap(), "G GB Gigabytes");
    assert_eq!(size.format("u uu uuu").unwrap(), "g gb gigabytes");
}

#[test]
fn test_quoted_literal_and_errors() {
    let size = ByteSize::from_bytes(1536);
    assert_eq!(size.format("'Size: 'f UU").unwrap(), "Size: 2 KB");
    assert_eq!(size.format("\"Size: \"ff UU").unwrap(), "Size: 1.5 KB");
    assert_eq!(
        size.format("'Size: f UU"),
        Err(FormatError::UnterminatedQuote { quote: '\'', position: 0 })
    );
    assert_eq!(
        size.format("f UU\\"),
        Err(FormatError::DanglingEscape { position: 4 })
    );
}

#[test]
fn test_thousands_separator() {
    let size = ByteSize::from_bytes(1_234_567);
    assert_eq!(size.format(",fff UU").unwrap(), "1.18 MB");
    assert_eq!(size.format(",bbb").unwrap(), "1,234,567.00");
    assert_eq!(size.format("bbb").unwrap(), "1234567.00");
    assert_eq!(
        size.format_with(",bbb", &NumberFormat::german()).unwrap(),
        "1.234.567,00"
    );
    assert_eq!(
        size.format_with(",b", &NumberFormat::swiss()).unwrap(),
        "1'234'567"
    );
}

#[test]
fn test_formatting_is_repeatable() {
    for n in samples() {
        let size = ByteSize::from_bytes(n);
        assert_eq!(size.to_string(), size.to_string());
        assert_eq!(size.format("'x'f UUU").unwrap(), size.format("'x'f UUU").unwrap());
    }
}

// Test Invariant 4: the byte token prints the stored count exactly
#[test]
fn test_byte_token_matches_stored_count() {
    for n in samples() {
        let size = ByteSize::from_bytes(n);
        assert_eq!(size.format("b").unwrap(), n.to_string(), "bytes of {}", n);
    }
    assert_eq!(
        ByteSize::from_bytes(i64::MAX).format(",bbb").unwrap(),
        "9,223,372,036,854,775,807.00"
    );
}

#[test]
fn test_mixed_pattern() {
    let size = ByteSize::from_bytes(5 * 1024 * 1024 + 512 * 1024);
    assert_eq!(
        size.format(",'['kk' KiB = 'ff uu']'").unwrap(),
        "[5,632.0 KiB = 5.5 mb]"
    );
}

#[test]
fn test_integer_extension() {
    assert_eq!(1536_u64.format_size(), ByteSize::from_bytes(1536).to_string());
    assert_eq!(2_u32.byte_size().add_gigabytes(1).best_fit_unit(), Unit::Gigabytes);
}

#[test]
fn test_run_renders_config() {
    let config = Config {
        size: ByteSize::from_gigabytes(2.5),
        pattern: ",ff uuu".to_string(),
        number_format: NumberFormat::german(),
        verbose: true,
    };
    assert_eq!(run(&config).unwrap(), "2,5 gigabytes");

    let broken = Config {
        pattern: "f\\".to_string(),
        ..config
    };
    assert_eq!(run(&broken), Err(FormatError::DanglingEscape { position: 1 }));
}
