//! Behavioural properties of the built-in redaction pipeline.
//!
//! These pin the observable contract: exact outputs for the documented
//! examples, identity on PII-free text, and idempotence.

use pii_redactor::{redact, Redactor};

mod common;
use common::*;

#[test]
fn test_empty_text() {
    assert_eq!(redact("").unwrap(), "");
}

#[test]
fn test_text_without_pii_is_unchanged() {
    let inputs = [
        "The quick brown fox jumps over the lazy dog.",
        "Order 42 shipped on time; 3 items remain.",
        "Room 1204, block C",
        "\n\r\t",
        "🔢📱☎️ emoji only",
        "lower-case pan abcde1234f is not a PAN",
    ];
    for input in inputs {
        assert_eq!(redact(input).unwrap(), input, "input: {input:?}");
    }
}

#[test]
fn test_email() {
    let out = redact("Contact: arun@example.com").unwrap();
    assert!(out.contains("[REDACTED EMAIL]"));
    assert!(!out.contains("arun@example.com"));
    assert_eq!(out, "Contact: [REDACTED EMAIL]");
}

#[test]
fn test_ten_digit_phone() {
    assert_eq!(redact("Call 9876543210").unwrap(), "Call [REDACTED PHONE]");
}

#[test]
fn test_phone_prefixes() {
    assert_eq!(redact("Call +919876543210").unwrap(), "Call [REDACTED PHONE]");
    assert_eq!(redact("Call 09876543210").unwrap(), "Call [REDACTED PHONE]");
    assert_eq!(redact("Call +91 9876543210").unwrap(), "Call +91 [REDACTED PHONE]");
}

#[test]
fn test_grouped_phone() {
    assert_eq!(redact("Dial 123-456-7890").unwrap(), "Dial [REDACTED PHONE]");
    assert_eq!(redact("Dial 987.654.3210").unwrap(), "Dial [REDACTED PHONE]");
    assert_eq!(redact("Dial 987 654 3210").unwrap(), "Dial [REDACTED PHONE]");
}

#[test]
fn test_aadhaar() {
    assert_eq!(
        redact("Aadhaar 1234 5678 9012").unwrap(),
        "Aadhaar [REDACTED AADHAAR]"
    );
    assert_eq!(
        redact("Aadhaar 123456789012").unwrap(),
        "Aadhaar [REDACTED AADHAAR]"
    );
}

#[test]
fn test_pan_is_case_sensitive() {
    assert_eq!(redact("PAN ABCDE1234F").unwrap(), "PAN [REDACTED PAN]");
    assert_eq!(redact("pan abcde1234f").unwrap(), "pan abcde1234f");
}

#[test]
fn test_dates() {
    assert_eq!(redact("DOB 12-08-1990").unwrap(), "DOB [REDACTED DATE]");
    assert_eq!(redact("DOB 5/8/90").unwrap(), "DOB [REDACTED DATE]");
    assert_eq!(redact("Seen 2024-01-15").unwrap(), "Seen [REDACTED DATE]");
    assert_eq!(redact("Seen 2024/1/5").unwrap(), "Seen [REDACTED DATE]");
}

#[test]
fn test_mrn_and_insurance() {
    assert_eq!(
        redact("MRN-12345 insurance INS9988").unwrap(),
        "[REDACTED MRN] insurance [REDACTED INSURANCE ID]"
    );
    assert_eq!(redact("mrn778").unwrap(), "[REDACTED MRN]");
    assert_eq!(redact("ins 12").unwrap(), "ins 12");
}

#[test]
fn test_address_and_name_keywords() {
    assert_eq!(
        redact("Ramesh lives on MG Road, Chennai").unwrap(),
        "[REDACTED NAME] lives on MG [REDACTED ADDRESS], [REDACTED ADDRESS]"
    );
    assert_eq!(
        redact("Dr. Priya Sharma, New Delhi").unwrap(),
        "Dr. [REDACTED NAME] [REDACTED NAME], [REDACTED ADDRESS]"
    );
    // whole words only
    assert_eq!(redact("Railroads and Rameshwaram").unwrap(), "Railroads and Rameshwaram");
}

#[test]
fn test_six_digits_is_pin() {
    assert_eq!(redact("600028").unwrap(), "[REDACTED PIN]");
    assert_eq!(
        redact("Chennai 600028").unwrap(),
        "[REDACTED ADDRESS] [REDACTED PIN]"
    );
}

#[test]
fn test_full_intake_note() {
    let outcome = Redactor::builtin().redact_with_report(INTAKE_NOTE).unwrap();
    let expected = "\
Patient: [REDACTED NAME] [REDACTED NAME]
Email: [REDACTED EMAIL]
Mobile: [REDACTED PHONE]
Landline: [REDACTED PHONE]
Aadhaar: [REDACTED AADHAAR]
PAN: [REDACTED PAN]
Address: 12 Anna [REDACTED ADDRESS] Main [REDACTED ADDRESS], [REDACTED ADDRESS] [REDACTED PIN]
DOB: [REDACTED DATE]
Admitted: [REDACTED DATE]
[REDACTED MRN], policy [REDACTED INSURANCE ID], ref [REDACTED PHONE]";
    assert_eq!(outcome.text, expected);

    let report = &outcome.report;
    for stage in [
        "email",
        "phone",
        "phone_grouped",
        "aadhaar",
        "pan",
        "pin",
        "date_dmy",
        "date_ymd",
        "phone_fallback",
        "insurance_id",
        "mrn",
    ] {
        assert_eq!(report.replaced_by(stage), Some(1), "stage {stage}");
    }
    assert_eq!(report.replaced_by("address_keywords"), Some(3));
    assert_eq!(report.replaced_by("name_keywords"), Some(2));
    assert_eq!(report.total_replaced(), 16);
}

#[test]
fn test_idempotence() {
    let inputs = [
        INTAKE_NOTE,
        "Call 9876543210",
        "Call +91 9876543210",
        "MRN-12345 insurance INS9988",
        "Ramesh lives on MG Road, Chennai",
        "ref 12345678901 and 600028",
        "",
    ];
    for input in inputs {
        let once = redact(input).unwrap();
        let twice = redact(&once).unwrap();
        assert_eq!(once, twice, "input: {input:?}");
    }
}

#[test]
fn test_input_is_not_mutated() {
    let input = String::from("Call 9876543210");
    let out = redact(&input).unwrap();
    assert_eq!(input, "Call 9876543210");
    assert_ne!(out, input);
}

#[test]
fn test_long_input() {
    let line = "Ravi 9876543210 filler text without identifiers\n";
    let input = line.repeat(20_000);
    let out = redact(&input).unwrap();
    assert_eq!(out.matches("[REDACTED PHONE]").count(), 20_000);
    assert_eq!(out.matches("[REDACTED NAME]").count(), 20_000);
}

#[test]
fn test_very_large_input_is_accepted() {
    let input = "a".repeat(11 * 1024 * 1024);
    let out = redact(&input).unwrap();
    assert_eq!(out.len(), input.len());
    assert_eq!(out, input);
}

#[test]
fn test_concurrent_use() {
    let redactor = Redactor::builtin();
    std::thread::scope(|scope| {
        for i in 0..8 {
            scope.spawn(move || {
                let input = format!("Worker {i}: 98765432{i:02}");
                let out = redactor.redact(&input).unwrap();
                assert_eq!(out, format!("Worker {i}: [REDACTED PHONE]"));
            });
        }
    });
}
