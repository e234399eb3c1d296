#![no_main]
use libfuzzer_sys::fuzz_target;
use riskgauge::catalog::{InputFormat, Questionnaire};

/// Fuzz questionnaire parsing with format detection.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let format = InputFormat::detect(None, s).unwrap_or(InputFormat::Yaml);
        let _ = Questionnaire::from_str_with_format(s, format);
    }
});
