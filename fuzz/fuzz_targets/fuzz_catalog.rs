#![no_main]
use libfuzzer_sys::fuzz_target;
use riskgauge::catalog::{InputFormat, ThreatCatalog};

/// Fuzz threat catalog loading in both input formats.
///
/// Loading must fail with an error, never panic, and a loaded catalog
/// must list every threat exactly once when sorted by severity.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for format in [InputFormat::Yaml, InputFormat::Json] {
            if let Ok(catalog) = ThreatCatalog::from_str_with_format(s, format) {
                assert_eq!(catalog.by_severity().len(), catalog.len());
            }
        }
    }
});
