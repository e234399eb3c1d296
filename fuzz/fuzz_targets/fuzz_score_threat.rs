#![no_main]
use libfuzzer_sys::fuzz_target;
use riskgauge::scoring::{aggregate_risk_scores, score_threat, InputPolicy, ThreatResponse};

/// Fuzz the scoring engine with arbitrary bit patterns, NaN and
/// infinities included.
fuzz_target!(|data: (i32, u64, u64)| {
    let (exposure, severity, mitigation) = data;
    let severity = f64::from_bits(severity);
    let mitigation = f64::from_bits(mitigation);

    let scored = score_threat(exposure, severity, mitigation);
    assert!(scored.risk_score <= 100);

    let response = ThreatResponse::new(exposure, severity).with_mitigation(mitigation);
    if let Ok(clamped) = InputPolicy::Clamp.apply(response) {
        assert!(InputPolicy::Strict.apply(clamped).is_ok());
    }

    let overall = aggregate_risk_scores(&[severity, mitigation, f64::from(scored.risk_score)]);
    assert!(overall <= 100);
});
