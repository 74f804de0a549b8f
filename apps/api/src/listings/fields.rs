//! Field parsers for the free-text compensation and CGPA columns.
//!
//! Both parsers are total: any input shape yields a value. The `Option`
//! variants are the honest form (None = no stated value); the `_value` /
//! `_floor` wrappers collapse None to 0.0, which is what the filter, sort
//! and stats layers consume. Callers that need to tell "unknown" apart
//! from a genuine zero must use the `Option` form.

use std::sync::OnceLock;

use regex::Regex;

/// Compensation strings carrying no numeric figure at all.
const CTC_SENTINELS: &[&str] = &["-", "Will be informed"];

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d.]+").expect("number pattern is valid"))
}

/// Parses a free-text CTC string ("₹6.5 LPA", "12 LPA + 2 joining bonus")
/// into lakhs per annum.
///
/// Extracts every numeric token, drops tokens that fail to parse or are
/// >= 100 (noise from surrounding text, not a plausible LPA figure), and
/// returns the maximum of what survives. None for the known sentinels,
/// empty input, or when nothing survives.
pub fn parse_ctc(ctc: &str) -> Option<f64> {
    let trimmed = ctc.trim();
    if trimmed.is_empty() || CTC_SENTINELS.contains(&trimmed) {
        return None;
    }
    number_re()
        .find_iter(trimmed)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| *n < 100.0)
        .reduce(f64::max)
}

/// Display/filter form of [`parse_ctc`]: unknown collapses to 0.0.
pub fn ctc_value(ctc: &str) -> f64 {
    parse_ctc(ctc).unwrap_or(0.0)
}

/// Parses the first decimal number out of a CGPA eligibility string
/// ("7.5", "7.5+", "CGPA 7 and above"). None when the string holds no
/// parseable number, which reads as "no eligibility floor".
pub fn parse_cgpa(cgpa: &str) -> Option<f64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("cgpa pattern is valid"));
    re.find(cgpa)?.as_str().parse::<f64>().ok()
}

/// Filter form of [`parse_cgpa`]: no stated floor collapses to 0.0.
pub fn cgpa_floor(cgpa: &str) -> f64 {
    parse_cgpa(cgpa).unwrap_or(0.0)
}
