//! End-to-end walkthroughs: building estimates, converting units, and
//! moving between the probability representations.

use approx::assert_relative_eq;
use confidence_rs::sigma::{get_n_sigma, n_sigma};
use confidence_rs::{pm, Estimate, PValue, Scale, CL};

#[test]
fn test_unit_conversion_walkthrough() {
    // A length of 144 ± 5 cm, converted to half-centimeters.
    let length = pm(144.0, 5.0);
    let converted = length.scale(2.0);
    assert_eq!(converted, pm(288.0, 10.0));

    // Converting to a negated axis keeps the symmetric error positive.
    let mirrored = length.scale(-1.0);
    assert_eq!(mirrored, pm(-144.0, 5.0));
}

#[test]
fn test_asymmetric_fit_result_walkthrough() {
    // A fit reports the interval directly; the estimate stores deltas.
    let rate = Estimate::from_interval(10.0, (8.0, 13.0), CL::CL95);
    assert_eq!(rate.asym_errors(), (2.0, 3.0));
    assert_eq!(rate.confidence_interval(), (8.0, 13.0));

    // Rescaling the rate flips and stretches the interval coherently.
    let scaled = rate.scale(-2.0);
    assert_eq!(scaled.point, -20.0);
    assert_eq!(scaled.confidence_interval(), (-26.0, -16.0));
    assert_eq!(scaled.confidence_level(), CL::CL95);
}

#[test]
fn test_significance_reporting_walkthrough() {
    // A 3-sigma observation, quoted as a p-value.
    let cl = n_sigma(3.0);
    let p: PValue<f64> = cl.as_pvalue();
    assert_relative_eq!(p.value(), 0.0026997960632601866, max_relative = 1e-9);

    // And back: the p-value reinterpreted as a CL recovers the sigma count.
    assert_relative_eq!(get_n_sigma(p.as_cl()), 3.0, max_relative = 1e-9);
}

#[test]
fn test_textual_forms_survive_a_report_round_trip() {
    let cl = n_sigma(2.0);
    let rendered = cl.to_string();
    let parsed: CL<f64> = rendered.parse().unwrap();
    assert_relative_eq!(
        parsed.significance(),
        cl.significance(),
        max_relative = 1e-12
    );
}
