//! SGPA/CGPA/백분율 환산 테스트.
use gradegrid::gpa::{compute, valid_sgpas, GpaMode, GpaRequest, GpaScale};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn cgpa_is_the_mean_of_semesters() {
    let req = GpaRequest::new(GpaMode::SgpaToCgpa, &strings(&["8", "9", "7"]));
    let out = compute(&req, &GpaScale::default()).unwrap();
    assert_eq!(out.display(2), "8.00");
    assert_eq!(out.formula, "CGPA = (8 + 9 + 7) / 3 = 24.00 / 3 = 8.00");
}

#[test]
fn invalid_semesters_are_skipped() {
    assert_eq!(valid_sgpas(&["11", "abc", "8.5"], 10.0), vec![8.5]);
    let req = GpaRequest::new(GpaMode::SgpaToCgpa, &strings(&["11", "abc", "8.5", ""]));
    let out = compute(&req, &GpaScale::default()).unwrap();
    assert_close(out.value, 8.5, 1e-12);
}

#[test]
fn no_valid_semester_means_no_result() {
    let req = GpaRequest::new(GpaMode::SgpaToCgpa, &strings(&["", "-1", "x"]));
    assert!(compute(&req, &GpaScale::default()).is_none());
    let req = GpaRequest::new(GpaMode::SgpaToCgpa, &[]);
    assert!(compute(&req, &GpaScale::default()).is_none());
}

#[test]
fn cgpa_to_percentage() {
    let req = GpaRequest::new(GpaMode::CgpaToPercent, &strings(&["8.5"]));
    let out = compute(&req, &GpaScale::default()).unwrap();
    assert_close(out.value, 80.75, 1e-9);
    assert_eq!(out.formula, "Percentage = CGPA × 9.5 = 8.5 × 9.5 = 80.75%");
}

#[test]
fn sgpa_to_percentage_names_sgpa() {
    let req = GpaRequest::new(GpaMode::SgpaToPercent, &strings(&["9"]));
    let out = compute(&req, &GpaScale::default()).unwrap();
    assert_close(out.value, 85.5, 1e-9);
    assert!(out.formula.starts_with("Percentage = SGPA × 9.5"));
}

#[test]
fn percentage_to_cgpa() {
    let req = GpaRequest::new(GpaMode::PercentToCgpa, &strings(&["85"]));
    let out = compute(&req, &GpaScale::default()).unwrap();
    assert_eq!(out.display(2), "8.95");
}

#[test]
fn empty_single_input_has_no_result() {
    let req = GpaRequest::new(GpaMode::PercentToCgpa, &strings(&["  "]));
    assert!(compute(&req, &GpaScale::default()).is_none());
}

#[test]
fn custom_multiplier_is_used() {
    let scale = GpaScale::with_multiplier(10.0);
    let req = GpaRequest::new(GpaMode::CgpaToPercent, &strings(&["8"]));
    assert_close(compute(&req, &scale).unwrap().value, 80.0, 1e-12);
    assert_eq!(GpaScale::with_multiplier(f64::NAN), GpaScale::default());
}

#[test]
fn modes_parse_from_ids() {
    for mode in GpaMode::ALL {
        assert_eq!(GpaMode::parse(mode.id()), Some(mode));
    }
    assert_eq!(GpaMode::parse("SGPA_CGPA"), Some(GpaMode::SgpaToCgpa));
    assert_eq!(GpaMode::parse("gpa"), None);
}
