use keysmith::config::ScoringWeights;
use std::io::Write;

#[test]
fn default_weights() {
    let w = ScoringWeights::default();
    assert_eq!(w.fspeed, 1.0);
    assert_eq!(w.roll, 1.0);
    assert_eq!(w.alternate, 0.4);
    assert_eq!(w.onehand, 0.4);
    assert_eq!(w.redirect, 1.2);
    assert_eq!(w.index_balance, 0.1);
    assert_eq!(w.trigram_precision, 500);
}

#[test]
fn loads_full_weights_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "fspeed": 2.0,
            "roll": 0.5,
            "alternate": 0.3,
            "onehand": 0.2,
            "redirect": 2.5,
            "index_balance": 0.0,
            "trigram_precision": 100
        }}"#
    )
    .unwrap();

    let w = ScoringWeights::load_from_file(file.path()).unwrap();
    assert_eq!(w.fspeed, 2.0);
    assert_eq!(w.roll, 0.5);
    assert_eq!(w.alternate, 0.3);
    assert_eq!(w.onehand, 0.2);
    assert_eq!(w.redirect, 2.5);
    assert_eq!(w.index_balance, 0.0);
    assert_eq!(w.trigram_precision, 100);
}

#[test]
fn partial_weights_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"redirect": 3.0, "trigram_precision": -1}}"#).unwrap();

    let w = ScoringWeights::load_from_file(file.path()).unwrap();
    assert_eq!(w.redirect, 3.0);
    assert_eq!(w.trigram_precision, -1);
    // Everything else falls back to the defaults.
    assert_eq!(w.fspeed, 1.0);
    assert_eq!(w.roll, 1.0);
    assert_eq!(w.index_balance, 0.1);
}

#[test]
fn invalid_json_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "redirect = 3.0").unwrap();
    assert!(ScoringWeights::load_from_file(file.path()).is_err());
}

#[test]
fn missing_weights_file_is_an_error() {
    assert!(ScoringWeights::load_from_file("/no/such/weights.json").is_err());
}
