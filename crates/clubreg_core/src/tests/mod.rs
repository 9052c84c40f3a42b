
use fixtures::TempRegistry;

use crate::registration::{
    CandidateInput, RegistrationError, Stage, ValidationError,
    workflow::{AGE_PROMPT, FAILURE_MESSAGE, SUCCESS_MESSAGE},
};

#[test]
fn integration_register_teenager() {
    #[cfg(feature = "clubreg_tracing")]
    crate::clubreg_tracing::init();
    let registry = TempRegistry::new();

    let session = registry.session("Doe,Jane\n15\n");

    let record = session.outcome.as_ref().unwrap();
    assert_eq!(record.as_str(), "New member name: Doe,Jane and age 15");
    assert_eq!(registry.log_lines(), vec!["New member name: Doe,Jane and age 15"]);
    assert_terminal_report!(session, SUCCESS_MESSAGE);
}

#[test]
fn integration_name_without_comma() {
    #[cfg(feature = "clubreg_tracing")]
    crate::clubreg_tracing::init();
    let registry = TempRegistry::new();

    let session = registry.session("NoComma\n15\n");

    assert!(matches!(
        session.outcome,
        Err(RegistrationError::Invalid(ValidationError::MissingSeparator))
    ));
    assert!(!registry.log_exists());
    assert_eq!(session.lines(), vec!["Invalid input: Missing comma", FAILURE_MESSAGE]);
    // The age is never asked for once the name is rejected.
    assert!(!session.transcript.contains(AGE_PROMPT));
}

#[test]
fn integration_age_outside_cohort() {
    #[cfg(feature = "clubreg_tracing")]
    crate::clubreg_tracing::init();
    let registry = TempRegistry::new();

    let session = registry.session("Doe,Jane\n25\n");

    assert!(matches!(session.outcome, Err(RegistrationError::OutsideCohort { age: 25 })));
    assert!(!registry.log_exists());
    assert_eq!(
        session.lines(),
        vec!["The age is not within the 'teenager' category", FAILURE_MESSAGE]
    );
}

#[test]
fn integration_negative_age() {
    let registry = TempRegistry::new();

    let session = registry.session("Doe,Jane\n-3\n");

    assert!(matches!(
        session.outcome,
        Err(RegistrationError::Invalid(ValidationError::NegativeAge(-3)))
    ));
    assert!(!registry.log_exists());
    assert_eq!(
        session.lines(),
        vec!["Invalid input: Only positive values are allowed", FAILURE_MESSAGE]
    );
}

#[test]
fn integration_ages_beyond_integer_range() {
    let registry = TempRegistry::new();

    let session = registry.session("Doe,Jane\n100000000000000000000\n");
    assert!(matches!(
        session.outcome,
        Err(RegistrationError::OutsideCohort { age: i64::MAX })
    ));
    assert_eq!(
        session.lines(),
        vec!["The age is not within the 'teenager' category", FAILURE_MESSAGE]
    );

    let session = registry.session("Doe,Jane\n-100000000000000000000\n");
    assert!(matches!(
        session.outcome,
        Err(RegistrationError::Invalid(ValidationError::NegativeAge(i64::MIN)))
    ));
    assert_eq!(
        session.lines(),
        vec!["Invalid input: Only positive values are allowed", FAILURE_MESSAGE]
    );

    assert!(!registry.log_exists());
}

#[test]
fn integration_malformed_age() {
    let registry = TempRegistry::new();

    let session = registry.session("Doe,Jane\nfifteen\n");

    assert!(!registry.log_exists());
    assert_eq!(
        session.lines(),
        vec!["Invalid input: Age must be a whole number, got 'fifteen'", FAILURE_MESSAGE]
    );
}

#[test]
fn integration_input_ends_before_age() {
    let registry = TempRegistry::new();

    let session = registry.session("Doe,Jane\n");

    assert!(matches!(session.outcome, Err(RegistrationError::Invalid(ValidationError::NoInput))));
    assert!(!registry.log_exists());
    assert_terminal_report!(session, FAILURE_MESSAGE);
}

#[test]
fn integration_persistence_failure_is_reported() {
    #[cfg(feature = "clubreg_tracing")]
    crate::clubreg_tracing::init();
    let registry = TempRegistry::with_file_name("missing_dir/registration_file.txt");

    let session = registry.session("Doe,Jane\n15\n");

    assert!(matches!(session.outcome, Err(RegistrationError::Persistence(_))));
    assert!(!registry.log_exists());
    assert!(session.lines()[0].starts_with("Could not save registration: "));
    assert_terminal_report!(session, FAILURE_MESSAGE);
}

#[test]
fn integration_accumulates_in_call_order() {
    let registry = TempRegistry::new();
    let candidates = [("Munir,Hassan", "13"), ("Soltane,Rehana", "19"), ("Avramescu,Andreea", "12")];

    for (name, age) in candidates {
        registry.registrar().register(&CandidateInput::new(name, age)).unwrap();
    }

    assert_eq!(
        registry.log_lines(),
        vec![
            "New member name: Munir,Hassan and age 13",
            "New member name: Soltane,Rehana and age 19",
            "New member name: Avramescu,Andreea and age 12",
        ]
    );
}

#[test]
fn integration_failures_leave_no_partial_record() {
    let registry = TempRegistry::new();

    registry.registrar().register(&CandidateInput::new("Doe,Jane", "15")).unwrap();
    for (name, age) in [("Doe,", "15"), ("Doe,Jane", "11"), ("Doe,Jane", "-1"), ("a,b,c", "15")] {
        let outcome = registry.registrar().register(&CandidateInput::new(name, age));
        assert_eq!(Stage::of(&outcome), Stage::Failed);
    }
    registry.registrar().register(&CandidateInput::new("Doe,Jane", "15")).unwrap();

    // Duplicates are accepted.
    assert_eq!(
        registry.log_lines(),
        vec!["New member name: Doe,Jane and age 15", "New member name: Doe,Jane and age 15"]
    );
}

#[test]
fn integration_read_back_records() {
    let registry = TempRegistry::new();
    registry.registrar().register(&CandidateInput::new("Doe,Jane", "15")).unwrap();
    registry.registrar().register(&CandidateInput::new("Roe,Rick", "17")).unwrap();

    let records = registry.registrar().log().records().unwrap();
    let records: Vec<&str> = records.iter().map(|r| r.as_str()).collect();
    assert_eq!(
        records,
        vec!["New member name: Doe,Jane and age 15", "New member name: Roe,Rick and age 17"]
    );
}
