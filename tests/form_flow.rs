//! End-to-end flows through the form state machine
//!
//! Drives `FormMachine` through the public library API the same way the
//! wizard does: fill a step, advance, review, submit.

use signup::form::{FieldId, FormError, FormMachine, FormValues, Stage, Step};

const PERSONAL: &[(FieldId, &str)] = &[
    (FieldId::FullName, "Grace Hopper"),
    (FieldId::Email, "grace@navy.mil"),
    (FieldId::PhoneNumber, "2025550143"),
];

const ADDRESS: &[(FieldId, &str)] = &[
    (FieldId::StreetAddress, "1 Navy Yard"),
    (FieldId::City, "Arlington"),
    (FieldId::ZipCode, "22202"),
];

const ACCOUNT: &[(FieldId, &str)] = &[
    (FieldId::Username, "ghopper"),
    (FieldId::Password, "cobol59"),
    (FieldId::ConfirmPassword, "cobol59"),
];

fn fill(machine: &mut FormMachine, entries: &[(FieldId, &str)]) {
    for (field, value) in entries {
        machine.set_field(*field, *value).unwrap();
    }
}

fn machine_at_summary() -> FormMachine {
    let mut machine = FormMachine::new();
    fill(&mut machine, PERSONAL);
    machine.advance().unwrap();
    fill(&mut machine, ADDRESS);
    machine.advance().unwrap();
    fill(&mut machine, ACCOUNT);
    assert_eq!(machine.advance().unwrap(), Stage::Summary);
    machine
}

#[test]
fn test_happy_path_submits_every_value() {
    let mut machine = machine_at_summary();
    let submitted = machine.confirm_submit().unwrap().clone();

    assert!(machine.is_submitted());
    assert!(machine.errors().is_empty());
    for (field, value) in PERSONAL.iter().chain(ADDRESS).chain(ACCOUNT) {
        assert_eq!(submitted.get(*field), *value, "{field}");
    }
}

#[test]
fn test_each_step_blocks_until_its_own_fields_pass() {
    let mut machine = FormMachine::new().with_live_validation(false);

    let Err(FormError::Invalid(errors)) = machine.advance() else {
        panic!("empty first step must not advance");
    };
    assert_eq!(
        errors.fields(),
        vec![FieldId::FullName, FieldId::Email, FieldId::PhoneNumber]
    );

    fill(&mut machine, PERSONAL);
    assert_eq!(machine.advance(), Ok(Stage::Editing(Step::Address)));
    assert!(machine.errors().is_empty());

    // Address step errors never mention fields of other steps
    let Err(FormError::Invalid(errors)) = machine.advance() else {
        panic!("empty address step must not advance");
    };
    assert!(errors.iter().all(|(f, _)| f.step() == Step::Address));
}

#[test]
fn test_previous_keeps_entered_values() {
    let mut machine = FormMachine::new();
    fill(&mut machine, PERSONAL);
    machine.advance().unwrap();
    machine.set_field(FieldId::City, "Arl").unwrap();

    assert_eq!(machine.retreat(), Ok(Stage::Editing(Step::Personal)));
    assert_eq!(machine.value(FieldId::FullName), "Grace Hopper");
    assert_eq!(machine.value(FieldId::City), "Arl");
    assert_eq!(machine.retreat(), Err(FormError::AtFirstStep));
}

#[test]
fn test_password_mismatch_blocks_account_step() {
    let mut machine = FormMachine::new();
    fill(&mut machine, PERSONAL);
    machine.advance().unwrap();
    fill(&mut machine, ADDRESS);
    machine.advance().unwrap();
    fill(&mut machine, ACCOUNT);
    machine.set_field(FieldId::ConfirmPassword, "cobol60").unwrap();

    assert!(machine.advance().is_err());
    assert_eq!(machine.current_step(), Step::Account);
    assert_eq!(
        machine.error(FieldId::ConfirmPassword),
        Some("Passwords do not match")
    );
}

#[test]
fn test_summary_edit_round_trip() {
    let mut machine = machine_at_summary();
    assert_eq!(machine.edit(), Ok(Stage::Editing(Step::Account)));
    machine.set_field(FieldId::Username, "amazing_grace").unwrap();
    assert_eq!(machine.advance(), Ok(Stage::Summary));

    let submitted = machine.confirm_submit().unwrap();
    assert_eq!(submitted.username, "amazing_grace");
}

#[test]
fn test_confirm_rechecks_all_fields() {
    let mut machine = machine_at_summary();
    machine.set_field(FieldId::Email, "grace@navy").unwrap();

    let Err(FormError::Invalid(errors)) = machine.confirm_submit() else {
        panic!("invalid email must block submission");
    };
    assert_eq!(errors.get(FieldId::Email), Some("invalid email format"));
    assert_eq!(machine.stage(), Stage::Summary);
    assert!(machine.submission().is_none());
}

#[test]
fn test_actions_rejected_after_submission() {
    let mut machine = machine_at_summary();
    machine.confirm_submit().unwrap();

    assert!(matches!(
        machine.advance(),
        Err(FormError::WrongStage { .. })
    ));
    assert!(machine.set_field(FieldId::City, "Boston").is_err());
    assert!(machine.confirm_submit().is_err());
}

#[test]
fn test_reset_starts_over_and_keeps_last_submission() {
    let mut machine = machine_at_summary();
    machine.confirm_submit().unwrap();
    machine.reset();

    assert_eq!(machine.stage(), Stage::Editing(Step::Personal));
    assert_eq!(machine.values(), &FormValues::default());
    assert_eq!(
        machine.submission().map(|v| v.city.as_str()),
        Some("Arlington")
    );
}

#[test]
fn test_submission_serializes_with_camel_case_keys() {
    let mut machine = machine_at_summary();
    let json = serde_json::to_value(machine.confirm_submit().unwrap().redacted()).unwrap();

    assert_eq!(json["fullName"], "Grace Hopper");
    assert_eq!(json["zipCode"], "22202");
    assert_eq!(json["password"], "********");
    assert_eq!(json["confirmPassword"], "********");
}
