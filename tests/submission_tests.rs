// Integration tests for simulated form submission

mod common;

use bot_form_validator::{simulate, BotForm, BotKind, FormError, FormValidator, GridBotRequest};
use common::{valid_dip_request, valid_grid_request, valid_momentum_request};

#[test]
fn test_valid_forms_are_submitted() {
    let validator = FormValidator::default();
    let forms = vec![
        (BotForm::from(valid_dip_request()), BotKind::Dip),
        (BotForm::from(valid_grid_request()), BotKind::Grid),
        (BotForm::from(valid_momentum_request()), BotKind::Momentum),
    ];

    for (form, kind) in forms {
        let result = validator.validate(&form);
        let submission = simulate(&form, &result, false).expect("Valid form should submit");

        assert_eq!(submission.bot, kind);
        assert_eq!(submission.payload["bot"], serde_json::to_value(kind).unwrap());
    }
}

#[test]
fn test_invalid_form_is_refused() {
    let form = BotForm::Grid(GridBotRequest::default());
    let result = FormValidator::default().validate(&form);

    let err = simulate(&form, &result, true).unwrap_err();
    assert!(matches!(err, FormError::ValidationFailed(7)));
    assert_eq!(err.category(), "validation");
}

#[test]
fn test_submission_ids_are_unique() {
    let form = BotForm::from(valid_dip_request());
    let result = FormValidator::default().validate(&form);

    let first = simulate(&form, &result, false).unwrap();
    let second = simulate(&form, &result, false).unwrap();
    assert_ne!(first.id, second.id);
    assert!(second.submitted_at >= first.submitted_at);
}

#[test]
fn test_payload_keeps_form_field_names() {
    let form = BotForm::from(valid_momentum_request());
    let result = FormValidator::default().validate(&form);
    let submission = simulate(&form, &result, false).unwrap();

    assert_eq!(submission.payload["baseSymbol"], "ADA/USDC");
    assert_eq!(submission.payload["tradingSymbols"][1], "ETH/USDC");
    assert_eq!(submission.payload["analysisPeriod"], "10");
}
