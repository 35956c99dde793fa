use paygate::application::dispatcher::Dispatcher;
use paygate::domain::attributes::{AttributeBag, TransactionAttributes};
use paygate::domain::capability::{Capability, PaymentProcess};
use paygate::domain::gateway::{AbcPay, EtcPay, Gateway, GatewayKind, XyzPay};
use paygate::error::{FraudError, PaymentError};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn random_attributes(rng: &mut impl Rng) -> TransactionAttributes {
    let transaction_id = match rng.gen_range(0..3) {
        0 => None,
        1 => Some(String::new()),
        _ => Some(format!("T{}", rng.gen_range(1..10_000))),
    };
    TransactionAttributes {
        transaction_id,
        amount: Decimal::new(rng.gen_range(-10_000..10_000), 2),
        currency: Some("EUR".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_abc_and_xyz_never_fail() {
    let mut rng = rand::thread_rng();
    let dispatcher = Dispatcher::new();

    for _ in 0..500 {
        let abc = AbcPay::new(random_attributes(&mut rng));
        assert!(std::ptr::eq(dispatcher.take_payment(&abc).unwrap(), &abc));

        let xyz = XyzPay::new(random_attributes(&mut rng));
        assert!(std::ptr::eq(dispatcher.take_payment(&xyz).unwrap(), &xyz));
    }
}

#[test]
fn test_etc_outcome_follows_fraud_rules() {
    let mut rng = rand::thread_rng();
    let dispatcher = Dispatcher::new();

    for _ in 0..500 {
        let etc = EtcPay::new(random_attributes(&mut rng));
        let has_id = etc
            .attributes
            .transaction_id
            .as_deref()
            .is_some_and(|id| !id.is_empty());
        let positive = etc.attributes.amount > Decimal::ZERO;

        match dispatcher.take_payment(&etc) {
            Ok(paid) => {
                assert!(has_id && positive);
                assert!(std::ptr::eq(paid, &etc));
            }
            Err(PaymentError::Fraud(FraudError::MissingTransactionId)) => assert!(!has_id),
            Err(PaymentError::Fraud(FraudError::InvalidAmount)) => {
                assert!(has_id && !positive)
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_step_order_per_variant() {
    let etc = EtcPay::new(TransactionAttributes {
        transaction_id: Some("T1".to_string()),
        amount: dec!(10),
        ..Default::default()
    });

    let cases: Vec<(Gateway, Vec<Capability>, Option<FraudError>)> = vec![
        (Gateway::Abc(AbcPay::default()), vec![Capability::Pay], None),
        (
            Gateway::Xyz(XyzPay::default()),
            vec![Capability::ThreeDSCheck, Capability::Pay],
            None,
        ),
        (
            Gateway::Etc(etc),
            vec![Capability::FraudCheck, Capability::Pay],
            None,
        ),
        (
            Gateway::Etc(EtcPay::default()),
            vec![Capability::FraudCheck],
            Some(FraudError::MissingTransactionId),
        ),
    ];

    for (gateway, expected_steps, expected_error) in cases {
        let mut steps = Vec::new();
        let result = gateway.process_observed(&mut steps);
        assert_eq!(steps, expected_steps, "steps for {:?}", gateway.kind());

        match (result, expected_error) {
            (Ok(processed), None) => assert!(std::ptr::eq(processed, &gateway)),
            (Err(PaymentError::Fraud(actual)), Some(expected)) => assert_eq!(actual, expected),
            (result, expected) => panic!(
                "unexpected result for {:?}: {:?}, expected error {:?}",
                gateway.kind(),
                result.map(|g| g.kind()),
                expected
            ),
        }
    }
}

#[test]
fn test_dispatcher_passes_error_through_unchanged() {
    let dispatcher = Dispatcher::new();
    let etc = EtcPay::default();

    let direct = etc.process().unwrap_err();
    let dispatched = dispatcher.take_payment(&etc).unwrap_err();
    assert_eq!(direct.to_string(), dispatched.to_string());
    assert!(matches!(
        dispatched,
        PaymentError::Fraud(FraudError::MissingTransactionId)
    ));
}

#[test]
fn test_gateways_built_from_attribute_bags() {
    let bag: AttributeBag = serde_json::from_value(json!({
        "transId": "T1",
        "amt": 10,
        "endPointUrl": "http://abc.com/pay",
        "additionPropertyBasedOnPaymentGateway": "its value",
    }))
    .unwrap();

    for kind in [GatewayKind::Abc, GatewayKind::Xyz, GatewayKind::Etc] {
        let gateway = Gateway::build(kind, bag.clone()).unwrap();
        assert_eq!(gateway.kind(), kind);
        assert_eq!(
            gateway.attributes().extra("additionPropertyBasedOnPaymentGateway"),
            Some(&json!("its value"))
        );
        assert!(Dispatcher::new().take_payment(&gateway).is_ok());
    }
}

#[test]
fn test_dispatch_across_threads() {
    let dispatcher = Dispatcher::new();
    let gateways: Vec<Gateway> = (0..8)
        .map(|i| {
            Gateway::Etc(EtcPay::new(TransactionAttributes {
                transaction_id: Some(format!("T{i}")),
                amount: Decimal::from(i),
                ..Default::default()
            }))
        })
        .collect();

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = gateways
            .iter()
            .map(|gateway| scope.spawn(move || dispatcher.take_payment(gateway).is_ok()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Only the zero-amount payment is rejected.
    assert_eq!(results.iter().filter(|ok| !**ok).count(), 1);
    assert!(!results[0]);
}
