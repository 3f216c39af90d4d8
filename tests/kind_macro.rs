#![cfg(feature = "macros")]

use sigsys::{OperationKind, SignalKind, operation_kind, signal_kind};

#[test]
fn test_signal_kind_macro() {
    assert_eq!(signal_kind!("Sine"), SignalKind::Sine);
    assert_eq!(signal_kind!("Impulse"), SignalKind::Impulse);
}

#[test]
fn test_signal_kind_macro_ignores_case() {
    assert_eq!(signal_kind!("sawtooth"), SignalKind::Sawtooth);
    assert_eq!(signal_kind!("RAMP"), SignalKind::Ramp);
}

#[test]
fn test_operation_kind_macro_display_names() {
    assert_eq!(operation_kind!("Time Scaling"), OperationKind::TimeScaling);
    assert_eq!(
        operation_kind!("Signal Multiplication"),
        OperationKind::SignalMultiplication
    );
}

#[test]
fn test_operation_kind_macro_variant_names() {
    assert_eq!(operation_kind!("TimeReversal"), OperationKind::TimeReversal);
    assert_eq!(operation_kind!("amplitude_scaling"), OperationKind::AmplitudeScaling);
}

#[test]
fn test_macros_agree_with_from_str() {
    assert_eq!(signal_kind!("Step"), "Step".parse::<SignalKind>().unwrap());
    assert_eq!(
        operation_kind!("Time Shifting"),
        "Time Shifting".parse::<OperationKind>().unwrap()
    );
}
