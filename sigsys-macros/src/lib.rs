use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Resolves a signal kind name to a `SignalKind` variant at compile time.
///
/// Matching ignores case, spaces, underscores and hyphens, the same way
/// `SignalKind::from_str` does at runtime. An unknown name is a compile error
/// rather than a runtime `Error::InvalidKind`.
///
/// # Examples
///
/// ```ignore
/// use sigsys::signal_kind;
///
/// let kind = signal_kind!("Sawtooth");
/// let same = signal_kind!("sawtooth");
/// ```
#[proc_macro]
pub fn signal_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let name = input.value();

    match parse_signal_kind(&name) {
        Ok(variant) => {
            let variant = Ident::new(variant, Span::call_site());
            let expanded = quote! {
                ::sigsys::SignalKind::#variant
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid signal kind '{}': {}", name, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

/// Resolves an operation name to an `OperationKind` variant at compile time.
///
/// Accepts both the display form (`"Time Scaling"`) and the variant form
/// (`"TimeScaling"`).
///
/// # Examples
///
/// ```ignore
/// use sigsys::operation_kind;
///
/// let kind = operation_kind!("Time Reversal");
/// ```
#[proc_macro]
pub fn operation_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let name = input.value();

    match parse_operation_kind(&name) {
        Ok(variant) => {
            let variant = Ident::new(variant, Span::call_site());
            let expanded = quote! {
                ::sigsys::OperationKind::#variant
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid operation '{}': {}", name, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_signal_kind(s: &str) -> Result<&'static str, String> {
    if s.trim().is_empty() {
        return Err("empty string".to_string());
    }

    match normalize(s).as_str() {
        "sine" => Ok("Sine"),
        "square" => Ok("Square"),
        "sawtooth" => Ok("Sawtooth"),
        "step" => Ok("Step"),
        "impulse" => Ok("Impulse"),
        "ramp" => Ok("Ramp"),
        _ => Err("expected one of Sine, Square, Sawtooth, Step, Impulse, Ramp".to_string()),
    }
}

fn parse_operation_kind(s: &str) -> Result<&'static str, String> {
    if s.trim().is_empty() {
        return Err("empty string".to_string());
    }

    match normalize(s).as_str() {
        "timescaling" => Ok("TimeScaling"),
        "amplitudescaling" => Ok("AmplitudeScaling"),
        "timeshifting" => Ok("TimeShifting"),
        "timereversal" => Ok("TimeReversal"),
        "signaladdition" => Ok("SignalAddition"),
        "signalmultiplication" => Ok("SignalMultiplication"),
        _ => Err("expected one of Time Scaling, Amplitude Scaling, Time Shifting, \
                  Time Reversal, Signal Addition, Signal Multiplication"
            .to_string()),
    }
}
