// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.


#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test;

use crate::signature_options::{SignatureOptions, SignatureOptionsError};

fn is_invalid_state<T: std::fmt::Debug>(r: Result<T, SignatureOptionsError>) -> bool {
    matches!(r, Err(SignatureOptionsError::InvalidState(_)))
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn defaults() {
    let options = SignatureOptions::new();

    assert_eq!(options, SignatureOptions::default());
    assert!(!options.using_hash());
    assert!(!options.using_padding());
    assert!(!options.using_prehash());
    assert!(!options.using_context());
    assert!(!options.using_provider());
    assert!(!options.using_salt_size());
    assert!(!options.using_deterministic_signature());
    assert!(!options.using_der_encoded_signature());
    assert!(!options.using_explicit_trailer_field());
    assert_eq!(options.prehash_fn(), None);
    assert_eq!(options.padding_with_hash(), None);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn each_option_set_once() {
    let options = SignatureOptions::new()
        .with_hash("SHA-256")
        .unwrap()
        .with_padding("PSS")
        .unwrap()
        .with_prehash(Some("SHA-512"))
        .unwrap()
        .with_context("ctx")
        .unwrap()
        .with_provider("pkcs11")
        .unwrap()
        .with_salt_size(20)
        .unwrap();

    assert_eq!(options.hash(), Some("SHA-256"));
    assert_eq!(options.hash_function_name(), Ok("SHA-256"));
    assert_eq!(options.padding(), Some("PSS"));
    assert!(options.using_prehash());
    assert_eq!(options.prehash_fn(), Some("SHA-512"));
    assert_eq!(options.context(), Some(&b"ctx"[..]));
    assert_eq!(options.provider(), Some("pkcs11"));
    assert!(options.using_provider());
    assert_eq!(options.salt_size(), Some(20));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn second_set_is_invalid_state() {
    let o = SignatureOptions::new;

    assert!(is_invalid_state(
        o().with_hash("SHA-256").unwrap().with_hash("SHA-256")
    ));
    assert!(is_invalid_state(
        o().with_padding("PSS").unwrap().with_padding("Raw")
    ));
    assert!(is_invalid_state(
        o().with_prehash(None).unwrap().with_prehash(Some("SHA-256"))
    ));
    assert!(is_invalid_state(
        o().with_context("a").unwrap().with_context(b"b")
    ));
    assert!(is_invalid_state(
        o().with_provider("x").unwrap().with_provider("y")
    ));
    assert!(is_invalid_state(
        o().with_salt_size(0).unwrap().with_salt_size(0)
    ));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn empty_arguments_rejected() {
    assert!(matches!(
        SignatureOptions::new().with_hash(""),
        Err(SignatureOptionsError::InvalidArgument(_))
    ));
    assert!(matches!(
        SignatureOptions::new().with_padding(""),
        Err(SignatureOptionsError::InvalidArgument(_))
    ));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn context_from_str_and_bytes_is_identical() {
    let from_str = SignatureOptions::new().with_context("UserA").unwrap();
    let from_bytes = SignatureOptions::new().with_context(b"UserA").unwrap();
    let from_vec = SignatureOptions::new()
        .with_context(b"UserA".to_vec())
        .unwrap();

    assert_eq!(from_str, from_bytes);
    assert_eq!(from_str, from_vec);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn empty_context_is_still_set() {
    let options = SignatureOptions::new().with_context("").unwrap();

    assert!(options.using_context());
    assert_eq!(options.context(), Some(&b""[..]));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn empty_provider_is_noop() {
    let before = SignatureOptions::new()
        .with_hash("SHA-256")
        .unwrap()
        .with_deterministic_signature();

    let after = before.clone().with_provider("").unwrap();
    assert_eq!(before, after);

    // Still possible to set one afterward.
    let after = after.with_provider("").unwrap().with_provider("x").unwrap();
    assert_eq!(after.provider(), Some("x"));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn base_provider_means_no_preference() {
    let options = SignatureOptions::new().with_provider("base").unwrap();

    assert!(!options.using_provider());
    assert_eq!(options.provider(), None);
    assert_eq!(options, SignatureOptions::new());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn flags_are_idempotent() {
    let options = SignatureOptions::new()
        .with_deterministic_signature()
        .with_deterministic_signature()
        .with_der_encoded_signature()
        .with_der_encoded_signature()
        .with_explicit_trailer_field()
        .with_explicit_trailer_field();

    assert!(options.using_deterministic_signature());
    assert!(options.using_der_encoded_signature());
    assert!(options.using_explicit_trailer_field());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn prehash_without_explicit_hash() {
    let options = SignatureOptions::new().with_prehash(None).unwrap();

    assert!(options.using_prehash());
    assert_eq!(options.prehash_fn(), None);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn hash_function_name_requires_hash() {
    assert!(is_invalid_state(SignatureOptions::new().hash_function_name()));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn padding_with_hash() {
    let options = SignatureOptions::new().with_padding("Raw").unwrap();
    assert_eq!(options.padding_with_hash().as_deref(), Some("Raw"));

    let options = options.with_hash("SHA-256").unwrap();
    assert_eq!(options.padding_with_hash().as_deref(), Some("Raw(SHA-256)"));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn impl_display() {
    let options = SignatureOptions::new()
        .with_hash("SM3")
        .unwrap()
        .with_context("AB")
        .unwrap()
        .with_der_encoded_signature();

    assert_eq!(
        options.to_string(),
        "hash: SM3\n\
         padding: <unset>\n\
         prehash: false\n\
         prehash_fn: <unset>\n\
         context: 4142\n\
         provider: <unset>\n\
         salt_size: <unset>\n\
         deterministic: false\n\
         der_encoded: true\n\
         explicit_trailer_field: false\n"
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn impl_serialize() {
    let options = SignatureOptions::new()
        .with_padding("PSS")
        .unwrap()
        .with_salt_size(32)
        .unwrap();

    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(json["padding"], "PSS");
    assert_eq!(json["salt_size"], 32);
    assert!(json["hash"].is_null());
    assert_eq!(json["der_encoded"], false);
}
