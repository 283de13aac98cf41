// WASM bindings for the Double Metaphone encoder.
//
// Provides a `WasmMetaphone` class exported via wasm-bindgen that wraps
// `MetaphoneHandle` from metaphone-double. Code pairs are serialized to
// plain JavaScript objects with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const m = new WasmMetaphone();             // or new WasmMetaphone(4)
//   m.encode("Schmidt");                       // => { primary: "XMT", secondary: "SMT" }
//   m.matchStrength("Smith", "Schmidt");       // => "normal"
//   m.phraseSimilarity("brian smith", "bryan schmidt");  // => 1

use serde::Serialize;
use wasm_bindgen::prelude::*;

use metaphone_core::{DecodePolicy, MetaphoneError, PhoneticCodes};
use metaphone_double::MetaphoneHandle;
use metaphone_double::matching::similarity;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a code pair.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCodes {
    primary: String,
    secondary: String,
}

impl From<PhoneticCodes> for JsCodes {
    fn from(codes: PhoneticCodes) -> Self {
        let (primary, secondary) = codes.into_pair();
        JsCodes { primary, secondary }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn metaphone_error_to_js(e: MetaphoneError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js(codes: PhoneticCodes) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&JsCodes::from(codes)).map_err(|e| JsError::new(&e.to_string()))
}

/// Turn the JS-side length argument into a cap. Zero means no cap.
fn length_cap(value: Option<u32>) -> Option<usize> {
    value.filter(|&n| n > 0).map(|n| n as usize)
}

// ============================================================================
// WasmMetaphone
// ============================================================================

/// Double Metaphone encoder for WebAssembly.
#[wasm_bindgen]
pub struct WasmMetaphone {
    handle: MetaphoneHandle,
}

#[wasm_bindgen]
impl WasmMetaphone {
    /// Create an encoder. `max_code_length` caps both codes; omit it (or
    /// pass 0) for full-length codes.
    #[wasm_bindgen(constructor)]
    pub fn new(max_code_length: Option<u32>) -> Result<WasmMetaphone, JsError> {
        let mut handle = MetaphoneHandle::new();
        handle
            .set_max_code_length(length_cap(max_code_length))
            .map_err(metaphone_error_to_js)?;
        Ok(WasmMetaphone { handle })
    }

    /// Encode a word into `{ primary, secondary }`.
    pub fn encode(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(self.handle.encode(text))
    }

    /// Encode raw UTF-8 bytes. Throws only in strict mode on invalid input.
    #[wasm_bindgen(js_name = "encodeBytes")]
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<JsValue, JsError> {
        let codes = self
            .handle
            .encode_bytes(bytes)
            .map_err(metaphone_error_to_js)?;
        to_js(codes)
    }

    /// `"strong"`, `"normal"`, `"weak"`, or `undefined` when the words share
    /// no code.
    #[wasm_bindgen(js_name = "matchStrength")]
    pub fn match_strength(&self, a: &str, b: &str) -> Option<String> {
        self.handle
            .encode(a)
            .match_strength(&self.handle.encode(b))
            .map(|s| s.as_str().to_string())
    }

    /// Share of matching words between two phrases, in `[0, 1]`.
    #[wasm_bindgen(js_name = "phraseSimilarity")]
    pub fn phrase_similarity(&self, a: &str, b: &str) -> f32 {
        similarity(&self.phrase(a), &self.phrase(b))
    }

    #[wasm_bindgen(js_name = "setMaxCodeLength")]
    pub fn set_max_code_length(&mut self, value: Option<u32>) -> Result<(), JsError> {
        self.handle
            .set_max_code_length(length_cap(value))
            .map_err(metaphone_error_to_js)
    }

    #[wasm_bindgen(js_name = "setStrict")]
    pub fn set_strict(&mut self, value: bool) {
        let policy = if value {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lossy
        };
        self.handle.set_decode_policy(policy);
    }
}

impl WasmMetaphone {
    fn phrase(&self, text: &str) -> Vec<PhoneticCodes> {
        text.split_whitespace().map(|w| self.handle.encode(w)).collect()
    }
}
