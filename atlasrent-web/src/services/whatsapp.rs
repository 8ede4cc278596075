//! WhatsApp deep-link construction.
//!
//! The handoff is fire-and-forget: the link opens in a new browsing context
//! and nothing is read back.

/// Build the `wa.me` deep link carrying a prefilled message.
#[must_use]
pub fn deep_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{number}?text={}", encode_component(text))
}

/// Percent-encode a query component the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(text: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::encode_uri_component(text).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Mirror of encodeURIComponent's unreserved set for native tests.
        let mut out = String::with_capacity(text.len());
        for byte in text.as_bytes() {
            match byte {
                b'A'..=b'Z'
                | b'a'..=b'z'
                | b'0'..=b'9'
                | b'-'
                | b'_'
                | b'.'
                | b'!'
                | b'~'
                | b'*'
                | b'\''
                | b'('
                | b')' => out.push(char::from(*byte)),
                _ => out.push_str(&format!("%{byte:02X}")),
            }
        }
        out
    }
}
