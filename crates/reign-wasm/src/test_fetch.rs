//! Browser-test helper: answers content API requests for one key without a
//! server, passing every other request through to the real `fetch`.

use js_sys::Function;
use wasm_bindgen::JsValue;

const STUB_BODY: &str = r#"
const realFetch = globalThis.fetch;
globalThis.fetch = (input, init) => {
  const url = typeof input === 'string' ? input : input.url;
  if (url.endsWith('/api/content/' + key)) {
    const payload = value === undefined ? null : JSON.stringify({ content_value: value });
    return Promise.resolve(new Response(payload, {
      status,
      headers: { 'Content-Type': 'application/json' },
    }));
  }
  return realFetch.call(globalThis, input, init);
};
"#;

/// Make `GET /api/content/{key}` answer `status`, with `value` as the stored
/// `content_value` when given.
pub(crate) fn stub_content(key: &str, status: u16, value: Option<&str>) {
    let install = Function::new_with_args("key, status, value", STUB_BODY);
    let value = value.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED);
    install
        .call3(
            &JsValue::NULL,
            &JsValue::from_str(key),
            &JsValue::from(status),
            &value,
        )
        .expect("installing fetch stub");
}
