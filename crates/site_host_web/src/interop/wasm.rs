use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

fn describe_js_error(value: wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| "unknown browser error".to_string())
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(describe_js_error)?
        .ok_or_else(|| "popup was blocked".to_string())?;
    Ok(())
}

pub async fn post_json(url: &str, body: &str) -> Result<(u16, String), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;

    let headers = Headers::new().map_err(describe_js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(describe_js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&wasm_bindgen::JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(describe_js_error)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(describe_js_error)?;
    let response: Response = response.dyn_into().map_err(describe_js_error)?;

    let text_promise = response.text().map_err(describe_js_error)?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(describe_js_error)?
        .as_string()
        .unwrap_or_default();

    Ok((response.status(), text))
}
