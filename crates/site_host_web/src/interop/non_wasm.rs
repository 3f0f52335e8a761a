fn unsupported() -> String {
    "Browser network APIs are only available when compiled for wasm32".to_string()
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Ok(())
}

pub async fn post_json(_url: &str, _body: &str) -> Result<(u16, String), String> {
    Err(unsupported())
}
