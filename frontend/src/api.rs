use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::upload::UploadSettings;
use shared::{AnalysisMode, AnalysisResult, ErrorResponse};

/// Posts the image and mode to the backend and returns its verdict.
pub async fn request_analysis(file: &GlooFile, mode: AnalysisMode) -> Result<AnalysisResult, String> {
    let form_data = web_sys::FormData::new()
        .map_err(|e| format!("Failed to build upload form: {:?}", e))?;
    form_data
        .append_with_blob_and_filename("image", file.as_ref(), &file.name())
        .map_err(|e| format!("Failed to attach image: {:?}", e))?;
    form_data
        .append_with_str("mode", &mode.index().to_string())
        .map_err(|e| format!("Failed to attach analysis option: {:?}", e))?;

    let request = Request::post("/api/analyze")
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => "unexpected response".to_string(),
        };
        Err(format!("Server error: {} - {}", status, message))
    }
}

/// Fetches the upload rules the backend enforces.
pub async fn fetch_upload_settings() -> Result<UploadSettings, String> {
    let response = Request::get("/api/config")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .json::<UploadSettings>()
        .await
        .map_err(|e| format!("Failed to parse upload settings: {}", e))
}
