//! Text fetch seam for the data files the dashboard consumes.
//!
//! On the web build, paths are fetched relative to the page origin. On
//! native builds there is no origin, so relative paths are resolved against a
//! base URL taken from `SHAPESCORE_DATA_URL` (default `http://127.0.0.1:8080`).

use super::error::DataError;

#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(path: &str) -> Result<String, DataError> {
    use gloo_net::http::Request;

    let response = Request::get(path)
        .send()
        .await
        .map_err(|err| DataError::Fetch {
            path: path.to_string(),
            reason: err.to_string(),
        })?;

    if !response.ok() {
        return Err(DataError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|err| DataError::Fetch {
        path: path.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(path: &str) -> Result<String, DataError> {
    let url = resolve_url(path);

    let response = reqwest::get(&url).await.map_err(|err| DataError::Fetch {
        path: url.clone(),
        reason: err.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status {
            path: url,
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|err| DataError::Fetch {
        path: url,
        reason: err.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = std::env::var("SHAPESCORE_DATA_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::resolve_url;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_url("http://data.host/source/x.json"),
            "http://data.host/source/x.json"
        );
    }

    #[test]
    fn relative_paths_join_the_default_base() {
        std::env::remove_var("SHAPESCORE_DATA_URL");
        assert_eq!(
            resolve_url("source/SDFusion/data/CD_distance.json"),
            "http://127.0.0.1:8080/source/SDFusion/data/CD_distance.json"
        );
    }
}
