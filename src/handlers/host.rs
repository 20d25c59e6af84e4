use axum::{extract::State, Json};

use crate::{models::HostInfo, AppState};

/// Host name of the machine serving the request and the deployment environment
#[utoipa::path(
    get,
    path = "/os",
    responses(
        (status = 200, description = "Host and environment", body = HostInfo)
    ),
    tag = "host"
)]
pub async fn os_info(State(state): State<AppState>) -> Json<HostInfo> {
    Json(HostInfo {
        os: host_name(),
        env: state.app_env.to_string(),
    })
}

fn host_name() -> String {
    hostname::get()
        .ok()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_name_is_never_empty() {
        assert!(!host_name().is_empty());
    }
}
