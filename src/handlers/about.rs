use axum::Json;

use crate::models::about::{AboutResponse, AuthorInfo};

pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        data: "About".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        release: "Test mode".to_string(),
        database: "PostgreSQL 14".to_string(),
        author: AuthorInfo {
            name: "Marcel Suleiman".to_string(),
            link: "https://www.linkedin.com/in/marcel-suleiman/".to_string(),
            mail: "marcelsuleiman@gmail.com".to_string(),
            tel: "+421 951 022 141".to_string(),
        },
    })
}
