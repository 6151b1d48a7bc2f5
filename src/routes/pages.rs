use actix_web::{HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../pages/index.html");

/// Informational landing page
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_mentions_endpoint() {
        assert!(INDEX_HTML.contains("/students/above-threshold"));
    }
}
