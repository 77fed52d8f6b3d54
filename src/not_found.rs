//! The page to display when no route matches the request.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            error_view(
                "Page introuvable",
                "404",
                "Cette page n'existe pas.",
                "Vérifiez l'adresse ou revenez à la liste de vos notes de frais.",
            )
            .into_string(),
        ),
    )
        .into_response()
}
