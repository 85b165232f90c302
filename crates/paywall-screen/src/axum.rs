use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::view::ViewModel;

impl IntoResponse for ViewModel {
    fn into_response(self) -> Response {
        let status = match self {
            ViewModel::SignInPrompt { .. } => StatusCode::UNAUTHORIZED,
            _ => StatusCode::OK,
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use crate::view::messages;

    use super::*;

    #[test]
    fn sign_in_prompt_maps_to_unauthorized() {
        let response = ViewModel::SignInPrompt {
            title: messages::SIGN_IN_TITLE.to_string(),
            message: messages::SIGN_IN_REQUIRED.to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn purchase_grid_maps_to_ok() {
        let response = ViewModel::PurchaseGrid {
            title: messages::GRID_TITLE.to_string(),
            cards: Vec::new(),
            notice: None,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
