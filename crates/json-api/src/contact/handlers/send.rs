//! Send Contact Message Handler

use salvo::prelude::*;
use tracing::warn;

use storefront::notifications::ContactRequest;
use storefront_app::context::AppContext;

use crate::{
    contact::{errors::into_error_response, models::ContactResponse},
    extensions::*,
};

/// Send Contact Message Handler
///
/// Forwards a contact form submission to the store owner.
#[endpoint(
    tags("contact"),
    summary = "Send contact message",
    responses(
        (status_code = StatusCode::OK, description = "Message forwarded"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Message could not be sent"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ContactResponse>, StatusError> {
    let app = depot.obtain_or_500::<AppContext>()?;

    let request = match req.parse_json::<ContactRequest>().await {
        Ok(request) => request,
        Err(source) => {
            warn!("unreadable contact submission: {source}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return Ok(Json(ContactResponse::failed(source.to_string())));
        }
    };

    match app.contact.send_contact(request).await {
        Ok(()) => Ok(Json(ContactResponse::sent())),
        Err(error) => {
            let (status, body) = into_error_response(&error);

            res.status_code(status);

            Ok(Json(body))
        }
    }
}
